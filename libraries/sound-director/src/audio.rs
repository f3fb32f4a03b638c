//! Platform-agnostic audio handle traits
//!
//! Abstracts audio elements for different hosts (browser, native, tests)

use crate::error::Result;
use crate::types::Volume;

/// A playable sound resource
///
/// Playback is fire-and-forget: load or decode failures stay inside the
/// backend and are never reported back.
pub trait PlayableAudio {
    /// Move the playback position back to the start
    fn rewind(&mut self);

    /// Set output volume for subsequent playback
    fn set_volume(&mut self, volume: Volume);

    /// Start playback from the current position
    fn play(&mut self);
}

/// Creates playable handles from asset URLs
///
/// Implementors only construct the handle; the cache decides when that
/// happens, and guarantees it happens at most once per sound name.
pub trait AudioFactory {
    /// Handle type produced by this factory
    type Audio: PlayableAudio;

    /// Construct a handle for the asset at `src`
    ///
    /// # Returns
    /// * `Ok(audio)` - Handle ready for playback (the asset may still be loading)
    /// * `Err(_)` - The backend could not create a handle at all
    fn create(&mut self, src: &str) -> Result<Self::Audio>;
}
