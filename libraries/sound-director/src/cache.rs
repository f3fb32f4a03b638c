//! Lazy per-name cache of audio handles

use crate::audio::{AudioFactory, PlayableAudio};
use crate::error::{DirectorError, Result};
use crate::types::{DirectorConfig, Volume};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Check a sound name is safe to splice into an asset path
///
/// Accepts non-empty names made of ASCII letters, digits, `_` and `-`.
pub fn is_valid_sound_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Audio handle cache
///
/// Each sound name is resolved to `{asset_root}/{name}.{extension}` and
/// handed to the factory once; every later play reuses that handle.
pub struct SoundCache<F: AudioFactory> {
    factory: F,
    handles: HashMap<String, F::Audio>,
    asset_root: String,
    asset_extension: String,
    allowed: Option<HashSet<String>>,
    allocations: usize,
}

impl<F: AudioFactory> SoundCache<F> {
    /// Create an empty cache using the asset layout from `config`
    pub fn new(factory: F, config: &DirectorConfig) -> Self {
        Self {
            factory,
            handles: HashMap::new(),
            asset_root: config.asset_root.trim_end_matches('/').to_string(),
            asset_extension: config.asset_extension.clone(),
            allowed: config
                .allowed_sounds
                .as_ref()
                .map(|names| names.iter().cloned().collect()),
            allocations: 0,
        }
    }

    /// Asset URL for a sound name (not validated)
    pub fn asset_url(&self, name: &str) -> String {
        if self.asset_root.is_empty() {
            format!("{}.{}", name, self.asset_extension)
        } else {
            format!("{}/{}.{}", self.asset_root, name, self.asset_extension)
        }
    }

    /// Reject names that could escape the asset directory or are not allowlisted
    pub fn validate_name(&self, name: &str) -> Result<()> {
        let allowed = self
            .allowed
            .as_ref()
            .map_or(true, |allowed| allowed.contains(name));

        if is_valid_sound_name(name) && allowed {
            Ok(())
        } else {
            Err(DirectorError::InvalidSoundName(name.to_string()))
        }
    }

    /// Get the handle for `name`, creating it on first use
    ///
    /// A failed creation leaves no entry behind, so the next request retries.
    pub fn get_or_create(&mut self, name: &str) -> Result<&mut F::Audio> {
        self.validate_name(name)?;

        let src = self.asset_url(name);
        match self.handles.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                debug!(sound = %name, src = %src, "Creating audio handle");
                let audio = self.factory.create(&src)?;
                self.allocations += 1;
                Ok(entry.insert(audio))
            }
        }
    }

    /// Restart `name` from the beginning at `volume`
    ///
    /// Rewinding first lets the same sound retrigger while still playing.
    pub fn play(&mut self, name: &str, volume: Volume) -> Result<()> {
        let audio = self.get_or_create(name)?;
        audio.rewind();
        audio.set_volume(volume);
        audio.play();
        Ok(())
    }

    /// Whether a handle for `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    /// Number of cached handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Total successful factory calls over the cache's lifetime
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// Access the underlying factory
    pub fn factory(&self) -> &F {
        &self.factory
    }
}
