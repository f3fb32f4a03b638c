//! Sound Director - UI Sound Feedback
//!
//! Platform-agnostic audio feedback for web pages.
//!
//! This crate provides:
//! - Click and typing sounds for buttons and text inputs
//! - Timed sound cues read from a polled directive feed, each played at most once
//! - A lazy per-name audio handle cache (one allocation per sound)
//! - Incremental input masking against `pattern` attributes
//! - Clearing marked inputs shortly after a form submits
//! - A producer-side [`SoundQueue`] that renders the feed
//!
//! # Architecture
//!
//! `sound-director` has no DOM dependency of its own:
//! - Audio elements come from an [`AudioFactory`]
//! - Event targets and the feed are reached through [`platform`] traits
//! - Timers run through a [`Scheduler`]
//!
//! The `wasm` feature backs all of these with `web-sys`. [`ManualScheduler`]
//! steps virtual time deterministically for tests and non-browser hosts.
//!
//! # Example: Directive Feed
//!
//! ```rust
//! use sound_director::{AudioFactory, PlayableAudio, Result, SoundDirector, Volume};
//!
//! struct Silent;
//!
//! impl PlayableAudio for Silent {
//!     fn rewind(&mut self) {}
//!     fn set_volume(&mut self, _volume: Volume) {}
//!     fn play(&mut self) {}
//! }
//!
//! struct SilentFactory;
//!
//! impl AudioFactory for SilentFactory {
//!     type Audio = Silent;
//!
//!     fn create(&mut self, _src: &str) -> Result<Silent> {
//!         Ok(Silent)
//!     }
//! }
//!
//! let mut director = SoundDirector::with_default_config(SilentFactory);
//!
//! // First sighting plays, repeats are ignored
//! assert_eq!(director.poll_text("1700000005;item_added").played, 1);
//! assert_eq!(director.poll_text("1700000005;item_added").played, 0);
//!
//! // Same sound, new id: plays again from the same cached handle
//! assert_eq!(director.poll_text("1700000009;item_added;0.5").played, 1);
//! assert_eq!(director.sounds().allocations(), 1);
//! ```
//!
//! # Example: Session
//!
//! ```rust,ignore
//! use sound_director::{ManualScheduler, Session, SoundDirector};
//! use std::{cell::RefCell, rc::Rc, time::Duration};
//!
//! let director = Rc::new(RefCell::new(SoundDirector::with_default_config(factory)));
//! let scheduler = ManualScheduler::new();
//! let mut session = Session::start(Rc::clone(&director), events, feed, &scheduler);
//!
//! scheduler.advance(Duration::from_millis(200)); // one poll
//! session.stop();
//! ```

mod audio;
mod cache;
mod directive;
mod director;
mod error;
mod pattern;
mod played;
pub mod platform;
mod queue;
mod scheduler;
mod session;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use audio::{AudioFactory, PlayableAudio};
pub use cache::{is_valid_sound_name, SoundCache};
pub use directive::{split_feed, Directive};
pub use director::{PollReport, SoundDirector};
pub use error::{DirectorError, Result};
pub use pattern::{compile_pattern, truncate_last_char, PatternCache};
pub use played::PlayedSet;
pub use platform::{ClickTarget, DirectiveFeed, EventSource, SubmittedForm, TextInput};
pub use queue::{QueuedSound, SoundQueue};
pub use scheduler::{ManualHandle, ManualScheduler, Scheduler, TaskHandle};
pub use session::{Session, SharedDirector};
pub use types::{DirectorConfig, Volume};
