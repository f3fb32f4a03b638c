//! Error types for the sound director

use thiserror::Error;

/// Sound director errors
///
/// None of these are fatal to a page: the director logs them and carries on,
/// so the worst outcome is a missed sound cue.
#[derive(Debug, Error)]
pub enum DirectorError {
    /// Sound name is empty, contains characters outside `[A-Za-z0-9_-]`,
    /// or is not on the configured allowlist
    #[error("Invalid sound name: {0:?}")]
    InvalidSoundName(String),

    /// Input pattern attribute does not compile as a regular expression
    #[error("Invalid input pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The raw pattern attribute
        pattern: String,
        /// Underlying regex error
        source: regex::Error,
    },

    /// Platform backend failed (audio construction, DOM access, timers)
    #[error("Platform error: {0}")]
    Platform(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for sound director operations
pub type Result<T> = std::result::Result<T, DirectorError>;
