//! Core types: playback volume and director configuration

use crate::error::{DirectorError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback volume as a linear gain in `[0.0, 1.0]`
///
/// Out-of-range values are clamped; NaN falls back to full volume.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Volume(f32);

impl Volume {
    /// Full volume (unity gain)
    pub const FULL: Volume = Volume(1.0);

    /// Silence
    pub const SILENT: Volume = Volume(0.0);

    /// Create a volume, clamping to `[0.0, 1.0]`
    pub fn new(gain: f32) -> Self {
        if gain.is_nan() {
            Self::FULL
        } else {
            Self(gain.clamp(0.0, 1.0))
        }
    }

    /// Linear gain in `[0.0, 1.0]`
    pub fn gain(self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<f32> for Volume {
    fn from(gain: f32) -> Self {
        Self::new(gain)
    }
}

impl From<Volume> for f32 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

/// Configuration for the sound director
///
/// Every field has a default matching the stock page layout, so hosts only
/// need to override what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorConfig {
    /// Id of the element whose text content carries the directive feed (default: "sounds")
    pub feed_element_id: String,

    /// Directory sound assets are served from (default: "assets/sounds")
    pub asset_root: String,

    /// Asset file extension without the dot (default: "mp3")
    pub asset_extension: String,

    /// Directive feed poll period in milliseconds (default: 200)
    pub poll_interval_ms: u32,

    /// Delay between a form submit and clearing its marked inputs (default: 50)
    pub clear_delay_ms: u32,

    /// Attribute marking inputs to clear after submit (default: "data-clear-on-submit")
    pub clear_attribute: String,

    /// Sound played on button clicks (default: "button_pressed")
    pub click_sound: String,

    /// Sound played on text input (default: "typing")
    pub typing_sound: String,

    /// Volume for directives without a usable volume field (default: 1.0)
    pub default_volume: f32,

    /// When set, only these sound names may be played
    pub allowed_sounds: Option<Vec<String>>,
}

impl DirectorConfig {
    /// Poll period as a duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }

    /// Submit-clear delay as a duration
    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.clear_delay_ms))
    }

    /// Volume applied when a directive carries none
    pub fn default_volume(&self) -> Volume {
        Volume::new(self.default_volume)
    }

    /// Check the configuration for values the director cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(DirectorError::InvalidConfig(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.default_volume) {
            return Err(DirectorError::InvalidConfig(format!(
                "default_volume must be within [0, 1], got {}",
                self.default_volume
            )));
        }

        if self.feed_element_id.is_empty() {
            return Err(DirectorError::InvalidConfig(
                "feed_element_id must not be empty".to_string(),
            ));
        }

        if self.clear_attribute.is_empty() {
            return Err(DirectorError::InvalidConfig(
                "clear_attribute must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            feed_element_id: "sounds".to_string(),
            asset_root: "assets/sounds".to_string(),
            asset_extension: "mp3".to_string(),
            poll_interval_ms: 200,
            clear_delay_ms: 50,
            clear_attribute: "data-clear-on-submit".to_string(),
            click_sound: "button_pressed".to_string(),
            typing_sound: "typing".to_string(),
            default_volume: 1.0,
            allowed_sounds: None,
        }
    }
}
