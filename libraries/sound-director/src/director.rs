//! Sound director - core orchestration
//!
//! Owns the audio cache, the played-directive memory and the input pattern
//! cache, and turns page events and feed text into sound cues.

use crate::{
    audio::AudioFactory,
    cache::SoundCache,
    directive::{split_feed, Directive},
    error::{DirectorError, Result},
    pattern::PatternCache,
    platform::{ClickTarget, DirectiveFeed, SubmittedForm, TextInput},
    played::PlayedSet,
    types::{DirectorConfig, Volume},
};
use tracing::{debug, trace, warn};

/// Outcome of one feed poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Directives played for the first time
    pub played: usize,

    /// Directives skipped because they were already dispatched
    pub already_played: usize,

    /// Entries without a sound name
    pub malformed: usize,

    /// New directives whose sound could not be played (bad name, backend error)
    pub rejected: usize,
}

impl PollReport {
    /// Whether this poll changed any state
    pub fn is_idle(&self) -> bool {
        self.played == 0 && self.rejected == 0
    }
}

/// Sound director
///
/// One instance per page session. All state lives here rather than in
/// globals, so independent directors never share cache or dedup memory.
pub struct SoundDirector<F: AudioFactory> {
    config: DirectorConfig,
    sounds: SoundCache<F>,
    played: PlayedSet,
    patterns: PatternCache,
}

impl<F: AudioFactory> SoundDirector<F> {
    /// Create a director with a validated configuration
    pub fn new(factory: F, config: DirectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(factory, config))
    }

    /// Create a director with the default configuration
    pub fn with_default_config(factory: F) -> Self {
        Self::build(factory, DirectorConfig::default())
    }

    fn build(factory: F, config: DirectorConfig) -> Self {
        Self {
            sounds: SoundCache::new(factory, &config),
            config,
            played: PlayedSet::new(),
            patterns: PatternCache::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    /// Audio handle cache
    pub fn sounds(&self) -> &SoundCache<F> {
        &self.sounds
    }

    /// Directives dispatched so far
    pub fn played(&self) -> &PlayedSet {
        &self.played
    }

    // ===== Playback =====

    /// Play `name` from the start at `volume`
    ///
    /// Failures are logged and swallowed. Returns whether the sound was
    /// handed to the audio backend.
    pub fn play(&mut self, name: &str, volume: Volume) -> bool {
        match self.sounds.play(name, volume) {
            Ok(()) => {
                trace!(sound = %name, volume = volume.gain(), "Playing sound");
                true
            }
            Err(e @ DirectorError::InvalidSoundName(_)) => {
                debug!(error = %e, "Skipping sound");
                false
            }
            Err(e) => {
                warn!(sound = %name, error = %e, "Sound playback failed");
                false
            }
        }
    }

    // ===== Page Events =====

    /// React to a click: buttons get the click sound and lose focus
    pub fn handle_click(&mut self, target: &mut dyn ClickTarget) {
        if !target.is_button() {
            return;
        }

        let sound = self.config.click_sound.clone();
        self.play(&sound, Volume::FULL);
        target.blur();
    }

    /// React to an input event: typing sound, then pattern masking
    pub fn handle_input(&mut self, input: &mut dyn TextInput) {
        if !input.is_text_input() {
            return;
        }

        let sound = self.config.typing_sound.clone();
        self.play(&sound, Volume::FULL);

        let Some(pattern) = input.pattern() else {
            return;
        };

        let value = input.value();
        if let Some(filtered) = self.patterns.filter(&pattern, &value) {
            trace!(pattern = %pattern, "Dropping character that breaks input pattern");
            input.set_value(&filtered);
        }
    }

    /// Clear the marked inputs of a submitted form
    ///
    /// Callers are expected to defer this by `config().clear_delay()` so the
    /// submission reads the values first.
    pub fn clear_submitted(&self, form: &mut dyn SubmittedForm) -> usize {
        let cleared = form.clear_marked(&self.config.clear_attribute);
        trace!(cleared, "Cleared inputs after submit");
        cleared
    }

    // ===== Directive Feed =====

    /// Read the feed and play every directive not dispatched before
    ///
    /// An absent feed is a no-op.
    pub fn poll(&mut self, feed: &dyn DirectiveFeed) -> PollReport {
        match feed.read() {
            Some(text) => self.poll_text(&text),
            None => PollReport::default(),
        }
    }

    /// Process feed text directly
    pub fn poll_text(&mut self, text: &str) -> PollReport {
        let mut report = PollReport::default();

        for raw in split_feed(text) {
            let Some(directive) = Directive::parse(raw) else {
                report.malformed += 1;
                continue;
            };

            if self.played.contains(directive.raw()) {
                report.already_played += 1;
                continue;
            }

            let volume = directive
                .volume()
                .map_or_else(|| self.config.default_volume(), Volume::new);

            if self.play(directive.sound(), volume) {
                report.played += 1;
            } else {
                report.rejected += 1;
            }

            // Marked even when playback failed: a cue plays at most once
            self.played.mark(directive.raw());
        }

        if !report.is_idle() {
            debug!(
                played = report.played,
                rejected = report.rejected,
                total = self.played.len(),
                "Processed sound directives"
            );
        }

        report
    }
}
