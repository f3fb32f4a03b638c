//! Producer side of the directive feed
//!
//! Page state that wants timed cues keeps a [`SoundQueue`], prunes it on
//! each render and writes [`SoundQueue::render`] into the feed element.
//! The rounded expiry doubles as the directive id, so a cue stays deduped
//! for as long as it is listed.

use crate::types::Volume;
use serde::{Deserialize, Serialize};

/// A cue waiting in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedSound {
    /// Sound name
    pub sound: String,

    /// Time (seconds, host clock) after which the cue leaves the feed
    pub expiry: f64,

    /// Playback volume; omitted from the feed when `None`
    pub volume: Option<Volume>,
}

impl QueuedSound {
    /// Feed entry for this cue
    pub fn directive(&self) -> String {
        match self.volume {
            Some(volume) => format!("{};{};{}", self.expiry.round(), self.sound, volume.gain()),
            None => format!("{};{}", self.expiry.round(), self.sound),
        }
    }
}

/// Ordered list of pending cues
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundQueue {
    entries: Vec<QueuedSound>,
}

impl SoundQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cue that stays listed until `expiry`
    pub fn push(&mut self, sound: impl Into<String>, expiry: f64, volume: Option<Volume>) {
        self.entries.push(QueuedSound {
            sound: sound.into(),
            expiry,
            volume,
        });
    }

    /// Drop cues whose expiry is at or before `now`
    ///
    /// Returns the number of cues removed.
    pub fn prune(&mut self, now: f64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.expiry > now);
        before - self.entries.len()
    }

    /// Feed text for the current cues
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(QueuedSound::directive)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Pending cues, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &QueuedSound> {
        self.entries.iter()
    }

    /// Number of pending cues
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no cues are pending
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{split_feed, Directive};

    #[test]
    fn render_matches_feed_format() {
        let mut queue = SoundQueue::new();
        queue.push("item_added", 1700000004.6, None);
        queue.push("coin_added", 1700000005.2, Some(Volume::new(0.5)));

        assert_eq!(
            queue.render(),
            "1700000005;item_added,1700000005;coin_added;0.5"
        );
    }

    #[test]
    fn rendered_entries_parse_back() {
        let mut queue = SoundQueue::new();
        queue.push("guess_correct", 10.0, None);
        queue.push("guess_incorrect", 11.0, Some(Volume::new(0.25)));
        let text = queue.render();

        let parsed: Vec<_> = split_feed(&text)
            .map(|raw| Directive::parse(raw).unwrap())
            .collect();
        assert_eq!(parsed[0].sound(), "guess_correct");
        assert_eq!(parsed[1].volume(), Some(0.25));
    }

    #[test]
    fn prune_drops_expired() {
        let mut queue = SoundQueue::new();
        queue.push("a", 5.0, None);
        queue.push("b", 10.0, None);
        queue.push("c", 15.0, None);

        assert_eq!(queue.prune(10.0), 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().unwrap().sound, "c");
    }

    #[test]
    fn empty_queue_renders_empty() {
        let queue = SoundQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.render(), "");
    }
}
