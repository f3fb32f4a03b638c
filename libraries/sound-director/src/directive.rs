//! Timed sound directives
//!
//! A feed is a comma-separated list of `id;sound[;volume]` entries. The whole
//! entry string, not the sound name, is the dedup key.

/// One parsed feed entry, borrowing from the feed text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Directive<'a> {
    raw: &'a str,
    id: &'a str,
    sound: &'a str,
    volume: Option<f32>,
}

impl<'a> Directive<'a> {
    /// Parse one entry
    ///
    /// Returns `None` when there is no second field or it is empty. Fields
    /// past the third are ignored. A volume field that is not a finite number
    /// yields `volume() == None`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.split(';');
        let id = parts.next()?;
        let sound = parts.next().filter(|sound| !sound.is_empty())?;
        let volume = parts
            .next()
            .and_then(|field| field.trim().parse::<f32>().ok())
            .filter(|volume| volume.is_finite());

        Some(Self {
            raw,
            id,
            sound,
            volume,
        })
    }

    /// The complete entry, used as the dedup key
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Opaque id field
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// Sound name field
    pub fn sound(&self) -> &'a str {
        self.sound
    }

    /// Volume field, if present and numeric
    pub fn volume(&self) -> Option<f32> {
        self.volume
    }
}

/// Split feed text into raw entries, in order
///
/// Empty text yields a single empty entry, which fails to parse.
pub fn split_feed(text: &str) -> impl Iterator<Item = &str> {
    text.split(',')
}
