//! Incremental input masking against pattern attributes
//!
//! The filter checks the whole value against `^(?:pattern)$` and drops only
//! the last character on mismatch. Pasted text can therefore stay partly
//! invalid; that is the intended behavior.

use crate::error::{DirectorError, Result};
use regex::Regex;
use std::collections::HashMap;
use tracing::warn;

/// Compile a pattern attribute as an anchored whole-value expression
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| DirectorError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Drop the last character (not byte) of `value`
pub fn truncate_last_char(value: &str) -> &str {
    match value.char_indices().next_back() {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

/// Compiled pattern cache
///
/// Patterns that fail to compile are remembered as "no constraint" and
/// reported once.
#[derive(Debug, Default)]
pub struct PatternCache {
    compiled: HashMap<String, Option<Regex>>,
}

impl PatternCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `value` against `pattern`
    ///
    /// Uncompilable patterns accept everything.
    pub fn matches(&mut self, pattern: &str, value: &str) -> bool {
        let compiled = self
            .compiled
            .entry(pattern.to_string())
            .or_insert_with(|| match compile_pattern(pattern) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!(error = %e, "Ignoring input pattern");
                    None
                }
            });

        compiled.as_ref().map_or(true, |regex| regex.is_match(value))
    }

    /// Apply the filter to an input's current value
    ///
    /// Returns the replacement value when the last character must go, or
    /// `None` when the value is acceptable as typed.
    pub fn filter(&mut self, pattern: &str, value: &str) -> Option<String> {
        if pattern.is_empty() || self.matches(pattern, value) {
            None
        } else {
            Some(truncate_last_char(value).to_string())
        }
    }

    /// Number of distinct patterns seen
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// Check if no pattern has been seen yet
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}
