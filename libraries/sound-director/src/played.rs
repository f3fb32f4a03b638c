//! Session memory of dispatched directives

use std::collections::HashSet;

/// Set of directive strings that have already been dispatched
///
/// Grows for the lifetime of the session and is never pruned. Keys are the
/// exact raw entries, so `"a;x"` and `"a;x "` are different directives.
#[derive(Debug, Clone, Default)]
pub struct PlayedSet {
    directives: HashSet<String>,
}

impl PlayedSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directive
    ///
    /// Returns true if it had not been recorded before.
    pub fn mark(&mut self, directive: &str) -> bool {
        if self.directives.contains(directive) {
            return false;
        }
        self.directives.insert(directive.to_string())
    }

    /// Check whether a directive has been recorded
    pub fn contains(&self, directive: &str) -> bool {
        self.directives.contains(directive)
    }

    /// Number of recorded directives
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}
