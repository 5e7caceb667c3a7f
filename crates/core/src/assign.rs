//! Deterministic conflict resolution for base usernames.

use std::collections::HashMap;

/// Resolves repeated base usernames by appending occurrence counts.
///
/// One assigner covers exactly one processing run. Names are resolved in the
/// order they are submitted: the first occurrence of a base keeps it as is,
/// later ones get `1`, `2`, `3`, ... appended with no separator. Empty bases
/// stay empty and are not counted.
///
/// A suffixed name is not checked against other literal bases, so `thaotp`
/// seen twice followed by a real `thaotp1` produces `thaotp1` twice.
#[derive(Debug, Default)]
pub struct UniqueAssigner {
    counts: HashMap<String, usize>,
}

impl UniqueAssigner {
    /// Create an assigner with no recorded usernames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the next occurrence of `base` into its final username.
    pub fn assign(&mut self, base: &str) -> String {
        if base.is_empty() {
            return String::new();
        }

        let count = self.counts.entry(base.to_string()).or_insert(0);
        let seen = *count;
        *count += 1;

        if seen == 0 {
            base.to_string()
        } else {
            format!("{base}{seen}")
        }
    }

    /// Number of times `base` has been assigned so far.
    #[must_use]
    pub fn occurrences(&self, base: &str) -> usize {
        self.counts.get(base).copied().unwrap_or(0)
    }
}
