use crate::model::UsernameResult;
use serde::Serialize;
use std::fmt;

/// Preview statistics for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
    pub total: usize,
    /// Rows that produced a username.
    pub successful: usize,
    /// Rows whose username needed a numeric suffix.
    pub conflicts: usize,
    /// Rows with no usable name.
    pub errors: usize,
}

impl ProcessingSummary {
    #[must_use]
    pub fn from_results(results: &[UsernameResult]) -> Self {
        results.iter().fold(
            ProcessingSummary {
                total: results.len(),
                ..Default::default()
            },
            |mut summary, result| {
                if result.is_resolved() {
                    summary.successful += 1;
                } else {
                    summary.errors += 1;
                }
                if result.is_conflict() {
                    summary.conflicts += 1;
                }
                summary
            },
        )
    }
}

impl fmt::Display for ProcessingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} names, {} usernames, {} conflicts resolved, {} without a name",
            self.total, self.successful, self.conflicts, self.errors
        )
    }
}
