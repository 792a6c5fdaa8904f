//! Label bootstrap status types.

use serde::Serialize;

/// Outcome of a single create-label request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LabelStatus {
    /// Label was created.
    Created,

    /// Label was already present in the repository.
    AlreadyExists,

    /// Label creation failed.
    Failed {
        /// HTTP status of the response.
        status_code: u16,
        /// Response message.
        message: String,
    },
}

/// Counts of label outcomes for a bootstrap pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelReport {
    /// Labels created by this run.
    pub created: usize,

    /// Labels that already existed.
    pub already_existing: usize,

    /// Labels that could not be created.
    pub failed: usize,
}

impl LabelReport {
    /// Adds one label outcome.
    pub fn record(&mut self, status: &LabelStatus) {
        match status {
            LabelStatus::Created => self.created += 1,
            LabelStatus::AlreadyExists => self.already_existing += 1,
            LabelStatus::Failed { .. } => self.failed += 1,
        }
    }
}
