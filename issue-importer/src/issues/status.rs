//! Issue creation status types.

use crate::registry::TrackerIssueNumber;
use serde::Serialize;

/// Outcome of a single create-issue request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IssueStatus {
    /// Issue successfully created.
    Created {
        /// Number assigned by the tracker.
        number: TrackerIssueNumber,
    },

    /// Issue creation failed.
    Failed {
        /// HTTP status of the response.
        status_code: u16,
        /// Response message.
        message: String,
    },
}

impl IssueStatus {
    /// Tracker number of a created issue.
    #[must_use]
    pub fn number(&self) -> Option<TrackerIssueNumber> {
        match self {
            Self::Created { number } => Some(*number),
            Self::Failed { .. } => None,
        }
    }
}

/// Counts of issue outcomes for one or more creation passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueReport {
    /// Issues created.
    pub created: usize,

    /// Issues whose creation request failed.
    pub failed: usize,

    /// Sub-issues not attempted because their phase was never created.
    pub skipped: usize,
}

impl IssueReport {
    /// Adds one issue outcome.
    pub fn record(&mut self, status: &IssueStatus) {
        match status {
            IssueStatus::Created { .. } => self.created += 1,
            IssueStatus::Failed { .. } => self.failed += 1,
        }
    }

    /// Adds the counts of another report.
    pub fn merge(&mut self, other: &IssueReport) {
        self.created += other.created;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }
}
