//! Issue tracker API seam.
//!
//! Every network call the importer makes goes through [`IssueTracker`].
//! [`GitHubTracker`] is the production implementation.

mod error;
#[cfg(test)]
pub(crate) mod fake;
mod github;

pub use error::TrackerError;
pub use github::GitHubTracker;

use crate::labels::LabelDefinition;
use crate::registry::TrackerIssueNumber;
use async_trait::async_trait;

/// Payload of a create-issue request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIssue {
    /// Issue title.
    pub title: String,

    /// Issue body (markdown).
    pub body: String,

    /// Label names. An empty list sends no labels.
    pub labels: Vec<String>,

    /// Milestone to attach the issue to.
    pub milestone: Option<u64>,
}

impl NewIssue {
    /// Creates a payload without a milestone.
    pub fn new(title: impl Into<String>, body: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            labels,
            milestone: None,
        }
    }

    /// Attaches a milestone.
    #[must_use]
    pub fn with_milestone(mut self, milestone: Option<u64>) -> Self {
        self.milestone = milestone;
        self
    }
}

/// The operations of the issue tracker API the importer consumes.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Creates a label in the target repository.
    async fn create_label(&self, label: &LabelDefinition) -> Result<(), TrackerError>;

    /// Creates an issue and returns the number the tracker assigned to it.
    async fn create_issue(&self, issue: &NewIssue) -> Result<TrackerIssueNumber, TrackerError>;

    /// Fetches the current body of an issue. A missing body reads as empty.
    async fn get_issue_body(&self, number: TrackerIssueNumber) -> Result<String, TrackerError>;

    /// Replaces the body of an issue.
    async fn update_issue_body(
        &self,
        number: TrackerIssueNumber,
        body: &str,
    ) -> Result<(), TrackerError>;
}

