//! Issue structure document model.

use serde::Deserialize;

/// Root of an issue structure file.
///
/// Phases and special issues keep the order in which they appear in the
/// file; every step of a run walks them in that order.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IssueSpecDocument {
    /// Top-level units of work, one issue each.
    #[serde(default)]
    pub phases: Vec<Phase>,

    /// Standalone issues outside the phase hierarchy.
    #[serde(default)]
    pub special_issues: Vec<SpecialIssue>,
}

impl IssueSpecDocument {
    /// Number of issues a fully successful run creates.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.phases.len() + self.sub_issue_count() + self.special_issues.len()
    }

    /// Number of sub-issues across all phases.
    #[must_use]
    pub fn sub_issue_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.sub_issues.len()).sum()
    }

    /// Looks up a phase by its declared number.
    #[must_use]
    pub fn phase(&self, number: u32) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.number == number)
    }
}

/// A phase of the plan.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Phase {
    /// Local key of the phase. Not the tracker's issue number.
    pub number: u32,

    /// Issue title.
    pub title: String,

    /// Issue body (markdown).
    #[serde(default)]
    pub description: String,

    /// Label names attached to the issue.
    #[serde(default)]
    pub labels: Vec<String>,

    /// Child issues, created after every phase issue exists.
    #[serde(default)]
    pub sub_issues: Vec<SubIssue>,

    /// Phase numbers that must be finished before this one.
    #[serde(default)]
    pub blocked_by: Vec<u32>,
}

/// A child issue of a [`Phase`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SubIssue {
    /// Issue title.
    pub title: String,

    /// Issue body (markdown). A back-reference to the phase is appended.
    #[serde(default)]
    pub description: String,

    /// Label names attached to the issue.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// A standalone issue.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SpecialIssue {
    /// Issue title.
    pub title: String,

    /// Issue body (markdown).
    #[serde(default)]
    pub description: String,

    /// Label names attached to the issue.
    #[serde(default)]
    pub labels: Vec<String>,
}
