//! Run summary types.

use crate::dependencies::AnnotationReport;
use crate::issues::IssueReport;
use crate::labels::LabelReport;
use crate::registry::{IssueKey, IssueNumberRegistry, TrackerIssueNumber};

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Label bootstrap outcome, `None` when the step was skipped.
    pub labels: Option<LabelReport>,

    /// Phase issue outcomes.
    pub phases: IssueReport,

    /// Sub-issue outcomes.
    pub sub_issues: IssueReport,

    /// Special issue outcomes.
    pub special_issues: IssueReport,

    /// Dependency annotation outcomes.
    pub dependencies: AnnotationReport,

    /// Every issue created by the run.
    pub registry: IssueNumberRegistry,
}

impl RunSummary {
    /// Number of entries that received a tracker issue.
    #[must_use]
    pub fn total_registered(&self) -> usize {
        self.registry.len()
    }

    /// Created issues ordered by tracker number, ascending.
    #[must_use]
    pub fn entries(&self) -> Vec<(IssueKey, TrackerIssueNumber)> {
        self.registry.sorted_by_number()
    }

    /// Combined counts over phases, sub-issues and special issues.
    #[must_use]
    pub fn issues(&self) -> IssueReport {
        let mut total = self.phases.clone();
        total.merge(&self.sub_issues);
        total.merge(&self.special_issues);
        total
    }

    /// Returns true if any request of the run failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        let labels_failed = self.labels.as_ref().is_some_and(|l| l.failed > 0);
        labels_failed || self.issues().failed > 0 || self.dependencies.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_cover_every_pass() {
        let mut summary = RunSummary {
            phases: IssueReport {
                created: 2,
                failed: 1,
                skipped: 0,
            },
            sub_issues: IssueReport {
                created: 3,
                failed: 0,
                skipped: 2,
            },
            ..Default::default()
        };
        summary
            .registry
            .register(IssueKey::Phase(1), TrackerIssueNumber(5));

        let issues = summary.issues();
        assert_eq!(issues.created, 5);
        assert_eq!(issues.skipped, 2);
        assert_eq!(summary.total_registered(), 1);
        assert!(summary.has_failures());
    }

    #[test]
    fn skipped_labels_are_not_failures() {
        let summary = RunSummary::default();
        assert!(summary.labels.is_none());
        assert!(!summary.has_failures());
    }
}
