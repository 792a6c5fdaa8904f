//! Dry-run plan.

use crate::config::IssueSpecDocument;
use crate::labels::find_label;
use std::collections::BTreeSet;

/// A `blocked_by` edge between two declared phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Phase carrying the `blocked_by` list.
    pub phase: u32,

    /// Predecessor phase number.
    pub blocked_by: u32,

    /// Whether the predecessor is declared in the document.
    pub declared: bool,
}

/// What a run would do, computed without touching the tracker.
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// The loaded document.
    pub document: IssueSpecDocument,

    /// Whether labels would be bootstrapped.
    pub bootstrap_labels: bool,

    /// Dependency edges, in document order.
    pub dependencies: Vec<DependencyEdge>,

    /// Label names used by issues but missing from the bootstrap table.
    pub unknown_labels: BTreeSet<String>,
}

impl RunPlan {
    /// Computes the plan for `document`.
    #[must_use]
    pub fn new(document: IssueSpecDocument, bootstrap_labels: bool) -> Self {
        let dependencies = document
            .phases
            .iter()
            .flat_map(|phase| {
                phase.blocked_by.iter().map(|&blocked_by| DependencyEdge {
                    phase: phase.number,
                    blocked_by,
                    declared: document.phase(blocked_by).is_some(),
                })
            })
            .collect();

        let used_labels = document
            .phases
            .iter()
            .flat_map(|phase| {
                phase
                    .labels
                    .iter()
                    .chain(phase.sub_issues.iter().flat_map(|sub| sub.labels.iter()))
            })
            .chain(
                document
                    .special_issues
                    .iter()
                    .flat_map(|special| special.labels.iter()),
            );
        let unknown_labels = used_labels
            .filter(|name| find_label(name).is_none())
            .cloned()
            .collect();

        Self {
            document,
            bootstrap_labels,
            dependencies,
            unknown_labels,
        }
    }

    /// Number of create-issue requests a fully successful run makes.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.document.issue_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_lists_edges_and_unknown_labels() {
        let document: IssueSpecDocument = serde_yaml::from_str(
            r#"
phases:
  - number: 1
    title: A
    labels: [setup]
  - number: 2
    title: B
    labels: [not-a-label]
    blocked_by: [1, 9]
    sub_issues:
      - title: B1
        labels: [backend, also-unknown]
"#,
        )
        .unwrap();

        let plan = RunPlan::new(document, true);

        assert_eq!(plan.issue_count(), 3);
        assert_eq!(
            plan.dependencies,
            vec![
                DependencyEdge {
                    phase: 2,
                    blocked_by: 1,
                    declared: true
                },
                DependencyEdge {
                    phase: 2,
                    blocked_by: 9,
                    declared: false
                },
            ]
        );
        assert_eq!(
            plan.unknown_labels.into_iter().collect::<Vec<_>>(),
            vec!["also-unknown", "not-a-label"]
        );
    }
}
