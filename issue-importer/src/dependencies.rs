//! Dependency annotation.
//!
//! After every issue exists, phases that declare `blocked_by` predecessors get
//! a dependency section appended to their issue body. The update is a plain
//! read-modify-write: the current body is fetched, extended and written back.

use crate::config::{IssueSpecDocument, Phase};
use crate::pacing::{pause, Pacing};
use crate::registry::{IssueNumberRegistry, TrackerIssueNumber};
use crate::tracker::{IssueTracker, TrackerError};
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};

/// Outcome of annotating one phase issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnnotationStatus {
    /// Dependency section written.
    Annotated {
        /// Predecessor issues listed in the section.
        blocked_by: Vec<TrackerIssueNumber>,
    },

    /// No predecessor resolved to a created issue; no request was made.
    Unresolved,

    /// Reading or writing the body failed.
    Failed {
        /// HTTP status of the response.
        status_code: u16,
        /// Response message.
        message: String,
    },
}

/// Counts of annotation outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationReport {
    /// Issues whose body received a dependency section.
    pub annotated: usize,

    /// Phases whose predecessors were all missing from the registry.
    pub unresolved: usize,

    /// Issues whose body could not be read or written.
    pub failed: usize,
}

impl AnnotationReport {
    /// Adds one annotation outcome.
    pub fn record(&mut self, status: &AnnotationStatus) {
        match status {
            AnnotationStatus::Annotated { .. } => self.annotated += 1,
            AnnotationStatus::Unresolved => self.unresolved += 1,
            AnnotationStatus::Failed { .. } => self.failed += 1,
        }
    }
}

/// Renders the dependency section appended to an issue body.
#[must_use]
pub fn dependency_section(blocked_by: &[TrackerIssueNumber]) -> String {
    let mut section = String::from("\n\n---\n\n**🔗 Dependências:**\n");
    for number in blocked_by {
        section.push_str(&format!("- Bloqueada por {number}\n"));
    }
    section
}

/// Translates a phase's `blocked_by` list into tracker issue numbers.
///
/// Predecessors that were never created are dropped.
#[must_use]
pub fn resolve_predecessors(
    phase: &Phase,
    registry: &IssueNumberRegistry,
) -> Vec<TrackerIssueNumber> {
    phase
        .blocked_by
        .iter()
        .filter_map(|predecessor| {
            let resolved = registry.phase(*predecessor);
            if resolved.is_none() {
                debug!(
                    phase = phase.number,
                    predecessor, "Predecessor has no issue, dropping edge"
                );
            }
            resolved
        })
        .collect()
}

/// Appends a dependency section to `issue`'s current body.
///
/// An error response on the read or the write becomes
/// [`AnnotationStatus::Failed`].
///
/// # Errors
///
/// Returns [`TrackerError::Transport`] if a request gets no response.
pub async fn annotate_issue(
    tracker: &dyn IssueTracker,
    issue: TrackerIssueNumber,
    blocked_by: &[TrackerIssueNumber],
) -> Result<AnnotationStatus, TrackerError> {
    let span = info_span!("annotate_dependencies", issue_number = issue.get());

    async {
        let result = async {
            let body = tracker.get_issue_body(issue).await?;
            let updated = body + &dependency_section(blocked_by);
            tracker.update_issue_body(issue, &updated).await
        }
        .await;

        match result {
            Ok(()) => {
                info!(blocked_by = blocked_by.len(), "Dependencies added");
                Ok(AnnotationStatus::Annotated {
                    blocked_by: blocked_by.to_vec(),
                })
            }
            Err(TrackerError::Api { status, message }) => {
                warn!(status, response = %message, "Failed to add dependencies");
                Ok(AnnotationStatus::Failed {
                    status_code: status,
                    message,
                })
            }
            Err(e) => Err(e),
        }
    }
    .instrument(span)
    .await
}

/// Annotates every created phase that declares predecessors.
///
/// # Errors
///
/// Returns [`TrackerError::Transport`] if a request gets no response.
pub async fn annotate_dependencies(
    tracker: &dyn IssueTracker,
    document: &IssueSpecDocument,
    registry: &IssueNumberRegistry,
    pacing: &Pacing,
) -> Result<AnnotationReport, TrackerError> {
    info!("Adding dependencies");

    let mut report = AnnotationReport::default();
    for phase in &document.phases {
        if phase.blocked_by.is_empty() {
            continue;
        }
        let Some(issue) = registry.phase(phase.number) else {
            continue;
        };

        let blocked_by = resolve_predecessors(phase, registry);
        if blocked_by.is_empty() {
            report.record(&AnnotationStatus::Unresolved);
            continue;
        }

        let status = annotate_issue(tracker, issue, &blocked_by).await?;
        report.record(&status);
        pause(pacing.dependency_delay).await;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::create_phase_issues;
    use crate::tracker::fake::{Call, FakeTracker};

    fn phase(number: u32, title: &str, blocked_by: Vec<u32>) -> Phase {
        Phase {
            number,
            title: title.to_string(),
            description: format!("{title} body"),
            labels: Vec::new(),
            sub_issues: Vec::new(),
            blocked_by,
        }
    }

    fn document() -> IssueSpecDocument {
        IssueSpecDocument {
            phases: vec![phase(1, "A", Vec::new()), phase(2, "B", vec![1])],
            special_issues: Vec::new(),
        }
    }

    async fn run_with(
        tracker: &FakeTracker,
        document: &IssueSpecDocument,
        pacing: &Pacing,
    ) -> AnnotationReport {
        let mut registry = IssueNumberRegistry::new();
        create_phase_issues(tracker, document, &mut registry, None, &Pacing::none())
            .await
            .unwrap();
        annotate_dependencies(tracker, document, &registry, pacing)
            .await
            .unwrap()
    }

    async fn run(tracker: &FakeTracker, document: &IssueSpecDocument) -> AnnotationReport {
        run_with(tracker, document, &Pacing::none()).await
    }

    #[test]
    fn renders_dependency_section() {
        assert_eq!(
            dependency_section(&[TrackerIssueNumber(3), TrackerIssueNumber(4)]),
            "\n\n---\n\n**🔗 Dependências:**\n- Bloqueada por #3\n- Bloqueada por #4\n"
        );
    }

    #[tokio::test]
    async fn appends_predecessor_issue_number() {
        let tracker = FakeTracker::starting_at(100);

        let report = run(&tracker, &document()).await;

        assert_eq!(report.annotated, 1);
        assert_eq!(
            tracker.body(101).unwrap(),
            "B body\n\n---\n\n**🔗 Dependências:**\n- Bloqueada por #100\n"
        );
        assert_eq!(tracker.body(100).unwrap(), "A body");
    }

    #[tokio::test]
    async fn failed_predecessor_leaves_body_untouched() {
        let tracker = FakeTracker::starting_at(100).fail_title("A");

        let report = run(&tracker, &document()).await;

        assert_eq!(report.unresolved, 1);
        assert_eq!(report.annotated, 0);
        assert_eq!(tracker.body(100).unwrap(), "B body");
        assert!(!tracker
            .calls()
            .iter()
            .any(|call| matches!(call, Call::GetIssue(_) | Call::UpdateIssue(..))));
    }

    #[tokio::test]
    async fn unknown_predecessors_are_dropped() {
        let tracker = FakeTracker::starting_at(1);
        let document = IssueSpecDocument {
            phases: vec![phase(1, "A", Vec::new()), phase(2, "B", vec![7, 1])],
            special_issues: Vec::new(),
        };

        run(&tracker, &document).await;

        let body = tracker.body(2).unwrap();
        assert!(body.contains("- Bloqueada por #1\n"));
        assert_eq!(body.matches("Bloqueada por").count(), 1);
    }

    #[tokio::test]
    async fn read_failure_is_reported_and_skips_write() {
        let tracker = FakeTracker::starting_at(1).fail_read(2);

        let report = run(&tracker, &document()).await;

        assert_eq!(report.failed, 1);
        assert!(!tracker
            .calls()
            .iter()
            .any(|call| matches!(call, Call::UpdateIssue(..))));
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let tracker = FakeTracker::starting_at(1).fail_write(2);

        let report = run(&tracker, &document()).await;

        assert_eq!(report.failed, 1);
        assert_eq!(tracker.body(2).unwrap(), "B body");
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_only_after_annotation_requests() {
        let tracker = FakeTracker::starting_at(1);
        let document = IssueSpecDocument {
            phases: vec![
                phase(1, "A", Vec::new()),
                phase(2, "B", vec![1]),
                phase(3, "C", vec![1, 2]),
                phase(4, "D", vec![9]),
            ],
            special_issues: Vec::new(),
        };
        let pacing = Pacing {
            dependency_delay: std::time::Duration::from_millis(500),
            ..Pacing::none()
        };

        let start = tokio::time::Instant::now();
        let report = run_with(&tracker, &document, &pacing).await;
        let elapsed = start.elapsed();

        assert_eq!(report.annotated, 2);
        assert_eq!(report.unresolved, 1);
        assert!(elapsed >= std::time::Duration::from_millis(1000));
        assert!(elapsed < std::time::Duration::from_millis(1500));
    }
}
