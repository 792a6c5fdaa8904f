//! Issue creation for phases, sub-issues and special issues.
//!
//! Each pass walks the document in order, issues one create request per
//! entry and records the tracker number of every created issue in the
//! [`IssueNumberRegistry`]. Entries the tracker rejects are logged and left
//! out of the registry; they are never retried. A request that gets no
//! response at all aborts the pass.

mod status;

pub use status::{IssueReport, IssueStatus};

use crate::config::{IssueSpecDocument, SubIssue};
use crate::pacing::{pause, Pacing};
use crate::registry::{IssueKey, IssueNumberRegistry, TrackerIssueNumber};
use crate::tracker::{IssueTracker, NewIssue, TrackerError};
use tracing::{info, info_span, warn, Instrument};

/// Body of a sub-issue: its description followed by a back-reference to the
/// phase issue.
#[must_use]
pub fn sub_issue_body(description: &str, phase_issue: TrackerIssueNumber) -> String {
    format!("{description}\n\n---\n\n**Fase:** {phase_issue}")
}

/// Creates one issue.
///
/// An error response is logged with the title, status and response message
/// and returned as [`IssueStatus::Failed`].
///
/// # Errors
///
/// Returns [`TrackerError::Transport`] if no response was received.
pub async fn create_issue(
    tracker: &dyn IssueTracker,
    issue: &NewIssue,
) -> Result<IssueStatus, TrackerError> {
    let span = info_span!("create_issue", title = %issue.title);

    async {
        match tracker.create_issue(issue).await {
            Ok(number) => {
                info!(issue_number = number.get(), "Issue created");
                Ok(IssueStatus::Created { number })
            }
            Err(TrackerError::Api { status, message }) => {
                warn!(status, response = %message, "Failed to create issue");
                Ok(IssueStatus::Failed {
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

async fn create_and_register(
    tracker: &dyn IssueTracker,
    issue: NewIssue,
    key: IssueKey,
    registry: &mut IssueNumberRegistry,
    report: &mut IssueReport,
    pacing: &Pacing,
) -> Result<(), TrackerError> {
    let status = create_issue(tracker, &issue).await?;
    if let Some(number) = status.number() {
        registry.register(key, number);
    }
    report.record(&status);
    pause(pacing.issue_delay).await;
    Ok(())
}

/// Creates one issue per phase, in document order.
///
/// # Errors
///
/// Returns [`TrackerError::Transport`] if a request gets no response.
pub async fn create_phase_issues(
    tracker: &dyn IssueTracker,
    document: &IssueSpecDocument,
    registry: &mut IssueNumberRegistry,
    milestone: Option<u64>,
    pacing: &Pacing,
) -> Result<IssueReport, TrackerError> {
    info!(count = document.phases.len(), "Creating phase issues");

    let mut report = IssueReport::default();
    for phase in &document.phases {
        let issue = NewIssue::new(&phase.title, &phase.description, phase.labels.clone())
            .with_milestone(milestone);
        create_and_register(
            tracker,
            issue,
            IssueKey::Phase(phase.number),
            registry,
            &mut report,
            pacing,
        )
        .await?;
    }
    Ok(report)
}

/// Creates the sub-issues of every registered phase.
///
/// Runs after [`create_phase_issues`], so each body can reference the tracker
/// number of its phase. Sub-issues of phases that were not created are
/// skipped.
///
/// # Errors
///
/// Returns [`TrackerError::Transport`] if a request gets no response.
pub async fn create_sub_issues(
    tracker: &dyn IssueTracker,
    document: &IssueSpecDocument,
    registry: &mut IssueNumberRegistry,
    milestone: Option<u64>,
    pacing: &Pacing,
) -> Result<IssueReport, TrackerError> {
    info!(count = document.sub_issue_count(), "Creating sub-issues");

    let mut report = IssueReport::default();
    for phase in &document.phases {
        let Some(phase_issue) = registry.phase(phase.number) else {
            if !phase.sub_issues.is_empty() {
                warn!(
                    phase = phase.number,
                    skipped = phase.sub_issues.len(),
                    "Phase issue was not created, skipping its sub-issues"
                );
                report.skipped += phase.sub_issues.len();
            }
            continue;
        };

        for (index, sub_issue) in phase.sub_issues.iter().enumerate() {
            let key = IssueKey::SubIssue {
                phase: phase.number,
                position: index + 1,
            };
            create_and_register(
                tracker,
                sub_issue_request(sub_issue, phase_issue, milestone),
                key,
                registry,
                &mut report,
                pacing,
            )
            .await?;
        }
    }
    Ok(report)
}

fn sub_issue_request(
    sub_issue: &SubIssue,
    phase_issue: TrackerIssueNumber,
    milestone: Option<u64>,
) -> NewIssue {
    NewIssue::new(
        &sub_issue.title,
        sub_issue_body(&sub_issue.description, phase_issue),
        sub_issue.labels.clone(),
    )
    .with_milestone(milestone)
}

/// Creates one issue per special issue, in document order.
///
/// # Errors
///
/// Returns [`TrackerError::Transport`] if a request gets no response.
pub async fn create_special_issues(
    tracker: &dyn IssueTracker,
    document: &IssueSpecDocument,
    registry: &mut IssueNumberRegistry,
    milestone: Option<u64>,
    pacing: &Pacing,
) -> Result<IssueReport, TrackerError> {
    info!(
        count = document.special_issues.len(),
        "Creating special issues"
    );

    let mut report = IssueReport::default();
    for (index, special) in document.special_issues.iter().enumerate() {
        let issue = NewIssue::new(&special.title, &special.description, special.labels.clone())
            .with_milestone(milestone);
        create_and_register(
            tracker,
            issue,
            IssueKey::Special {
                position: index + 1,
            },
            registry,
            &mut report,
            pacing,
        )
        .await?;
    }
    Ok(report)
}
