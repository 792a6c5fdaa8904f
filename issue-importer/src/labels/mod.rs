//! Label bootstrap.
//!
//! Ensures every label in [`LABELS`] exists in the target repository before
//! any issue references it. Labels that already exist count as success, so
//! the step can be repeated safely.

mod definition;
mod status;

pub use definition::{find_label, LabelDefinition, LABELS};
pub use status::{LabelReport, LabelStatus};

use crate::pacing::{pause, Pacing};
use crate::tracker::{IssueTracker, TrackerError};
use tracing::{info, warn};

/// Creates one label.
///
/// An error response becomes [`LabelStatus::Failed`].
///
/// # Errors
///
/// Returns [`TrackerError::Transport`] if no response was received.
pub async fn create_label(
    tracker: &dyn IssueTracker,
    label: &LabelDefinition,
) -> Result<LabelStatus, TrackerError> {
    match tracker.create_label(label).await {
        Ok(()) => {
            info!(label = label.name, "Label created");
            Ok(LabelStatus::Created)
        }
        Err(e) if e.is_already_exists() => {
            info!(label = label.name, "Label already exists");
            Ok(LabelStatus::AlreadyExists)
        }
        Err(TrackerError::Api { status, message }) => {
            warn!(
                label = label.name,
                status,
                response = %message,
                "Failed to create label"
            );
            Ok(LabelStatus::Failed {
                status_code: status,
                message,
            })
        }
        Err(e) => Err(e),
    }
}

/// Creates every label in `labels`, pausing between requests.
///
/// Error responses are logged and counted; they never stop the pass.
///
/// # Errors
///
/// Returns [`TrackerError::Transport`] if a request gets no response.
pub async fn bootstrap_labels(
    tracker: &dyn IssueTracker,
    labels: &[LabelDefinition],
    pacing: &Pacing,
) -> Result<LabelReport, TrackerError> {
    info!(count = labels.len(), "Creating labels");

    let mut report = LabelReport::default();
    for label in labels {
        let status = create_label(tracker, label).await?;
        report.record(&status);
        pause(pacing.label_delay).await;
    }

    info!(
        created = report.created,
        already_existing = report.already_existing,
        failed = report.failed,
        "Labels ready"
    );
    Ok(report)
}
