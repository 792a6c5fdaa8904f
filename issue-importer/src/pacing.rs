//! Fixed pauses between API requests.
//!
//! The importer does not read rate-limit headers. It waits a fixed interval
//! after each request so a full run stays well under GitHub's secondary
//! rate limits.

use std::time::Duration;
use tracing::trace;

/// Default pause after each create-label request.
pub const DEFAULT_LABEL_DELAY: Duration = Duration::from_millis(500);

/// Default pause after each create-issue request.
pub const DEFAULT_ISSUE_DELAY: Duration = Duration::from_secs(1);

/// Default pause after each dependency update.
pub const DEFAULT_DEPENDENCY_DELAY: Duration = Duration::from_millis(500);

/// Pauses applied by each step of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after each label request.
    pub label_delay: Duration,

    /// Pause after each issue creation request.
    pub issue_delay: Duration,

    /// Pause after each dependency annotation.
    pub dependency_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            label_delay: DEFAULT_LABEL_DELAY,
            issue_delay: DEFAULT_ISSUE_DELAY,
            dependency_delay: DEFAULT_DEPENDENCY_DELAY,
        }
    }
}

impl Pacing {
    /// No pauses at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            label_delay: Duration::ZERO,
            issue_delay: Duration::ZERO,
            dependency_delay: Duration::ZERO,
        }
    }
}

/// Sleeps for `delay`, returning immediately for a zero delay.
pub async fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    trace!(delay = ?delay, "Pausing between requests");
    tokio::time::sleep(delay).await;
}
