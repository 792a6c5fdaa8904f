//! Runner error types.

/// Errors that abort an import run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Structure file and configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// A request that got no response from the tracker.
    #[error(transparent)]
    Tracker(#[from] crate::tracker::TrackerError),
}
