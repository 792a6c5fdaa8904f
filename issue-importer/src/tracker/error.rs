//! Tracker error types.

use thiserror::Error;

/// HTTP status GitHub returns when a label (or other resource) already exists.
const UNPROCESSABLE_ENTITY: u16 = 422;

/// Errors returned by an [`IssueTracker`](super::IssueTracker) call.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The API answered with a non-success status.
    #[error("GitHub API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The request did not produce a usable API answer (connection failure,
    /// timeout, undecodable response). Aborts the run.
    #[error("GitHub API error: {0}")]
    Transport(#[source] octocrab::Error),
}

impl TrackerError {
    /// HTTP status of the response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }

    /// Response message, or the transport error text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Transport(e) => e.to_string(),
        }
    }

    /// Returns true if the tracker rejected a create because the resource exists.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.status() == Some(UNPROCESSABLE_ENTITY)
    }
}

impl From<octocrab::Error> for TrackerError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => {
                let mut message = source.message.clone();
                if let Some(errors) = source.errors.as_ref().filter(|e| !e.is_empty()) {
                    if let Ok(details) = serde_json::to_string(errors) {
                        message.push(' ');
                        message.push_str(&details);
                    }
                }
                Self::Api {
                    status: source.status_code.as_u16(),
                    message,
                }
            }
            other => Self::Transport(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_detect_already_exists() {
        let error = TrackerError::Api {
            status: 422,
            message: "Validation Failed".to_string(),
        };
        assert!(error.is_already_exists());
        assert_eq!(error.status(), Some(422));

        let error = TrackerError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(!error.is_already_exists());
    }
}
