//! Runner configuration.

use crate::config::{ConfigError, RepositoryId};
use crate::pacing::Pacing;
use std::path::{Path, PathBuf};
use url::Url;

/// Default name of the issue structure file.
pub const DEFAULT_STRUCTURE_FILE: &str = "issues-structure.yaml";

/// Configuration for an import run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the issue structure file.
    structure_file: PathBuf,
    /// GitHub token used for API calls.
    token: String,
    /// Repository receiving the issues.
    repository: RepositoryId,
    /// Whether to skip the label bootstrap step.
    skip_labels: bool,
    /// Milestone attached to every created issue.
    milestone: Option<u64>,
    /// Alternative API base URL.
    api_url: Option<Url>,
    /// Pauses between requests.
    pacing: Pacing,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        structure_file: PathBuf,
        token: String,
        repository: RepositoryId,
        skip_labels: bool,
    ) -> Self {
        Self {
            structure_file,
            token,
            repository,
            skip_labels,
            milestone: None,
            api_url: None,
            pacing: Pacing::default(),
        }
    }

    /// Attaches every created issue to `milestone`.
    pub fn with_milestone(mut self, milestone: Option<u64>) -> Self {
        self.milestone = milestone;
        self
    }

    /// Sends requests to `api_url` instead of `https://api.github.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL does not parse.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(api_url).map_err(|e| ConfigError::InvalidApiUrl {
            value: api_url.to_string(),
            source: e,
        })?;
        self.api_url = Some(url);
        Ok(self)
    }

    /// Sets the pauses between requests.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Returns the issue structure file path.
    pub fn structure_file(&self) -> &Path {
        &self.structure_file
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the target repository.
    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }

    /// Returns whether label bootstrap is skipped.
    pub fn skip_labels(&self) -> bool {
        self.skip_labels
    }

    /// Returns the milestone attached to created issues.
    pub fn milestone(&self) -> Option<u64> {
        self.milestone
    }

    /// Returns the API base URL override.
    pub fn api_url(&self) -> Option<&Url> {
        self.api_url.as_ref()
    }

    /// Returns the pauses between requests.
    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunnerConfig {
        RunnerConfig::new(
            PathBuf::from(DEFAULT_STRUCTURE_FILE),
            "token".to_string(),
            RepositoryId::parse("owner/repo").unwrap(),
            false,
        )
    }

    #[test]
    fn defaults() {
        let config = config();
        assert_eq!(config.pacing(), &Pacing::default());
        assert!(config.milestone().is_none());
        assert!(config.api_url().is_none());
        assert!(!config.skip_labels());
    }

    #[test]
    fn rejects_invalid_api_url() {
        let result = config().with_api_url("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn accepts_enterprise_api_url() {
        let config = config()
            .with_api_url("https://github.example.com/api/v3")
            .unwrap();
        assert_eq!(
            config.api_url().map(Url::as_str),
            Some("https://github.example.com/api/v3")
        );
    }
}
