//! GitHub REST implementation of [`IssueTracker`].

use super::{IssueTracker, NewIssue, TrackerError};
use crate::config::RepositoryId;
use crate::labels::LabelDefinition;
use crate::registry::TrackerIssueNumber;
use async_trait::async_trait;
use http::header::ACCEPT;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::debug;
use url::Url;

/// Media type selecting the v3 REST API.
const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Issue tracker backed by the GitHub REST API.
#[derive(Clone)]
pub struct GitHubTracker {
    octocrab: Octocrab,
    repository: RepositoryId,
}

impl GitHubTracker {
    /// Builds an authenticated client for `repository`.
    ///
    /// `api_url` overrides the default `https://api.github.com` base. Requests
    /// are sent once; the client never retries.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        token: &str,
        repository: RepositoryId,
        api_url: Option<&Url>,
    ) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder()
            .personal_token(token.to_string())
            .add_header(ACCEPT, GITHUB_V3_MEDIA_TYPE.to_string())
            .add_retry_config(RetryConfig::None);
        if let Some(url) = api_url {
            builder = builder.base_uri(url.as_str().trim_end_matches('/'))?;
        }

        Ok(Self {
            octocrab: builder.build()?,
            repository,
        })
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn create_label(&self, label: &LabelDefinition) -> Result<(), TrackerError> {
        debug!(repo = %self.repository, name = label.name, "Creating label");

        self.octocrab
            .issues(&self.repository.owner, &self.repository.name)
            .create_label(label.name, label.color, label.description)
            .await?;
        Ok(())
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<TrackerIssueNumber, TrackerError> {
        debug!(repo = %self.repository, title = %issue.title, "Creating issue");

        let labels = (!issue.labels.is_empty()).then(|| issue.labels.clone());
        let created = self
            .octocrab
            .issues(&self.repository.owner, &self.repository.name)
            .create(&issue.title)
            .body(&issue.body)
            .labels(labels)
            .milestone(issue.milestone)
            .send()
            .await?;
        Ok(TrackerIssueNumber(created.number))
    }

    async fn get_issue_body(&self, number: TrackerIssueNumber) -> Result<String, TrackerError> {
        debug!(repo = %self.repository, issue_number = number.get(), "Fetching issue");

        let issue = self
            .octocrab
            .issues(&self.repository.owner, &self.repository.name)
            .get(number.get())
            .await?;
        Ok(issue.body.unwrap_or_default())
    }

    async fn update_issue_body(
        &self,
        number: TrackerIssueNumber,
        body: &str,
    ) -> Result<(), TrackerError> {
        debug!(repo = %self.repository, issue_number = number.get(), "Updating issue body");

        self.octocrab
            .issues(&self.repository.owner, &self.repository.name)
            .update(number.get())
            .body(body)
            .send()
            .await?;
        Ok(())
    }
}
