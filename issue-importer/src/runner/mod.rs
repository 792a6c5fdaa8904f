//! Orchestrates an import run.
//!
//! A run is one linear pass: load the structure file, bootstrap labels,
//! create phase issues, create sub-issues, create special issues, annotate
//! dependencies. Every step finishes before the next one starts. Error
//! responses are recorded in the summary; a request that gets no response
//! at all aborts the run.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_STRUCTURE_FILE};
pub use error::RunnerError;

use crate::config::load_document;
use crate::dependencies::annotate_dependencies;
use crate::issues::{create_phase_issues, create_special_issues, create_sub_issues};
use crate::labels::{bootstrap_labels, LABELS};
use crate::registry::IssueNumberRegistry;
use crate::summary::{RunPlan, RunSummary};
use crate::tracker::{GitHubTracker, IssueTracker};
use std::sync::Arc;
use tracing::info;

/// Runs an import against an issue tracker.
pub struct Runner {
    config: RunnerConfig,
    tracker: Arc<dyn IssueTracker>,
}

impl Runner {
    /// Builds a runner talking to GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] if the client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let tracker = GitHubTracker::new(
            config.token(),
            config.repository().clone(),
            config.api_url(),
        )?;
        Ok(Self::with_tracker(config, Arc::new(tracker)))
    }

    /// Builds a runner on top of any tracker implementation.
    pub fn with_tracker(config: RunnerConfig, tracker: Arc<dyn IssueTracker>) -> Self {
        Self { config, tracker }
    }

    /// Loads the structure file and describes what [`run`](Self::run) would do.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the structure file is missing or
    /// malformed.
    pub fn plan(&self) -> Result<RunPlan, RunnerError> {
        let document = load_document(self.config.structure_file())?;
        Ok(RunPlan::new(document, !self.config.skip_labels()))
    }

    /// Executes the full import.
    ///
    /// The structure file is loaded before the first request, so a missing
    /// or malformed file aborts the run without touching the tracker.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the structure file is missing or
    /// malformed, or [`RunnerError::Tracker`] if a request gets no response.
    /// Error responses from the tracker are reported in the summary instead.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let document = load_document(self.config.structure_file())?;
        let tracker = self.tracker.as_ref();
        let pacing = self.config.pacing();
        let milestone = self.config.milestone();

        info!(
            repo = %self.config.repository(),
            phases = document.phases.len(),
            sub_issues = document.sub_issue_count(),
            special_issues = document.special_issues.len(),
            "Starting import"
        );

        let mut summary = RunSummary::default();

        if self.config.skip_labels() {
            info!("Skipping label creation");
        } else {
            summary.labels = Some(bootstrap_labels(tracker, LABELS, pacing).await?);
        }

        let mut registry = IssueNumberRegistry::new();
        summary.phases =
            create_phase_issues(tracker, &document, &mut registry, milestone, pacing).await?;
        summary.sub_issues =
            create_sub_issues(tracker, &document, &mut registry, milestone, pacing).await?;
        summary.special_issues =
            create_special_issues(tracker, &document, &mut registry, milestone, pacing).await?;
        summary.dependencies = annotate_dependencies(tracker, &document, &registry, pacing).await?;
        summary.registry = registry;

        info!(
            registered = summary.total_registered(),
            "Import finished"
        );
        Ok(summary)
    }
}
