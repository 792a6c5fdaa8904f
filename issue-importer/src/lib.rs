#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod dependencies;
pub mod issues;
pub mod labels;
pub mod pacing;
pub mod registry;
pub mod runner;
pub mod summary;
pub mod tracker;

pub use config::{
    load_document, ConfigError, IssueSpecDocument, Phase, RepositoryId, SpecialIssue, SubIssue,
};
pub use dependencies::{
    annotate_dependencies, annotate_issue, dependency_section, resolve_predecessors,
    AnnotationReport, AnnotationStatus,
};
pub use issues::{
    create_issue, create_phase_issues, create_special_issues, create_sub_issues, sub_issue_body,
    IssueReport, IssueStatus,
};
pub use labels::{
    bootstrap_labels, create_label, find_label, LabelDefinition, LabelReport, LabelStatus, LABELS,
};
pub use pacing::{pause, Pacing};
pub use registry::{IssueKey, IssueNumberRegistry, TrackerIssueNumber};
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_STRUCTURE_FILE};
pub use summary::{DependencyEdge, RunPlan, RunSummary};
pub use tracker::{GitHubTracker, IssueTracker, NewIssue, TrackerError};
