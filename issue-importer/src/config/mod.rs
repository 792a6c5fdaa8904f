//! Issue structure loading.
//!
//! The structure file describes phases, their sub-issues, special issues and
//! the `blocked_by` relation between phases. YAML is the usual format; files
//! with a `.toml` extension are parsed as TOML into the same model.

mod document;
mod error;
mod repository;

pub use document::{IssueSpecDocument, Phase, SpecialIssue, SubIssue};
pub use error::ConfigError;
pub use repository::RepositoryId;

use std::path::Path;
use tracing::{debug, info};

/// Loads and parses an issue structure file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the path does not exist,
/// [`ConfigError::IoError`] if it cannot be read, and
/// [`ConfigError::YamlError`] / [`ConfigError::TomlError`] if the content is
/// not well-formed.
pub fn load_document(path: &Path) -> Result<IssueSpecDocument, ConfigError> {
    info!(path = %path.display(), "Loading issue structure");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let document = parse_document(path, &content)?;

    debug!(
        phases = document.phases.len(),
        sub_issues = document.sub_issue_count(),
        special_issues = document.special_issues.len(),
        "Parsed issue structure"
    );
    Ok(document)
}

fn parse_document(path: &Path, content: &str) -> Result<IssueSpecDocument, ConfigError> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    } else {
        // An empty YAML file is a null document; treat it as an empty plan.
        if content.trim().is_empty() {
            return Ok(IssueSpecDocument::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::YamlError {
            path: path.display().to_string(),
            source: e,
        })
    }
}
