//! Target repository identifier.

use super::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A GitHub repository in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryId {
    /// Parses an `owner/name` identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepository`] unless the value has exactly
    /// two non-empty segments.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRepository {
            value: value.to_string(),
        };

        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Full repository name in `owner/name` format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_owner_and_name() {
        let repo = RepositoryId::parse("datavisio-tech/pleno-psi").unwrap();
        assert_eq!(repo.owner, "datavisio-tech");
        assert_eq!(repo.name, "pleno-psi");
        assert_eq!(repo.full_name(), "datavisio-tech/pleno-psi");
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for value in ["", "owner", "/name", "owner/", "a/b/c"] {
            assert!(
                matches!(
                    RepositoryId::parse(value),
                    Err(ConfigError::InvalidRepository { .. })
                ),
                "expected '{value}' to be rejected"
            );
        }
    }
}
