//! Mapping from logical plan entries to tracker-assigned issue numbers.
//!
//! The registry is the only state carried between the steps of a run. It is
//! owned by the run and handed to each step by `&mut` (while creating) or `&`
//! (while resolving dependencies).

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Issue number assigned by the tracker on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TrackerIssueNumber(pub u64);

impl TrackerIssueNumber {
    /// Raw issue number.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackerIssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Logical identity of a plan entry.
///
/// Positions are 1-based and follow document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKey {
    /// A phase, by its declared number.
    Phase(u32),

    /// The `position`-th sub-issue of phase `phase`.
    SubIssue { phase: u32, position: usize },

    /// The `position`-th special issue.
    Special { position: usize },
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phase(number) => write!(f, "phase {number}"),
            Self::SubIssue { phase, position } => write!(f, "phase {phase} sub-issue {position}"),
            Self::Special { position } => write!(f, "special issue {position}"),
        }
    }
}

/// Append-only map of created issues.
#[derive(Debug, Clone, Default)]
pub struct IssueNumberRegistry {
    entries: BTreeMap<IssueKey, TrackerIssueNumber>,
}

impl IssueNumberRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the tracker number of a created entry.
    ///
    /// A key is normally registered once. Re-registering (two phases sharing a
    /// number) keeps the latest number, matching what later lookups resolve to.
    pub fn register(&mut self, key: IssueKey, number: TrackerIssueNumber) {
        if let Some(previous) = self.entries.insert(key, number) {
            warn!(%key, %previous, %number, "Logical key registered twice");
        }
    }

    /// Tracker number of an entry, if it was created.
    #[must_use]
    pub fn get(&self, key: IssueKey) -> Option<TrackerIssueNumber> {
        self.entries.get(&key).copied()
    }

    /// Tracker number of a phase, if it was created.
    #[must_use]
    pub fn phase(&self, number: u32) -> Option<TrackerIssueNumber> {
        self.get(IssueKey::Phase(number))
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries ordered by tracker issue number, ascending.
    #[must_use]
    pub fn sorted_by_number(&self) -> Vec<(IssueKey, TrackerIssueNumber)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(key, number)| (*number, *key));
        entries
    }
}
