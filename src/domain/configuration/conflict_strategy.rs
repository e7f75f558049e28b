use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy the sync engine applies when the sync folder and the wiki diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictStrategy {
    /// Repository content overwrites the wiki.
    #[default]
    RepoWins,
    /// Wiki content overwrites the repository.
    WikiWins,
    /// Conflicts are left for a human to resolve.
    Manual,
    /// Conflicting files are left untouched.
    Skip,
}

impl ConflictStrategy {
    pub const ALL: [ConflictStrategy; 4] = [
        ConflictStrategy::RepoWins,
        ConflictStrategy::WikiWins,
        ConflictStrategy::Manual,
        ConflictStrategy::Skip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictStrategy::RepoWins => "repo-wins",
            ConflictStrategy::WikiWins => "wiki-wins",
            ConflictStrategy::Manual => "manual",
            ConflictStrategy::Skip => "skip",
        }
    }

    /// Comma-separated list of accepted input values.
    pub fn valid_options() -> String {
        Self::ALL.iter().map(ConflictStrategy::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ConflictStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a value is not one of [`ConflictStrategy::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownConflictStrategy(pub String);

impl FromStr for ConflictStrategy {
    type Err = UnknownConflictStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| UnknownConflictStrategy(s.to_string()))
    }
}
