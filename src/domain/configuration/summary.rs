use serde::Serialize;

use super::{ConfigurationRecord, ConflictStrategy};

/// Secret-free view of a [`ConfigurationRecord`] for display and step outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub repository: String,
    pub owner: String,
    pub repo: String,
    pub sync_folder: String,
    pub conflict_strategy: ConflictStrategy,
    pub sync_deletes: bool,
    /// Wiki remote with the credential replaced by `***`.
    pub wiki_repo: String,
}

impl ConfigSummary {
    /// `(name, value)` pairs published as step outputs. Secrets are excluded.
    pub fn step_outputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("repository", self.repository.clone()),
            ("owner", self.owner.clone()),
            ("repo", self.repo.clone()),
            ("sync-folder", self.sync_folder.clone()),
            ("conflict-strategy", self.conflict_strategy.to_string()),
            ("sync-deletes", self.sync_deletes.to_string()),
        ]
    }
}

impl From<&ConfigurationRecord> for ConfigSummary {
    fn from(record: &ConfigurationRecord) -> Self {
        Self {
            repository: record.repository().to_string(),
            owner: record.owner().to_string(),
            repo: record.repo().to_string(),
            sync_folder: record.sync_folder().to_string(),
            conflict_strategy: record.conflict_strategy(),
            sync_deletes: record.sync_deletes(),
            wiki_repo: record.wiki_remote().redacted(),
        }
    }
}
