//! Repository identity from the runner environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::domain::configuration::{ContextError, RepositoryIdentity};
use crate::ports::RepositoryContext;

/// Resolves `(owner, repo)` from `GITHUB_REPOSITORY`, falling back to the
/// `repository` object of the event payload at `GITHUB_EVENT_PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitHubEnvContext {
    repository: Option<String>,
    event_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    repository: Option<PayloadRepository>,
}

#[derive(Debug, Deserialize)]
struct PayloadRepository {
    name: String,
    owner: PayloadOwner,
}

#[derive(Debug, Deserialize)]
struct PayloadOwner {
    login: String,
}

impl GitHubEnvContext {
    pub fn new(repository: Option<String>, event_path: Option<PathBuf>) -> Self {
        Self { repository, event_path }
    }

    pub fn from_env() -> Self {
        Self {
            repository: env::var("GITHUB_REPOSITORY").ok().filter(|v| !v.is_empty()),
            event_path: env::var_os("GITHUB_EVENT_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    fn from_payload(path: &Path) -> Result<Option<RepositoryIdentity>, ContextError> {
        if !path.exists() {
            warn!(path = %path.display(), "GITHUB_EVENT_PATH does not exist");
            return Ok(None);
        }

        let payload_error = |details: String| ContextError::EventPayload {
            path: path.display().to_string(),
            details,
        };
        let content = fs::read_to_string(path).map_err(|e| payload_error(e.to_string()))?;
        let payload: EventPayload =
            serde_json::from_str(&content).map_err(|e| payload_error(e.to_string()))?;

        Ok(payload.repository.map(|r| RepositoryIdentity::new(r.owner.login, r.name)))
    }
}

impl RepositoryContext for GitHubEnvContext {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError> {
        if let Some(full_name) = &self.repository {
            return parse_repository(full_name);
        }

        if let Some(path) = &self.event_path
            && let Some(identity) = Self::from_payload(path)?
        {
            return Ok(identity);
        }

        Err(ContextError::MissingRepository)
    }
}

/// An explicit `owner/repo`, e.g. from `--repository`. Parsed when the identity
/// is requested, so input failures are still reported first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOverride(String);

impl RepositoryOverride {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self(full_name.into())
    }
}

impl RepositoryContext for RepositoryOverride {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError> {
        parse_repository(&self.0)
    }
}

/// Parse `owner/repo`. Both halves must be non-empty and there must be exactly one slash.
pub fn parse_repository(full_name: &str) -> Result<RepositoryIdentity, ContextError> {
    let malformed = || ContextError::MalformedRepository(full_name.to_string());
    let (owner, repo) = full_name.trim().split_once('/').ok_or_else(malformed)?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(malformed());
    }
    Ok(RepositoryIdentity::new(owner, repo))
}
