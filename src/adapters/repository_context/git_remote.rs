//! Repository identity from the `origin` remote of a local clone.

use std::path::PathBuf;

use git2::Repository;
use url::Url;

use crate::domain::configuration::{ContextError, RepositoryIdentity};
use crate::ports::RepositoryContext;

const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone)]
pub struct GitRemoteContext {
    root: PathBuf,
    remote: String,
}

impl GitRemoteContext {
    pub fn new(root: PathBuf) -> Self {
        Self { root, remote: DEFAULT_REMOTE.to_string() }
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    fn remote_url(&self) -> Result<String, ContextError> {
        let repo = Repository::discover(&self.root).map_err(|e| ContextError::Git {
            command: "git2::Repository::discover".to_string(),
            details: e.message().to_string(),
        })?;
        let remote = repo.find_remote(&self.remote).map_err(|e| ContextError::Git {
            command: format!("git2::Repository::find_remote({})", self.remote),
            details: e.message().to_string(),
        })?;
        remote.url().map(str::to_string).ok_or_else(|| ContextError::Git {
            command: "git2::Remote::url".to_string(),
            details: "remote URL is not valid UTF-8".to_string(),
        })
    }
}

impl RepositoryContext for GitRemoteContext {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError> {
        let url = self.remote_url()?;
        parse_github_remote(url.trim()).ok_or(ContextError::UnsupportedRemote(url))
    }
}

/// Parse a github.com remote URL into `(owner, repo)`.
///
/// Accepts `git@github.com:owner/repo.git`, `ssh://git@github.com/owner/repo.git`
/// and `https://github.com/owner/repo(.git)`, with or without credentials.
pub fn parse_github_remote(url: &str) -> Option<RepositoryIdentity> {
    let path = match url.strip_prefix("git@github.com:") {
        Some(rest) => rest.to_string(),
        None => {
            let parsed = Url::parse(url).ok()?;
            if parsed.host_str() != Some("github.com") {
                return None;
            }
            parsed.path().trim_start_matches('/').to_string()
        }
    };

    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let (owner, repo) = path.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some(RepositoryIdentity::new(owner, repo))
}
