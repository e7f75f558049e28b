//! Repository identity providers.

mod fallback;
mod git_remote;
mod github_env;

pub use fallback::FallbackContext;
pub use git_remote::{GitRemoteContext, parse_github_remote};
pub use github_env::{GitHubEnvContext, RepositoryOverride, parse_repository};

use crate::domain::configuration::{ContextError, RepositoryIdentity};
use crate::ports::RepositoryContext;

/// A fixed identity, e.g. from an explicit `--repository` flag.
impl RepositoryContext for RepositoryIdentity {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError> {
        Ok(self.clone())
    }
}
