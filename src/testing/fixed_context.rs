use crate::domain::configuration::{ContextError, RepositoryIdentity};
use crate::ports::RepositoryContext;

/// Repository context returning a canned result.
#[derive(Debug, Clone)]
pub struct FixedContext(Result<RepositoryIdentity, ContextError>);

impl FixedContext {
    pub fn ok(identity: RepositoryIdentity) -> Self {
        Self(Ok(identity))
    }

    pub fn identity(owner: &str, repo: &str) -> Self {
        Self::ok(RepositoryIdentity::new(owner, repo))
    }

    pub fn failing(error: ContextError) -> Self {
        Self(Err(error))
    }
}

impl RepositoryContext for FixedContext {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError> {
        self.0.clone()
    }
}
