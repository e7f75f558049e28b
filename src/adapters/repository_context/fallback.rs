use tracing::debug;

use crate::domain::configuration::{ContextError, RepositoryIdentity};
use crate::ports::RepositoryContext;

/// Tries `primary`, then `secondary`. If both fail, the primary error is returned.
#[derive(Debug, Clone)]
pub struct FallbackContext<P, S> {
    primary: P,
    secondary: S,
}

impl<P: RepositoryContext, S: RepositoryContext> FallbackContext<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: RepositoryContext, S: RepositoryContext> RepositoryContext for FallbackContext<P, S> {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError> {
        match self.primary.repository_identity() {
            Ok(identity) => Ok(identity),
            Err(primary_err) => {
                debug!(error = %primary_err, "primary repository context failed, trying fallback");
                self.secondary.repository_identity().map_err(|secondary_err| {
                    debug!(error = %secondary_err, "fallback repository context failed");
                    primary_err
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedContext;

    #[test]
    fn primary_result_is_preferred() {
        let context = FallbackContext::new(
            FixedContext::identity("env", "repo"),
            FixedContext::identity("git", "repo"),
        );
        assert_eq!(context.repository_identity().unwrap().owner, "env");
    }

    #[test]
    fn secondary_used_when_primary_fails() {
        let context = FallbackContext::new(
            FixedContext::failing(ContextError::MissingRepository),
            FixedContext::identity("git", "repo"),
        );
        assert_eq!(context.repository_identity().unwrap().owner, "git");
    }

    #[test]
    fn primary_error_reported_when_both_fail() {
        let context = FallbackContext::new(
            FixedContext::failing(ContextError::MissingRepository),
            FixedContext::failing(ContextError::UnsupportedRemote("x".into())),
        );
        assert_eq!(context.repository_identity(), Err(ContextError::MissingRepository));
    }
}
