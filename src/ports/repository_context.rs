use crate::domain::configuration::{ContextError, RepositoryIdentity};

/// Port for the ambient identity of the repository the action runs in.
pub trait RepositoryContext {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError>;
}

impl<T: RepositoryContext + ?Sized> RepositoryContext for &T {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError> {
        (**self).repository_identity()
    }
}

impl<T: RepositoryContext + ?Sized> RepositoryContext for Box<T> {
    fn repository_identity(&self) -> Result<RepositoryIdentity, ContextError> {
        (**self).repository_identity()
    }
}
