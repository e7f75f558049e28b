use crate::domain::{AppError, ConfigurationLoader, ConfigurationRecord};
use crate::ports::{InputReader, RepositoryContext};

/// Application context holding the collaborators a configuration load needs.
pub struct AppContext<I: InputReader, C: RepositoryContext> {
    inputs: I,
    context: C,
}

impl<I: InputReader, C: RepositoryContext> AppContext<I, C> {
    pub fn new(inputs: I, context: C) -> Self {
        Self { inputs, context }
    }

    /// Run a fresh single-use loader and keep its validated record.
    pub fn load(&self) -> Result<ConfigurationRecord, AppError> {
        let mut loader = ConfigurationLoader::new(&self.inputs, &self.context);
        loader.load()?;
        Ok(loader.into_record()?)
    }
}
