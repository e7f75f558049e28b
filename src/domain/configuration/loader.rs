//! Configuration loading lifecycle: acquire inputs, resolve context, derive, validate.

use tracing::{debug, info};

use super::{
    AccessError, ConfigError, ConfigField, ConfigurationRecord, ConflictStrategy, InputError,
    LoadError, PartialConfig, RawInputs,
};
use crate::ports::{InputReader, RepositoryContext};

pub const INPUT_TOKEN: &str = "token";
pub const INPUT_SYNC_FOLDER: &str = "sync-folder";
pub const INPUT_CONFLICT_STRATEGY: &str = "conflict-strategy";
pub const INPUT_SYNC_DELETES: &str = "sync-deletes";

/// Load and validate a configuration in one step.
///
/// This is the preferred entry point: the returned record can only exist if
/// validation passed.
pub fn load_configuration(
    inputs: impl InputReader,
    context: impl RepositoryContext,
) -> Result<ConfigurationRecord, LoadError> {
    resolve(&inputs, &context)
}

fn resolve(
    inputs: &impl InputReader,
    context: &impl RepositoryContext,
) -> Result<ConfigurationRecord, LoadError> {
    let raw = read_inputs(inputs)?;
    let identity = context.repository_identity().map_err(ConfigError::from)?;
    debug!(owner = %identity.owner, repo = %identity.repo, "resolved repository identity");

    let record =
        PartialConfig::default().with_inputs(raw).with_identity(identity).derive().validate()?;

    info!("Configuration validated successfully");
    Ok(record)
}

fn read_inputs(inputs: &impl InputReader) -> Result<RawInputs, ConfigError> {
    let token = inputs.read_required(INPUT_TOKEN).map_err(|err| match err {
        InputError::Required { .. } => ConfigError::MissingToken,
        other => ConfigError::Input(other),
    })?;

    Ok(RawInputs {
        token,
        sync_folder: inputs.read(INPUT_SYNC_FOLDER)?,
        conflict_strategy: inputs.read(INPUT_CONFLICT_STRATEGY)?,
        sync_deletes: inputs.read(INPUT_SYNC_DELETES)?,
    })
}

/// Where a [`ConfigurationLoader`] is in its lifecycle.
#[derive(Debug, Clone, Default)]
pub enum LoaderState {
    #[default]
    Unloaded,
    Loaded(ConfigurationRecord),
    /// A load was attempted and failed. The loader cannot be reused.
    Failed,
}

/// Single-use loader exposing guarded accessors over its record.
pub struct ConfigurationLoader<I, C> {
    inputs: I,
    context: C,
    state: LoaderState,
}

impl<I: InputReader, C: RepositoryContext> ConfigurationLoader<I, C> {
    pub fn new(inputs: I, context: C) -> Self {
        Self { inputs, context, state: LoaderState::Unloaded }
    }

    /// Populate and validate the configuration.
    ///
    /// Only the first call does any work; any later call fails with
    /// [`ConfigError::LoaderSpent`].
    pub fn load(&mut self) -> Result<(), LoadError> {
        if !matches!(self.state, LoaderState::Unloaded) {
            return Err(ConfigError::LoaderSpent.into());
        }

        match resolve(&self.inputs, &self.context) {
            Ok(record) => {
                self.state = LoaderState::Loaded(record);
                Ok(())
            }
            Err(err) => {
                self.state = LoaderState::Failed;
                Err(err)
            }
        }
    }

    pub fn state(&self) -> &LoaderState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoaderState::Loaded(_))
    }

    fn field<'a, T>(
        &'a self,
        field: ConfigField,
        get: impl FnOnce(&'a ConfigurationRecord) -> T,
    ) -> Result<T, AccessError> {
        match &self.state {
            LoaderState::Loaded(record) => Ok(get(record)),
            LoaderState::Unloaded | LoaderState::Failed => Err(AccessError::NotLoaded(field)),
        }
    }

    pub fn token(&self) -> Result<&str, AccessError> {
        self.field(ConfigField::Token, ConfigurationRecord::token)
    }

    pub fn repository(&self) -> Result<&str, AccessError> {
        self.field(ConfigField::Repository, ConfigurationRecord::repository)
    }

    pub fn owner(&self) -> Result<&str, AccessError> {
        self.field(ConfigField::Owner, ConfigurationRecord::owner)
    }

    pub fn repo(&self) -> Result<&str, AccessError> {
        self.field(ConfigField::Repo, ConfigurationRecord::repo)
    }

    pub fn sync_folder(&self) -> Result<&str, AccessError> {
        self.field(ConfigField::SyncFolder, ConfigurationRecord::sync_folder)
    }

    pub fn wiki_repo(&self) -> Result<&str, AccessError> {
        self.field(ConfigField::WikiRepo, ConfigurationRecord::wiki_repo)
    }

    pub fn conflict_strategy(&self) -> Result<ConflictStrategy, AccessError> {
        self.field(ConfigField::ConflictStrategy, ConfigurationRecord::conflict_strategy)
    }

    /// Defaults to `true` when nothing is loaded.
    pub fn sync_deletes(&self) -> bool {
        match &self.state {
            LoaderState::Loaded(record) => record.sync_deletes(),
            LoaderState::Unloaded | LoaderState::Failed => true,
        }
    }

    /// The whole record, or [`AccessError::Incomplete`] before a successful load.
    pub fn get_config(&self) -> Result<&ConfigurationRecord, AccessError> {
        match &self.state {
            LoaderState::Loaded(record) => Ok(record),
            LoaderState::Unloaded | LoaderState::Failed => Err(AccessError::Incomplete),
        }
    }

    /// Consume the loader, keeping only the validated record.
    pub fn into_record(self) -> Result<ConfigurationRecord, AccessError> {
        match self.state {
            LoaderState::Loaded(record) => Ok(record),
            LoaderState::Unloaded | LoaderState::Failed => Err(AccessError::Incomplete),
        }
    }
}
