pub mod conflict_strategy;
pub mod error;
pub mod loader;
pub mod record;
pub mod secret;
pub mod summary;

pub use conflict_strategy::ConflictStrategy;
pub use error::{AccessError, ConfigError, ConfigField, ContextError, InputError, LoadError};
pub use loader::{
    ConfigurationLoader, INPUT_CONFLICT_STRATEGY, INPUT_SYNC_DELETES, INPUT_SYNC_FOLDER,
    INPUT_TOKEN, LoaderState, load_configuration,
};
pub use record::{
    ConfigurationRecord, DEFAULT_CONFLICT_STRATEGY, DEFAULT_SYNC_FOLDER, PartialConfig,
    RawInputs, RepositoryIdentity, parse_sync_deletes,
};
pub use secret::{Secret, WikiRemote};
pub use summary::ConfigSummary;
