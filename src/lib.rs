//! wikisync: load, normalize and validate the configuration for syncing a
//! documentation folder with a GitHub wiki.
//!
//! The validated [`ConfigurationRecord`] is the only thing downstream sync
//! steps receive. It can only be obtained through a successful load.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckOptions, CheckOutcome, LoadOptions, check, create_context, load, load_from_env, show,
};
pub use app::AppContext;
pub use domain::configuration::{
    AccessError, ConfigError, ConfigField, ConfigSummary, ConfigurationLoader, ConfigurationRecord,
    ConflictStrategy, ContextError, InputError, LoadError, LoaderState, RepositoryIdentity,
    load_configuration,
};
pub use domain::AppError;
