pub mod configuration;
pub mod error;

pub use configuration::{
    AccessError, ConfigError, ConfigurationLoader, ConfigurationRecord, ConflictStrategy,
    LoadError, RepositoryIdentity,
};
pub use error::AppError;
