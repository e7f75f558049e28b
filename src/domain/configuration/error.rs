use std::fmt;

use thiserror::Error;

use super::ConflictStrategy;

/// Failure to read a raw action input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A required input was unset or empty.
    #[error("Input required and not supplied: {name}")]
    Required { name: String },

    /// The inputs file could not be read.
    #[error("Failed to read inputs file {path}: {details}")]
    Unreadable { path: String, details: String },

    /// The inputs file is not valid TOML.
    #[error("Failed to parse inputs file {path}: {details}")]
    Malformed { path: String, details: String },

    /// An input was present but not a scalar value.
    #[error("Input '{name}' must be a string or boolean")]
    UnsupportedValue { name: String },

    #[error("Input '{name}' is not valid UTF-8")]
    NotUnicode { name: String },
}

/// Failure to resolve the repository identity from the execution context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// Neither `GITHUB_REPOSITORY` nor an event payload identified the repository.
    #[error("context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'")]
    MissingRepository,

    /// An `owner/repo` value did not have exactly two non-empty segments.
    #[error("Malformed repository '{0}': expected 'owner/repo'")]
    MalformedRepository(String),

    /// The event payload could not be read or lacks repository fields.
    #[error("Failed to read event payload {path}: {details}")]
    EventPayload { path: String, details: String },

    /// A git operation failed while inspecting the local repository.
    #[error("Git error running '{command}': {details}")]
    Git { command: String, details: String },

    /// The `origin` remote does not point at github.com.
    #[error("Remote '{0}' is not a GitHub repository URL")]
    UnsupportedRemote(String),
}

/// Every way a configuration load can fail.
///
/// The variants are the closed set callers match on; the messages are for
/// operators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("GitHub token is required")]
    MissingToken,

    #[error("Repository information is missing")]
    MissingRepositoryInfo,

    #[error(
        "Invalid conflict strategy: {value}. Valid options: {}",
        ConflictStrategy::valid_options()
    )]
    InvalidConflictStrategy { value: String },

    #[error("Sync folder path should be relative, not absolute")]
    AbsoluteSyncFolder { path: String },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Context(#[from] ContextError),

    /// `load()` was called on a loader that already loaded or failed.
    #[error("Configuration loader has already been used; create a new loader")]
    LoaderSpent,
}

/// The single failure kind returned by `load()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Configuration loading failed: {source}")]
pub struct LoadError {
    source: ConfigError,
}

impl LoadError {
    /// The underlying cause, for callers that branch on failure kind.
    pub fn kind(&self) -> &ConfigError {
        &self.source
    }

    pub fn into_kind(self) -> ConfigError {
        self.source
    }
}

impl From<ConfigError> for LoadError {
    fn from(source: ConfigError) -> Self {
        Self { source }
    }
}

/// Fields guarded by the loader's accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Token,
    Repository,
    Owner,
    Repo,
    SyncFolder,
    WikiRepo,
    ConflictStrategy,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigField::Token => "Token",
            ConfigField::Repository => "Repository",
            ConfigField::Owner => "Owner",
            ConfigField::Repo => "Repo",
            ConfigField::SyncFolder => "Sync folder",
            ConfigField::WikiRepo => "Wiki repo",
            ConfigField::ConflictStrategy => "Conflict strategy",
        };
        f.write_str(label)
    }
}

/// Access to configuration values before a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("{0} not loaded")]
    NotLoaded(ConfigField),

    #[error("Configuration not fully loaded")]
    Incomplete,
}
