//! API facade for the application.
//!
//! Wires the environment adapters into an [`AppContext`] and runs commands.

use std::io::Write;
use std::path::PathBuf;

use crate::adapters::inputs::{EnvInputReader, FileInputReader, LayeredInputReader};
use crate::adapters::repository_context::{
    FallbackContext, GitHubEnvContext, GitRemoteContext, RepositoryOverride,
};
use crate::app::AppContext;
use crate::app::commands::{check, show};
use crate::domain::configuration::{ConfigError, ConfigSummary, LoadError};
use crate::domain::{AppError, ConfigurationRecord};
use crate::ports::{InputReader, RepositoryContext};

pub use crate::app::commands::check::{CheckOptions, CheckOutcome};

/// Where inputs and repository identity come from.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// TOML inputs file layered under the `INPUT_*` environment.
    pub inputs_file: Option<PathBuf>,
    /// Explicit `owner/repo`, bypassing the runner context.
    pub repository: Option<String>,
    /// Directory used for git remote detection. Defaults to the current directory.
    pub root: Option<PathBuf>,
}

type DynContext = AppContext<Box<dyn InputReader>, Box<dyn RepositoryContext>>;

fn load_error(err: impl Into<ConfigError>) -> AppError {
    AppError::Load(LoadError::from(err.into()))
}

fn input_reader(options: &LoadOptions) -> Result<Box<dyn InputReader>, AppError> {
    match &options.inputs_file {
        Some(path) => {
            let file = FileInputReader::open(path).map_err(load_error)?;
            Ok(Box::new(LayeredInputReader::new(EnvInputReader::new(), file)))
        }
        None => Ok(Box::new(EnvInputReader::new())),
    }
}

fn repository_context(options: &LoadOptions) -> Result<Box<dyn RepositoryContext>, AppError> {
    if let Some(full_name) = &options.repository {
        return Ok(Box::new(RepositoryOverride::new(full_name.as_str())));
    }

    let root = match &options.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    Ok(Box::new(FallbackContext::new(GitHubEnvContext::from_env(), GitRemoteContext::new(root))))
}

/// Build a context from `options`.
pub fn create_context(options: &LoadOptions) -> Result<DynContext, AppError> {
    Ok(AppContext::new(input_reader(options)?, repository_context(options)?))
}

/// Load and validate the configuration described by `options`.
pub fn load(options: &LoadOptions) -> Result<ConfigurationRecord, AppError> {
    create_context(options)?.load()
}

/// Load from the runner environment, falling back to the `origin` remote of the
/// current directory for the repository identity.
pub fn load_from_env() -> Result<ConfigurationRecord, AppError> {
    load(&LoadOptions::default())
}

/// Validate, mask secrets, and publish step outputs.
pub fn check(
    options: &LoadOptions,
    check_options: &CheckOptions,
    out: &mut impl Write,
) -> Result<CheckOutcome, AppError> {
    check::execute(&create_context(options)?, check_options, out)
}

/// Resolve the configuration into its redacted summary.
pub fn show(options: &LoadOptions) -> Result<ConfigSummary, AppError> {
    show::execute(&create_context(options)?)
}
