use std::env::{self, VarError};

use crate::domain::configuration::InputError;
use crate::ports::InputReader;

/// Reads action inputs from the `INPUT_<NAME>` variables the runner exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputReader;

impl EnvInputReader {
    pub fn new() -> Self {
        Self
    }
}

/// Environment variable carrying input `name`.
///
/// Spaces become underscores and the name is upper-cased; hyphens are kept,
/// so `sync-folder` is read from `INPUT_SYNC-FOLDER`.
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

impl InputReader for EnvInputReader {
    fn read(&self, name: &str) -> Result<String, InputError> {
        match env::var(input_env_key(name)) {
            Ok(value) => Ok(value.trim().to_string()),
            Err(VarError::NotPresent) => Ok(String::new()),
            Err(VarError::NotUnicode(_)) => Err(InputError::NotUnicode { name: name.to_string() }),
        }
    }
}
