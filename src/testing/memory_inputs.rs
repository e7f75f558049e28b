use std::collections::HashMap;

use crate::domain::configuration::InputError;
use crate::ports::InputReader;

/// In-memory input reader. Unknown names read as empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryInputs {
    values: HashMap<String, String>,
    failure: Option<InputError>,
}

impl MemoryInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    /// Make every read fail with `error`.
    pub fn failing(mut self, error: InputError) -> Self {
        self.failure = Some(error);
        self
    }
}

impl InputReader for MemoryInputs {
    fn read(&self, name: &str) -> Result<String, InputError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.values.get(name).map(|v| v.trim().to_string()).unwrap_or_default())
    }
}
