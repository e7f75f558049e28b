use crate::domain::configuration::InputError;
use crate::ports::InputReader;

/// Reads from `primary`, falling back to `fallback` when the primary value is empty.
#[derive(Debug, Clone)]
pub struct LayeredInputReader<P, F> {
    primary: P,
    fallback: F,
}

impl<P: InputReader, F: InputReader> LayeredInputReader<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: InputReader, F: InputReader> InputReader for LayeredInputReader<P, F> {
    fn read(&self, name: &str) -> Result<String, InputError> {
        let value = self.primary.read(name)?;
        if !value.is_empty() {
            return Ok(value);
        }
        self.fallback.read(name)
    }
}
