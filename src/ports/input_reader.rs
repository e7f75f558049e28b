use crate::domain::configuration::InputError;

/// Port for reading named action inputs (`token`, `sync-folder`, ...).
pub trait InputReader {
    /// Read an input value, trimmed. Unset inputs read as the empty string.
    fn read(&self, name: &str) -> Result<String, InputError>;

    /// Read an input that must be present and non-empty.
    fn read_required(&self, name: &str) -> Result<String, InputError> {
        let value = self.read(name)?;
        if value.is_empty() {
            return Err(InputError::Required { name: name.to_string() });
        }
        Ok(value)
    }
}

impl<T: InputReader + ?Sized> InputReader for &T {
    fn read(&self, name: &str) -> Result<String, InputError> {
        (**self).read(name)
    }
}

impl<T: InputReader + ?Sized> InputReader for Box<T> {
    fn read(&self, name: &str) -> Result<String, InputError> {
        (**self).read(name)
    }
}
