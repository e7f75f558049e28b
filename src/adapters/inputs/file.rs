use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::configuration::InputError;
use crate::ports::InputReader;

/// Reads action inputs from a TOML file, for running outside the hosting runner.
///
/// ```toml
/// token = "ghp_..."
/// sync-folder = "handbook"
/// sync-deletes = false
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileInputReader {
    values: BTreeMap<String, String>,
}

impl FileInputReader {
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path).map_err(|err| InputError::Unreadable {
            path: path.display().to_string(),
            details: err.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse inputs from TOML `content`. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> Result<Self, InputError> {
        let table: toml::Table = toml::from_str(content).map_err(|err| InputError::Malformed {
            path: origin.to_string(),
            details: err.message().to_string(),
        })?;

        let mut values = BTreeMap::new();
        for (name, value) in table {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Boolean(b) => b.to_string(),
                _ => return Err(InputError::UnsupportedValue { name }),
            };
            values.insert(name, value);
        }
        Ok(Self { values })
    }
}

impl InputReader for FileInputReader {
    fn read(&self, name: &str) -> Result<String, InputError> {
        Ok(self.values.get(name).map(|v| v.trim().to_string()).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    #[test]
    fn reads_string_and_boolean_values() {
        let reader = FileInputReader::parse(
            r#"
token = "ghp_file"
sync-folder = " handbook "
sync-deletes = false
"#,
            "inputs.toml",
        )
        .unwrap();

        assert_eq!(reader.read("token").unwrap(), "ghp_file");
        assert_eq!(reader.read("sync-folder").unwrap(), "handbook");
        assert_eq!(reader.read("sync-deletes").unwrap(), "false");
        assert_eq!(reader.read("conflict-strategy").unwrap(), "");
    }

    #[test]
    fn rejects_non_scalar_values() {
        let err =
            FileInputReader::parse("sync-folder = [\"a\", \"b\"]", "inputs.toml").unwrap_err();
        assert_eq!(err, InputError::UnsupportedValue { name: "sync-folder".into() });
    }

    #[test]
    fn rejects_invalid_toml() {
        let err = FileInputReader::parse("token = ", "inputs.toml").unwrap_err();
        assert!(matches!(err, InputError::Malformed { ref path, .. } if path == "inputs.toml"));
    }

    #[test]
    fn open_reads_file_from_disk() {
        let temp = TempDir::new().unwrap();
        let file = temp.child("inputs.toml");
        file.write_str("token = \"ghp_disk\"\n").unwrap();

        let reader = FileInputReader::open(file.path()).unwrap();
        assert_eq!(reader.read_required("token").unwrap(), "ghp_disk");
    }

    #[test]
    fn open_missing_file_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let err = FileInputReader::open(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
    }
}
