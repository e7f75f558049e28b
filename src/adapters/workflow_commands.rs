//! Runner workflow commands.
//!
//! Masks secrets via `::add-mask::` on stdout and appends step outputs to the
//! file named by `GITHUB_OUTPUT`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

const MULTILINE_DELIMITER: &str = "WIKISYNC_EOF";

/// Whether the process is running inside a GitHub Actions runner.
pub fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Path of the step output file, if the runner provided one.
pub fn step_output_path() -> Option<PathBuf> {
    std::env::var_os("GITHUB_OUTPUT").filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Ask the runner to redact `value` from all subsequent log output.
///
/// Each line is masked separately; empty values are ignored.
pub fn mask_secret(out: &mut impl Write, value: &str) -> std::io::Result<()> {
    for line in value.lines().filter(|line| !line.trim().is_empty()) {
        writeln!(out, "::add-mask::{line}")?;
    }
    Ok(())
}

/// Append `name=value` lines to the step output file at `path`.
///
/// Values containing newlines use the delimiter form. A value with a line equal
/// to the delimiter is rejected before anything is written.
pub fn write_step_outputs(path: &Path, outputs: &[(&str, String)]) -> Result<(), AppError> {
    let output_error = |e: std::io::Error| AppError::StepOutput {
        path: path.display().to_string(),
        details: e.to_string(),
    };

    if let Some((name, _)) =
        outputs.iter().find(|(_, value)| value.lines().any(|line| line == MULTILINE_DELIMITER))
    {
        return Err(AppError::StepOutput {
            path: path.display().to_string(),
            details: format!("value of '{name}' contains the reserved line {MULTILINE_DELIMITER}"),
        });
    }

    let mut file =
        OpenOptions::new().create(true).append(true).open(path).map_err(output_error)?;

    for (name, value) in outputs {
        let written = if value.contains('\n') {
            writeln!(file, "{name}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}")
        } else {
            writeln!(file, "{name}={value}")
        };
        written.map_err(output_error)?;
    }

    Ok(())
}
