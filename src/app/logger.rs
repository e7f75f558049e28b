//! Logging initialisation via tracing-subscriber.
//!
//! Logs go to stderr so stdout stays free for workflow commands and JSON output.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

pub const DEFAULT_LEVEL: &str = "info";

/// Initialise the global tracing subscriber.
///
/// An explicit `level` wins. Without one, `RUST_LOG` is used, then [`DEFAULT_LEVEL`].
pub fn init(level: Option<&str>) -> Result<(), AppError> {
    let filter = match level {
        Some(level) => {
            parse_level(level)?;
            EnvFilter::try_new(level)
                .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?
        }
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
            .map_err(|e| AppError::Logger(format!("invalid default log level: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// Parse a level name, rejecting anything that is not a standard level.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_levels_parse() {
        for level in ["error", "warn", "info", "debug", "trace", "off"] {
            assert!(parse_level(level).is_ok(), "expected '{level}' to be valid");
        }
    }

    #[test]
    fn unknown_levels_are_rejected() {
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn init_rejects_bad_level_before_installing() {
        let err = init(Some("loud")).unwrap_err();
        assert!(matches!(err, AppError::Logger(msg) if msg.contains("loud")));
    }
}
