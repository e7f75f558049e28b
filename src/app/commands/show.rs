//! `show`: print the resolved configuration with secrets redacted.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::configuration::ConfigSummary;
use crate::ports::{InputReader, RepositoryContext};

pub fn execute<I: InputReader, C: RepositoryContext>(
    ctx: &AppContext<I, C>,
) -> Result<ConfigSummary, AppError> {
    let record = ctx.load()?;
    Ok(ConfigSummary::from(&record))
}

/// Render as aligned `key: value` lines, or compact single-line JSON.
pub fn render(summary: &ConfigSummary, json: bool) -> Result<String, AppError> {
    if json {
        return serde_json::to_string(summary).map_err(|e| AppError::Serialization(e.to_string()));
    }

    let rows = [
        ("repository", summary.repository.clone()),
        ("sync-folder", summary.sync_folder.clone()),
        ("conflict-strategy", summary.conflict_strategy.to_string()),
        ("sync-deletes", summary.sync_deletes.to_string()),
        ("wiki-repo", summary.wiki_repo.clone()),
    ];
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1;

    Ok(rows
        .iter()
        .map(|(key, value)| format!("{:<width$} {}", format!("{key}:"), value))
        .collect::<Vec<_>>()
        .join("\n"))
}
