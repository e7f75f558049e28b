//! `check`: validate the configuration and hand it to later workflow steps.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::adapters::workflow_commands::{
    mask_secret, running_in_actions, step_output_path, write_step_outputs,
};
use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::configuration::ConfigSummary;
use crate::ports::{InputReader, RepositoryContext};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Emit `::add-mask::` for the token and the wiki remote.
    pub mask_secrets: bool,
    /// Step output file to append to.
    pub step_output: Option<PathBuf>,
}

impl CheckOptions {
    /// Options matching the current runner environment.
    pub fn from_env() -> Self {
        Self { mask_secrets: running_in_actions(), step_output: step_output_path() }
    }
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub summary: ConfigSummary,
    pub outputs_written: bool,
}

pub fn execute<I: InputReader, C: RepositoryContext>(
    ctx: &AppContext<I, C>,
    options: &CheckOptions,
    out: &mut impl Write,
) -> Result<CheckOutcome, AppError> {
    let record = ctx.load()?;

    if options.mask_secrets {
        mask_secret(out, record.token())?;
        mask_secret(out, record.wiki_repo())?;
    }

    let summary = ConfigSummary::from(&record);
    if let Some(path) = &options.step_output {
        write_step_outputs(path, &summary.step_outputs())?;
        info!(path = %path.display(), "wrote step outputs");
    }

    Ok(CheckOutcome { summary, outputs_written: options.step_output.is_some() })
}
