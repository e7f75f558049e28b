//! CLI Adapter.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, CheckOptions, LoadOptions};
use crate::app::commands::show;
use crate::app::logger;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "wikisync")]
#[command(version)]
#[command(
    about = "Load and validate the configuration for syncing a docs folder with a GitHub wiki",
    long_about = None
)]
struct Cli {
    /// TOML file with action inputs; INPUT_* environment variables take precedence
    #[arg(long, global = true, value_name = "FILE")]
    inputs: Option<PathBuf>,
    /// Repository as owner/repo, overriding the runner context
    #[arg(long, global = true, value_name = "OWNER/REPO")]
    repository: Option<String>,
    /// Log level (error, warn, info, debug, trace); RUST_LOG applies when omitted
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration, mask secrets and publish step outputs
    #[clap(visible_alias = "c")]
    Check {
        /// Emit secret masking commands even outside a runner
        #[arg(long)]
        mask: bool,
    },
    /// Print the resolved configuration with secrets redacted
    #[clap(visible_alias = "s")]
    Show {
        /// Print compact single-line JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.log_level.as_deref()) {
        exit_with(e);
    }

    let options = LoadOptions { inputs_file: cli.inputs, repository: cli.repository, root: None };

    let result = match cli.command {
        Commands::Check { mask } => run_check(&options, mask),
        Commands::Show { json } => run_show(&options, json),
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

fn exit_with(e: AppError) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(e.exit_code());
}

fn run_check(options: &LoadOptions, force_mask: bool) -> Result<(), AppError> {
    let mut check_options = CheckOptions::from_env();
    check_options.mask_secrets |= force_mask;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = api::check(options, &check_options, &mut out)?;

    writeln!(out, "✅ Configuration valid for {}", outcome.summary.repository)?;
    Ok(())
}

fn run_show(options: &LoadOptions, json: bool) -> Result<(), AppError> {
    let summary = api::show(options)?;
    println!("{}", show::render(&summary, json)?);
    Ok(())
}
