//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - resolves and validates the sheet inputs
//! - renders and writes the HTML sheet (plus the optional JSON export)
//! - prints the run summary

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `year-sheet` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is fine; it only supplies defaults such as YEAR_SHEET_OUTPUT.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.sheet_config();
    let run = pipeline::run_sheet(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.sheet, &config.output)
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
