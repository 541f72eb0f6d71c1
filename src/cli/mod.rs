//! Command-line parsing for the year sheet renderer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! calendar/layout code.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::SheetConfig;

/// Default output path of the rendered sheet.
pub const DEFAULT_OUTPUT: &str = "sheet.html";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "year-sheet", version, about = "Render a year of daily values as a calendar heatmap")]
pub struct Cli {
    /// A text file containing 365 or 366 values (one per line).
    #[arg(short = 's', long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// The year the data belongs to.
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Just draw the year sheet (no week load chart).
    #[arg(short = 'b', long)]
    pub bare: bool,

    /// Where to write the HTML sheet.
    #[arg(short = 'o', long, env = "YEAR_SHEET_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also export the computed layout (indices + week loads) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Random seed for synthetic data (omit for a fresh sheet each run).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log debug details to stderr.
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    pub fn sheet_config(&self) -> SheetConfig {
        SheetConfig {
            source: self.source.clone(),
            year: self.year,
            show_week_load: !self.bare,
            output: self.output.clone(),
            export: self.export.clone(),
            seed: self.seed,
        }
    }
}
