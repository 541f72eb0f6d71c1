//! Shared sheet pipeline.
//!
//! resolve inputs -> validate -> lay out -> render -> write
//!
//! Kept apart from `app::run` so it can be driven from tests without parsing
//! argv or touching the global logger.

use crate::data::sample::sample_rng;
use crate::domain::SheetConfig;
use crate::error::AppError;
use crate::io::export::{write_layout_json, write_sheet_html};
use crate::plot::page::render_page;
use crate::sheet::YearSheet;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub sheet: YearSheet,
    pub html: String,
}

/// Execute the full pipeline and write every requested artifact.
pub fn run_sheet(config: &SheetConfig) -> Result<RunOutput, AppError> {
    let mut rng = sample_rng(config.seed);
    let sheet = YearSheet::new(config.source.as_deref(), config.year, config.show_week_load, &mut rng)?;

    let html = render_page(&sheet)?;
    write_sheet_html(&config.output, &html)?;

    if let Some(path) = &config.export {
        write_layout_json(path, &sheet)?;
    }

    Ok(RunOutput { sheet, html })
}
