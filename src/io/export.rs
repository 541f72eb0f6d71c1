//! Output artifacts: the HTML sheet and the optional JSON layout.
//!
//! The JSON export is meant to be easy to consume in notebooks or downstream
//! scripts that want the grid without re-deriving it.

use std::fs::{self, File};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::domain::WeekLoad;
use crate::error::AppError;
use crate::sheet::YearSheet;

/// Serialized form of a sheet's layout.
#[derive(Debug, Serialize)]
pub struct LayoutFile<'a> {
    pub tool: &'static str,
    pub year: i32,
    pub leap: bool,
    pub first_week_days: u32,
    pub last_week_days: u32,
    pub day_values: &'a [f64],
    pub week_index: &'a [u32],
    pub weekday_index: &'a [u32],
    pub week_loads: Vec<WeekLoad>,
}

impl<'a> LayoutFile<'a> {
    pub fn from_sheet(sheet: &'a YearSheet) -> Self {
        Self {
            tool: "year-sheet",
            year: sheet.year().value(),
            leap: sheet.year().is_leap(),
            first_week_days: sheet.layout().first_week_days(),
            last_week_days: sheet.layout().last_week_days(),
            day_values: sheet.series().values(),
            week_index: sheet.week_indices(),
            weekday_index: sheet.weekday_indices(),
            week_loads: sheet.week_loads(),
        }
    }
}

/// Write the rendered HTML page.
pub fn write_sheet_html(path: &Path, html: &str) -> Result<(), AppError> {
    fs::write(path, html)
        .map_err(|e| AppError::new(2, format!("Failed to write sheet '{}': {e}", path.display())))?;
    info!(path = %path.display(), bytes = html.len(), "sheet written");
    Ok(())
}

/// Write the layout JSON file.
pub fn write_layout_json(path: &Path, sheet: &YearSheet) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create layout JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &LayoutFile::from_sheet(sheet))
        .map_err(|e| AppError::new(2, format!("Failed to write layout JSON: {e}")))?;

    info!(path = %path.display(), "layout exported");
    Ok(())
}
