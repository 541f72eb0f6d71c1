//! The year sheet: validated inputs plus the derived views a chart needs.

use std::path::Path;

use rand::Rng;

use crate::data::resolve::{Resolution, resolve};
use crate::domain::{DataOrigin, DaySeries, GridCoordinate, WeekLoad, Year, YearOrigin};
use crate::error::SheetError;
use crate::grid::{GridLayout, week_loads};

/// A fully validated sheet.
///
/// Inputs are fixed at construction; there are no setters. Building a sheet
/// either succeeds with a consistent layout or fails without partial output.
#[derive(Debug, Clone)]
pub struct YearSheet {
    series: DaySeries,
    year: Year,
    show_week_load: bool,
    layout: GridLayout,
    data_origin: DataOrigin,
    year_origin: YearOrigin,
}

impl YearSheet {
    /// Resolve inputs (see [`resolve`]) and build the sheet.
    pub fn new<R: Rng + ?Sized>(
        source: Option<&Path>,
        year: Option<i32>,
        show_week_load: bool,
        rng: &mut R,
    ) -> Result<Self, SheetError> {
        Self::from_resolution(resolve(source, year, rng)?, show_week_load)
    }

    pub fn from_resolution(resolution: Resolution, show_week_load: bool) -> Result<Self, SheetError> {
        let data_origin = resolution.data_origin();
        let year_origin = resolution.year_origin();
        let (series, year) = resolution.validate()?;
        let layout = GridLayout::new(&year, series.len())?;

        Ok(Self {
            series,
            year,
            show_week_load,
            layout,
            data_origin,
            year_origin,
        })
    }

    /// Build a sheet from an in-memory series and a declared year.
    pub fn from_series(series: DaySeries, year: i32, show_week_load: bool) -> Result<Self, SheetError> {
        let year = Year::new(year)?;
        if !year.accepts(series.len()) {
            return Err(SheetError::YearMismatch {
                days: series.len(),
                year: year.value(),
            });
        }
        let layout = GridLayout::new(&year, series.len())?;

        Ok(Self {
            series,
            year,
            show_week_load,
            layout,
            data_origin: DataOrigin::InMemory,
            year_origin: YearOrigin::Given,
        })
    }

    pub fn series(&self) -> &DaySeries {
        &self.series
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn show_week_load(&self) -> bool {
        self.show_week_load
    }

    pub fn data_origin(&self) -> &DataOrigin {
        &self.data_origin
    }

    pub fn year_origin(&self) -> YearOrigin {
        self.year_origin
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn week_indices(&self) -> &[u32] {
        self.layout.week_indices()
    }

    pub fn weekday_indices(&self) -> &[u32] {
        self.layout.weekday_indices()
    }

    /// Every day with its cell, in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = (GridCoordinate, f64)> + '_ {
        self.layout.coordinates().zip(self.series.values().iter().copied())
    }

    /// Per-week sums, recomputed on each call.
    pub fn week_loads(&self) -> Vec<WeekLoad> {
        week_loads(self.series.values(), self.layout.week_indices())
    }

    /// Title shown above the heatmap.
    pub fn title(&self) -> String {
        format!("{} Year Sheet", self.year)
    }
}
