//! Resolve the (series, year) pair a sheet is drawn from.
//!
//! The caller may supply a source file, a year, both or neither. Each
//! combination maps to one `Resolution` variant, and every variant is checked
//! before it yields the common `(DaySeries, Year)` output.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info};

use crate::data::sample::generate_day_series;
use crate::domain::{COMMON_YEAR_DAYS, DataOrigin, DaySeries, Year, YearOrigin};
use crate::error::SheetError;
use crate::io::ingest::load_day_series;

/// How the inputs of a sheet were obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Series loaded from a file; year picked from its length.
    LoadedInferred { path: PathBuf, series: DaySeries },
    /// Series loaded from a file; year declared by the caller.
    LoadedGiven { path: PathBuf, series: DaySeries, year: Year },
    /// Synthetic series sized for a declared year.
    SyntheticGiven { series: DaySeries, year: Year },
    /// Synthetic common-year series with the default year.
    SyntheticDefault { series: DaySeries },
}

/// Pick the resolution variant for the supplied inputs.
///
/// Reads the source file when one is given; draws synthetic values from `rng`
/// otherwise. Loaded series are already size-checked; year consistency is
/// checked by [`Resolution::validate`].
pub fn resolve<R: Rng + ?Sized>(
    source: Option<&Path>,
    year: Option<i32>,
    rng: &mut R,
) -> Result<Resolution, SheetError> {
    let resolution = match (source, year) {
        (None, None) => Resolution::SyntheticDefault {
            series: generate_day_series(COMMON_YEAR_DAYS, rng)?,
        },
        (Some(path), None) => Resolution::LoadedInferred {
            path: path.to_path_buf(),
            series: load_day_series(path)?,
        },
        (None, Some(value)) => {
            let year = Year::new(value)?;
            Resolution::SyntheticGiven {
                series: generate_day_series(year.day_count(), rng)?,
                year,
            }
        }
        (Some(path), Some(value)) => Resolution::LoadedGiven {
            path: path.to_path_buf(),
            series: load_day_series(path)?,
            year: Year::new(value)?,
        },
    };
    debug!(kind = resolution.kind(), "inputs resolved");
    Ok(resolution)
}

impl Resolution {
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::LoadedInferred { .. } => "loaded+inferred-year",
            Resolution::LoadedGiven { .. } => "loaded+given-year",
            Resolution::SyntheticGiven { .. } => "synthetic+given-year",
            Resolution::SyntheticDefault { .. } => "synthetic+default-year",
        }
    }

    pub fn data_origin(&self) -> DataOrigin {
        match self {
            Resolution::LoadedInferred { path, .. } | Resolution::LoadedGiven { path, .. } => {
                DataOrigin::Loaded(path.clone())
            }
            Resolution::SyntheticGiven { .. } | Resolution::SyntheticDefault { .. } => DataOrigin::Synthetic,
        }
    }

    pub fn year_origin(&self) -> YearOrigin {
        match self {
            Resolution::LoadedGiven { .. } | Resolution::SyntheticGiven { .. } => YearOrigin::Given,
            Resolution::LoadedInferred { .. } | Resolution::SyntheticDefault { .. } => YearOrigin::Inferred,
        }
    }

    /// Check the variant and return the common `(series, year)` pair.
    pub fn validate(self) -> Result<(DaySeries, Year), SheetError> {
        let (series, year) = match self {
            Resolution::LoadedInferred { series, .. } | Resolution::SyntheticDefault { series } => {
                let year = Year::inferred_from(&series)?;
                (series, year)
            }
            Resolution::LoadedGiven { series, year, .. } | Resolution::SyntheticGiven { series, year } => {
                (series, year)
            }
        };

        if !year.accepts(series.len()) {
            return Err(SheetError::YearMismatch {
                days: series.len(),
                year: year.value(),
            });
        }

        info!(year = year.value(), days = series.len(), "sheet inputs validated");
        Ok((series, year))
    }
}
