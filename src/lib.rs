//! `year-sheet` library crate.
//!
//! The binary (`year-sheet`) is a thin wrapper around this library so that:
//!
//! - the calendar layout is testable without spawning processes
//! - other tools can build a `YearSheet` from in-memory data and reuse the charts

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod grid;
pub mod io;
pub mod plot;
pub mod report;
pub mod sheet;

pub use error::{AppError, SheetError};
pub use sheet::YearSheet;
