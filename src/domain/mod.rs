//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - validated inputs (`Year`, `DaySeries`)
//! - derived outputs (`GridCoordinate`, `WeekLoad`)
//! - run configuration (`SheetConfig`)

pub mod types;

pub use types::*;
