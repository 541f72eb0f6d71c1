//! Sheet geometry.
//!
//! Responsibilities:
//!
//! - place every day of a year on a (week, weekday) grid
//! - aggregate day values into per-week loads

pub mod layout;
pub mod load;

pub use layout::*;
pub use load::*;
