//! Chart rendering.
//!
//! - palette + value → color binning (`palette`)
//! - heatmap and load bars as SVG via Plotters (`chart`)
//! - the HTML page stacking them (`page`)

pub mod chart;
pub mod page;
pub mod palette;

pub use chart::*;
pub use page::*;
pub use palette::*;
