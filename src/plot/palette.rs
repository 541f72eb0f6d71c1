//! Colors and the value → color mapping of the heatmap.

use plotters::style::RGBColor;

/// Light to dark green, low values first.
pub const GREENS: [RGBColor; 3] = [
    RGBColor(0xe5, 0xf5, 0xe0),
    RGBColor(0xa1, 0xd9, 0x9b),
    RGBColor(0x31, 0xa3, 0x54),
];
/// Outline of every heatmap cell.
pub const CELL_OUTLINE: RGBColor = RGBColor(0x00, 0x6d, 0x2c);
/// Fill of the load bars (drawn at half opacity).
pub const BAR_FILL: RGBColor = RGBColor(0x31, 0xa3, 0x54);
/// Cells whose value is NaN.
pub const MISSING: RGBColor = RGBColor(0xff, 0xff, 0xff);

/// Linear binning of `[low, high]` onto a fixed palette.
///
/// Values below `low` take the first color, values above `high` the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub low: f64,
    pub high: f64,
}

impl ColorScale {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Index into `GREENS`, or `None` for NaN.
    pub fn bin(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let n = GREENS.len();
        let span = self.high - self.low;
        if !(span > 0.0) || value <= self.low {
            return Some(0);
        }
        if value >= self.high {
            return Some(n - 1);
        }
        let idx = ((value - self.low) / span * n as f64).floor() as usize;
        Some(idx.min(n - 1))
    }

    pub fn color(&self, value: f64) -> RGBColor {
        self.bin(value).map_or(MISSING, |idx| GREENS[idx])
    }
}

/// Hex notation (`#rrggbb`) for embedding in HTML.
pub fn hex(color: RGBColor) -> String {
    let RGBColor(r, g, b) = color;
    format!("#{r:02x}{g:02x}{b:02x}")
}
