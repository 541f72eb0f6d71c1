//! Plotters-powered SVG charts for the year sheet.
//!
//! Both charts share the same week axis (`-1..55`) so they line up when
//! stacked. Every chart is rendered into an in-memory SVG string; writing it
//! to disk is left to `io::export`.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::AppError;
use crate::plot::palette::{BAR_FILL, CELL_OUTLINE, ColorScale};
use crate::sheet::YearSheet;

/// Pixel size of each chart.
pub const CHART_SIZE: (u32, u32) = (950, 200);

const WEEK_AXIS: std::ops::Range<f64> = -1.0..55.0;
const DAY_AXIS: std::ops::Range<f64> = 0.0..8.0;
/// Labelled week columns.
pub const WEEK_TICKS: [u32; 11] = [1, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50];
/// Labelled weekday rows.
pub const DAY_TICKS: [u32; 7] = [1, 2, 3, 4, 5, 6, 7];

const CELL_HALF: f64 = 0.4;
const BAR_HALF: f64 = 0.35;
const BAR_ALPHA: f64 = 0.5;

type ChartResult = Result<(), Box<dyn Error>>;

/// Color scale of the heatmap: zero up to the series maximum.
pub fn sheet_color_scale(sheet: &YearSheet) -> ColorScale {
    ColorScale::new(0.0, sheet.series().max().unwrap_or(0.0))
}

/// Render the heatmap. `x_label` is dropped when a chart is stacked below it.
pub fn render_sheet_svg(sheet: &YearSheet, x_label: bool) -> Result<String, AppError> {
    render_svg(|root| draw_sheet(root, sheet, x_label))
        .map_err(|e| AppError::new(4, format!("Failed to draw year sheet: {e}")))
}

/// Render the weekly load bar chart.
pub fn render_load_svg(sheet: &YearSheet) -> Result<String, AppError> {
    render_svg(|root| draw_load(root, sheet))
        .map_err(|e| AppError::new(4, format!("Failed to draw week load chart: {e}")))
}

fn render_svg<F>(draw: F) -> Result<String, Box<dyn Error>>
where
    F: for<'a, 'b> FnOnce(&'a DrawingArea<SVGBackend<'b>, Shift>) -> ChartResult,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }
    Ok(svg)
}

fn draw_sheet(root: &DrawingArea<SVGBackend<'_>, Shift>, sheet: &YearSheet, x_label: bool) -> ChartResult {
    let mut chart = ChartBuilder::on(root)
        .caption(sheet.title(), ("sans-serif", 16))
        .margin(8)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 30)
        .build_cartesian_2d(WEEK_AXIS, DAY_AXIS)?;

    let week_label = |v: &f64| tick_label(*v, &WEEK_TICKS);
    let day_label = |v: &f64| tick_label(*v, &DAY_TICKS);
    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .disable_y_mesh()
        .y_desc("days")
        .x_labels(57)
        .y_labels(9)
        .x_label_formatter(&week_label)
        .y_label_formatter(&day_label);
    if x_label {
        mesh.x_desc("weeks");
    }
    mesh.draw()?;

    let scale = sheet_color_scale(sheet);
    chart.draw_series(sheet.cells().map(|(cell, value)| {
        let (x, y) = (f64::from(cell.week), f64::from(cell.weekday));
        Rectangle::new(
            [(x - CELL_HALF, y - CELL_HALF), (x + CELL_HALF, y + CELL_HALF)],
            scale.color(value).filled(),
        )
    }))?;
    chart.draw_series(sheet.cells().map(|(cell, _)| {
        let (x, y) = (f64::from(cell.week), f64::from(cell.weekday));
        Rectangle::new(
            [(x - CELL_HALF, y - CELL_HALF), (x + CELL_HALF, y + CELL_HALF)],
            CELL_OUTLINE.stroke_width(1),
        )
    }))?;

    Ok(())
}

fn draw_load(root: &DrawingArea<SVGBackend<'_>, Shift>, sheet: &YearSheet) -> ChartResult {
    let loads = sheet.week_loads();
    let (y0, y1) = load_axis(loads.iter().map(|w| w.load));

    let mut chart = ChartBuilder::on(root)
        .margin(8)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 30)
        .build_cartesian_2d(WEEK_AXIS, y0..y1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("weeks")
        .y_desc("Load")
        .x_labels(57)
        .y_labels(9)
        .x_label_formatter(&|v| tick_label(*v, &WEEK_TICKS))
        .y_label_formatter(&|v| format_load(*v))
        .draw()?;

    chart.draw_series(loads.iter().map(|w| {
        let x = f64::from(w.week);
        Rectangle::new([(x - BAR_HALF, 0.0), (x + BAR_HALF, w.load)], BAR_FILL.mix(BAR_ALPHA).filled())
    }))?;

    Ok(())
}

/// Vertical range of the load chart: always includes zero, padded by 10%.
pub fn load_axis(loads: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = loads
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if hi - lo <= 0.0 {
        return (0.0, 1.0);
    }
    let pad = (hi - lo) * 0.1;
    let bottom = if lo < 0.0 { lo - pad } else { 0.0 };
    (bottom, hi + pad)
}

/// Label for integral positions listed in `ticks`; empty otherwise.
pub fn tick_label(v: f64, ticks: &[u32]) -> String {
    let rounded = v.round();
    if (v - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    let n = rounded as u32;
    if ticks.contains(&n) { n.to_string() } else { String::new() }
}

fn format_load(v: f64) -> String {
    if v.fract().abs() < 1e-9 { format!("{v:.0}") } else { format!("{v:.1}") }
}
