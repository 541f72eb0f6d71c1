//! Single-file HTML page holding the stacked charts.

use crate::error::AppError;
use crate::plot::chart::{render_load_svg, render_sheet_svg};
use crate::sheet::YearSheet;

/// Render every chart of `sheet`, top to bottom.
///
/// The heatmap loses its week label when the load chart is stacked below it.
pub fn render_charts(sheet: &YearSheet) -> Result<Vec<String>, AppError> {
    if sheet.show_week_load() {
        Ok(vec![render_sheet_svg(sheet, false)?, render_load_svg(sheet)?])
    } else {
        Ok(vec![render_sheet_svg(sheet, true)?])
    }
}

/// Full HTML document for `sheet`.
pub fn render_page(sheet: &YearSheet) -> Result<String, AppError> {
    let charts = render_charts(sheet)?;
    Ok(html_document(&sheet.title(), &charts))
}

fn html_document(title: &str, charts: &[String]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(title)));
    out.push_str("<style>body { margin: 16px; font-family: sans-serif; } .chart { display: block; }</style>\n");
    out.push_str("</head>\n<body>\n");
    for svg in charts {
        out.push_str("<div class=\"chart\">\n");
        out.push_str(svg);
        out.push_str("\n</div>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
