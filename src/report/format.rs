//! Formatted terminal output.
//!
//! We keep formatting code in one place so output changes stay localized.

use std::path::Path;

use crate::domain::{DataOrigin, YearOrigin};
use crate::grid::peak_week;
use crate::sheet::YearSheet;

/// Summary of a resolved sheet, printed after a successful run.
pub fn format_run_summary(sheet: &YearSheet, output: &Path) -> String {
    let year = sheet.year();
    let layout = sheet.layout();
    let mut out = String::new();

    out.push_str("=== year-sheet ===\n");
    out.push_str(&format!(
        "Year: {} ({}, {})\n",
        year,
        if year.is_leap() { "leap" } else { "common" },
        match sheet.year_origin() {
            YearOrigin::Given => "given",
            YearOrigin::Inferred => "inferred from data size",
        }
    ));
    out.push_str(&format!("Data: {}\n", describe_origin(sheet.data_origin())));
    out.push_str(&format!(
        "Days: {} | first week: {} days | last week: {} days\n",
        sheet.series().len(),
        layout.first_week_days(),
        layout.last_week_days(),
    ));

    match (sheet.series().min(), sheet.series().max()) {
        (Some(min), Some(max)) => out.push_str(&format!("Values: [{min:.2}, {max:.2}]\n")),
        _ => out.push_str("Values: none\n"),
    }

    if sheet.show_week_load() {
        if let Some(peak) = peak_week(&sheet.week_loads()) {
            out.push_str(&format!("Peak week: {} (load {:.2})\n", peak.week, peak.load));
        }
    }

    out.push_str(&format!("Output: {}\n", output.display()));
    out
}

fn describe_origin(origin: &DataOrigin) -> String {
    match origin {
        DataOrigin::Loaded(path) => format!("loaded from {}", path.display()),
        DataOrigin::Synthetic => "synthetic".to_string(),
        DataOrigin::InMemory => "in-memory".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DaySeries;

    #[test]
    fn summary_mentions_year_and_boundary_weeks() {
        let mut values = vec![1.0; 365];
        values[100] = 9.0;
        let sheet = YearSheet::from_series(DaySeries::new(values).unwrap(), 2021, true).unwrap();
        let text = format_run_summary(&sheet, Path::new("sheet.html"));

        assert!(text.contains("Year: 2021 (common, given)"));
        assert!(text.contains("first week: 3 days | last week: 5 days"));
        assert!(text.contains("Values: [1.00, 9.00]"));
        assert!(text.contains("Peak week: 14"));
        assert!(text.contains("Output: sheet.html"));
    }

    #[test]
    fn bare_summary_skips_peak_week() {
        let sheet = YearSheet::from_series(DaySeries::new(vec![1.0; 366]).unwrap(), 2020, false).unwrap();
        let text = format_run_summary(&sheet, Path::new("out.html"));
        assert!(!text.contains("Peak week"));
        assert!(text.contains("(leap, given)"));
    }
}
