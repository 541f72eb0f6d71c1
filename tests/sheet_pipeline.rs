use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

use year_sheet::app::pipeline::run_sheet;
use year_sheet::domain::{DataOrigin, SheetConfig, YearOrigin};
use year_sheet::{SheetError, YearSheet};

fn source_file(values: &[f64]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    for v in values {
        writeln!(file, "{v}").expect("write value");
    }
    file.flush().expect("flush");
    file
}

fn known_values(n: usize) -> Vec<f64> {
    let mut values: Vec<f64> = (0..n).map(|d| (d % 13) as f64 * 0.5).collect();
    values[0] = 3.26;
    values
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2021)
}

fn config(dir: &Path, source: Option<PathBuf>, year: Option<i32>, bare: bool) -> SheetConfig {
    SheetConfig {
        source,
        year,
        show_week_load: !bare,
        output: dir.join("sheet.html"),
        export: None,
        seed: Some(7),
    }
}

#[test]
fn loaded_file_round_trips_in_order() {
    let values = known_values(365);
    let file = source_file(&values);

    let sheet = YearSheet::new(Some(file.path()), None, true, &mut rng()).unwrap();
    assert_eq!(sheet.series().values(), values.as_slice());
    assert_eq!(sheet.series().values()[0], 3.26);
    assert_eq!(sheet.year().value(), 2021);
    assert_eq!(sheet.year_origin(), YearOrigin::Inferred);
    assert_eq!(sheet.data_origin(), &DataOrigin::Loaded(file.path().to_path_buf()));
    assert_eq!(sheet.week_indices()[0], 0);
}

#[test]
fn loaded_file_with_declared_year() {
    let file = source_file(&known_values(365));
    let sheet = YearSheet::new(Some(file.path()), Some(2019), false, &mut rng()).unwrap();
    assert_eq!(sheet.year().value(), 2019);
    assert_eq!(sheet.year_origin(), YearOrigin::Given);
    assert!(!sheet.show_week_load());
}

#[test]
fn leap_sized_file_infers_2020() {
    let file = source_file(&known_values(366));
    let sheet = YearSheet::new(Some(file.path()), None, true, &mut rng()).unwrap();
    assert_eq!(sheet.year().value(), 2020);
    assert_eq!(sheet.weekday_indices().len(), 366);
}

#[test]
fn wrong_entry_counts_are_rejected() {
    for n in [364, 367] {
        let file = source_file(&known_values(n));
        let err = YearSheet::new(Some(file.path()), None, true, &mut rng()).unwrap_err();
        assert!(matches!(err, SheetError::Size { found } if found == n));
        assert_eq!(err.to_string(), "The file contains less than 365 or more than 366 entries.");
    }
}

#[test]
fn size_and_year_must_agree() {
    let leap = source_file(&known_values(366));
    let err = YearSheet::new(Some(leap.path()), Some(2019), true, &mut rng()).unwrap_err();
    assert_eq!(err.to_string(), "Data size and year mismatch.");

    let common = source_file(&known_values(365));
    let err = YearSheet::new(Some(common.path()), Some(2020), true, &mut rng()).unwrap_err();
    assert!(matches!(err, SheetError::YearMismatch { days: 365, year: 2020 }));
}

#[test]
fn non_numeric_file_is_a_parse_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "1.0\nnot-a-number").expect("write");
    file.flush().expect("flush");

    let err = YearSheet::new(Some(file.path()), None, true, &mut rng()).unwrap_err();
    assert!(matches!(err, SheetError::Parse { line: 2, .. }));
}

#[test]
fn synthetic_sheets_are_non_negative_with_zero_minimum() {
    for year in [None, Some(2020), Some(2023)] {
        let sheet = YearSheet::new(None, year, true, &mut rng()).unwrap();
        assert_eq!(sheet.series().min(), Some(0.0));
        assert!(sheet.series().values().iter().all(|&v| v >= 0.0));
        assert_eq!(sheet.series().len(), sheet.year().day_count());
    }
}

#[test]
fn pipeline_writes_stacked_charts() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_sheet(&config(dir.path(), None, None, false)).unwrap();

    let html = fs::read_to_string(dir.path().join("sheet.html")).unwrap();
    assert_eq!(html, run.html);
    assert_eq!(html.matches("<svg").count(), 2);
    assert!(html.contains("2021 Year Sheet"));
}

#[test]
fn bare_pipeline_writes_single_chart() {
    let dir = tempfile::tempdir().unwrap();
    run_sheet(&config(dir.path(), None, Some(2020), true)).unwrap();

    let html = fs::read_to_string(dir.path().join("sheet.html")).unwrap();
    assert_eq!(html.matches("<svg").count(), 1);
    assert!(html.contains("2020 Year Sheet"));
}

#[test]
fn pipeline_exports_layout_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let file = source_file(&vec![1.0; 365]);
    let mut config = config(dir.path(), Some(file.path().to_path_buf()), Some(2021), false);
    config.export = Some(dir.path().join("layout.json"));

    run_sheet(&config).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("layout.json")).unwrap()).unwrap();
    let loads = json["week_loads"].as_array().unwrap();
    assert_eq!(loads.len(), 53);
    assert_eq!(loads[0]["load"], 3.0);
    assert_eq!(loads[26]["load"], 7.0);
    assert_eq!(loads[52]["load"], 5.0);
}

#[test]
fn failed_validation_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let file = source_file(&known_values(366));
    let err = run_sheet(&config(dir.path(), Some(file.path().to_path_buf()), Some(2019), false)).unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert!(!dir.path().join("sheet.html").exists());
}

#[test]
fn same_seed_renders_the_same_page() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let first = run_sheet(&config(a.path(), None, None, false)).unwrap();
    let second = run_sheet(&config(b.path(), None, None, false)).unwrap();
    assert_eq!(first.sheet.series(), second.sheet.series());
}
