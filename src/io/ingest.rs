//! Plain-text series ingest.
//!
//! A source file is a flat list of numbers separated by whitespace, normally
//! one value per line. `#` starts a comment that runs to the end of the line,
//! and blank lines are ignored.
//!
//! Parsing is strict: a single bad token rejects the whole file, since a
//! skipped day would shift every following day into the wrong cell.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::DaySeries;
use crate::error::SheetError;

/// Read and validate a day series from `path`.
pub fn load_day_series(path: &Path) -> Result<DaySeries, SheetError> {
    let text = fs::read_to_string(path).map_err(|source| SheetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let values = parse_values(&text)?;
    debug!(path = %path.display(), values = values.len(), "source parsed");
    DaySeries::new(values)
}

/// Parse every numeric token in `text`.
pub fn parse_values(text: &str) -> Result<Vec<f64>, SheetError> {
    let mut values = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| SheetError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

fn strip_comment(line: &str) -> &str {
    // Excel and other tools sometimes emit UTF-8 files with a BOM prefix.
    let line = line.trim_start_matches('\u{feff}');
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_value_per_line() {
        let values = parse_values("3.26\n1\n-0.5\n").unwrap();
        assert_eq!(values, vec![3.26, 1.0, -0.5]);
    }

    #[test]
    fn accepts_mixed_whitespace_and_comments() {
        let values = parse_values("# daily load\n1 2\t3\n\n4 # trailing\n").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn nan_tokens_are_numbers() {
        let values = parse_values("nan\n1.5\n").unwrap();
        assert!(values[0].is_nan());
    }

    #[test]
    fn reports_line_of_bad_token() {
        let err = parse_values("1\n2\nabc\n").unwrap_err();
        assert!(matches!(err, SheetError::Parse { line: 3, ref token } if token == "abc"));
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(parse_values("\u{feff}7\n").unwrap(), vec![7.0]);
    }
}
