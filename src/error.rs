use std::path::PathBuf;

use thiserror::Error;

/// Failures while resolving, validating or laying out a year sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The source file could not be opened or read.
    #[error("Failed to read source '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token in the source file is not a number.
    #[error("Invalid number '{token}' at line {line}.")]
    Parse { line: usize, token: String },

    /// The series does not hold a full year of values.
    #[error("The file contains less than 365 or more than 366 entries.")]
    Size { found: usize },

    /// The series length does not match the leap-ness of the declared year.
    #[error("Data size and year mismatch.")]
    YearMismatch { days: usize, year: i32 },

    #[error("Year {0} is outside the supported calendar range.")]
    YearOutOfRange(i32),

    /// The week layout does not cover the series. This is a calendar
    /// arithmetic fault, not an input problem.
    #[error("Internal consistency fault: week layout for {year} covers {layout} days, series has {days}.")]
    InternalConsistency { year: i32, layout: usize, days: usize },
}

impl SheetError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SheetError::Read { .. } | SheetError::Parse { .. } => 2,
            SheetError::Size { .. } | SheetError::YearMismatch { .. } | SheetError::YearOutOfRange(_) => 3,
            SheetError::InternalConsistency { .. } => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<SheetError> for AppError {
    fn from(err: SheetError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
