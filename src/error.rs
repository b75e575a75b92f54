//! Error types for the attrition dashboard.
//!
//! Loading failures are fatal at startup; export failures are reported to
//! the user and leave the session usable.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The data file could not be opened or read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the CSV header.
    #[error("CSV is missing required column '{column}'")]
    MissingColumn { column: String },

    /// A data row could not be parsed into an employee record.
    #[error("CSV row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    /// Generic CSV reader/writer failure (malformed quoting, bad UTF-8 ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing an export (CSV, report) failed.
    #[error("Export failed: {message}")]
    Export { message: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_names_the_column() {
        let err = DashboardError::MissingColumn {
            column: "Attrition".to_string(),
        };
        assert_eq!(err.to_string(), "CSV is missing required column 'Attrition'");
    }

    #[test]
    fn invalid_row_displays_row_and_message() {
        let err = DashboardError::InvalidRow {
            row: 12,
            message: "field 'Age': invalid digit".to_string(),
        };
        assert_eq!(err.to_string(), "CSV row 12: field 'Age': invalid digit");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;
        let err = DashboardError::Io {
            path: PathBuf::from("/missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("Failed to read '/missing.csv'"));
        assert!(err.source().is_some());
    }
}
