//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a cleaned table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output extension has no writer.
    #[error("unsupported output format '{extension}' for {path} (use .csv or .xlsx)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Output file or its directory could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook generation failed.
    #[error("failed to write workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },
}

impl OutputError {
    /// Category name reported to the user.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "UnsupportedFormatError",
            Self::Write { .. } | Self::Csv { .. } | Self::Workbook { .. } => "WriteError",
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = OutputError::UnsupportedFormat {
            path: PathBuf::from("out.xls"),
            extension: "xls".to_string(),
        };
        assert_eq!(err.kind(), "UnsupportedFormatError");
        assert_eq!(
            err.to_string(),
            "unsupported output format 'xls' for out.xls (use .csv or .xlsx)"
        );

        let err = OutputError::Write {
            path: PathBuf::from("out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), "WriteError");
    }
}
