//! Error types for data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an input file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input path exists but is not a regular file.
    #[error("input path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Extension not recognised.
    #[error("unsupported input format '{extension}' for {path} (use .csv or .xlsx)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Content uses an encoding the reader cannot decode.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Parsing Errors ===
    /// Failed to parse CSV records.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read the workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheet to read.
    #[error("workbook has no worksheet: {path}")]
    NoWorksheet { path: PathBuf },

    /// Loaded cells did not form a rectangular table.
    #[error(transparent)]
    Model(#[from] tabclean_model::ModelError),
}

impl IngestError {
    /// Category name reported to the user.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } | Self::NotAFile { .. } | Self::FileRead { .. } => {
                "FileAccessError"
            }
            Self::UnsupportedFormat { .. } => "UnsupportedFormatError",
            Self::UnsupportedEncoding { .. }
            | Self::CsvParse { .. }
            | Self::Workbook { .. }
            | Self::NoWorksheet { .. }
            | Self::Model(_) => "EncodingError",
        }
    }

    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/file.csv");
        assert_eq!(err.kind(), "FileAccessError");
    }

    #[test]
    fn test_error_from_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_io(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_error_kinds() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("a.json"),
            extension: "json".to_string(),
        };
        assert_eq!(err.kind(), "UnsupportedFormatError");
        let err = IngestError::UnsupportedEncoding {
            path: PathBuf::from("a.csv"),
            encoding: "UTF-16 LE",
        };
        assert_eq!(err.kind(), "EncodingError");
    }
}
