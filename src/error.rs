//! Error types for seriesview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for seriesview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in seriesview.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open a file.
    #[error("Cannot open {}: {source}", .path.display())]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value column did not hold an integer.
    #[error("Row {row}, column {column}: '{value}' is not an integer")]
    Parse {
        /// 1-based CSV row.
        row: usize,
        /// 1-based CSV column (column 1 is the series name).
        column: usize,
        /// Offending cell text.
        value: String,
    },

    /// Malformed CSV record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row index outside the store.
    #[error("Index {index} out of range (count {count})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of rows at the time of the request.
        count: usize,
    },

    /// I/O error outside of opening an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl Error {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(row: usize, column: usize, value: impl Into<String>) -> Self {
        Self::Parse {
            row,
            column,
            value: value.into(),
        }
    }

    /// Create an IndexOutOfRange error.
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }
}
