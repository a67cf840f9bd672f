//! Error types for stock operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type alias for stock operations
pub type Result<T> = std::result::Result<T, StockError>;

/// Custom error type for stock operations
#[derive(Debug, Error)]
pub enum StockError {
    /// The index does not address a book in the stock
    #[error("Index {index} is out of range for a stock of {len} books")]
    OutOfRange {
        /// The index that was requested
        index: usize,
        /// Number of books in the stock at the time of the call
        len: usize,
    },

    /// The library file could not be read
    #[error("Failed to read library file {}: {source}", .path.display())]
    Io {
        /// Path of the library file
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Library data is not a valid JSON list of books, or a dump failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a listing or report failed
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
