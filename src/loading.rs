//! Loading the initial stock from JSON.
//!
//! The library is a JSON array of book objects. A copy of the default library
//! is compiled into the crate so the demonstration runs without any files.

use std::{fs, path::Path};

use crate::{
    book::Book,
    error::{Result, StockError},
    stock::BookStock,
};

/// JSON source of the library shipped with the crate
pub const BUNDLED_LIBRARY: &str = include_str!("../data/library.json");

/// Parse a JSON array of books
///
/// # Errors
///
/// Returns `StockError::Json` if `json` is not a list of book objects.
pub fn parse_books(json: &str) -> Result<Vec<Book>> {
    Ok(serde_json::from_str(json)?)
}

impl BookStock {
    /// Load the library shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns `StockError::Json` if the bundled data is malformed.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_LIBRARY)
    }

    /// Build a stock from a JSON array of books
    ///
    /// # Errors
    ///
    /// Returns `StockError::Json` if `json` is not a list of book objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let books = parse_books(json)?;
        log::debug!("Parsed {} books", books.len());
        Ok(books.into_iter().collect())
    }

    /// Load a stock from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `StockError::Io` if the file cannot be read and
    /// `StockError::Json` if its contents are not a list of book objects.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading library from {}", path.display());

        let contents = fs::read_to_string(path)
            .map_err(|source| StockError::Io { path: path.to_path_buf(), source })?;

        Self::from_json_str(&contents)
    }
}
