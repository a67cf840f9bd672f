use std::{borrow::Borrow, io::Write};

use serde::Serialize;

use crate::{book::Book, error::Result, stock::BookStock};

/// Write the title of each book on its own line, in iteration order
///
/// # Errors
///
/// Returns `StockError::Output` if the sink cannot be written to.
pub fn write_titles<I, W>(books: I, out: &mut W) -> Result<()>
where
    I: IntoIterator,
    I::Item: Borrow<Book>,
    W: Write + ?Sized,
{
    for book in books {
        writeln!(out, "{}", book.borrow().title)?;
    }
    Ok(())
}

/// Reporting tools for a stock of books
#[derive(Debug)]
pub struct StockReport;

impl StockReport {
    /// Write an indexed table of every book and all of its fields
    ///
    /// # Errors
    ///
    /// Returns `StockError::Output` if the sink cannot be written to.
    pub fn write_table<W: Write + ?Sized>(stock: &BookStock, out: &mut W) -> Result<()> {
        writeln!(out, "=== Stock: {} books ===", stock.count())?;
        writeln!(
            out,
            "{:>3}  {:<40} {:<28} {:<18} {:>5}  {:<10} {:>5}",
            "#", "Title", "Author", "Genre", "Pages", "Language", "Year"
        )?;
        for (index, book) in stock.iter().enumerate() {
            writeln!(
                out,
                "{index:>3}  {:<40} {:<28} {:<18} {:>5}  {:<10} {:>5}",
                book.title, book.author, book.genre, book.pages, book.language, book.year
            )?;
        }
        Ok(())
    }

    /// Write a pretty JSON dump of `value` followed by a newline
    ///
    /// # Errors
    ///
    /// Returns `StockError::Json` if `value` cannot be serialized and
    /// `StockError::Output` if the sink cannot be written to.
    pub fn write_json<T, W>(value: &T, out: &mut W) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write + ?Sized,
    {
        let serialized = serde_json::to_string_pretty(value)?;
        writeln!(out, "{serialized}")?;
        Ok(())
    }
}
