use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use book_stock::{BookStock, Result, StockLogger, StockReport};
use clap::Parser;
use colored::Colorize;

/// Command-line arguments for the book stock demonstration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding the initial library (defaults to the bundled one)
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// Enable verbose output with debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Print an indexed table of the stock after loading
    #[arg(long)]
    table: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(args.verbose)),
    )
    .init();

    let library = match &args.library {
        Some(path) => BookStock::load_from_file(path),
        None => BookStock::bundled(),
    };
    let library = match library {
        Ok(library) => library,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Work on a copy so the loaded library stays as it was
    let mut stock = BookStock::from_books(library.as_slice());
    stock.register_observer(Box::new(StockLogger));

    let mut out = io::stdout().lock();
    match run_demo(&mut stock, &mut out, args.table) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Log filter used when `RUST_LOG` is unset; change logs only show up with `--verbose`
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Print a section heading
fn heading<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n{}", title.yellow().bold())?;
    Ok(())
}

/// Exercise every stock operation once, in order, printing the results
fn run_demo<W: Write>(stock: &mut BookStock, out: &mut W, table: bool) -> Result<()> {
    writeln!(out, "{} {}", "Number of books:".green().bold(), stock.count())?;

    if table {
        heading(out, "Stock:")?;
        StockReport::write_table(stock, out)?;
    }

    heading(out, "List of all titles:")?;
    stock.list_all_titles(out)?;

    heading(out, "Add a new book:")?;
    let updated = stock.add_book("New Book", "Author Name", "Genre", 350, "English", 2022);
    writeln!(out, "Updated stock:")?;
    StockReport::write_json(updated.as_slice(), out)?;

    heading(out, "Remove a book at index 1:")?;
    if let Err(e) = stock.remove_book(1) {
        writeln!(out, "{} {e}", "Error:".red())?;
    }
    writeln!(out, "Updated stock after removal:")?;
    StockReport::write_json(stock.as_slice(), out)?;

    heading(out, "Update the title of the book at index 0:")?;
    if let Err(e) = stock.update_title(0, "Updated Title") {
        writeln!(out, "{} {e}", "Error:".red())?;
    }
    writeln!(out, "Updated stock after title update:")?;
    StockReport::write_json(stock.as_slice(), out)?;

    heading(out, "List of English books:")?;
    stock.list_english_books(out)?;

    heading(out, "List of books with more than 300 pages:")?;
    stock.list_books_over_300_pages(out)?;

    heading(out, "Books published between 2000 and 2010:")?;
    StockReport::write_json(&stock.books_between_2000_and_2010(), out)?;

    heading(out, "Fantasy books in English:")?;
    StockReport::write_json(&stock.fantasy_books_in_english(), out)?;

    heading(out, "Book containing \"ride\" in the title:")?;
    StockReport::write_json(&stock.book_containing_ride(), out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use book_stock::{Book, BookStock, Result};

    use super::{default_log_filter, run_demo};

    #[test]
    fn test_demo_runs_on_small_stock() -> Result<()> {
        colored::control::set_override(false);
        let mut stock = BookStock::from_books(&[
            Book::new("Pride and Prejudice", "Jane Austen", "Romance", 432, "English", 1813),
            Book::new("Dune", "Frank Herbert", "Science Fiction", 412, "English", 1965),
        ]);
        let mut out = Vec::new();
        run_demo(&mut stock, &mut out, true)?;

        let text = String::from_utf8_lossy(&out);
        assert!(text.starts_with("Number of books: 2\n"));
        assert!(text.contains("Updated Title"));
        assert_eq!(stock.count(), 2);
        assert_eq!(stock.get(1).map(|book| book.title.as_str()), Some("New Book"));
        Ok(())
    }

    #[test]
    fn test_demo_output_ends_with_ride_search() -> Result<()> {
        colored::control::set_override(false);
        let mut stock = BookStock::from_books(&[
            Book::new("Dune", "Frank Herbert", "Science Fiction", 412, "English", 1965),
            Book::new("Emma", "Jane Austen", "Romance", 474, "English", 1815),
            Book::new("Pride and Prejudice", "Jane Austen", "Romance", 432, "English", 1813),
        ]);
        let mut out = Vec::new();
        run_demo(&mut stock, &mut out, false)?;

        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains("Demonstration complete!"));
        let last_heading = text.rfind("Book containing \"ride\" in the title:");
        let tail = last_heading.and_then(|start| text.get(start..)).unwrap_or_default();
        assert!(tail.contains("\"title\": \"Pride and Prejudice\""));
        assert!(tail.trim_end().ends_with('}'));
        Ok(())
    }

    #[test]
    fn test_change_logs_hidden_by_default() {
        assert_eq!(default_log_filter(false), "warn");
        assert_eq!(default_log_filter(true), "debug");
    }

    #[test]
    fn test_demo_reports_out_of_range_and_continues() -> Result<()> {
        colored::control::set_override(false);
        let mut stock = BookStock::new();
        let mut out = Vec::new();
        run_demo(&mut stock, &mut out, false)?;

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Error: Index 1 is out of range for a stock of 1 books"));
        assert!(text.contains("Book containing \"ride\" in the title:"));
        assert_eq!(stock.get(0).map(|book| book.title.as_str()), Some("Updated Title"));
        Ok(())
    }
}
