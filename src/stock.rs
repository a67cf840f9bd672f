use std::{fmt, io::Write};

use crate::{
    book::Book,
    error::{Result, StockError},
    events::StockEvent,
    observers::StockObserver,
    report::write_titles,
};

/// Language matched by the English-only listings
pub const ENGLISH: &str = "English";
/// Genre matched by [`BookStock::fantasy_books_in_english`]
pub const FANTASY: &str = "Fantasy";
/// Books must have strictly more pages than this to count as long
pub const LONG_BOOK_PAGES: u32 = 300;
/// Exclusive lower bound of [`BookStock::books_between_2000_and_2010`]
pub const DECADE_START: i32 = 2000;
/// Exclusive upper bound of [`BookStock::books_between_2000_and_2010`]
pub const DECADE_END: i32 = 2010;
/// Needle searched for by [`BookStock::book_containing_ride`]
pub const RIDE: &str = "ride";

/// Ordered, index-addressed collection of books in stock
#[derive(Default)]
pub struct BookStock {
    /// Books in insertion order; the position is the only identity
    books: Vec<Book>,
    /// Registered change observers
    observers: Vec<Box<dyn StockObserver>>,
}

impl fmt::Debug for BookStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookStock")
            .field("books", &self.books)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl FromIterator<Book> for BookStock {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self { books: iter.into_iter().collect(), observers: Vec::new() }
    }
}

impl BookStock {
    /// Create an empty stock
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stock holding a copy of `books`; the source is left untouched
    #[must_use]
    pub fn from_books(books: &[Book]) -> Self {
        books.iter().cloned().collect()
    }

    /// Register an observer to be notified of every successful mutation
    pub fn register_observer(&mut self, observer: Box<dyn StockObserver>) {
        self.observers.push(observer);
    }

    /// Notify every observer of `event`
    fn notify(&self, event: &StockEvent) {
        for observer in &self.observers {
            observer.on_stock_change(event);
        }
    }

    /// Number of books in stock
    #[must_use]
    pub fn count(&self) -> usize {
        self.books.len()
    }

    /// Whether the stock holds no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Book at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Iterate over the books in order
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Books as a slice, in order
    #[must_use]
    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    /// Write every title, one per line, in stock order
    ///
    /// # Errors
    ///
    /// Returns `StockError::Output` if the sink cannot be written to.
    pub fn list_all_titles<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_titles(&self.books, out)
    }

    /// Append a new book built from the given fields and return the stock
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        pages: u32,
        language: impl Into<String>,
        year: i32,
    ) -> &mut Self {
        self.push(Book::new(title, author, genre, pages, language, year))
    }

    /// Append `book` at the highest index and return the stock
    pub fn push(&mut self, book: Book) -> &mut Self {
        let index = self.books.len();
        self.books.push(book.clone());
        self.notify(&StockEvent::Added { index, book });
        self
    }

    /// Remove the book at `index`, shifting later books down by one
    ///
    /// # Errors
    ///
    /// Returns `StockError::OutOfRange` if `index` does not address a book.
    /// The stock is left unchanged in that case.
    pub fn remove_book(&mut self, index: usize) -> Result<Book> {
        self.check_index(index)?;
        let book = self.books.remove(index);
        self.notify(&StockEvent::Removed { index, book: book.clone() });
        Ok(book)
    }

    /// Replace the title of the book at `index`, returning the previous title
    ///
    /// # Errors
    ///
    /// Returns `StockError::OutOfRange` if `index` does not address a book.
    pub fn update_title(&mut self, index: usize, new_title: impl Into<String>) -> Result<String> {
        let len = self.books.len();
        let book = self.books.get_mut(index).ok_or(StockError::OutOfRange { index, len })?;
        let current = new_title.into();
        let previous = std::mem::replace(&mut book.title, current.clone());
        self.notify(&StockEvent::TitleUpdated { index, previous: previous.clone(), current });
        Ok(previous)
    }

    /// Fail with `OutOfRange` unless `index` addresses a book
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.books.len() {
            Ok(())
        } else {
            Err(StockError::OutOfRange { index, len: self.books.len() })
        }
    }

    /// All books matching `predicate`, in stock order
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Book>
    where
        P: FnMut(&Book) -> bool,
    {
        self.books.iter().filter(|&book| predicate(book)).collect()
    }

    /// First book matching `predicate`
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Option<&Book>
    where
        P: FnMut(&Book) -> bool,
    {
        self.books.iter().find(|&book| predicate(book))
    }

    /// Books written in English (exact, case-sensitive match)
    #[must_use]
    pub fn english_books(&self) -> Vec<&Book> {
        self.filter(|book| book.language == ENGLISH)
    }

    /// Write the titles of the books written in English
    ///
    /// # Errors
    ///
    /// Returns `StockError::Output` if the sink cannot be written to.
    pub fn list_english_books<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_titles(self.english_books(), out)
    }

    /// Books with more than 300 pages
    #[must_use]
    pub fn books_over_300_pages(&self) -> Vec<&Book> {
        self.filter(|book| book.pages > LONG_BOOK_PAGES)
    }

    /// Write the titles of the books with more than 300 pages
    ///
    /// # Errors
    ///
    /// Returns `StockError::Output` if the sink cannot be written to.
    pub fn list_books_over_300_pages<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_titles(self.books_over_300_pages(), out)
    }

    /// Books published strictly after 2000 and strictly before 2010
    #[must_use]
    pub fn books_between_2000_and_2010(&self) -> Vec<&Book> {
        self.filter(|book| book.year > DECADE_START && book.year < DECADE_END)
    }

    /// Fantasy books written in English
    #[must_use]
    pub fn fantasy_books_in_english(&self) -> Vec<&Book> {
        self.filter(|book| book.genre == FANTASY && book.language == ENGLISH)
    }

    /// First book whose title contains `needle`, ignoring case
    #[must_use]
    pub fn find_title_containing(&self, needle: &str) -> Option<&Book> {
        self.find(|book| book.title_contains(needle))
    }

    /// First book whose title contains "ride", ignoring case
    #[must_use]
    pub fn book_containing_ride(&self) -> Option<&Book> {
        self.find_title_containing(RIDE)
    }
}

impl<'a> IntoIterator for &'a BookStock {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
