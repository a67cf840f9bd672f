use std::fmt;

use serde::{Deserialize, Serialize};

/// A single catalog record held in the stock
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Book {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Genre, compared by exact match
    pub genre: String,
    /// Number of pages
    pub pages: u32,
    /// Language the book is written in, compared by exact match
    pub language: String,
    /// Year of publication, any value is accepted
    pub year: i32,
}

impl Book {
    /// Build a book from its fields
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        pages: u32,
        language: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            pages,
            language: language.into(),
            year,
        }
    }

    /// Get a human-readable description of the book
    #[must_use]
    pub fn get_description(&self) -> String {
        format!(
            "{} by {} ({}, {} pages, {}, {})",
            self.title, self.author, self.genre, self.pages, self.language, self.year
        )
    }

    /// Whether the title contains `needle`, ignoring case
    #[must_use]
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_description())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Book;

    #[test]
    fn test_description() {
        let book = Book::new("Dune", "Frank Herbert", "Science Fiction", 412, "English", 1965);
        assert_eq!(
            book.to_string(),
            "Dune by Frank Herbert (Science Fiction, 412 pages, English, 1965)"
        );
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let book = Book::new("PRIDE and Prejudice", "Jane Austen", "Romance", 432, "English", 1813);
        assert!(book.title_contains("ride"));
        assert!(book.title_contains("RIDE"));
        assert!(!book.title_contains("rider"));
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"title":"T","author":"A","genre":"G","pages":350,"language":"English","year":2022}"#;
        let book: Result<Book, _> = serde_json::from_str(json);
        assert_eq!(book.ok(), Some(Book::new("T", "A", "G", 350, "English", 2022)));
    }
}
