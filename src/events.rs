use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Changes applied to the stock, reported to observers after the fact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum StockEvent {
    /// A book was appended at `index`
    Added { index: usize, book: Book },
    /// The book at `index` was removed; later books shifted down by one
    Removed { index: usize, book: Book },
    /// The title of the book at `index` was replaced
    TitleUpdated { index: usize, previous: String, current: String },
}

impl StockEvent {
    /// Index of the book the event refers to
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Added { index, .. }
            | Self::Removed { index, .. }
            | Self::TitleUpdated { index, .. } => *index,
        }
    }
}
