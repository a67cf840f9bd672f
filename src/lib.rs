//! In-memory book stock.
//!
//! This crate loads a small library of book records and provides counting,
//! listing, filtering and editing operations over the resulting stock.

pub mod book;
pub mod error;
pub mod events;
pub mod loading;
pub mod observers;
pub mod report;
pub mod stock;

pub use book::Book;
pub use error::{Result, StockError};
pub use events::StockEvent;
pub use observers::{StockLogger, StockObserver};
pub use report::StockReport;
pub use stock::BookStock;
