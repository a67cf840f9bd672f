use crate::events::StockEvent;

/// Trait for stock change observation
pub trait StockObserver {
    /// Called after a mutation has been applied to the stock
    fn on_stock_change(&self, event: &StockEvent);
}

/// Logs every change made to the stock
#[derive(Debug)]
pub struct StockLogger;

impl StockObserver for StockLogger {
    fn on_stock_change(&self, event: &StockEvent) {
        match event {
            StockEvent::Added { index, book } => {
                log::info!("Added {:?} at index {index}", book.title);
            }
            StockEvent::Removed { index, book } => {
                log::info!("Removed {:?} from index {index}", book.title);
            }
            StockEvent::TitleUpdated { index, previous, current } => {
                log::info!("Renamed index {index}: {previous:?} -> {current:?}");
            }
        }
    }
}
