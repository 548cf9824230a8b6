//! Component J: read-only market observables.
//!
//! Every function here takes the mutation lock just long enough to copy
//! out what it needs — no reference into `BookState` ever escapes, so
//! these reads can never observe a book mid-mutation.

use crate::orderbook::book::OrderBook;
use crate::orderbook::history::FillRecord;

/// A price/quantity snapshot of one price level, detached from the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelView {
    /// The level's price.
    pub price: u64,
    /// The level's aggregate resting quantity at the moment of the read.
    pub quantity: u64,
}

impl OrderBook {
    /// The highest-priced resting bid, if any.
    pub fn best_bid(&self) -> Option<LevelView> {
        self.state.lock().bids.best().map(|level| LevelView {
            price: level.price(),
            quantity: level.quantity(),
        })
    }

    /// The lowest-priced resting ask, if any.
    pub fn best_ask(&self) -> Option<LevelView> {
        self.state.lock().asks.best().map(|level| LevelView {
            price: level.price(),
            quantity: level.quantity(),
        })
    }

    /// The arithmetic mean of the best bid and best ask, if both exist.
    pub fn mid_price(&self) -> Option<f64> {
        let state = self.state.lock();
        let bid = state.bids.best()?.price() as f64;
        let ask = state.asks.best()?.price() as f64;
        Some((bid + ask) / 2.0)
    }

    /// The volume-weighted price between the best bid and best ask:
    /// `(bid_price * ask_quantity + ask_price * bid_quantity) / (bid_quantity + ask_quantity)`.
    ///
    /// Weighs each side's price by the *opposite* side's resting quantity,
    /// so that the side with less standing liquidity pulls the price
    /// towards itself. `None` if either side is empty, or if both best
    /// levels somehow carry zero quantity.
    pub fn micro_price(&self) -> Option<f64> {
        let state = self.state.lock();
        let bid = state.bids.best()?;
        let ask = state.asks.best()?;

        let bid_price = bid.price() as f64;
        let ask_price = ask.price() as f64;
        let bid_quantity = bid.quantity() as f64;
        let ask_quantity = ask.quantity() as f64;

        let total = bid_quantity + ask_quantity;
        if total == 0.0 {
            return None;
        }
        Some((bid_price * ask_quantity + ask_price * bid_quantity) / total)
    }

    /// A copy of the full match history, in the order fills occurred.
    /// Empty if match history recording was never enabled.
    pub fn match_history(&self) -> Vec<FillRecord> {
        self.state.lock().history.clone()
    }

    /// The trade price of every recorded fill, in occurrence order.
    pub fn match_history_prices(&self) -> Vec<u64> {
        self.state
            .lock()
            .history
            .iter()
            .map(FillRecord::trade_price)
            .collect()
    }

    /// Number of orders currently resting on the book (both sides).
    pub fn resting_order_count(&self) -> usize {
        self.state.lock().registry.len()
    }
}
