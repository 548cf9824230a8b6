//! Component I: the optional append-only log of fills.

use crate::orderbook::order::Order;

/// A single fill, captured as deep-copied snapshots of both sides at the
/// moment of the match.
///
/// `incoming`/`resting` reflect the quantities that remained *before* this
/// fill's decrement — i.e. what was actually consumed is recoverable as
/// `min(incoming.quantity, resting.quantity)`.
#[derive(Debug, Clone)]
pub struct FillRecord {
    /// Snapshot of the incoming (aggressive) order at match time.
    pub incoming: Order,
    /// Snapshot of the resting (passive) order at match time.
    pub resting: Order,
    /// Unix timestamp in milliseconds when the fill occurred.
    pub timestamp_millis: u64,
}

impl FillRecord {
    /// The price this fill traded at: always the resting order's price,
    /// since time priority is honoured by matching at the maker's price.
    pub fn trade_price(&self) -> u64 {
        self.resting.price
    }
}
