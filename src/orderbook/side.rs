//! Component C: the ordered price -> level map for one side of the book.

use crate::orderbook::level::PriceLevel;
use crate::orderbook::order::Side;
use std::collections::BTreeMap;

/// An ordered map from price to [`PriceLevel`] for a single side.
///
/// Backed by a `BTreeMap` — spec-acceptable as a balanced ordered map — and
/// keyed so that `best()` always returns the side's priority end: the
/// maximum price for bids, the minimum price for asks.
#[derive(Debug, Default)]
pub struct SideIndex {
    side: SideKind,
    levels: BTreeMap<u64, PriceLevel>,
}

/// Which end of the `BTreeMap` is "best" for this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideKind {
    Bids,
    Asks,
}

impl Default for SideKind {
    fn default() -> Self {
        SideKind::Bids
    }
}

impl SideIndex {
    /// Creates an empty index for `side`.
    pub fn new(side: Side) -> Self {
        Self {
            side: match side {
                Side::Bid => SideKind::Bids,
                Side::Ask => SideKind::Asks,
            },
            levels: BTreeMap::new(),
        }
    }

    /// Inserts a level at `price`, replacing any existing one.
    pub fn insert(&mut self, price: u64, level: PriceLevel) {
        self.levels.insert(price, level);
    }

    /// Removes the level at `price`, if present (I5: callers remove a
    /// level as soon as its aggregate quantity reaches zero).
    pub fn remove(&mut self, price: u64) -> Option<PriceLevel> {
        self.levels.remove(&price)
    }

    /// Looks up the level at `price`.
    pub fn get(&self, price: u64) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    /// Looks up the level at `price` mutably.
    pub fn get_mut(&mut self, price: u64) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// True when the side holds no price levels at all.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The best (highest bid / lowest ask) level, if any.
    pub fn best(&self) -> Option<&PriceLevel> {
        match self.side {
            SideKind::Bids => self.levels.values().next_back(),
            SideKind::Asks => self.levels.values().next(),
        }
    }

    /// The price of the best level, if any.
    pub fn best_price(&self) -> Option<u64> {
        self.best().map(PriceLevel::price)
    }

}
