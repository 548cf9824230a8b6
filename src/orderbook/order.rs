//! Order identity and the resting-order record.

use crate::orderbook::participant::Participant;
use std::fmt;
use std::sync::Arc;

/// Unique, strictly monotonically increasing order identifier.
///
/// Allocated by [`crate::OrderBook`] and never reused, even after the order
/// it named has been cancelled or fully filled (invariant I6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub(crate) u64);

impl OrderId {
    /// Returns the raw integer value of this id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the book an order rests or matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// An order to buy at up to a given price.
    Bid,
    /// An order to sell at no less than a given price.
    Ask,
}

impl Side {
    /// The opposing side: `Bid` matches against `Ask` and vice versa.
    pub fn opposite(self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "BID"),
            Side::Ask => write!(f, "ASK"),
        }
    }
}

/// A single limit order.
///
/// `quantity` is the only field the matching engine mutates in place (a
/// size-decreasing `update` or a partial fill); a price change is always
/// modelled as cancel-and-resubmit under a fresh id, per price-time
/// priority.
#[derive(Debug, Clone)]
pub struct Order {
    /// Identity, assigned once at submission and never reused.
    pub id: OrderId,
    /// Buy or sell.
    pub side: Side,
    /// Remaining resting quantity.
    pub quantity: u64,
    /// Limit price.
    pub price: u64,
    /// Optional owner, used for settlement and ownership checks on
    /// `update`/`cancel`. Comparison is by `Arc` identity only.
    pub participant: Option<Arc<Participant>>,
}

impl Order {
    /// Returns true if `other` denotes the same participant identity (or
    /// both orders are anonymous).
    pub fn same_owner(&self, other: Option<&Arc<Participant>>) -> bool {
        match (&self.participant, other) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order({}, quantity={}, price={}, id={})",
            self.side, self.quantity, self.price, self.id
        )
    }
}
