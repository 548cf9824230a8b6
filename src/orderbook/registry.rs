//! Component D: the id -> order lookup shared by both sides.

use crate::orderbook::error::OrderBookError;
use crate::orderbook::order::{Order, OrderId};
use std::collections::HashMap;

/// Maps every resting order's id to its full record.
///
/// An order appears here iff it is currently resting (I3): the matching
/// engine removes it the instant it is fully filled or explicitly
/// cancelled, which is also what turns its lingering queue entry into a
/// tombstone.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: HashMap<OrderId, Order>,
}

impl OrderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new resting order.
    ///
    /// # Errors
    /// Returns [`OrderBookError::DuplicateId`] if `order.id` is already
    /// live — this should never happen given monotonic id allocation (I6)
    /// and signals an internal bug rather than caller error.
    pub fn insert(&mut self, order: Order) -> Result<(), OrderBookError> {
        if self.orders.contains_key(&order.id) {
            return Err(OrderBookError::DuplicateId(order.id));
        }
        self.orders.insert(order.id, order);
        Ok(())
    }

    /// Looks up a resting order by id.
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Looks up a resting order by id, mutably.
    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    /// Removes and returns the order for `id`, if it was resting.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.orders.remove(&id)
    }

    /// True if `id` currently names a live resting order.
    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }

    /// Number of currently resting orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True when no orders are resting.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
