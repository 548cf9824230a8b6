//! Component E/F: the order book itself and its mutation lock.

use crate::orderbook::error::OrderBookError;
use crate::orderbook::history::FillRecord;
use crate::orderbook::matching::{self, MatchingConfig};
use crate::orderbook::order::{Order, OrderId, Side};
use crate::orderbook::participant::Participant;
use crate::orderbook::registry::OrderRegistry;
use crate::orderbook::side::SideIndex;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

/// The three coupled indices (Components A-D) plus bookkeeping, all behind
/// one mutex. Everything in here is reachable only while the lock is held,
/// which is what lets `matching` freely re-borrow `bids`/`asks`/`registry`
/// without ever needing to re-acquire anything mid-algorithm.
pub(crate) struct BookState {
    pub(crate) bids: SideIndex,
    pub(crate) asks: SideIndex,
    pub(crate) registry: OrderRegistry,
    next_id: u64,
    pub(crate) history: Vec<FillRecord>,
}

impl BookState {
    fn new() -> Self {
        Self {
            bids: SideIndex::new(Side::Bid),
            asks: SideIndex::new(Side::Ask),
            registry: OrderRegistry::new(),
            next_id: 1,
            history: Vec::new(),
        }
    }

    fn allocate_id(&mut self) -> OrderId {
        let id = OrderId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn side_index(&self, side: Side) -> &SideIndex {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    pub(crate) fn side_index_mut(&mut self, side: Side) -> &mut SideIndex {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }
}

/// A single-asset, price-time priority limit order book.
///
/// All public mutators (`submit_bid`, `submit_ask`, `update`, `cancel`) take
/// `&self` and serialize through one coarse-grained [`parking_lot::Mutex`] —
/// Component F, the "Mutation Lock". There is no finer-grained concurrency
/// inside a single book; this is a deliberate departure from a lock-free
/// design in favour of the simplicity of the single-threaded original this
/// crate's semantics are grounded on.
pub struct OrderBook {
    asset_name: String,
    currency_symbol: String,
    record_match_history: bool,
    pub(crate) state: Mutex<BookState>,
}

impl OrderBook {
    /// Creates an empty book for `asset_name`, with match history disabled
    /// and the currency symbol defaulting to `"$"`.
    pub fn new(asset_name: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            currency_symbol: "$".to_string(),
            record_match_history: false,
            state: Mutex::new(BookState::new()),
        }
    }

    /// Sets the currency symbol used by [`std::fmt::Display`] formatting of
    /// observables. Purely cosmetic; does not affect matching.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Enables append-only recording of every fill to the match history
    /// (Component I). Disabled by default, since an unbounded history is a
    /// standing memory cost a caller should opt into.
    pub fn with_match_history(mut self, enabled: bool) -> Self {
        self.record_match_history = enabled;
        self
    }

    /// The asset this book trades.
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    /// The currency symbol configured for this book.
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Submits a bid (buy) order, returning its newly allocated id.
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidOrder`] if `quantity` or `price` is
    /// zero.
    pub fn submit_bid(
        &self,
        quantity: u64,
        price: u64,
        participant: Option<Arc<Participant>>,
    ) -> Result<OrderId, OrderBookError> {
        self.submit(Side::Bid, quantity, price, participant)
    }

    /// Submits an ask (sell) order, returning its newly allocated id.
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidOrder`] if `quantity` or `price` is
    /// zero.
    pub fn submit_ask(
        &self,
        quantity: u64,
        price: u64,
        participant: Option<Arc<Participant>>,
    ) -> Result<OrderId, OrderBookError> {
        self.submit(Side::Ask, quantity, price, participant)
    }

    fn submit(
        &self,
        side: Side,
        quantity: u64,
        price: u64,
        participant: Option<Arc<Participant>>,
    ) -> Result<OrderId, OrderBookError> {
        if quantity == 0 || price == 0 {
            return Err(OrderBookError::InvalidOrder {
                reason: "quantity and price must both be non-zero".to_string(),
            });
        }

        let mut state = self.state.lock();
        let id = state.allocate_id();
        let order = Order {
            id,
            side,
            quantity,
            price,
            participant,
        };
        trace!("submitting {order}");

        let cfg = MatchingConfig {
            asset_name: &self.asset_name,
            record_match_history: self.record_match_history,
        };
        matching::process_order(&mut state, order, &cfg);
        Ok(id)
    }

    /// Changes a resting order's quantity and/or price.
    ///
    /// A price change, or a quantity *increase* at an unchanged price, is
    /// applied as cancel-and-resubmit: the order loses its place in time
    /// priority and is assigned a fresh id, which is returned. A quantity
    /// *decrease* at an unchanged price is applied in place, preserving the
    /// order's id and its position in the price level's queue. Passing a
    /// quantity of zero is equivalent to [`OrderBook::cancel`] and returns
    /// `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`OrderBookError::UnknownOrder`] if `id` does not currently
    /// name a resting order, or [`OrderBookError::NotOwner`] if
    /// `participant` does not match the order's recorded owner.
    pub fn update(
        &self,
        id: OrderId,
        quantity: u64,
        price: u64,
        participant: Option<&Arc<Participant>>,
    ) -> Result<Option<OrderId>, OrderBookError> {
        let mut state = self.state.lock();

        if quantity == 0 {
            Self::cancel_locked(&mut state, id, participant);
            return Ok(None);
        }

        let existing = state
            .registry
            .get(id)
            .ok_or(OrderBookError::UnknownOrder(id))?;
        if !existing.same_owner(participant) {
            return Err(OrderBookError::NotOwner(id));
        }

        let side = existing.side;
        let existing_price = existing.price;
        let existing_quantity = existing.quantity;
        let owner = existing.participant.clone();

        if price == existing_price && quantity <= existing_quantity {
            let diff = existing_quantity - quantity;
            if let Some(order) = state.registry.get_mut(id) {
                order.quantity = quantity;
            }
            if let Some(level) = state.side_index_mut(side).get_mut(existing_price) {
                level.reduce_quantity(diff);
                if level.is_empty() {
                    state.side_index_mut(side).remove(existing_price);
                }
            }
            trace!("updated {id} in place: quantity {existing_quantity} -> {quantity}");
            return Ok(Some(id));
        }

        // Price change, or a size increase: loses time priority.
        Self::cancel_locked(&mut state, id, participant);
        let new_id = state.allocate_id();
        let order = Order {
            id: new_id,
            side,
            quantity,
            price,
            participant: owner,
        };
        trace!("re-submitting {id} as {new_id} (price or size change)");

        let cfg = MatchingConfig {
            asset_name: &self.asset_name,
            record_match_history: self.record_match_history,
        };
        matching::process_order(&mut state, order, &cfg);
        Ok(Some(new_id))
    }

    /// Cancels a resting order, if it is still live and owned by
    /// `participant`. A no-op for unknown ids (idempotent cancel, P7) or a
    /// mismatched owner.
    pub fn cancel(&self, id: OrderId, participant: Option<&Arc<Participant>>) {
        let mut state = self.state.lock();
        Self::cancel_locked(&mut state, id, participant);
    }

    fn cancel_locked(state: &mut BookState, id: OrderId, participant: Option<&Arc<Participant>>) {
        let Some(existing) = state.registry.get(id) else {
            return;
        };
        if !existing.same_owner(participant) {
            return;
        }
        let order = state
            .registry
            .remove(id)
            .expect("just confirmed present above");

        if let Some(level) = state.side_index_mut(order.side).get_mut(order.price) {
            level.reduce_quantity(order.quantity);
            if level.is_empty() {
                state.side_index_mut(order.side).remove(order.price);
            }
        }
        trace!("cancelled {id}");
    }
}
