//! Optional trader identity carried by orders for settlement bookkeeping.

use parking_lot::Mutex;
use std::collections::HashMap;

/// A market participant's mutable cash balance and asset inventory.
///
/// Orders hold a weak association to their `Participant` (an `Arc`,
/// compared by pointer identity only — see [`crate::orderbook::order::Order::same_owner`]).
/// The book never owns a `Participant`; it is mutated by reference during
/// settlement.
#[derive(Debug)]
pub struct Participant {
    /// Display name, for diagnostics only.
    pub name: String,
    state: Mutex<ParticipantState>,
}

#[derive(Debug, Default)]
struct ParticipantState {
    balance: i64,
    inventory: HashMap<String, i64>,
}

impl Participant {
    /// Creates a new participant with zero balance and an empty inventory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(ParticipantState::default()),
        }
    }

    /// Current cash balance.
    pub fn balance(&self) -> i64 {
        self.state.lock().balance
    }

    /// Current inventory of `asset` (zero if never touched).
    pub fn inventory_of(&self, asset: &str) -> i64 {
        self.state.lock().inventory.get(asset).copied().unwrap_or(0)
    }

    /// Applies a fill's balance and inventory deltas. Entries are created
    /// on first touch, per spec.
    pub(crate) fn apply_fill(&self, asset: &str, balance_delta: i64, inventory_delta: i64) {
        let mut state = self.state.lock();
        state.balance += balance_delta;
        *state.inventory.entry(asset.to_string()).or_insert(0) += inventory_delta;
    }
}
