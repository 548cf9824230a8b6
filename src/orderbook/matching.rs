//! Component G: the core matching algorithm.
//!
//! `process_order` is the single place that walks the opposing side,
//! consumes liquidity under price-time priority, and deposits any residual
//! quantity on the caller's own side. It is called with the mutation lock
//! already held (`&mut BookState`); the residual-deposit step at the end is
//! just the tail of this same call, never a second acquisition of the lock
//! — which is what the original source's `acquire_locks` flag existed to
//! avoid.

use crate::orderbook::book::BookState;
use crate::orderbook::history::FillRecord;
use crate::orderbook::level::PriceLevel;
use crate::orderbook::order::{Order, Side};
use crate::orderbook::settlement;
use crate::utils::current_time_millis;
use tracing::trace;

/// Configuration the matching engine needs that does not belong on
/// `BookState` itself.
pub(crate) struct MatchingConfig<'a> {
    pub asset_name: &'a str,
    pub record_match_history: bool,
}

/// Runs the full submit algorithm for `incoming`: cross detection, the
/// match loop (with tombstone skipping), re-cross, and residual deposit.
pub(crate) fn process_order(state: &mut BookState, mut incoming: Order, cfg: &MatchingConfig) {
    let opposite_side = incoming.side.opposite();

    loop {
        if incoming.quantity == 0 {
            break;
        }

        let Some(best_price) = state.side_index(opposite_side).best_price() else {
            break;
        };
        if !crosses(incoming.side, incoming.price, best_price) {
            break;
        }

        let level = state
            .side_index_mut(opposite_side)
            .get_mut(best_price)
            .expect("best_price came from this side's own index");

        let head_id = level
            .peek_head()
            .expect("a level indexed with quantity > 0 must hold at least one id (I2)");

        if !state.registry.contains(head_id) {
            // Tombstone: drop it and keep walking this level. The
            // aggregate quantity was already excluded when the order was
            // cancelled, so it is not touched here.
            state
                .side_index_mut(opposite_side)
                .get_mut(best_price)
                .unwrap()
                .pop_left();
            continue;
        }

        let head = state
            .registry
            .get(head_id)
            .expect("just checked contains")
            .clone();
        let traded = incoming.quantity.min(head.quantity);

        if cfg.record_match_history {
            state.history.push(FillRecord {
                incoming: incoming.clone(),
                resting: head.clone(),
                timestamp_millis: current_time_millis(),
            });
        }

        settlement::settle(cfg.asset_name, &incoming, &head, traded);
        trace!(
            "matched {} units at {} between {} and {}",
            traded, head.price, incoming.id, head.id
        );

        incoming.quantity -= traded;
        let remaining_head_quantity = head.quantity - traded;

        state
            .side_index_mut(opposite_side)
            .get_mut(best_price)
            .unwrap()
            .reduce_quantity(traded);

        if remaining_head_quantity == 0 {
            state
                .side_index_mut(opposite_side)
                .get_mut(best_price)
                .unwrap()
                .pop_left();
            state.registry.remove(head_id);
        } else if let Some(reg_order) = state.registry.get_mut(head_id) {
            reg_order.quantity = remaining_head_quantity;
        }

        let level_now_empty = state
            .side_index(opposite_side)
            .get(best_price)
            .map(PriceLevel::is_empty)
            .unwrap_or(true);
        if level_now_empty {
            state.side_index_mut(opposite_side).remove(best_price);
        }
    }

    if incoming.quantity > 0 {
        deposit_residual(state, incoming);
    }
}

/// Deposits whatever quantity remains on the incoming order's own side,
/// creating the price level lazily if needed.
fn deposit_residual(state: &mut BookState, order: Order) {
    let side = order.side;
    let price = order.price;

    let side_index = state.side_index_mut(side);
    if side_index.get(price).is_none() {
        side_index.insert(price, PriceLevel::new(price));
    }
    side_index
        .get_mut(price)
        .expect("just inserted or already present")
        .append(&order);

    state
        .registry
        .insert(order)
        .expect("freshly allocated id cannot already be live");
}

/// True when an order on `side` at `price` crosses the opposing best
/// price: a bid crosses when its price is at or above the best ask; an
/// ask crosses when its price is at or below the best bid.
fn crosses(side: Side, price: u64, opposite_best: u64) -> bool {
    match side {
        Side::Bid => price >= opposite_best,
        Side::Ask => price <= opposite_best,
    }
}
