//! Component H: per-fill balance and inventory adjustment.

use crate::orderbook::order::{Order, Side};

/// Applies the balance/inventory effect of one fill to both participants,
/// when present.
///
/// For the incoming order, a bid pays `trade_price * traded` and receives
/// `traded` units of `asset`; an ask receives the cash and gives up the
/// asset. The resting order gets the mirror-image adjustment. Settlement
/// always uses the resting order's price (`trade_price`), never the
/// incoming order's limit price, per price-time priority.
pub fn settle(asset: &str, incoming: &Order, resting: &Order, traded: u64) {
    debug_assert_ne!(incoming.side, resting.side);

    let trade_price = resting.price;
    let notional = (trade_price as i64).saturating_mul(traded as i64);

    if let Some(participant) = &incoming.participant {
        let sign = side_sign(incoming.side);
        participant.apply_fill(asset, -sign * notional, sign * traded as i64);
    }

    if let Some(participant) = &resting.participant {
        let sign = side_sign(resting.side);
        participant.apply_fill(asset, -sign * notional, sign * traded as i64);
    }
}

fn side_sign(side: Side) -> i64 {
    match side {
        Side::Bid => 1,
        Side::Ask => -1,
    }
}
