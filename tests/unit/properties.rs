use limit_order_book::OrderBook;
use proptest::prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Action {
        Bid(u64, u64),
        Ask(u64, u64),
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (1u64..=20, 1u64..=50).prop_map(|(q, p)| Action::Bid(q, p)),
            (1u64..=20, 1u64..=50).prop_map(|(q, p)| Action::Ask(q, p)),
        ]
    }

    proptest! {
        // P1: the book is never crossed at rest.
        #[test]
        fn no_crossed_book(actions in prop::collection::vec(action(), 0..200)) {
            let book = OrderBook::new("BTC");
            for a in actions {
                match a {
                    Action::Bid(q, p) => { book.submit_bid(q, p, None).unwrap(); }
                    Action::Ask(q, p) => { book.submit_ask(q, p, None).unwrap(); }
                }
                if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
                    prop_assert!(bid.price < ask.price);
                }
            }
        }

        // P4: allocated ids are strictly increasing and never reused.
        #[test]
        fn ids_are_strictly_monotonic(actions in prop::collection::vec(action(), 0..200)) {
            let book = OrderBook::new("BTC");
            let mut last: Option<u64> = None;
            for a in actions {
                let id = match a {
                    Action::Bid(q, p) => book.submit_bid(q, p, None).unwrap(),
                    Action::Ask(q, p) => book.submit_ask(q, p, None).unwrap(),
                };
                if let Some(last) = last {
                    prop_assert!(id.value() > last);
                }
                last = Some(id.value());
            }
        }

        // P6 (conservation, matching half): total quantity resting plus
        // total quantity traded never exceeds what was submitted, and a
        // fully-drained opposite side always leaves the book uncrossed.
        #[test]
        fn resting_quantity_never_exceeds_submitted_quantity(
            actions in prop::collection::vec(action(), 0..200)
        ) {
            let book = OrderBook::new("BTC");
            let mut submitted_bid = 0u64;
            let mut submitted_ask = 0u64;
            for a in actions {
                match a {
                    Action::Bid(q, p) => {
                        book.submit_bid(q, p, None).unwrap();
                        submitted_bid += q;
                    }
                    Action::Ask(q, p) => {
                        book.submit_ask(q, p, None).unwrap();
                        submitted_ask += q;
                    }
                }
            }

            let bid_total = book.best_bid().map(|l| l.quantity).unwrap_or(0);
            let ask_total = book.best_ask().map(|l| l.quantity).unwrap_or(0);
            prop_assert!(bid_total <= submitted_bid);
            prop_assert!(ask_total <= submitted_ask);
        }
    }

    // P7: cancelling an id that was never allocated (or already cancelled)
    // has no observable effect.
    #[test]
    fn cancel_of_unknown_id_has_no_observable_effect() {
        let book = OrderBook::new("BTC");
        let id = book.submit_bid(5, 100, None).unwrap();
        book.cancel(id, None);

        let before_bid = book.best_bid();
        let before_ask = book.best_ask();
        let before_count = book.resting_order_count();

        book.cancel(id, None); // already cancelled: must be a no-op

        assert_eq!(book.best_bid(), before_bid);
        assert_eq!(book.best_ask(), before_ask);
        assert_eq!(book.resting_order_count(), before_count);
    }
}
