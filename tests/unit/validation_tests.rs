use limit_order_book::{OrderBook, OrderBookError, Participant};
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_submit_is_rejected() {
        let book = OrderBook::new("BTC");
        let err = book.submit_bid(0, 100, None).unwrap_err();
        assert!(matches!(err, OrderBookError::InvalidOrder { .. }));
    }

    #[test]
    fn zero_price_submit_is_rejected() {
        let book = OrderBook::new("BTC");
        let err = book.submit_ask(10, 0, None).unwrap_err();
        assert!(matches!(err, OrderBookError::InvalidOrder { .. }));
    }

    #[test]
    fn update_by_a_different_participant_is_rejected() {
        let book = OrderBook::new("BTC");
        let owner = Arc::new(Participant::new("alice"));
        let stranger = Arc::new(Participant::new("mallory"));

        let id = book.submit_bid(5, 100, Some(owner)).unwrap();

        let err = book.update(id, 3, 100, Some(&stranger)).unwrap_err();
        assert!(matches!(err, OrderBookError::NotOwner(_)));
    }

    #[test]
    fn cancel_by_a_different_participant_is_ignored() {
        let book = OrderBook::new("BTC");
        let owner = Arc::new(Participant::new("alice"));
        let stranger = Arc::new(Participant::new("mallory"));

        let id = book.submit_bid(5, 100, Some(owner)).unwrap();
        book.cancel(id, Some(&stranger));

        // still resting: the wrong participant could not cancel it
        assert_eq!(book.best_bid().unwrap().quantity, 5);
    }

    #[test]
    fn two_distinct_arcs_around_the_same_participant_do_not_count_as_the_same_owner() {
        // ownership is pointer identity, not structural equality
        let same_name_a = Arc::new(Participant::new("alice"));
        let same_name_b = Arc::new(Participant::new("alice"));

        let book = OrderBook::new("BTC");
        let id = book.submit_bid(5, 100, Some(same_name_a)).unwrap();

        let err = book.update(id, 1, 100, Some(&same_name_b)).unwrap_err();
        assert!(matches!(err, OrderBookError::NotOwner(_)));
    }
}
