use limit_order_book::{OrderBook, Participant};
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_never_rests_crossed() {
        let book = OrderBook::new("BTC");
        book.submit_bid(5, 100, None).unwrap();
        book.submit_ask(5, 101, None).unwrap();

        let best_bid = book.best_bid().unwrap().price;
        let best_ask = book.best_ask().unwrap().price;
        assert!(best_bid < best_ask);
    }

    #[test]
    fn settlement_conserves_balance_and_inventory_across_a_trade() {
        let book = OrderBook::new("BTC");
        let seller = Arc::new(Participant::new("seller"));
        let buyer = Arc::new(Participant::new("buyer"));

        book.submit_ask(2, 100, Some(seller.clone())).unwrap();
        book.submit_bid(2, 100, Some(buyer.clone())).unwrap();

        assert_eq!(seller.balance(), 200);
        assert_eq!(seller.inventory_of("BTC"), -2);
        assert_eq!(buyer.balance(), -200);
        assert_eq!(buyer.inventory_of("BTC"), 2);
    }

    #[test]
    fn many_orders_at_one_price_drain_in_arrival_order() {
        let book = OrderBook::new("BTC");
        for _ in 0..5 {
            book.submit_bid(1, 10, None).unwrap();
        }
        assert_eq!(book.best_bid().unwrap().quantity, 5);

        book.submit_ask(5, 10, None).unwrap();
        assert!(book.best_bid().is_none());
        assert_eq!(book.resting_order_count(), 0);
    }

    #[test]
    fn match_history_disabled_by_default() {
        let book = OrderBook::new("BTC");
        book.submit_ask(1, 10, None).unwrap();
        book.submit_bid(1, 10, None).unwrap();
        assert!(book.match_history().is_empty());
    }
}
