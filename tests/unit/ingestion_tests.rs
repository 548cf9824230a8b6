use limit_order_book::{ingest_orders, OrderBook};
use std::io::Cursor;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingested_bids_and_asks_can_cross() {
        let book = OrderBook::new("BTC");
        let data = "ASK,1,100,5\nBID,2,100,5\n";

        let ids = ingest_orders(&book, Cursor::new(data));
        assert_eq!(ids.len(), 2);
        assert_eq!(book.resting_order_count(), 0);
    }

    #[test]
    fn malformed_line_does_not_abort_the_rest_of_the_batch() {
        let book = OrderBook::new("BTC");
        let data = "BID,1,100,5\ngarbage\nBID,2,101,3\n";

        let ids = ingest_orders(&book, Cursor::new(data));
        assert_eq!(ids.len(), 2);
        assert_eq!(book.resting_order_count(), 2);
    }
}
