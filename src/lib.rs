//! A single-asset, in-memory, continuous double-auction limit order book.
//!
//! [`OrderBook`] matches bids against asks under strict price-time
//! priority, behind one coarse-grained mutation lock. Orders may carry an
//! optional [`Participant`], whose cash balance and per-asset inventory are
//! adjusted on every fill; omit it to use the book purely as a matching
//! engine with no settlement bookkeeping.
//!
//! ```
//! use limit_order_book::OrderBook;
//!
//! let book = OrderBook::new("BTC");
//! book.submit_ask(5, 101, None).unwrap();
//! book.submit_bid(5, 101, None).unwrap();
//!
//! // the two orders fully matched; nothing is left resting
//! assert_eq!(book.resting_order_count(), 0);
//! ```

pub mod orderbook;
pub mod prelude;
mod utils;

pub use orderbook::{
    ingest_orders, read_orders_from_file, FillRecord, LevelView, Order, OrderBookError, OrderId,
    Participant, Side, DEFAULT_LINE_FORMAT,
};
pub use orderbook::OrderBook;
