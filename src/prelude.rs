//! Convenient re-export of the crate's most commonly used types.
//!
//! ```rust
//! use limit_order_book::prelude::*;
//! ```

pub use crate::orderbook::{
    ingest_orders, read_orders_from_file, FillRecord, LevelView, Order, OrderBook, OrderBookError,
    OrderId, Participant, Side, DEFAULT_LINE_FORMAT,
};
