//! White-box tests, with access to crate-internal types the public API
//! hides (`OrderId` construction, raw `Order` literals, `BookState`).
