//! Bulk text ingestion: an external collaborator, not part of the core
//! matching engine. Reads a sequence of lines in a template-driven format
//! and submits each as an order, skipping and warning on malformed lines
//! rather than aborting the whole batch.

use crate::orderbook::book::OrderBook;
use crate::orderbook::error::OrderBookError;
use crate::orderbook::order::{OrderId, Side};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Default line template: `"{Type},{ID},{Price},{Quantity}"`. Field names
/// are matched case-insensitively; `{ID}` is accepted in the template but
/// always ignored — ids are allocated fresh by the book, exactly as they
/// are for [`OrderBook::submit_bid`]/[`OrderBook::submit_ask`]. `Type` is
/// a bid when it case-insensitively matches `"B"`/`"BID"`/`"BUY"`;
/// every other token (including `"ASK"`/`"SELL"` but also garbage) is
/// treated as an ask — there is no unrecognised-type error.
pub const DEFAULT_LINE_FORMAT: &str = "{Type},{ID},{Price},{Quantity}";

/// Opens `path` and submits one order per non-blank line, using the field
/// order described by `line_format` (see [`DEFAULT_LINE_FORMAT`]).
///
/// A line that cannot be parsed, or that fails to submit (e.g. zero
/// quantity), is logged via [`tracing::warn`] and skipped rather than
/// aborting the whole file. Returns the set of ids successfully allocated.
pub fn read_orders_from_file(
    book: &OrderBook,
    path: &Path,
    line_format: &str,
) -> Result<HashSet<OrderId>, OrderBookError> {
    let file = File::open(path).map_err(|err| OrderBookError::MalformedInput {
        line: path.display().to_string(),
        reason: err.to_string(),
    })?;
    let fields = parse_template(line_format);
    Ok(ingest(book, BufReader::new(file), &fields))
}

/// Submits one order per non-blank line of `reader`, using the default
/// field order. A lower-level entry point than [`read_orders_from_file`],
/// useful when the source is not a file (e.g. an in-memory buffer in a
/// test).
pub fn ingest_orders<R: BufRead>(book: &OrderBook, reader: R) -> Vec<OrderId> {
    let fields = parse_template(DEFAULT_LINE_FORMAT);
    ingest(book, reader, &fields).into_iter().collect()
}

/// Which logical field occupies each comma-separated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Type,
    Id,
    Price,
    Quantity,
    Skip,
}

/// Extracts the `{...}` placeholders from a template string, in order,
/// mapping unrecognised placeholders to [`Field::Skip`].
fn parse_template(line_format: &str) -> Vec<Field> {
    line_format
        .split(',')
        .map(|token| {
            let name = token.trim().trim_start_matches('{').trim_end_matches('}');
            match name.to_ascii_lowercase().as_str() {
                "type" => Field::Type,
                "id" => Field::Id,
                "price" => Field::Price,
                "quantity" => Field::Quantity,
                _ => Field::Skip,
            }
        })
        .collect()
}

fn ingest<R: BufRead>(book: &OrderBook, reader: R, fields: &[Field]) -> HashSet<OrderId> {
    let mut ids = HashSet::new();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("skipping unreadable line: {err}");
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_line(trimmed, fields) {
            Ok((side, price, quantity)) => {
                let submitted = match side {
                    Side::Bid => book.submit_bid(quantity, price, None),
                    Side::Ask => book.submit_ask(quantity, price, None),
                };
                match submitted {
                    Ok(id) => {
                        ids.insert(id);
                    }
                    Err(err) => warn!("skipping line {trimmed:?}: {err}"),
                }
            }
            Err(reason) => warn!("skipping malformed line {trimmed:?}: {reason}"),
        }
    }

    ids
}

/// Parses one line according to `fields`, ignoring `Field::Id`/`Field::Skip`
/// columns.
fn parse_line(line: &str, fields: &[Field]) -> Result<(Side, u64, u64), String> {
    let columns: Vec<&str> = line.split(',').map(str::trim).collect();
    if columns.len() != fields.len() {
        return Err(format!(
            "expected {} comma-separated fields, got {}",
            fields.len(),
            columns.len()
        ));
    }

    let mut side = None;
    let mut price = None;
    let mut quantity = None;

    for (field, value) in fields.iter().zip(columns.iter()) {
        match field {
            Field::Type => {
                side = Some(match value.to_ascii_uppercase().as_str() {
                    "B" | "BID" | "BUY" => Side::Bid,
                    _ => Side::Ask,
                });
            }
            Field::Price => {
                price = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid price {value:?}"))?,
                );
            }
            Field::Quantity => {
                quantity = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid quantity {value:?}"))?,
                );
            }
            Field::Id | Field::Skip => {}
        }
    }

    match (side, price, quantity) {
        (Some(side), Some(price), Some(quantity)) => Ok((side, price, quantity)),
        _ => Err("template is missing a required {Type}/{Price}/{Quantity} field".to_string()),
    }
}
