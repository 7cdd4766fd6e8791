//! SOAP-style wire format for the bill-pay gateway.
//!
//! The gateway speaks order-sensitive XML over HTTP POST: an envelope with a
//! credential header wraps one body element named after the operation, and
//! responses come back as a single `<OperationName>Response` element holding
//! a result code, a result message, and an operation-specific payload.
//!
//! Module layout:
//!
//! - [`operations`]: the routing table from a request to its gateway operation
//! - [`envelope`]: wraps an operation body in the credential-bearing envelope
//! - [`requests`]: one encoder per gateway operation
//! - [`responses`]: one decoder per response shape

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub mod envelope;
pub mod operations;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod tests;

/// Formats a monetary amount as fixed two-decimal text.
///
/// The gateway rejects bare integers and over-precise fractions; every
/// amount on the wire is exactly two decimal places.
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Formats a date in the gateway's textual date format.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Extracts a complete `<tag>...</tag>` element from an XML document.
///
/// Matches the opening tag with or without attributes; returns `None` when
/// the element is absent or never closed.
pub(crate) fn extract_element<'a>(xml: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut search = 0;

    while let Some(pos) = xml[search..].find(&open) {
        let start = search + pos;
        match xml.as_bytes().get(start + open.len()) {
            Some(b'>' | b' ' | b'\t' | b'\r' | b'\n') => {
                let end = xml[start..].find(&close)? + start + close.len();
                return Some(&xml[start..end]);
            }
            // Prefix of a longer element name (or self-closing, which
            // cannot carry the required children); keep scanning.
            _ => search = start + open.len(),
        }
    }

    None
}
