//! Export of ranked listings.
//!
//! This module serializes the final listings into the requested format
//! (JSON, pretty JSON, JSON Lines, CSV) and writes them to stdout or a file.
//! Every format emits the fields in the order title, description, price, discount.

mod delimited;
mod json;
mod sink;

use std::io::Write;

use crate::config::OutputFormat;
use crate::error_handling::ScrapeError;
use crate::models::Listing;

pub use sink::open_sink;

/// Serializes `listings` in `format` to `writer`.
///
/// # Errors
///
/// Returns `ScrapeError::Output` on serialization or I/O failure.
pub fn write_listings<W: Write>(
    listings: &[Listing],
    format: OutputFormat,
    writer: W,
) -> Result<(), ScrapeError> {
    match format {
        OutputFormat::Json => json::write_json(listings, false, writer),
        OutputFormat::JsonPretty => json::write_json(listings, true, writer),
        OutputFormat::Jsonl => json::write_jsonl(listings, writer),
        OutputFormat::Csv => delimited::write_csv(listings, writer),
    }
}
