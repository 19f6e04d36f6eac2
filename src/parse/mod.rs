//! HTML parsing and listing extraction.
//!
//! This module turns a fetched page into raw listings:
//! - Document parsing with lenient or strict handling of malformed markup
//! - Listing extraction from the product container markup
//! - Price text parsing
//!
//! All element lookups use CSS selectors via the `scraper` crate.

mod document;
mod extract;
mod price;

// Re-export public API
pub use document::parse_document;
pub use extract::extract_listings;
pub use price::parse_price;
