//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses one of the page markup selectors from `config::constants`.
///
/// These are compile-time constants, so a parse failure is a bug in the
/// constant itself and must not be mistaken for a page without products.
///
/// # Panics
///
/// Panics with the selector, its role and the parser's message if it does not parse.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' for {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
