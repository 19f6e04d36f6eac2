//! Price text parsing.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{PriceFallback, CURRENCY_SYMBOL, CURRENCY_SYMBOL_MOJIBAKE, SAVE_PREFIX};
use crate::error_handling::ScrapeError;

/// Leading decimal number: `12`, `12.5`, `12.` or `.5`
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)").unwrap_or_else(|e| {
        panic!("Failed to compile leading number pattern: {e}. This is a programming error.")
    })
});

/// Parses a price or discount as displayed on the page.
///
/// Removes the `Save ` prefix and the currency symbol (including its Latin-1
/// mojibake form), skips leading whitespace, then reads the leading decimal
/// number. Text after the number is ignored, so `"Save £5.86 on the monthly
/// price"` yields `5.86`.
///
/// # Errors
///
/// Returns `ScrapeError::Parse` when no number is found and `fallback` is
/// `PriceFallback::Error`. With `PriceFallback::Zero` the result is `0.0`.
pub fn parse_price(text: &str, fallback: PriceFallback) -> Result<f64, ScrapeError> {
    let stripped = text
        .replace(SAVE_PREFIX, "")
        .replace(CURRENCY_SYMBOL_MOJIBAKE, "")
        .replace(CURRENCY_SYMBOL, "");
    let stripped = stripped.trim_start();

    let parsed = LEADING_NUMBER
        .find(stripped)
        .and_then(|m| m.as_str().parse::<f64>().ok());

    match (parsed, fallback) {
        (Some(value), _) => Ok(value),
        (None, PriceFallback::Zero) => {
            log::warn!("No numeric price in '{text}', using 0");
            Ok(0.0)
        }
        (None, PriceFallback::Error) => Err(ScrapeError::Parse {
            text: text.to_string(),
        }),
    }
}
