//! HTML document parsing.

use log::debug;
use scraper::Html;

use crate::config::ParseMode;
use crate::error_handling::ScrapeError;

/// Parses an HTML body into a document tree.
///
/// The parser always recovers from malformed markup and records what it
/// recovered from. In `Lenient` mode those records are only logged; in
/// `Strict` mode the first one is returned as an error.
///
/// # Errors
///
/// Returns `ScrapeError::Markup` in `Strict` mode when the parser reported any error.
pub fn parse_document(body: &str, mode: ParseMode) -> Result<Html, ScrapeError> {
    let document = Html::parse_document(body);

    if let Some(first) = document.errors.first() {
        match mode {
            ParseMode::Strict => return Err(ScrapeError::Markup(first.to_string())),
            ParseMode::Lenient => debug!(
                "Ignoring {} recoverable markup error(s), first: {first}",
                document.errors.len()
            ),
        }
    }

    Ok(document)
}
