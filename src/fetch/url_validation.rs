//! URL validation and normalization.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Validates and normalizes the URL to scrape.
///
/// Adds an `https://` prefix if no scheme is given, then checks that the result
/// parses and uses http or https.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` for empty, overlong, unparsable or non-http(s) input.
pub fn validate_and_normalize_url(url: &str) -> Result<String, FetchError> {
    let url = url.trim();
    let invalid = |reason: &str| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    if url.is_empty() {
        return Err(invalid("URL not supplied"));
    }

    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(invalid(&format!(
            "longer than {MAX_URL_LENGTH} characters"
        )));
    }

    let parsed = ::url::Url::parse(&normalized).map_err(|e| invalid(&e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(normalized),
        other => Err(invalid(&format!("unsupported scheme '{other}'"))),
    }
}
