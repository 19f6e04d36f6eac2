//! Document retrieval.
//!
//! The fetcher performs a single GET with no retries. Responses with a status
//! above 308 (Permanent Redirect) are failures; transport errors are passed
//! through unchanged.

mod request;
mod url_validation;

use log::{debug, info};

use crate::config::MAX_ACCEPTED_STATUS;
use crate::error_handling::FetchError;

use request::RequestHeaders;

pub use url_validation::validate_and_normalize_url;

/// Fetches the HTML body of `url`.
///
/// # Arguments
///
/// * `client` - HTTP client from `init_client`
/// * `url` - Validated absolute URL
/// * `max_body_bytes` - Largest body accepted
///
/// # Errors
///
/// - `FetchError::Status` if the final response status is above 308
/// - `FetchError::BodyTooLarge` if the body exceeds `max_body_bytes`
/// - `FetchError::Transport` for connect, timeout, redirect and read failures
pub async fn fetch_html(
    client: &reqwest::Client,
    url: &str,
    max_body_bytes: usize,
) -> Result<String, FetchError> {
    debug!("Requesting {url}");
    let response = RequestHeaders::apply_to_request_builder(client.get(url))
        .send()
        .await?;

    let status = response.status();
    let final_url = response.url().to_string();
    if status.as_u16() > MAX_ACCEPTED_STATUS {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: final_url,
        });
    }

    if let Some(declared) = response.content_length() {
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        if declared > max_body_bytes {
            return Err(FetchError::BodyTooLarge {
                size: declared,
                limit: max_body_bytes,
            });
        }
    }

    let bytes = response.bytes().await?;
    if bytes.len() > max_body_bytes {
        return Err(FetchError::BodyTooLarge {
            size: bytes.len(),
            limit: max_body_bytes,
        });
    }

    info!(
        "Fetched {} bytes from {final_url} (HTTP {})",
        bytes.len(),
        status.as_u16()
    );
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
