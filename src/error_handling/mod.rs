//! Error handling.
//!
//! Errors are split by where they arise:
//! - **Initialization**: logger and HTTP client setup
//! - **Fetch**: URL validation, transport and HTTP status failures
//! - **Scrape**: page structure, price parsing, strict markup and output failures

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, ScrapeError};

/// Category label for a failed run, as written to the failure log line.
///
/// Pipeline failures report their `ScrapeError::kind`; anything else in the
/// chain (configuration, client setup) is reported as `setup`.
pub fn failure_kind(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ScrapeError>())
        .map_or("setup", ScrapeError::kind)
}
