//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures while retrieving the document.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The supplied URL is unusable (bad syntax, unsupported scheme, too long).
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as supplied by the caller
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The server answered with a status above 308.
    #[error("Unable to retrieve URL {url}: HTTP {status}")]
    Status {
        /// Response status code
        status: u16,
        /// Final URL of the request
        url: String,
    },

    /// Connect, timeout, redirect or body read failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The response body exceeded the configured limit.
    #[error("Response body too large: {size} bytes (limit {limit})")]
    BodyTooLarge {
        /// Observed or declared size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },
}

/// Errors surfaced by the scrape pipeline.
///
/// The pipeline never recovers from any of these; the first one aborts the run.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The document could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The document lacks the expected product markup.
    #[error("Invalid page structure: {0}")]
    Structure(String),

    /// A price or discount is not numeric once the currency markers are removed.
    #[error("Unable to parse price from '{text}'")]
    Parse {
        /// The text as found in the document
        text: String,
    },

    /// Strict parsing rejected malformed markup.
    #[error("Malformed HTML: {0}")]
    Markup(String),

    /// The listings could not be serialized or written.
    #[error("Output error: {0}")]
    Output(String),
}

impl ScrapeError {
    /// Short machine-friendly label for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Fetch(_) => "fetch",
            ScrapeError::Structure(_) => "structure",
            ScrapeError::Parse { .. } => "parse",
            ScrapeError::Markup(_) => "markup",
            ScrapeError::Output(_) => "output",
        }
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(e: std::io::Error) -> Self {
        ScrapeError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(e: serde_json::Error) -> Self {
        ScrapeError::Output(e.to_string())
    }
}

impl From<csv::Error> for ScrapeError {
    fn from(e: csv::Error) -> Self {
        ScrapeError::Output(e.to_string())
    }
}
