//! package_ranker library: scrape a product page and rank its packages
//!
//! This library fetches a single HTML page, extracts the product packages it
//! lists (title, description, price, discount), and orders them by what each
//! costs over a year, most expensive first.
//!
//! # Example
//!
//! ```no_run
//! use package_ranker::{run_scrape, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com/packages".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_scrape(config).await?;
//! for listing in &report.listings {
//!     println!("{}: {}", listing.title, listing.price);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Pages already in memory can be ranked without any network access through
//! [`scrape_document`].

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
mod models;
pub mod parse;
pub mod rank;
mod utils;

// Re-export public API
pub use config::{
    Config, ExtractionStrategy, LogFormat, LogLevel, OutputFormat, ParseMode, PriceFallback,
};
pub use error_handling::{FetchError, ScrapeError};
pub use models::{Listing, PlanKind, RankedListing, RawListing};
pub use run::{run_scrape, scrape, scrape_document, ScrapeReport};

// Internal run module (contains the pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::time::Instant;

    use crate::config::Config;
    use crate::error_handling::ScrapeError;
    use crate::fetch::{fetch_html, validate_and_normalize_url};
    use crate::initialization::init_client;
    use crate::models::Listing;
    use crate::parse::{extract_listings, parse_document};
    use crate::rank::rank;

    /// Results of a scrape.
    #[derive(Debug, Clone)]
    pub struct ScrapeReport {
        /// URL that was fetched, after normalization
        pub url: String,
        /// Listings in ranked order
        pub listings: Vec<Listing>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a scrape with the provided configuration.
    ///
    /// Validates the configuration, builds the HTTP client, then runs [`scrape`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the client cannot be
    /// built, or any pipeline stage fails. Pipeline failures carry a
    /// [`ScrapeError`] that can be recovered with `downcast_ref`.
    pub async fn run_scrape(config: Config) -> Result<ScrapeReport> {
        let start = Instant::now();
        config.validate().context("Invalid configuration")?;
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let url = validate_and_normalize_url(&config.url).map_err(ScrapeError::from)?;
        let listings = scrape(&client, &url, &config).await?;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        Ok(ScrapeReport {
            url,
            listings,
            elapsed_seconds,
        })
    }

    /// Fetches `url` and ranks the listings it contains.
    ///
    /// # Errors
    ///
    /// Returns the first error from fetching, parsing, extraction or ranking.
    pub async fn scrape(
        client: &reqwest::Client,
        url: &str,
        config: &Config,
    ) -> Result<Vec<Listing>, ScrapeError> {
        let body = fetch_html(client, url, config.max_body_bytes).await?;
        scrape_document(&body, config)
    }

    /// Ranks the listings found in an HTML body.
    ///
    /// # Errors
    ///
    /// - `ScrapeError::Markup` in strict parse mode on malformed markup
    /// - `ScrapeError::Structure` when the product markup is missing or inconsistent
    /// - `ScrapeError::Parse` when a price or discount is not numeric
    pub fn scrape_document(body: &str, config: &Config) -> Result<Vec<Listing>, ScrapeError> {
        let document = parse_document(body, config.parse_mode)?;
        let raw = extract_listings(&document, config.strategy)?;
        info!("Extracted {} product listings", raw.len());
        rank(raw, config.price_fallback)
    }
}
