//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `package_ranker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Writing the ranked listings to stdout or a file
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process;

use package_ranker::config::{
    DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_RESPONSE_BODY_SIZE,
};
use package_ranker::error_handling::failure_kind;
use package_ranker::export::{open_sink, write_listings};
use package_ranker::initialization::init_logger_with;
use package_ranker::{
    run_scrape, Config, ExtractionStrategy, LogFormat, LogLevel, OutputFormat, ParseMode,
    PriceFallback,
};

/// Scrapes a product page and prints its packages ordered by annual cost.
#[derive(Debug, Parser)]
#[command(name = "package_ranker", version, about)]
struct Cli {
    /// The web URL to scrape
    url: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Redirect hops to follow (0 returns the redirect response itself)
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    max_redirects: usize,

    /// Largest response body accepted, in bytes
    #[arg(long, default_value_t = MAX_RESPONSE_BODY_SIZE)]
    max_body_bytes: usize,

    /// Handling of malformed markup
    #[arg(long, value_enum, default_value_t = ParseMode::Lenient)]
    parse_mode: ParseMode,

    /// How listing fields are matched to product containers
    #[arg(long, value_enum, default_value_t = ExtractionStrategy::PerContainer)]
    strategy: ExtractionStrategy,

    /// Handling of prices that contain no number
    #[arg(long, value_enum, default_value_t = PriceFallback::Error)]
    price_fallback: PriceFallback,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_parts(self) -> (Config, OutputFormat, Option<PathBuf>) {
        let config = Config {
            url: self.url,
            log_level: self.log_level,
            log_format: self.log_format,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent,
            max_redirects: self.max_redirects,
            max_body_bytes: self.max_body_bytes,
            parse_mode: self.parse_mode,
            strategy: self.strategy,
            price_fallback: self.price_fallback,
        };
        (config, self.format, self.output)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Optional .env (e.g. RUST_LOG); absence is not an error
    let _ = dotenvy::dotenv();

    let (config, format, output) = Cli::parse().into_parts();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let result = async {
        let report = run_scrape(config).await?;
        let sink = open_sink(output.as_deref())?;
        write_listings(&report.listings, format, sink).context("Failed to write listings")?;
        info!(
            "Ranked {} listing{} from {} in {:.2}s",
            report.listings.len(),
            if report.listings.len() == 1 { "" } else { "s" },
            report.url,
            report.elapsed_seconds
        );
        Ok::<_, anyhow::Error>(())
    }
    .await;

    if let Err(e) = result {
        error!("Scrape failed ({} error)", failure_kind(&e));
        eprintln!("package_ranker error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
