//! Configuration types.
//!
//! This module defines enums and structs used for configuration. The library
//! `Config` carries no CLI dependencies; `main.rs` maps its arguments onto it.

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_RESPONSE_BODY_SIZE,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the HTML parser treats recoverable markup errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ParseMode {
    /// Ignore recoverable structural errors (default)
    Lenient,
    /// Fail on the first markup error reported by the parser
    Strict,
}

/// How listing fields are tied to product containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExtractionStrategy {
    /// Look up title, description and price inside each container (default)
    PerContainer,
    /// Run three document-wide queries and pair results by position
    DocumentOrder,
}

/// What the price parser does with text that holds no number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PriceFallback {
    /// Fail with a parse error (default)
    Error,
    /// Log a warning and use 0
    Zero,
}

/// Serialization format for the ranked listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON array (default)
    Json,
    /// Indented JSON array
    JsonPretty,
    /// One JSON object per line
    Jsonl,
    /// CSV with a header row
    Csv,
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid configuration for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and which values are accepted
    pub message: String,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use package_ranker::Config;
///
/// let config = Config {
///     url: "https://example.com/packages".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page to scrape
    pub url: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Redirect hops followed before giving up
    pub max_redirects: usize,

    /// Largest response body accepted, in bytes
    pub max_body_bytes: usize,

    /// Markup error handling
    pub parse_mode: ParseMode,

    /// Field-to-container alignment
    pub strategy: ExtractionStrategy,

    /// Handling of non-numeric price text
    pub price_fallback: PriceFallback,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            max_body_bytes: MAX_RESPONSE_BODY_SIZE,
            parse_mode: ParseMode::Lenient,
            strategy: ExtractionStrategy::PerContainer,
            price_fallback: PriceFallback::Error,
        }
    }
}

impl Config {
    /// Checks that every value is usable before any network activity.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.url.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "url",
                message: "URL not supplied".to_string(),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "timeout_seconds must be greater than 0".to_string(),
            });
        }
        if self.timeout_seconds > 300 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: format!(
                    "timeout_seconds must be at most 300 (got {})",
                    self.timeout_seconds
                ),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "user_agent must not be empty".to_string(),
            });
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigValidationError {
                field: "max_body_bytes",
                message: "max_body_bytes must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
