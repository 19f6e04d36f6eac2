//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, page markup)
//! - Option types shared by the library and the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Config, ConfigValidationError, ExtractionStrategy, LogFormat, LogLevel, OutputFormat,
    ParseMode, PriceFallback,
};
