//! Utility functions.
//!
//! This module provides CSS selector parsing helpers shared by the extractor.

mod selector;

pub use selector::parse_selector_unsafe;
