//! Configuration constants.
//!
//! Defaults for the fetcher, the extractor markup and the price parser.

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum redirect hops followed before the request fails
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum response body size in bytes (2MB)
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length (matches common browser and server limits)
pub const MAX_URL_LENGTH: usize = 2048;

/// Highest HTTP status accepted as a successful fetch (308 Permanent Redirect)
pub const MAX_ACCEPTED_STATUS: u16 = 308;

// Page markup
/// Product container: a `<div>` whose class contains `package ` (the trailing
/// space excludes `package-name`, `package-price` and friends)
pub const CONTAINER_SELECTOR: &str = r#"div[class*="package "]"#;
/// Block holding the description text, despite its name
pub const DESCRIPTION_SELECTOR: &str = r#"div[class*="package-name"]"#;
/// Block holding the price `<span>` and, for annual plans, the discount `<p>`
pub const PRICE_SELECTOR: &str = r#"div[class*="package-price"]"#;
/// Heading tag for the title, found under a container's direct child `<div>`
pub const TITLE_TAG: &str = "h3";
/// Tag inside the price block carrying the price
pub const PRICE_VALUE_TAG: &str = "span";
/// Tag inside the price block carrying the discount
pub const DISCOUNT_TAG: &str = "p";

// Price text
/// Prefix on discount paragraphs
pub const SAVE_PREFIX: &str = "Save ";
/// Currency symbol as UTF-8
pub const CURRENCY_SYMBOL: &str = "£";
/// Currency symbol as it appears when UTF-8 bytes were decoded as Latin-1
pub const CURRENCY_SYMBOL_MOJIBAKE: &str = "Â£";
