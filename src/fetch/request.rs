//! HTTP request building.

/// Browser-like request headers.
///
/// Some hosting platforms serve a stripped page (or a 403) to clients that do
/// not negotiate HTML like a browser does.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-GB,en;q=0.9")
            .header(reqwest::header::CACHE_CONTROL, "max-age=0")
    }
}
