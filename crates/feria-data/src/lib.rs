//! HTTP fetch utilities for Feria storefronts.
//!
//! Thin wrapper around Spin's outbound HTTP support, used to pull the
//! published catalog sheet. Off-platform builds get a stub response so
//! callers can exercise their logic in native tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use feria_data::{cache_bust, FetchClient};
//!
//! let client = FetchClient::new().with_default_header("Accept", "text/csv");
//! let url = cache_bust("https://example.com/sheet.csv");
//! let text = client
//!     .get(&url)
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .text()?;
//! ```

mod error;
mod request;
mod response;
mod url;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;
pub use url::{cache_bust, cache_bust_at};

use std::collections::HashMap;

/// HTTP client for fetching remote documents.
///
/// This is a lightweight wrapper around Spin's HTTP client that carries a
/// set of default headers into every request it builds.
pub struct FetchClient {
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            default_headers: HashMap::new(),
        }
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        let mut builder = RequestBuilder::new(url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{cache_bust, FetchClient, FetchError, RequestBuilder, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_applies_default_headers() {
        let client = FetchClient::new().with_default_header("Accept", "text/csv");
        let builder = client.get("https://example.com/sheet.csv");
        assert_eq!(
            builder.headers.get("Accept").map(String::as_str),
            Some("text/csv")
        );
    }

    #[test]
    fn test_request_header_overrides_default() {
        let client = FetchClient::new().with_default_header("Accept", "text/csv");
        let builder = client.get("https://example.com").accept("text/plain");
        assert_eq!(
            builder.headers.get("Accept").map(String::as_str),
            Some("text/plain")
        );
    }
}
