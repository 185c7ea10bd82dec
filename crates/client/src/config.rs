//! Client Config

use std::time::Duration;

/// Where the API lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Settings for [`crate::HttpCatalogApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, including the `/api` prefix.
    pub base_url: String,

    /// Per-request timeout. Ignored in the browser.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}
