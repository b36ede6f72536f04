//! HTTP retrieval for page metadata.

use std::time::Duration;

use tracing::debug;

use crate::error::{FetchError, Result};
use crate::meta::PageMeta;
use crate::parse::parse_meta;

/// Bound on the outbound page fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like identification; some shops refuse the default client UA.
const USER_AGENT: &str = "Mozilla/5.0 (compatible)";

/// Metadata scraper holding a configured HTTP client.
///
/// Stateless beyond the client; a single instance is shared across all
/// in-flight requests.
pub struct PageScraper {
    client: reqwest::Client,
}

impl PageScraper {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch raw HTML from a URL.
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Retrieve `url` and extract display metadata from its markup.
    ///
    /// The returned record carries the submitted `url` even when the request
    /// was redirected. No retries; a failed fetch surfaces as [`FetchError`].
    pub async fn fetch_meta(&self, url: &str) -> Result<PageMeta> {
        debug!(url = %url, "Fetching page metadata");
        let html = self.fetch_html(url).await?;
        Ok(parse_meta(&html, url))
    }
}
