//! Article download and text extraction.
//!
//! [`Fetcher`] downloads a page over HTTP(S) and hands the body to the
//! `dom_smoothie` readability collaborator, keeping only the plain text.
//! One URL in, one text blob out — no crawling, no retries.

pub mod extract;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use readcache_shared::{FetchConfig, ReadcacheError, Result};

/// Default User-Agent string for fetch requests.
const USER_AGENT: &str = concat!("readcache/", env!("CARGO_PKG_VERSION"));

/// An article fetched and extracted from a URL.
///
/// Only the text body survives; title, byline, and other metadata from the
/// extraction library are discarded.
#[derive(Debug, Clone)]
pub struct Article {
    /// Source URL the article was fetched from.
    pub url: Url,
    /// Extracted plain-text body.
    pub text: String,
}

/// HTTP fetcher wrapping a configured `reqwest` client.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let user_agent = config.user_agent.clone().unwrap_or_else(|| USER_AGENT.into());

        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReadcacheError::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch `url` and return its extracted article text.
    ///
    /// Network, transport, and non-2xx failures map to
    /// [`ReadcacheError::Fetch`]; extraction failures on the retrieved body
    /// map to [`ReadcacheError::Extract`].
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_content(&self, url: &Url) -> Result<Article> {
        debug!("fetching article page");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| ReadcacheError::Fetch(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReadcacheError::Fetch(format!("{url}: HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReadcacheError::Fetch(format!("{url}: body read failed: {e}")))?;

        debug!(body_len = body.len(), "page downloaded, extracting");

        let text = extract::article_text(&body, Some(url.as_str()))?;

        Ok(Article {
            url: url.clone(),
            text,
        })
    }
}
