//! Page acquisition over plain HTTP GET.
//!
//! Fetching is deliberately dumb: one request, a browser-like User-Agent, a
//! fixed timeout, and the raw body bytes handed onwards unmodified. No
//! retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use sitebrief_common::{Result, SitebriefError};
use url::Url;

/// User-Agent presented to fetched sites. Some origins serve reduced or
/// blocked pages to non-browser agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

/// Default per-request timeout for page fetches.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of raw page bytes. Implemented over HTTP in production and by
/// fakes in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieve the raw byte stream behind `url`.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// reqwest-backed fetcher with a browser-like User-Agent.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Build a fetcher with the given User-Agent and per-request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| SitebriefError::Fetch(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetcher with [`DEFAULT_USER_AGENT`] and [`DEFAULT_FETCH_TIMEOUT`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_USER_AGENT, DEFAULT_FETCH_TIMEOUT)
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| SitebriefError::Fetch(format!("failed to fetch {url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SitebriefError::Fetch(format!(
                "page fetch failed with status {status} for {url}"
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| SitebriefError::Fetch(format!("failed to read body of {url}: {e}")))?;

        tracing::info!(
            target: "web.fetch",
            url = %url,
            bytes = bytes.len(),
            "page fetched"
        );
        Ok(bytes.to_vec())
    }
}
