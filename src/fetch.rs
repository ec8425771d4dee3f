//! Topic detail-page fetcher wrapping reqwest.
//!
//! One GET per topic against `<base_url><topic_id>`, with a fixed timeout
//! and User-Agent. No retries and no backoff: a failed topic stays out of
//! the cache and is naturally retried on the next run.

use crate::config::Config;
use url::Url;

/// Why a topic page could not be fetched this run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-200 status.
    #[error("status {status}")]
    Status { status: u16 },

    /// Timeout, connection failure, or any other transport-level error.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL plus topic id does not form a valid URL.
    #[error("invalid topic URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// HTTP fetcher for topic detail pages.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl PageFetcher {
    /// Build a fetcher from the run configuration.
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Detail-page URL for a topic.
    pub fn topic_url(&self, topic_id: u32) -> String {
        format!("{}{}", self.base_url, topic_id)
    }

    /// Fetch the detail page for `topic_id`, returning the body on 200.
    pub async fn fetch(&self, topic_id: u32) -> Result<String, FetchError> {
        let raw = self.topic_url(topic_id);
        let url = Url::parse(&raw).map_err(|source| FetchError::InvalidUrl { url: raw, source })?;

        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status { status });
        }

        Ok(resp.text().await?)
    }
}
