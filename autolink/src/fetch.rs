//! Results page fetching
//!
//! One GET per lookup. No retries and no caching; transport failures and
//! non-2xx statuses come back as network errors.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::{AutolinkError, Result};
use crate::types::{ResultPage, SearchQuery};

/// Trait for anything that can produce a results page for a query
#[async_trait]
pub trait ResultPageSource: Send + Sync {
    /// Name of the provider, used in logs and lookup records
    fn name(&self) -> &str;

    /// Fetch the results page for `query`
    async fn fetch(&self, query: &SearchQuery) -> Result<ResultPage>;
}

/// Fetches results pages from an HTML search endpoint
#[derive(Clone)]
pub struct QueryFetcher {
    client: Client,
    config: SearchConfig,
}

impl QueryFetcher {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| AutolinkError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// The request URL for `query`
    pub fn query_url(&self, query: &SearchQuery) -> String {
        let separator = if self.config.url.contains('?') { '&' } else { '?' };
        format!("{}{}q={}", self.config.url, separator, query.to_query_param())
    }
}

#[async_trait]
impl ResultPageSource for QueryFetcher {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn fetch(&self, query: &SearchQuery) -> Result<ResultPage> {
        let url = self.query_url(query);
        tracing::debug!("Fetching results page: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| AutolinkError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AutolinkError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|source| AutolinkError::Network {
                url: url.clone(),
                source,
            })?;

        tracing::debug!("Received {} bytes from {}", html.len(), url);

        Ok(ResultPage {
            url,
            status_code: status.as_u16(),
            html,
        })
    }
}
