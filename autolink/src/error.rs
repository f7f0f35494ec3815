//! Error types for autolink
//!
//! A missing result link is not an error at the library level: lookups
//! return `Ok(None)`. [`AutolinkError::NoResult`] exists for callers that
//! ask for a strict result.

use rmcp::ErrorData as McpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutolinkError {
    /// Transport failure: DNS, connect, timeout or a broken body
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("no result link for '{0}'")]
    NoResult(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AutolinkError {
    /// True for the failures the fetcher reports as network errors
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, AutolinkError>;

impl From<AutolinkError> for McpError {
    fn from(err: AutolinkError) -> Self {
        match err {
            AutolinkError::Config(_) => McpError::invalid_params(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}
