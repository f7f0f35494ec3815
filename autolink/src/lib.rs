//! Autolink Library
//!
//! Looks up the first external result link for a search phrase, or opens a
//! browser search for it. Built to be driven from editor scripts.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use autolink::{Config, EditorBridge};
//!
//! let bridge = EditorBridge::from_config(&Config::load()?)?;
//! let link = bridge.link_for_terms("rust borrow checker").await?;
//! ```
//!
//! The extractor on its own is a pure function:
//!
//! ```rust
//! let html = r#"<div class="web-result"><a href="https://example.com/x">x</a></div>"#;
//! let link = autolink::extract_first_external_link(html, "duckduckgo.com");
//! assert_eq!(link.as_deref(), Some("https://example.com/x"));
//! ```
//!
//! # Configuration
//! Set `AUTOLINK_CONFIG_PATH` or configure in `~/.config/autolink/config.toml`

pub mod bridge;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod server;
pub mod types;

pub use bridge::EditorBridge;
pub use browser::{BrowserLauncher, Launcher, SystemBrowser};
pub use config::Config;
pub use error::{AutolinkError, Result};
pub use extract::{extract_first_external_link, LinkExtractor};
pub use fetch::{QueryFetcher, ResultPageSource};
pub use server::AutolinkMcpServer;
pub use types::{EditorAssignment, LinkLookup, ResultLink, ResultPage, SearchQuery};
