//! Editor entry points
//!
//! A thin layer over the fetcher, extractor and browser launcher. Host
//! surfaces (the CLI, the MCP server) call into this and only decide how to
//! present the outcome.

use std::sync::Arc;

use crate::browser::BrowserLauncher;
use crate::config::{Config, EditorConfig};
use crate::error::Result;
use crate::extract::LinkExtractor;
use crate::fetch::{QueryFetcher, ResultPageSource};
use crate::types::{EditorAssignment, LinkLookup, ResultLink, SearchQuery};

pub struct EditorBridge {
    source: Arc<dyn ResultPageSource>,
    browser: BrowserLauncher,
    extractor: LinkExtractor,
    excluded_domain: String,
    editor: EditorConfig,
}

impl EditorBridge {
    /// Build a bridge that fetches over HTTP and opens the system browser
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let fetcher = QueryFetcher::new(&config.search)?;
        Ok(Self::new(
            Arc::new(fetcher),
            BrowserLauncher::new(&config.browser),
            config,
        ))
    }

    pub fn new(source: Arc<dyn ResultPageSource>, browser: BrowserLauncher, config: &Config) -> Self {
        Self {
            source,
            browser,
            extractor: LinkExtractor::new(),
            excluded_domain: config.search.excluded_domain.clone(),
            editor: config.editor.clone(),
        }
    }

    pub fn provider(&self) -> &str {
        self.source.name()
    }

    /// Entry point A: open a browser search for `terms`
    pub fn open_search(&self, terms: &str) -> String {
        self.browser.open_search(terms)
    }

    /// Entry point B: the first external result link for `terms`
    ///
    /// `Ok(None)` means the page had no qualifying link. Fetch failures are
    /// returned as errors.
    pub async fn link_for_terms(&self, terms: &str) -> Result<ResultLink> {
        Ok(self.lookup(terms).await?.link)
    }

    /// Like [`link_for_terms`](Self::link_for_terms) but keeps the query and
    /// provider alongside the link
    pub async fn lookup(&self, terms: &str) -> Result<LinkLookup> {
        let query = SearchQuery::new(terms);

        let link = if query.is_empty() {
            tracing::debug!("Empty query, skipping fetch");
            None
        } else {
            let page = self.source.fetch(&query).await?;
            tracing::debug!(
                "{} candidate links on results page",
                self.extractor.result_links(&page.html).count()
            );
            self.extractor
                .first_external_link(&page.html, &self.excluded_domain)
        };

        match &link {
            Some(link) => tracing::info!("Link for '{}': {}", query, link),
            None => tracing::info!("No link for '{}'", query),
        }

        Ok(LinkLookup {
            query: query.to_string(),
            link,
            provider: self.provider().to_string(),
        })
    }

    /// The assignment that stores `link` in the configured editor variable
    pub fn assignment(&self, link: Option<&str>) -> EditorAssignment {
        EditorAssignment {
            variable: self.editor.variable.clone(),
            value: link
                .map(str::to_string)
                .unwrap_or_else(|| self.editor.absent_value.clone()),
        }
    }
}
