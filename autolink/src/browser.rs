//! Browser search
//!
//! Opens a search page for free-form terms in the default browser. Launch
//! failures are logged and dropped.

use std::sync::Arc;

use crate::config::BrowserConfig;

/// Something that can open a URL
pub trait Launcher: Send + Sync {
    fn launch(&self, url: &str) -> std::io::Result<()>;
}

/// Opens URLs with the platform's default browser
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn launch(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// Builds search URLs and hands them to a [`Launcher`]
#[derive(Clone)]
pub struct BrowserLauncher {
    search_url: String,
    launcher: Arc<dyn Launcher>,
}

impl BrowserLauncher {
    pub fn new(config: &BrowserConfig) -> Self {
        Self::with_launcher(config, Arc::new(SystemBrowser))
    }

    pub fn with_launcher(config: &BrowserConfig, launcher: Arc<dyn Launcher>) -> Self {
        Self {
            search_url: config.search_url.clone(),
            launcher,
        }
    }

    /// The search URL for `terms`, percent-encoded as given; `/` is left
    /// as-is
    pub fn search_url(&self, terms: &str) -> String {
        let encoded = urlencoding::encode(terms).replace("%2F", "/");
        format!("{}?q={}", self.search_url, encoded)
    }

    /// Open a browser search for `terms` and return the URL that was opened
    pub fn open_search(&self, terms: &str) -> String {
        let url = self.search_url(terms);
        tracing::info!("Opening browser search: {}", url);

        if let Err(e) = self.launcher.launch(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }

        url
    }
}
