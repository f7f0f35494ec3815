//! Configuration loading for autolink
//!
//! Configuration is loaded from:
//! 1. Environment variable AUTOLINK_CONFIG_PATH
//! 2. ~/.config/autolink/config.toml
//! 3. Default values
//!
//! `AUTOLINK_SEARCH_URL` overrides the results page endpoint after the file
//! is read.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{AutolinkError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Results page lookup
    #[serde(default)]
    pub search: SearchConfig,
    /// Browser search
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Editor variable output
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Results page provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Results page endpoint; the query is appended as `q=`
    #[serde(default = "default_search_url")]
    pub url: String,
    /// Links containing this substring belong to the provider and are skipped
    #[serde(default = "default_excluded_domain")]
    pub excluded_domain: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Browser search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Search page opened in the browser; the query is appended as `q=`
    #[serde(default = "default_browser_search_url")]
    pub search_url: String,
}

/// Editor output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Variable that receives the link
    #[serde(default = "default_variable")]
    pub variable: String,
    /// Value written when no link was found
    #[serde(default)]
    pub absent_value: String,
}

// Default value functions
fn default_search_url() -> String {
    "https://duckduckgo.com/html/".to_string()
}

fn default_excluded_domain() -> String {
    "duckduckgo.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; autolink/0.1)".to_string()
}

fn default_browser_search_url() -> String {
    "https://google.com/search".to_string()
}

fn default_variable() -> String {
    "g:autolink_link".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: default_search_url(),
            excluded_domain: default_excluded_domain(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            search_url: default_browser_search_url(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            variable: default_variable(),
            absent_value: String::new(),
        }
    }
}

fn validate_url(name: &str, value: &str) -> Result<()> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| AutolinkError::Config(format!("{} '{}': {}", name, value, e)))
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        validate_url("search.url", &self.url)
    }
}

impl BrowserConfig {
    pub fn validate(&self) -> Result<()> {
        validate_url("browser.search_url", &self.search_url)
    }
}

impl EditorConfig {
    /// The variable must be usable on the left of a Vim `let`
    pub fn validate(&self) -> Result<()> {
        let valid = !self.variable.is_empty()
            && self
                .variable
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '#' | '.'));
        if !valid {
            return Err(AutolinkError::Config(format!(
                "editor.variable '{}' is not a valid variable name",
                self.variable
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the default location or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(Self::find_config_path().as_deref())
    }

    /// Load configuration from `path` if it exists, then apply environment
    /// overrides
    ///
    /// Sections are validated by the code that uses them, so a broken
    /// `[search]` table does not stop a browser search.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            Some(path) => {
                tracing::debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(std::env::var("AUTOLINK_SEARCH_URL").ok());
        Ok(config)
    }

    fn apply_overrides(&mut self, search_url: Option<String>) {
        if let Some(url) = search_url.filter(|u| !u.is_empty()) {
            self.search.url = url;
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.browser.validate()?;
        self.editor.validate()
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("AUTOLINK_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home)
                .join(".config")
                .join("autolink")
                .join("config.toml");
            return Some(path);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.url, "https://duckduckgo.com/html/");
        assert_eq!(config.search.excluded_domain, "duckduckgo.com");
        assert_eq!(config.browser.search_url, "https://google.com/search");
        assert_eq!(config.editor.variable, "g:autolink_link");
        assert_eq!(config.editor.absent_value, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[search]\ntimeout_seconds = 3\n\n[editor]\nvariable = \"b:result\"\nabsent_value = \"NONE\""
        )
        .unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.search.timeout_seconds, 3);
        assert_eq!(config.search.excluded_domain, "duckduckgo.com");
        assert_eq!(config.editor.variable, "b:result");
        assert_eq!(config.editor.absent_value, "NONE");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.browser.search_url, "https://google.com/search");
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search\nurl = ").unwrap();

        let err = Config::load_from(Some(file.path())).unwrap_err();
        assert!(matches!(err, AutolinkError::ConfigParse(_)));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = Config::default();
        config.browser.search_url = "not a url".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("browser.search_url"));
    }

    #[test]
    fn test_broken_search_url_does_not_block_browser() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nurl = \"not a url\"").unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert!(config.browser.validate().is_ok());
        assert!(matches!(
            config.search.validate(),
            Err(AutolinkError::Config(_))
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_variable_rejected() {
        let mut config = Config::default();
        config.editor.variable = "g:bad name".to_string();
        assert!(matches!(config.validate(), Err(AutolinkError::Config(_))));
    }

    #[test]
    fn test_search_url_override() {
        let mut config = Config::default();
        config.apply_overrides(Some("http://127.0.0.1:9000/html/".to_string()));
        assert_eq!(config.search.url, "http://127.0.0.1:9000/html/");

        config.apply_overrides(Some(String::new()));
        assert_eq!(config.search.url, "http://127.0.0.1:9000/html/");
    }
}
