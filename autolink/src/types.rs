//! Common types for link lookups
//!
//! These types flow between the fetcher, the extractor and the editor
//! bridge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search terms as typed by the user, trimmed of surrounding whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(terms: impl AsRef<str>) -> Self {
        Self(terms.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Terms in the form the results page expects: spaces become `+`
    pub fn to_query_param(&self) -> String {
        self.0.replace(' ', "+")
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A results page as returned by the search provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPage {
    /// The URL that was requested
    pub url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Response body as text
    pub html: String,
}

/// The extracted result URL, or `None` when nothing qualifies
pub type ResultLink = Option<String>;

/// Outcome of a "link for terms" lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkLookup {
    /// The trimmed query that was searched
    pub query: String,
    /// The first external result link
    pub link: ResultLink,
    /// The provider the page came from
    pub provider: String,
}

/// A value to be stored in a named editor variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorAssignment {
    pub variable: String,
    pub value: String,
}

impl EditorAssignment {
    /// Render as a single-line Vim `let` statement; single quotes are
    /// doubled inside the literal string and line breaks are dropped
    pub fn to_vim(&self) -> String {
        let value = self.value.replace(['\n', '\r'], "").replace('\'', "''");
        format!("let {} = '{}'", self.variable, value)
    }
}

impl fmt::Display for EditorAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_vim())
    }
}
