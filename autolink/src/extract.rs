//! First external link extraction
//!
//! Scans a results page with a regular expression rather than an HTML
//! parser. The pattern is tied to the provider's markup: the text `div`,
//! then the `web-result` marker, then the next `href="..."`. Matching runs
//! across line breaks. If the markup changes the scan finds nothing and
//! callers see an absent link; malformed input never fails.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ResultLink;

/// `(?s)` lets `.` cross newlines; every quantifier is lazy so each match
/// stops at the first href after its marker
const RESULT_PATTERN: &str = r#"(?s)div.*?web-result.*?href="(.*?)""#;

static DEFAULT_EXTRACTOR: LazyLock<LinkExtractor> = LazyLock::new(LinkExtractor::new);

/// Extracts result links from a results page
pub struct LinkExtractor {
    result_re: Regex,
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            result_re: Regex::new(RESULT_PATTERN).expect("result pattern is a valid regex"),
        }
    }

    /// All matched href values, in page order
    pub fn result_links<'a>(&'a self, html: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.result_re
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// The first matched href that does not contain `excluded_domain`
    pub fn first_external_link(&self, html: &str, excluded_domain: &str) -> ResultLink {
        self.result_links(html)
            .find(|link| !link.contains(excluded_domain))
            .map(str::to_string)
    }
}

/// Return the first result link in `html` that does not contain
/// `excluded_domain_substring`, or `None`
pub fn extract_first_external_link(html: &str, excluded_domain_substring: &str) -> ResultLink {
    DEFAULT_EXTRACTOR.first_external_link(html, excluded_domain_substring)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DDG: &str = "duckduckgo.com";

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_first_external_link("", DDG), None);
    }

    #[test]
    fn test_no_marker() {
        let html = r#"<html><body>
<div class="result"><a href="https://example.com/a">A</a></div>
<div class="links"><a href="https://example.com/b">B</a></div>
</body></html>"#;
        assert_eq!(extract_first_external_link(html, DDG), None);
    }

    #[test]
    fn test_all_links_excluded() {
        let html = r#"
<div class="result web-result"><a href="https://duckduckgo.com/l/?uddg=1">one</a></div>
<div class="result web-result"><a href="https://duckduckgo.com/l/?uddg=2">two</a></div>
"#;
        assert_eq!(extract_first_external_link(html, DDG), None);
    }

    #[test]
    fn test_only_ad_link() {
        let html = r#"<div class="result web-result"><a href="https://duckduckgo.com/y?ad=1">ad</a></div>"#;
        assert_eq!(extract_first_external_link(html, DDG), None);
    }

    #[test]
    fn test_first_qualifying_link_wins() {
        let html = r#"
<div class="result web-result"><a href="https://duckduckgo.com/y?ad=1">A</a></div>
<div class="result web-result"><a href="https://b.example.org/page">B</a></div>
<div class="result web-result"><a href="https://c.example.net/page">C</a></div>
"#;
        assert_eq!(
            extract_first_external_link(html, DDG),
            Some("https://b.example.org/page".to_string())
        );
    }

    #[test]
    fn test_marker_and_href_on_different_lines() {
        let html = "<div class=\"results_links web-result\">\n  <div class=\"links_main\">\n    <a href=\"https://example.com/x\">X</a>\n  </div>\n</div>";
        assert_eq!(
            extract_first_external_link(html, DDG),
            Some("https://example.com/x".to_string())
        );
    }

    #[test]
    fn test_href_before_marker_is_skipped() {
        let html = r#"<div class="header"><a href="https://example.com/logo">logo</a></div>
<div class="result web-result"><a href="https://example.com/result">result</a></div>"#;
        assert_eq!(
            extract_first_external_link(html, DDG),
            Some("https://example.com/result".to_string())
        );
    }

    #[test]
    fn test_truncated_html() {
        let html = r#"<div class="result web-result"><a href="https://example.com/cut"#;
        assert_eq!(extract_first_external_link(html, DDG), None);

        let html = r#"<div class="result web-result"><a href="https://example.com/ok">ok</a><div class="web-res"#;
        assert_eq!(
            extract_first_external_link(html, DDG),
            Some("https://example.com/ok".to_string())
        );
    }

    #[test]
    fn test_result_links_in_order() {
        let extractor = LinkExtractor::new();
        let html = r#"
<div class="result web-result"><a href="https://duckduckgo.com/a">A</a></div>
<div class="result web-result"><a href="https://b.example/">B</a></div>
"#;
        let links: Vec<&str> = extractor.result_links(html).collect();
        assert_eq!(links, vec!["https://duckduckgo.com/a", "https://b.example/"]);
    }

    #[test]
    fn test_other_excluded_domain() {
        let extractor = LinkExtractor::default();
        let html = r#"
<div class="result web-result"><a href="https://duckduckgo.com/a">A</a></div>
<div class="result web-result"><a href="https://b.example/">B</a></div>
"#;
        assert_eq!(
            extractor.first_external_link(html, "b.example"),
            Some("https://duckduckgo.com/a".to_string())
        );
    }
}
