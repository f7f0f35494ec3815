//! Tracing setup
//!
//! Logs always go to stderr: stdout carries either the editor assignment or
//! the MCP protocol.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter from `RUST_LOG` if set, otherwise `warn` for
/// dependencies and `default_level` for this crate
fn build_filter(rust_log: Option<&str>, default_level: &str) -> anyhow::Result<EnvFilter> {
    match rust_log.filter(|s| !s.is_empty()) {
        Some(directives) => Ok(EnvFilter::try_new(directives)?),
        None => {
            let directive = format!("autolink={}", default_level);
            Ok(EnvFilter::new("warn").add_directive(directive.parse()?))
        }
    }
}

/// Initialize tracing for the `autolink` binary
///
/// - `RUST_LOG` wins over `default_level` when set
/// - No ANSI colors
/// - `LOG_FORMAT=json` for structured JSON output
pub fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), default_level)?;

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins() {
        let filter = build_filter(Some("autolink=debug"), "warn").unwrap().to_string();
        assert!(filter.contains("autolink=debug"));
        assert!(!filter.contains("warn"));
    }

    #[test]
    fn test_default_level_without_rust_log() {
        let filter = build_filter(None, "info").unwrap().to_string();
        assert!(filter.contains("autolink=info"));

        let filter = build_filter(Some(""), "error").unwrap().to_string();
        assert!(filter.contains("autolink=error"));
    }

    #[test]
    fn test_invalid_rust_log() {
        assert!(build_filter(Some("autolink=loud"), "warn").is_err());
    }
}
