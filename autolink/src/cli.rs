//! Output of the `link` subcommand
//!
//! On a fetch error nothing is rendered, so the caller prints nothing and
//! the editor variable stays unset.

use crate::bridge::EditorBridge;
use crate::config::Config;
use crate::error::{AutolinkError, Result};
use crate::types::ResultLink;

/// Replace the editor variable with `--var`, if given, and check it
pub fn apply_var_override(config: &mut Config, var: Option<String>) -> Result<()> {
    if let Some(var) = var {
        config.editor.variable = var;
    }
    config.editor.validate()
}

/// Render a lookup outcome for stdout
///
/// Without `raw` this is the editor assignment, with the absent value when
/// nothing was found. With `raw` it is the bare URL, and an absent link is
/// [`AutolinkError::NoResult`].
pub fn render_link(bridge: &EditorBridge, terms: &str, link: ResultLink, raw: bool) -> Result<String> {
    if !raw {
        return Ok(bridge.assignment(link.as_deref()).to_vim());
    }

    link.ok_or_else(|| AutolinkError::NoResult(terms.trim().to_string()))
}

/// Look up `terms` and render the outcome
pub async fn link_output(bridge: &EditorBridge, terms: &str, raw: bool) -> Result<String> {
    let link = bridge.link_for_terms(terms).await?;
    render_link(bridge, terms, link, raw)
}
