//! MCP server exposing the editor entry points
//!
//! For editors that talk MCP instead of shelling out to the CLI. Each tool
//! maps to one [`EditorBridge`] call.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::bridge::EditorBridge;
use crate::config::Config;
use crate::error::Result as AutolinkResult;

#[derive(Clone)]
pub struct AutolinkMcpServer {
    bridge: Arc<EditorBridge>,
    config: Config,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OpenSearchParams {
    #[schemars(description = "Free-form search terms")]
    pub terms: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LinkParams {
    #[schemars(description = "Search terms; surrounding whitespace is ignored")]
    pub terms: String,
}

fn json_success<T: Serialize>(data: &T) -> std::result::Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl AutolinkMcpServer {
    pub fn new(config: Config) -> AutolinkResult<Self> {
        let bridge = EditorBridge::from_config(&config)?;
        Ok(Self::with_bridge(Arc::new(bridge), config))
    }

    pub fn with_bridge(bridge: Arc<EditorBridge>, config: Config) -> Self {
        tracing::info!("Using {} for result pages", bridge.provider());
        Self {
            bridge,
            config,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Open a web search for the given terms in the user's default browser.")]
    async fn open_search(
        &self,
        Parameters(params): Parameters<OpenSearchParams>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let url = self.bridge.open_search(&params.terms);
        Ok(CallToolResult::success(vec![Content::text(url)]))
    }

    #[tool(
        description = "Find the first external result link for the given search terms. Returns the query, the link (null if none was found) and the provider."
    )]
    async fn link_for_terms(
        &self,
        Parameters(params): Parameters<LinkParams>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let lookup = self.bridge.lookup(&params.terms).await?;
        json_success(&lookup)
    }

    #[tool(description = "Get the current provider and editor output configuration.")]
    async fn get_config(&self) -> std::result::Result<CallToolResult, McpError> {
        #[derive(Serialize)]
        struct ConfigStatus<'a> {
            provider: &'a str,
            search_url: &'a str,
            excluded_domain: &'a str,
            browser_search_url: &'a str,
            editor_variable: &'a str,
        }

        json_success(&ConfigStatus {
            provider: self.bridge.provider(),
            search_url: &self.config.search.url,
            excluded_domain: &self.config.search.excluded_domain,
            browser_search_url: &self.config.browser.search_url,
            editor_variable: &self.config.editor.variable,
        })
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for AutolinkMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Autolink - look up the first external search result link for a phrase, \
                 or open a browser search for it."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
