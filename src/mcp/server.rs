//! MCP Server implementation for keyword search.
//!
//! Exposes the `search_keyword` tool over the Model Context Protocol. Scan
//! failures come back as flagged-error tool results, never as protocol
//! faults; malformed arguments are rejected by the router as invalid params.

use anyhow::Result;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};

use super::tools::*;
use crate::config::Config;
use crate::search::KeywordScanner;

/// MCP Server for keyword search
#[derive(Clone)]
pub struct KeywordSearchServer {
    config: Config,
    scanner: KeywordScanner,
    tool_router: ToolRouter<Self>,
}

impl KeywordSearchServer {
    pub fn new(config: Config) -> Self {
        let scanner = KeywordScanner::new()
            .with_normalized_line_endings(config.search.normalize_line_endings)
            .with_strict_utf8(config.search.strict_utf8);

        Self {
            config,
            scanner,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl KeywordSearchServer {
    /// Search a file for a keyword
    #[tool(description = "Search for a keyword within a specified file and return matching lines with line numbers and the character offset of every occurrence")]
    async fn search_keyword(
        &self,
        Parameters(req): Parameters<SearchKeywordRequest>,
    ) -> Result<CallToolResult, McpError> {
        let case_sensitive = req
            .case_sensitive
            .unwrap_or(self.config.search.case_sensitive);

        tracing::debug!(
            filepath = %req.filepath,
            keyword = %req.keyword,
            case_sensitive,
            "search_keyword"
        );

        match self
            .scanner
            .search(&req.filepath, &req.keyword, case_sensitive)
            .await
        {
            Ok(result) => {
                let json = serde_json::to_string_pretty(&result)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(e) => {
                tracing::warn!("search_keyword failed: {}", e);

                let json = serde_json::to_string(&ErrorResponse {
                    error: e.to_string(),
                })
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(CallToolResult::error(vec![Content::text(json)]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for KeywordSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                title: Some("Keyword Search".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(self.config.server.instructions.clone()),
        }
    }
}

/// Run the MCP server on stdio transport
pub async fn run_server(config: Config) -> Result<()> {
    use rmcp::transport::stdio;
    use rmcp::ServiceExt;

    let server = KeywordSearchServer::new(config);

    tracing::info!("Keyword Search MCP Server running on stdio");
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
