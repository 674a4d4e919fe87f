use std::{env, time::Duration};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::load_config,
    core::{HttpFetcher, classify::classify, fetch::page_url},
    session::run_session,
};

use super::types::{
    ClassifyCommentParams, ClassifyCommentResult, GetCommentsParams, GetCommentsResult,
};

#[derive(Clone)]
pub struct RemarksMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for RemarksMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl RemarksMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Scan a page and return its surviving comments
    #[tool(
        description = "Load a web page and list the comments left in its HTML, inline and linked stylesheets, and inline and linked scripts. Commented-out code is filtered out. Returns the toolbar badge and the comments grouped HTML, CSS, JS."
    )]
    pub async fn get_comments(
        &self,
        params: Parameters<GetCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let cwd = env::current_dir().map_err(|e| {
            McpError::internal_error(format!("Failed to read current directory: {}", e), None)
        })?;
        let config = load_config(&cwd)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let mut options = config
            .scan_options()
            .map_err(|e| McpError::internal_error(format!("Invalid config: {}", e), None))?;
        if let Some(kinds) = params.kinds {
            if kinds.is_empty() {
                return Err(McpError::invalid_params("kinds cannot be empty", None));
            }
            options.kinds = kinds;
        }
        let settle_delay =
            Duration::from_millis(params.settle_delay_ms.unwrap_or(config.settle_delay_ms));

        let url = page_url(&params.page)
            .map_err(|e| McpError::invalid_params(format!("{:#}", e), None))?;
        let fetcher = HttpFetcher::new(&config.user_agent).map_err(|e| {
            McpError::internal_error(format!("Failed to initialize: {}", e), None)
        })?;

        let session = run_session(&url, fetcher, options, settle_delay)
            .await
            .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;

        to_tool_result(&GetCommentsResult::new(&session.badge, &session.view))
    }

    /// Judge one comment text
    #[tool(
        description = "Decide whether a comment text is prose (keep) or commented-out code (discard), and list the patterns that matched. HTML comments are always kept."
    )]
    pub async fn classify_comment(
        &self,
        params: Parameters<ClassifyCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let verdict = classify(params.0.kind, &params.0.text);
        to_tool_result(&ClassifyCommentResult::from(&verdict))
    }
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for RemarksMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Remarks MCP finds the comments a web page ships to its visitors.\n\n\
                 Available tools:\n\
                 1. get_comments - Scan a page (URL or local HTML file) and list its comments\n\
                 2. classify_comment - Check whether a single comment text is prose or code\n\n\
                 Comments that look like commented-out code are filtered out of get_comments.\n\
                 Use classify_comment to see why a given text is kept or discarded."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = RemarksMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
