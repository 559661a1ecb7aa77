use crate::countdown::{self, ProgressSink, ProgressUpdate, TokioDelay};
use crate::{Config, Error, Result};
use async_trait::async_trait;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ProgressToken, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{Peer, RequestContext, RoleServer};
use serde_json::json;
use std::sync::Arc;

type McpResult<T = (), E = rmcp::ErrorData> = core::result::Result<T, E>;

/// MCP server exposing the single `test_long_running` tool.
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn descriptor() -> Result<Tool> {
        let schema = serde_json::from_value(json!({
            "type": "object",
            "required": ["seconds"],
            "properties": {
                "seconds": {
                    "type": "number",
                    "description": "Number of seconds to wait (integer, >= 0)",
                    "default": 5,
                },
            },
        }))?;
        Ok(Tool::new(
            countdown::TOOL_NAME,
            "Waits N seconds, sending a progress notification each second.",
            Arc::new(schema),
        ))
    }
}

/// Forwards updates to the connected client as `notifications/progress`,
/// tagged with the token the caller attached to the request.
struct PeerProgressSink {
    peer: Peer<RoleServer>,
    token: ProgressToken,
}

#[async_trait]
impl ProgressSink for PeerProgressSink {
    async fn emit(&self, update: ProgressUpdate) -> Result<()> {
        let params = serde_json::from_value(json!({
            "progressToken": &self.token,
            "progress": update.progress,
            "total": update.total,
            "message": update.message,
        }))?;
        self.peer.notify_progress(params).await?;
        Ok(())
    }
}

impl ServerHandler for Server {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<ListToolsResult> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: vec![Self::descriptor()?],
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> McpResult<CallToolResult> {
        if request.name != countdown::TOOL_NAME {
            return Err(Error::UnknownTool(request.name.into_owned()).into());
        }

        let total = countdown::parse_seconds(request.arguments.as_ref())?;

        // Callers opt in to progress by attaching a token under `_meta`.
        let sink = context
            .meta
            .get_progress_token()
            .map(|token| PeerProgressSink {
                peer: context.peer,
                token,
            });

        countdown::run(
            total,
            self.config.tick_interval,
            sink.as_ref().map(|sink| sink as &dyn ProgressSink),
            &TokioDelay,
        )
        .await?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Completed after {total} second(s)."
        ))]))
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "test-mcp-server".to_string(),
                version: "1.0.0".to_string(),
            },
            instructions: Some(
                "Exposes test_long_running, a tool that waits a requested number of \
                 seconds and reports progress once per second."
                    .to_string(),
            ),
        }
    }
}
