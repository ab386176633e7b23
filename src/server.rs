//! MCP server exposing a single [`Tool`] to the host runtime

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler, ServiceExt};
use tracing::{debug, info};

use crate::tool::Tool;

const INSTRUCTIONS: &str = "通过博查 Web Search API 进行联网搜索";

/// Serves one tool over MCP: `tools/list` and `tools/call`
pub struct ToolServer<T: Tool> {
    tool: T,
}

impl<T: Tool> ToolServer<T> {
    pub fn new(tool: T) -> Self {
        Self { tool }
    }

    /// Resolve and run a call request; the tool itself never fails
    pub async fn dispatch(&self, request: CallToolRequestParam) -> Result<String, ErrorData> {
        if request.name != T::name() {
            return Err(ErrorData::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            ));
        }

        let arguments = serde_json::Value::Object(request.arguments.unwrap_or_default());
        let args: T::Args = serde_json::from_value(arguments).map_err(|e| {
            ErrorData::invalid_params(format!("Invalid arguments for {}: {}", T::name(), e), None)
        })?;

        debug!("Executing tool {}", T::name());
        Ok(self.tool.execute(args).await)
    }
}

impl<T: Tool> ServerHandler for ToolServer<T> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(vec![T::definition()]))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self.dispatch(request).await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

/// Serve the tool over stdio until the peer disconnects
pub async fn serve_stdio<T: Tool>(tool: T) -> anyhow::Result<()> {
    info!("Serving {} over stdio", T::name());
    let service = ToolServer::new(tool).serve(rmcp::transport::stdio()).await?;
    let reason = service.waiting().await?;
    info!("MCP session ended: {:?}", reason);
    Ok(())
}
