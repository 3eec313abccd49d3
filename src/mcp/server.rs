use std::path::{Path, PathBuf};

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
    cli::{
        args::{CommonArgs, RuleArgs},
        commands::check::run_checks,
    },
    config::load_config,
    core::CheckContext,
};

use super::types::{ConfigDto, ConfigValues, GetConfigParams, ScanParams, ScanResult};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct TwcheckMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TwcheckMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TwcheckMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Scan JSX/TSX class attributes, class helper calls and tagged templates for Tailwind class names with a negative prefix on an arbitrary value (e.g. -top-[1px], which should be top-[-1px]). Returns a paginated list of issues."
    )]
    pub async fn scan(&self, params: Parameters<ScanParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map_or(DEFAULT_LIMIT, |v| v as usize)
            .min(MAX_LIMIT);
        let offset = params.offset.map_or(0, |v| v as usize);

        let common = CommonArgs {
            source_root: Some(PathBuf::from(&params.project_root_path)),
            verbose: false,
        };
        let ctx = CheckContext::new(&common, &RuleArgs::default())
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let result = run_checks(&ctx);
        let page = ScanResult::paginate(&result.issues, result.source_files_checked, offset, limit);

        json_result(&page)
    }

    #[tool(description = "Get the current twcheck configuration and the resolved variant separator.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;
        let resolved_separator = result.config.resolve_separator(path).map_err(|e| {
            McpError::internal_error(format!("Failed to resolve separator: {}", e), None)
        })?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
            resolved_separator,
        };

        json_result(&config_dto)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for TwcheckMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "twcheck MCP finds Tailwind CSS class names that put the negative dash before an \
                 arbitrary value (-top-[1px]) instead of inside it (top-[-1px]).\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration and the resolved variant separator\n\
                 2. scan - Get negative arbitrary value issues (paginated)\n\n\
                 Each scan item carries a suggestion; replace the class name with it."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TwcheckMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
