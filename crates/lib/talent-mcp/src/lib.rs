//! MCP server implementation for talent-mcp.
//!
//! This crate wires the skill catalogs into rmcp tool handlers and exposes
//! the MCP-facing API surface for employee and job-offering queries.

pub mod tools;
pub mod server;

use std::sync::Arc;

use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use talent_core::TalentServices;

const SERVER_INSTRUCTIONS: &str = r"talent-mcp provides MCP tools for querying an in-memory talent pool: employees and open job offerings.

Workflow:
1. Browse the data with `list_employees` and `list_job_offerings`.
2. Fetch a single record with `get_employee` / `get_job_offering` (by id) or
   `get_employee_by_name` / `get_job_offering_by_title` (partial match, first hit wins).
3. Match skills with `find_employees_by_hard_skill`, `find_employees_by_soft_skill`,
   `find_job_offerings_by_technical_skill`, and `find_job_offerings_by_soft_skill`
   (case-insensitive substring match over the skill lists).

Notes:
- Datasets are read-only snapshots loaded at startup; nothing here mutates state.
- A get with no match returns JSON `null` and a find with no match returns `[]`; neither is an error.
- `health` returns `ok`.";

/// MCP server wrapper around the shared services bundle and tool routers.
#[derive(Clone)]
pub struct TalentMcp {
    tool_router: ToolRouter<Self>,
    services: Arc<TalentServices>,
}

impl TalentMcp {
    /// Creates a new server using a services bundle by value.
    #[must_use]
    pub fn new(services: TalentServices) -> Self {
        Self::with_services(Arc::new(services))
    }

    /// Creates a new server using a shared services handle.
    ///
    /// The router is composed here and never changes afterwards; the tool set
    /// is frozen for the process lifetime.
    #[must_use]
    pub fn with_services(services: Arc<TalentServices>) -> Self {
        let tool_router =
            Self::tool_router_core() + Self::tool_router_employees() + Self::tool_router_offerings();
        Self {
            tool_router,
            services,
        }
    }

    /// Router composed at construction; the tool set it advertises is the
    /// one every session sees.
    #[must_use]
    pub fn tool_router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    pub(crate) fn services(&self) -> &TalentServices {
        &self.services
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl TalentMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for TalentMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
