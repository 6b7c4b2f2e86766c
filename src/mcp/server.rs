//! Nutricomp MCP Server Implementation
//!
//! Implements the MCP server with the composition tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::nutrition::CompositionError;
use crate::service::CompositionService;
use crate::tools::compositions;
use crate::tools::status::StatusTracker;

/// Nutricomp MCP Service
#[derive(Clone)]
pub struct NutricompService {
    status_tracker: Arc<StatusTracker>,
    compositions: CompositionService,
    tool_router: ToolRouter<NutricompService>,
}

impl NutricompService {
    pub fn new(status_tracker: StatusTracker, compositions: CompositionService) -> Self {
        Self {
            status_tracker: Arc::new(status_tracker),
            compositions,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCompositionParams {
    /// Ingredient name, e.g. "Rice" (one typo is tolerated)
    pub ingredient: String,
    /// Amount of the ingredient (default 100)
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    /// Unit of the amount: gram, kg, oz, cup, tbsp, ... (default gram)
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_quantity() -> f64 { 100.0 }
fn default_unit() -> String { "gram".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchCompositionsParams {
    /// Search text matched against reference names
    pub query: String,
    /// Maximum results (default 10, max 100)
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

fn default_search_limit() -> i64 { 10 }

/// Error body attached to failed tool calls
#[derive(Debug, Serialize)]
struct ToolErrorData<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

/// Map a request error onto an MCP error with its kind and suggestion attached
pub fn to_mcp_error(err: &CompositionError) -> McpError {
    let data = serde_json::to_value(ToolErrorData {
        kind: err.kind(),
        suggestion: err.suggestion(),
    })
    .ok();
    let message = err.to_string();

    match err {
        CompositionError::MissingIngredient | CompositionError::UnknownUnit { .. } => {
            McpError::invalid_params(message, data)
        }
        CompositionError::NotFound { .. } | CompositionError::AmbiguousOrNotFound { .. } => {
            McpError::resource_not_found(message, data)
        }
        CompositionError::NotReady => McpError::internal_error(message, data),
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutricompService {
    // --- Status ---

    #[tool(description = "Get the current status of the composition service including build info, reference data readiness, and process information")]
    async fn nutricomp_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status(&self.compositions);
        json_result(&status)
    }

    #[tool(description = "Get instructions for querying nutrient compositions. Call this when unsure how to phrase a query or handle a 'did you mean' error.")]
    fn composition_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::COMPOSITION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(COMPOSITION_INSTRUCTIONS)]))
    }

    // --- Compositions ---

    #[tool(description = "Get the nutrients contained in a quantity of an ingredient, scaled from the per-100g reference table")]
    fn get_composition(&self, Parameters(p): Parameters<GetCompositionParams>) -> Result<CallToolResult, McpError> {
        let result = compositions::get_composition(&self.compositions, &p.ingredient, p.quantity, &p.unit)
            .map_err(|e| to_mcp_error(&e))?;
        json_result(&result)
    }

    #[tool(description = "Search reference ingredient names, best match first")]
    fn search_compositions(&self, Parameters(p): Parameters<SearchCompositionsParams>) -> Result<CallToolResult, McpError> {
        let result = compositions::search_compositions(&self.compositions, &p.query, p.limit)
            .map_err(|e| to_mcp_error(&e))?;
        json_result(&result)
    }

    #[tool(description = "List the units accepted by get_composition and their weight in grams")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        json_result(&compositions::list_units(&self.compositions))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutricompService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutricomp".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutrient Composition Service".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutrient Composition Service - nutrients per quantity of an ingredient. \
                 Call composition_instructions before your first query. \
                 Compositions: get_composition, search_compositions, list_units. \
                 Status: nutricomp_status (reference data loads in the background at startup)."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_error_mapping_keeps_kinds_distinct() {
        let err = to_mcp_error(&CompositionError::UnknownUnit { unit: "parsec".into() });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.data.as_ref().unwrap()["kind"], "unknown_unit");

        let err = to_mcp_error(&CompositionError::NotReady);
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.data.as_ref().unwrap()["kind"], "not_ready");
    }

    #[test]
    fn test_error_mapping_carries_suggestion() {
        let err = to_mcp_error(&CompositionError::AmbiguousOrNotFound {
            name: "Tomato".into(),
            suggested_name: "Potato".into(),
        });
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        let data = err.data.unwrap();
        assert_eq!(data["kind"], "ambiguous_or_not_found");
        assert_eq!(data["suggestion"], "Potato");

        let err = to_mcp_error(&CompositionError::NotFound { name: "Xyzzy".into() });
        assert!(err.data.unwrap().get("suggestion").is_none());
    }
}
