//! MCP tool handlers for the contact list server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::config::Config;
use crate::error::ContactError;
use crate::services::ContactListService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The MCP server that exposes the contact list as tools.
#[derive(Clone)]
pub struct ContactListMcpServer {
    service: Arc<RwLock<ContactListService>>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactListMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-list-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory contact list. Add contacts as 'Name, City, email', list them newest first, and remove them by index.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    /// Comma-separated "Name, City, email"
    input: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RemoveContactParams {
    /// Position in the list as returned by list_contacts (0 is newest)
    index: usize,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// The rendered list: entries, count display, and current status line.
fn render_list(service: &ContactListService) -> serde_json::Value {
    let status = service.status();
    serde_json::json!({
        "contacts": service.contacts(),
        "count": service.count(),
        "count_label": service.count_label(),
        "status": {
            "message": status.message,
            "input_invalid": status.input_invalid,
        },
    })
}

fn user_error_result(error: &ContactError) -> Result<CallToolResult, McpError> {
    let body = serde_json::json!({
        "error": error.to_string(),
        "field": error.field(),
        "duplicate_fields": match error {
            ContactError::Duplicate { fields } => Some(fields),
            _ => None,
        },
    });
    let text = serde_json::to_string_pretty(&body).map_err(to_mcp_error)?;
    Ok(CallToolResult::error(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl ContactListMcpServer {
    /// Create a server around an existing service.
    pub fn new(service: ContactListService) -> Self {
        Self {
            service: Arc::new(RwLock::new(service)),
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server with an empty in-memory list.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ContactListService::in_memory(config))
    }

    /// Validate and add a contact to the head of the list.
    #[tool(
        description = "Add a contact from comma-separated input 'Name, City, email'. Names and cities must be capitalized words; email is lowercased. Rejected if the name or email already exists on the list."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: add_contact called");
        tracing::debug!("Parameters: input={:?}", params.input);

        let mut service = self.service.write().await;
        match service.submit(&params.input) {
            Ok(contact) => json_result(&serde_json::json!({
                "contact": contact,
                "count": service.count(),
                "count_label": service.count_label(),
            })),
            Err(e) if e.is_user_error() => {
                tracing::info!("Contact rejected: {}", e);
                user_error_result(&e)
            }
            Err(e) => {
                tracing::error!("Failed to add contact: {:?}", e);
                Err(to_mcp_error(e))
            }
        }
    }

    /// Remove the contact at a list position.
    #[tool(
        description = "Remove the contact at the given index (0 is the newest). An index past the end of the list changes nothing."
    )]
    async fn remove_contact(
        &self,
        params: Parameters<RemoveContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let mut service = self.service.write().await;
        let removed = service.remove_at(params.index);

        json_result(&serde_json::json!({
            "removed": removed,
            "index": params.index,
            "count": service.count(),
            "count_label": service.count_label(),
        }))
    }

    /// Render the current list.
    #[tool(
        description = "List all contacts newest first with their indexes, the saved-contacts count, and the current status message"
    )]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let service = self.service.read().await;
        json_result(&render_list(&service))
    }

    /// Report activity counters.
    #[tool(description = "Report counters for added, rejected, and removed contacts")]
    async fn contact_stats(&self) -> Result<CallToolResult, McpError> {
        let service = self.service.read().await;
        tracing::debug!("{}", service.metrics_summary());
        json_result(&serde_json::json!({
            "duplicate_policy": service.duplicate_policy().to_string(),
            "metrics": service.metrics(),
            "rejection_rate": service.rejection_rate(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn server() -> ContactListMcpServer {
        ContactListMcpServer::from_config(&Config::default())
    }

    /// Pull the JSON body and error flag out of a tool result.
    fn decode(result: CallToolResult) -> (serde_json::Value, bool) {
        let raw = serde_json::to_value(&result).unwrap();
        let is_error = raw["isError"].as_bool().unwrap_or(false);
        let text = raw["content"][0]["text"].as_str().unwrap().to_string();
        (serde_json::from_str(&text).unwrap(), is_error)
    }

    async fn add(server: &ContactListMcpServer, input: &str) -> (serde_json::Value, bool) {
        let result = server
            .add_contact(Parameters(AddContactParams {
                input: input.to_string(),
            }))
            .await
            .unwrap();
        decode(result)
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let server = server();
        let (body, is_error) = add(&server, "Alice Brown, Dallas, alice@b.com").await;
        assert!(!is_error);
        assert_eq!(body["contact"]["name"], "Alice Brown");
        assert_eq!(body["count_label"], "Contacts Saved: 1");

        let (list, _) = decode(server.list_contacts().await.unwrap());
        assert_eq!(list["count"], 1);
        assert_eq!(list["contacts"][0]["index"], 0);
        assert_eq!(list["contacts"][0]["email"], "alice@b.com");
        assert_eq!(list["contacts"][0]["lines"][1], "City: Dallas");
        assert!(list["status"]["message"].is_null());
    }

    #[tokio::test]
    async fn test_add_rejection_is_tool_error() {
        let server = server();
        add(&server, "Jane Doe, Austin, jane@x.com").await;

        let (body, is_error) = add(&server, "Jane Smith, Dallas, jane@x.com").await;
        assert!(is_error);
        assert_eq!(body["duplicate_fields"], serde_json::json!(["email"]));

        let (body, is_error) = add(&server, "Jane Smith, Dallas").await;
        assert!(is_error);
        assert!(body["error"].as_str().unwrap().contains("Email"));

        let (list, _) = decode(server.list_contacts().await.unwrap());
        assert_eq!(list["count"], 1);
        assert_eq!(list["status"]["input_invalid"], true);
    }

    #[tokio::test]
    async fn test_malformed_email_is_tool_error() {
        let server = server();

        for input in ["Alice, Dallas, .a@b.com", "Alice, Dallas, a..b@c.com"] {
            let result = server
                .add_contact(Parameters(AddContactParams {
                    input: input.to_string(),
                }))
                .await;
            let (body, is_error) = decode(result.expect("rejection is a tool result"));
            assert!(is_error, "input: {:?}", input);
            assert_eq!(body["field"], "email");
        }
    }

    #[tokio::test]
    async fn test_remove_contact() {
        let server = server();
        add(&server, "Alice, Dallas, alice@b.com").await;
        add(&server, "Bob, Dallas, bob@b.com").await;

        let result = server
            .remove_contact(Parameters(RemoveContactParams { index: 7 }))
            .await
            .unwrap();
        let (body, _) = decode(result);
        assert!(body["removed"].is_null());
        assert_eq!(body["count"], 2);

        let result = server
            .remove_contact(Parameters(RemoveContactParams { index: 0 }))
            .await
            .unwrap();
        let (body, _) = decode(result);
        assert_eq!(body["removed"]["name"], "Bob");
        assert_eq!(body["count_label"], "Contacts Saved: 1");
    }

    #[tokio::test]
    async fn test_contact_stats() {
        let server = server();
        add(&server, "Alice, Dallas, alice@b.com").await;
        add(&server, "nope").await;

        let (body, _) = decode(server.contact_stats().await.unwrap());
        assert_eq!(body["duplicate_policy"], "field");
        assert_eq!(body["metrics"]["contacts_added_total"], 1);
        assert_eq!(body["metrics"]["validation_rejections_total"], 1);
        assert_eq!(body["rejection_rate"], 0.5);
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "contact-list-mcp");
        assert!(info.capabilities.tools.is_some());
    }
}
