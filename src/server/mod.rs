//! MCP server implementation for the contact list.
//!
//! This module provides the MCP protocol server that exposes adding, listing,
//! and removing contacts through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactListMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact list MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: ContactListMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
