// ABOUTME: MCP protocol implementation with stdio transport and tool dispatch
// ABOUTME: Routes JSON-RPC methods to protocol handlers and the tool execution layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Model Context Protocol server implementation

pub mod protocol;
pub mod resources;
pub mod schema;
pub mod tool_handlers;
pub mod transport;

use crate::mcp::protocol::{McpRequest, McpResponse, ProtocolHandler};
use crate::mcp::resources::ServerResources;
use crate::mcp::tool_handlers::ToolHandlers;
use std::sync::Arc;

/// Route a request to its handler
///
/// Notifications (no id, `notifications/` method prefix) produce no
/// response; everything else gets exactly one.
#[must_use]
pub fn process_request(request: McpRequest, resources: &Arc<ServerResources>) -> Option<McpResponse> {
    if request.id.is_none() && request.method.starts_with("notifications/") {
        return None;
    }

    let response = match request.method.as_str() {
        "initialize" => ProtocolHandler::handle_initialize(&request),
        "ping" => ProtocolHandler::handle_ping(&request),
        "tools/list" => ProtocolHandler::handle_tools_list(&request),
        "tools/call" => ToolHandlers::handle_tools_call(&request, resources),
        _ => ProtocolHandler::handle_unknown_method(&request),
    };

    Some(response)
}
