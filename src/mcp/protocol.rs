// ABOUTME: JSON-RPC message types and core MCP protocol handlers
// ABOUTME: Handles initialize, ping, tools/list, and unknown-method responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! # MCP Protocol Handlers
//!
//! Core MCP protocol message handling for initialization, tools listing,
//! and unknown methods. Tool execution lives in `tool_handlers`.

use crate::constants::errors::ERROR_METHOD_NOT_FOUND;
use crate::constants::protocol::{JSONRPC_VERSION, MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use crate::mcp::schema::{get_tools, InitializeResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP request
#[derive(Debug, Clone, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version string
    pub jsonrpc: String,
    /// Method name (e.g. "tools/call")
    pub method: String,
    /// Method parameters
    pub params: Option<Value>,
    /// Optional ID - notifications don't have IDs, only regular requests do
    pub id: Option<Value>,
}

/// MCP response
#[derive(Debug, Serialize)]
pub struct McpResponse {
    /// JSON-RPC version string
    pub jsonrpc: String,
    /// Result payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    /// ID echoed from the request
    pub id: Value,
}

/// MCP error
#[derive(Debug, Serialize)]
pub struct McpError {
    /// JSON-RPC error code
    pub code: i32,
    /// Human-readable error message
    pub message: String,
    /// Structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpResponse {
    /// Build a success response
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Build an error response
    #[must_use]
    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(McpError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }

    /// Build an error response with structured details
    #[must_use]
    pub fn error_with_data(id: Value, code: i32, message: String, data: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(McpError {
                code,
                message,
                data: Some(data),
            }),
            id,
        }
    }
}

/// Default ID for responses to requests that carried none
pub(crate) fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

/// MCP protocol handlers
pub struct ProtocolHandler;

impl ProtocolHandler {
    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: &McpRequest) -> McpResponse {
        let init_response = InitializeResponse::new(
            MCP_PROTOCOL_VERSION.to_owned(),
            SERVER_NAME.to_owned(),
            SERVER_VERSION.to_owned(),
        );

        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        match serde_json::to_value(&init_response) {
            Ok(result) => McpResponse::success(request_id, result),
            Err(_) => McpResponse::error(request_id, -32603, "Internal error".to_owned()),
        }
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: &McpRequest) -> McpResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({}))
    }

    /// Handle tools list request
    #[must_use]
    pub fn handle_tools_list(request: &McpRequest) -> McpResponse {
        let tools = get_tools();

        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({ "tools": tools }))
    }

    /// Handle unknown method request
    #[must_use]
    pub fn handle_unknown_method(request: &McpRequest) -> McpResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        McpResponse::error(
            request_id,
            ERROR_METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }
}
