// ABOUTME: Stdio transport reading line-delimited JSON-RPC from stdin and answering on stdout
// ABOUTME: Malformed JSON gets a parse-error response; the loop never crashes on bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Stdio transport for MCP communication
//!
//! One JSON-RPC message per line on stdin, one response per line on stdout.
//! All logging goes to stderr (see `crate::logging`), so stdout carries
//! nothing but protocol frames.

use crate::errors::AppResult;
use crate::mcp::process_request;
use crate::mcp::protocol::McpRequest;
use crate::mcp::resources::ServerResources;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Handles stdio transport for MCP communication
pub struct StdioTransport {
    resources: Arc<ServerResources>,
}

impl StdioTransport {
    /// Creates a new stdio transport instance
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Create a JSON-RPC parse error response
    fn parse_error_response() -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "error": {
                "code": crate::constants::errors::ERROR_PARSE,
                "message": "Parse error"
            },
            "id": null
        })
    }

    /// Process a single incoming line and print the response, if any
    fn process_line(&self, line: &str) {
        match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                if let Some(response) = process_request(request, &self.resources) {
                    match serde_json::to_string(&response) {
                        Ok(json) => println!("{json}"),
                        Err(e) => warn!("Failed to serialize response: {}", e),
                    }
                }
            }
            Err(e) => {
                warn!("Failed to parse MCP request: {}", e);
                println!("{}", Self::parse_error_response());
            }
        }
    }

    /// Run the stdio transport until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");

        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| crate::errors::AppError::internal(format!("stdin read failed: {e}")))?
        {
            if line.trim().is_empty() {
                continue;
            }
            self.process_line(&line);
        }

        info!("stdin closed, stdio transport shutting down");
        Ok(())
    }
}
