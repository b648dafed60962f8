// ABOUTME: Server binary wiring configuration, logging, and the stdio transport together
// ABOUTME: Runs until stdin closes or the process receives an interrupt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! # Cadence MCP Server Binary
//!
//! Starts the running-performance calculation server on the stdio
//! transport. Configuration comes from environment variables; logs go to
//! stderr so stdout stays a clean protocol channel.

use anyhow::Result;
use cadence_mcp_server::{
    config::ServerConfig,
    logging,
    mcp::{resources::ServerResources, transport::StdioTransport},
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "cadence-mcp-server")]
#[command(about = "Cadence - running performance calculations over MCP")]
struct Args {
    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }

    logging::LoggingConfig {
        level: config.log_level.clone(),
        ..logging::LoggingConfig::from_env()
    }
    .init()?;

    info!("Starting Cadence MCP server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config));
    let transport = StdioTransport::new(resources);

    tokio::select! {
        result = transport.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
        }
    }

    Ok(())
}
