// ABOUTME: Main library entry point for the Cadence running-performance MCP server
// ABOUTME: Exposes calculation engines, unit utilities, and the MCP dispatch layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

#![deny(unsafe_code)]

//! # Cadence MCP Server
//!
//! A Model Context Protocol (MCP) server computing running-performance
//! metrics: Daniels VDOT fitness scores and training paces, Riegel and
//! Daniels race-time predictions, McMillan velocity markers and zones,
//! heart-rate zones, and pace/speed unit conversions.
//!
//! ## Architecture
//!
//! - **intelligence**: stateless calculation strategies, one per
//!   methodology, sharing a bounded root-finder and constants tables
//! - **units**: pace/speed conversion and time formatting used by every
//!   engine
//! - **models**: immutable value types; pace/time results carry both
//!   numeric seconds and a formatted display string
//! - **mcp**: JSON-RPC protocol types, tool schemas, dispatch, and the
//!   stdio transport
//! - **config / logging / errors**: environment configuration, stderr
//!   tracing setup, and the unified error taxonomy
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cadence_mcp_server::config::ServerConfig;
//! use cadence_mcp_server::intelligence::algorithms::VdotCalculator;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let calculator = VdotCalculator::new(config.solver);
//!     let vdot = calculator.calculate_vdot(5000.0, 1500.0)?;
//!     println!("VDOT: {vdot:.1}");
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Protocol, error-code, and tool-name constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Calculation engines
pub mod intelligence;

/// Logging configuration (stderr; stdout belongs to the transport)
pub mod logging;

/// MCP protocol implementation
pub mod mcp;

/// Shared immutable value types
pub mod models;

/// Unit conversion and time formatting
pub mod units;
