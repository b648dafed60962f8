// ABOUTME: Configuration module exposing environment-driven server settings
// ABOUTME: Engine tuning lives in explicit config structs passed into each calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Configuration management for the Cadence MCP server

pub mod environment;

pub use environment::{RiegelConfig, ServerConfig, SolverConfig};
