// ABOUTME: MCP protocol schema definitions and tool registry
// ABOUTME: Declares the nine calculation tools with their typed input schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for MCP protocol messages, capabilities, and tool
//! schemas. Tool declarations live here so the dispatch layer and the
//! `tools/list` response can never disagree.

use crate::constants::{json_fields, tools};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name used in `tools/call`
    pub name: String,
    /// What the tool computes
    pub description: String,
    /// Input schema declaration
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type, always "object" for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Declared parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Required parameter names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type ("number", "integer", "string")
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable parameter description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tool Response after execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Content blocks for display
    pub content: Vec<Content>,
    /// Whether the execution failed
    #[serde(rename = "isError")]
    pub is_error: bool,
    /// Machine-usable structured result
    #[serde(rename = "structuredContent", skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<serde_json::Value>,
}

/// Content types for MCP messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text content
    #[serde(rename = "text")]
    Text {
        /// The text body
        text: String,
    },
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// Whether the tool list can change at runtime
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Protocol version implemented by the server
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identity
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Advertised capabilities
    pub capabilities: ServerCapabilities,
}

impl InitializeResponse {
    /// Build the initialize response for this server
    #[must_use]
    pub fn new(protocol_version: String, name: String, version: String) -> Self {
        Self {
            protocol_version,
            server_info: ServerInfo { name, version },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
        }
    }
}

/// Number property helper
fn number(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "number".to_owned(),
        description: Some(description.to_owned()),
    }
}

/// Integer property helper
fn integer(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "integer".to_owned(),
        description: Some(description.to_owned()),
    }
}

/// String property helper
fn string(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "string".to_owned(),
        description: Some(description.to_owned()),
    }
}

/// Tool schema helper
fn tool(
    name: &str,
    description: &str,
    properties: Vec<(&str, PropertySchema)>,
    required: &[&str],
) -> ToolSchema {
    ToolSchema {
        name: name.to_owned(),
        description: description.to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".to_owned(),
            properties: Some(
                properties
                    .into_iter()
                    .map(|(key, value)| (key.to_owned(), value))
                    .collect(),
            ),
            required: Some(required.iter().map(|&field| field.to_owned()).collect()),
        },
    }
}

/// All tools exposed through `tools/list`
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    vec![
        tool(
            tools::CALCULATE_VDOT,
            "Calculate VDOT according to Jack Daniels from a race performance",
            vec![
                (json_fields::DISTANCE, number("Distance in meters")),
                (json_fields::TIME, number("Time in seconds")),
            ],
            &[json_fields::DISTANCE, json_fields::TIME],
        ),
        tool(
            tools::TRAINING_PACES,
            "Get recommended training paces for a given VDOT, based on Jack Daniels' formulas",
            vec![(json_fields::VDOT, number("VDOT value"))],
            &[json_fields::VDOT],
        ),
        tool(
            tools::PREDICT_RACE_TIME,
            "Predict race time for a target distance using Riegel's formula and Daniels' equivalent performance methodology",
            vec![
                (
                    json_fields::CURRENT_DISTANCE,
                    number("Distance of known performance in meters"),
                ),
                (
                    json_fields::CURRENT_TIME,
                    number("Time of known performance in seconds"),
                ),
                (
                    json_fields::TARGET_DISTANCE,
                    number("Distance for race time prediction in meters"),
                ),
            ],
            &[
                json_fields::CURRENT_DISTANCE,
                json_fields::CURRENT_TIME,
                json_fields::TARGET_DISTANCE,
            ],
        ),
        tool(
            tools::RIEGEL_PREDICT,
            "Predict race time for a target distance using Riegel's power-law formula alone",
            vec![
                (
                    json_fields::CURRENT_DISTANCE,
                    number("Distance of known performance in meters"),
                ),
                (
                    json_fields::CURRENT_TIME,
                    number("Time of known performance in seconds"),
                ),
                (
                    json_fields::TARGET_DISTANCE,
                    number("Distance for race time prediction in meters"),
                ),
            ],
            &[
                json_fields::CURRENT_DISTANCE,
                json_fields::CURRENT_TIME,
                json_fields::TARGET_DISTANCE,
            ],
        ),
        tool(
            tools::MCMILLAN_VELOCITY_MARKERS,
            "Derive McMillan velocity markers (vLT, CV, vVO2) from a race performance",
            vec![
                (json_fields::DISTANCE, number("Race distance in meters")),
                (json_fields::TIME, number("Race time in seconds")),
            ],
            &[json_fields::DISTANCE, json_fields::TIME],
        ),
        tool(
            tools::MCMILLAN_RACE_TIMES,
            "Predict equivalent race times across standard distances using McMillan methodology",
            vec![
                (json_fields::DISTANCE, number("Race distance in meters")),
                (json_fields::TIME, number("Race time in seconds")),
            ],
            &[json_fields::DISTANCE, json_fields::TIME],
        ),
        tool(
            tools::MCMILLAN_TRAINING_PACES,
            "Calculate McMillan training pace zones (endurance, stamina, speed, sprint) from a race performance",
            vec![
                (json_fields::DISTANCE, number("Race distance in meters")),
                (json_fields::TIME, number("Race time in seconds")),
            ],
            &[json_fields::DISTANCE, json_fields::TIME],
        ),
        tool(
            tools::HEART_RATE_ZONES,
            "Calculate heart-rate training zones using percent-of-max and Karvonen reserve methods",
            vec![
                (json_fields::AGE, integer("Runner's age in years")),
                (
                    json_fields::RESTING_HEART_RATE,
                    integer("Resting heart rate in BPM"),
                ),
                (
                    json_fields::MAX_HEART_RATE,
                    integer("Maximum heart rate in BPM (estimated from age when omitted)"),
                ),
                (
                    json_fields::FORMULA,
                    string("Max-HR estimation formula: fox, tanaka, nes, or gulati (default fox)"),
                ),
            ],
            &[json_fields::AGE, json_fields::RESTING_HEART_RATE],
        ),
        tool(
            tools::CONVERT_PACE,
            "Convert a value between pace and speed units (min_km, min_mile, kmh, mph)",
            vec![
                (json_fields::VALUE, number("Value in the source unit")),
                (
                    json_fields::FROM_UNIT,
                    string("Source unit: min_km, min_mile, kmh, or mph"),
                ),
                (
                    json_fields::TO_UNIT,
                    string("Target unit: min_km, min_mile, kmh, or mph"),
                ),
            ],
            &[
                json_fields::VALUE,
                json_fields::FROM_UNIT,
                json_fields::TO_UNIT,
            ],
        ),
    ]
}
