// ABOUTME: Tool execution handlers mapping MCP tool calls onto the calculation engines
// ABOUTME: Validates arguments, runs the engines, and shapes structured results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Tool execution for `tools/call` requests
//!
//! Each handler extracts typed arguments, invokes the matching engine, and
//! returns a structured result. Engine errors map onto JSON-RPC codes with
//! the application error attached as data; the dispatch layer never panics
//! on malformed arguments.

use crate::constants::errors::{ERROR_INVALID_PARAMS, ERROR_METHOD_NOT_FOUND};
use crate::constants::{json_fields, tools};
use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::intelligence::algorithms::heart_rate::{heart_rate_zones, MaxHrAlgorithm};
use crate::mcp::protocol::{default_request_id, McpRequest, McpResponse};
use crate::mcp::resources::ServerResources;
use crate::mcp::schema::{Content, ToolResponse};
use crate::models::FormattedDuration;
use crate::units::conversions::{convert, PaceUnit};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Tool execution handlers for MCP protocol
pub struct ToolHandlers;

impl ToolHandlers {
    /// Handle a `tools/call` request
    #[must_use]
    pub fn handle_tools_call(request: &McpRequest, resources: &Arc<ServerResources>) -> McpResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);

        let Some(params) = request.params.as_ref() else {
            return McpResponse::error(
                request_id,
                ERROR_INVALID_PARAMS,
                "Missing parameters".to_owned(),
            );
        };
        let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
            return McpResponse::error(
                request_id,
                ERROR_INVALID_PARAMS,
                "Missing tool name".to_owned(),
            );
        };
        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        debug!("Executing tool: {}", tool_name);

        let result = match tool_name {
            tools::CALCULATE_VDOT => Self::calculate_vdot(&arguments, resources),
            tools::TRAINING_PACES => Self::training_paces(&arguments, resources),
            tools::PREDICT_RACE_TIME => Self::predict_race_time(&arguments, resources),
            tools::RIEGEL_PREDICT => Self::riegel_predict(&arguments, resources),
            tools::MCMILLAN_VELOCITY_MARKERS => Self::mcmillan_velocity_markers(&arguments, resources),
            tools::MCMILLAN_RACE_TIMES => Self::mcmillan_race_times(&arguments, resources),
            tools::MCMILLAN_TRAINING_PACES => Self::mcmillan_training_paces(&arguments, resources),
            tools::HEART_RATE_ZONES => Self::heart_rate_zones(&arguments),
            tools::CONVERT_PACE => Self::convert_pace(&arguments),
            unknown => {
                return McpResponse::error(
                    request_id,
                    ERROR_METHOD_NOT_FOUND,
                    format!("Unknown tool: {unknown}"),
                );
            }
        };

        match result {
            Ok(value) => {
                let text = serde_json::to_string_pretty(&value)
                    .unwrap_or_else(|_| "{}".to_owned());
                let tool_response = ToolResponse {
                    content: vec![Content::Text { text }],
                    is_error: false,
                    structured_content: Some(value),
                };
                match serde_json::to_value(&tool_response) {
                    Ok(payload) => McpResponse::success(request_id, payload),
                    Err(e) => McpResponse::error(
                        request_id,
                        -32603,
                        format!("Failed to serialize tool response: {e}"),
                    ),
                }
            }
            Err(error) => {
                warn!("Tool {} failed: {}", tool_name, error);
                let code = error.rpc_code();
                let message = error.to_string();
                let data = serde_json::to_value(ErrorResponse::from(error))
                    .unwrap_or(Value::Null);
                McpResponse::error_with_data(request_id, code, message, data)
            }
        }
    }

    /// `calculate_vdot` tool
    fn calculate_vdot(arguments: &Value, resources: &ServerResources) -> AppResult<Value> {
        let distance = require_f64(arguments, json_fields::DISTANCE)?;
        let time = require_f64(arguments, json_fields::TIME)?;

        let vdot = resources.vdot.calculate_vdot(distance, time)?;
        Ok(json!({ "vdot": round1(vdot) }))
    }

    /// `training_paces` tool
    fn training_paces(arguments: &Value, resources: &ServerResources) -> AppResult<Value> {
        let vdot = require_f64(arguments, json_fields::VDOT)?;

        let paces = resources.vdot.training_paces(vdot)?;
        to_value(&paces)
    }

    /// `predict_race_time` tool: Riegel and Daniels side by side plus their
    /// average, the shape the original race-prediction surface used
    fn predict_race_time(arguments: &Value, resources: &ServerResources) -> AppResult<Value> {
        let current_distance = require_f64(arguments, json_fields::CURRENT_DISTANCE)?;
        let current_time = require_f64(arguments, json_fields::CURRENT_TIME)?;
        let target_distance = require_f64(arguments, json_fields::TARGET_DISTANCE)?;

        let riegel_seconds =
            resources
                .riegel
                .predict_time(current_distance, current_time, target_distance)?;

        let vdot = resources.vdot.calculate_vdot(current_distance, current_time)?;
        let daniels_seconds = resources.vdot.predict_time(vdot, target_distance)?;

        let average_seconds = (riegel_seconds + daniels_seconds) / 2.0;

        Ok(json!({
            "riegel": FormattedDuration::from_seconds(riegel_seconds)?,
            "daniels": FormattedDuration::from_seconds(daniels_seconds)?,
            "average": FormattedDuration::from_seconds(average_seconds)?,
        }))
    }

    /// `riegel_predict` tool
    fn riegel_predict(arguments: &Value, resources: &ServerResources) -> AppResult<Value> {
        let current_distance = require_f64(arguments, json_fields::CURRENT_DISTANCE)?;
        let current_time = require_f64(arguments, json_fields::CURRENT_TIME)?;
        let target_distance = require_f64(arguments, json_fields::TARGET_DISTANCE)?;

        let seconds =
            resources
                .riegel
                .predict_time(current_distance, current_time, target_distance)?;
        to_value(&FormattedDuration::from_seconds(seconds)?)
    }

    /// `mcmillan_velocity_markers` tool
    fn mcmillan_velocity_markers(arguments: &Value, resources: &ServerResources) -> AppResult<Value> {
        let distance = require_f64(arguments, json_fields::DISTANCE)?;
        let time = require_f64(arguments, json_fields::TIME)?;

        let markers = resources.mcmillan.velocity_markers(distance, time)?;
        to_value(&markers)
    }

    /// `mcmillan_race_times` tool
    fn mcmillan_race_times(arguments: &Value, resources: &ServerResources) -> AppResult<Value> {
        let distance = require_f64(arguments, json_fields::DISTANCE)?;
        let time = require_f64(arguments, json_fields::TIME)?;

        let predictions = resources.mcmillan.predict_race_times(distance, time)?;
        Ok(json!({ "predictions": to_value(&predictions)? }))
    }

    /// `mcmillan_training_paces` tool
    fn mcmillan_training_paces(arguments: &Value, resources: &ServerResources) -> AppResult<Value> {
        let distance = require_f64(arguments, json_fields::DISTANCE)?;
        let time = require_f64(arguments, json_fields::TIME)?;

        let paces = resources.mcmillan.training_paces(distance, time)?;
        to_value(&paces)
    }

    /// `heart_rate_zones` tool
    fn heart_rate_zones(arguments: &Value) -> AppResult<Value> {
        let age = require_u32(arguments, json_fields::AGE)?;
        let resting = require_u32(arguments, json_fields::RESTING_HEART_RATE)?;
        let max = optional_u32(arguments, json_fields::MAX_HEART_RATE)?;
        let algorithm = match optional_str(arguments, json_fields::FORMULA)? {
            Some(token) => token.parse::<MaxHrAlgorithm>()?,
            None => MaxHrAlgorithm::default(),
        };

        let zones = heart_rate_zones(age, resting, max, algorithm)?;
        to_value(&zones)
    }

    /// `convert_pace` tool
    fn convert_pace(arguments: &Value) -> AppResult<Value> {
        let value = require_f64(arguments, json_fields::VALUE)?;
        let from_unit = require_str(arguments, json_fields::FROM_UNIT)?.parse::<PaceUnit>()?;
        let to_unit = require_str(arguments, json_fields::TO_UNIT)?.parse::<PaceUnit>()?;

        let converted = convert(value, from_unit, to_unit)?;
        Ok(json!({
            "value": round3(converted.value),
            "unit": converted.unit.token(),
            "formatted": converted.formatted()?,
            "format": converted.unit.display_format(),
        }))
    }
}

/// Extract a required f64 argument
fn require_f64(arguments: &Value, field: &str) -> AppResult<f64> {
    match arguments.get(field) {
        None | Some(Value::Null) => Err(AppError::missing_field(field)),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| AppError::invalid_format(format!("Field '{field}' must be a number"))),
    }
}

/// Extract a required u32 argument
fn require_u32(arguments: &Value, field: &str) -> AppResult<u32> {
    match arguments.get(field) {
        None | Some(Value::Null) => Err(AppError::missing_field(field)),
        Some(value) => value
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .ok_or_else(|| {
                AppError::invalid_format(format!("Field '{field}' must be a non-negative integer"))
            }),
    }
}

/// Extract an optional u32 argument
fn optional_u32(arguments: &Value, field: &str) -> AppResult<Option<u32>> {
    match arguments.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .map(Some)
            .ok_or_else(|| {
                AppError::invalid_format(format!("Field '{field}' must be a non-negative integer"))
            }),
    }
}

/// Extract a required string argument
fn require_str<'a>(arguments: &'a Value, field: &str) -> AppResult<&'a str> {
    match arguments.get(field) {
        None | Some(Value::Null) => Err(AppError::missing_field(field)),
        Some(value) => value
            .as_str()
            .ok_or_else(|| AppError::invalid_format(format!("Field '{field}' must be a string"))),
    }
}

/// Extract an optional string argument
fn optional_str<'a>(arguments: &'a Value, field: &str) -> AppResult<Option<&'a str>> {
    match arguments.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| AppError::invalid_format(format!("Field '{field}' must be a string"))),
    }
}

/// Serialize an engine result, mapping failures to internal errors
fn to_value<T: serde::Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::internal(format!("Serialization failed: {e}")))
}

/// Round to one decimal place for display-stable scores
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to three decimal places for converted unit values
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
