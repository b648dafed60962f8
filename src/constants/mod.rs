// ABOUTME: Centralized constants for protocol versions, JSON-RPC error codes, and tool names
// ABOUTME: Single source of truth so the schema, dispatch, and transport layers never drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Application-wide constants, grouped by concern.

/// MCP protocol constants
pub mod protocol {
    /// MCP protocol version implemented by this server
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

    /// JSON-RPC version used by the MCP protocol
    pub const JSONRPC_VERSION: &str = "2.0";

    /// Server name advertised during initialization
    pub const SERVER_NAME: &str = "cadence-mcp-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// JSON-RPC error codes
pub mod errors {
    /// JSON-RPC parse error (malformed JSON on the wire)
    pub const ERROR_PARSE: i32 = -32700;

    /// JSON-RPC method not found
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

    /// JSON-RPC invalid params
    pub const ERROR_INVALID_PARAMS: i32 = -32602;

    /// JSON-RPC internal error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;
}

/// Tool names exposed through `tools/list`
pub mod tools {
    /// Daniels VDOT from a race performance
    pub const CALCULATE_VDOT: &str = "calculate_vdot";

    /// Daniels training paces for a VDOT value
    pub const TRAINING_PACES: &str = "training_paces";

    /// Combined Riegel + Daniels race-time prediction
    pub const PREDICT_RACE_TIME: &str = "predict_race_time";

    /// Riegel power-law prediction alone
    pub const RIEGEL_PREDICT: &str = "riegel_predict";

    /// McMillan velocity markers (vLT, CV, vVO2)
    pub const MCMILLAN_VELOCITY_MARKERS: &str = "mcmillan_velocity_markers";

    /// McMillan equivalent race times across standard distances
    pub const MCMILLAN_RACE_TIMES: &str = "mcmillan_race_times";

    /// McMillan training pace zones
    pub const MCMILLAN_TRAINING_PACES: &str = "mcmillan_training_paces";

    /// Heart-rate zones under percent-max and Karvonen bases
    pub const HEART_RATE_ZONES: &str = "heart_rate_zones";

    /// Pace/speed unit conversion
    pub const CONVERT_PACE: &str = "convert_pace";
}

/// JSON field names shared between schema declarations and argument parsing
pub mod json_fields {
    /// Race distance in meters
    pub const DISTANCE: &str = "distance";

    /// Race time in seconds
    pub const TIME: &str = "time";

    /// VDOT fitness score
    pub const VDOT: &str = "vdot";

    /// Distance of the known performance in meters
    pub const CURRENT_DISTANCE: &str = "current_distance";

    /// Time of the known performance in seconds
    pub const CURRENT_TIME: &str = "current_time";

    /// Distance to predict in meters
    pub const TARGET_DISTANCE: &str = "target_distance";

    /// Runner age in years
    pub const AGE: &str = "age";

    /// Resting heart rate in BPM
    pub const RESTING_HEART_RATE: &str = "resting_heart_rate";

    /// Maximum heart rate in BPM (optional)
    pub const MAX_HEART_RATE: &str = "max_heart_rate";

    /// Max-HR estimation formula selector (optional)
    pub const FORMULA: &str = "formula";

    /// Numeric value for unit conversion
    pub const VALUE: &str = "value";

    /// Source unit token
    pub const FROM_UNIT: &str = "from_unit";

    /// Target unit token
    pub const TO_UNIT: &str = "to_unit";
}
