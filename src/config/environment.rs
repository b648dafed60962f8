// ABOUTME: Environment-based configuration with typed sub-configs and per-variable defaults
// ABOUTME: Solver and predictor tuning is explicit state handed to calculators, never globals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Environment-based server configuration
//!
//! All tuning knobs load from environment variables with sensible defaults,
//! then travel into the calculators as explicit values. Nothing here is
//! mutable after startup.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Default absolute VDOT tolerance for the inverse solver
const DEFAULT_SOLVER_TOLERANCE: f64 = 1e-4;

/// Default iteration cap for the inverse solver
const DEFAULT_SOLVER_MAX_ITERATIONS: u32 = 100;

/// Default Riegel fatigue exponent (Riegel 1981; athletes vary 1.03-1.08)
const DEFAULT_RIEGEL_EXPONENT: f64 = 1.06;

/// Bounded root-finder tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Absolute tolerance on the residual (VDOT units)
    pub tolerance: f64,
    /// Hard iteration cap; exhaustion is a reported `ConvergenceFailed`
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SOLVER_TOLERANCE,
            max_iterations: DEFAULT_SOLVER_MAX_ITERATIONS,
        }
    }
}

/// Riegel power-law predictor tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiegelConfig {
    /// Fatigue exponent applied to the distance ratio
    pub exponent: f64,
}

impl Default for RiegelConfig {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_RIEGEL_EXPONENT,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Log level string (trace, debug, info, warn, error)
    pub log_level: String,
    /// Inverse-solver tuning
    pub solver: SolverConfig,
    /// Riegel predictor tuning
    pub riegel: RiegelConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is present but unparseable or
    /// outside its valid range.
    pub fn from_env() -> AppResult<Self> {
        let solver = SolverConfig {
            tolerance: env_f64("SOLVER_TOLERANCE", DEFAULT_SOLVER_TOLERANCE)?,
            max_iterations: env_u32("SOLVER_MAX_ITERATIONS", DEFAULT_SOLVER_MAX_ITERATIONS)?,
        };
        if solver.tolerance <= 0.0 {
            return Err(AppError::config("SOLVER_TOLERANCE must be positive"));
        }
        if solver.max_iterations == 0 {
            return Err(AppError::config("SOLVER_MAX_ITERATIONS must be positive"));
        }

        let riegel = RiegelConfig {
            exponent: env_f64("RIEGEL_EXPONENT", DEFAULT_RIEGEL_EXPONENT)?,
        };
        if riegel.exponent < 1.0 {
            return Err(AppError::config(
                "RIEGEL_EXPONENT must be at least 1.0 (sub-linear fatigue is not a thing)",
            ));
        }

        Ok(Self {
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            solver,
            riegel,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "log_level={} solver_tolerance={} solver_max_iterations={} riegel_exponent={}",
            self.log_level,
            self.solver.tolerance,
            self.solver.max_iterations,
            self.riegel.exponent
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            solver: SolverConfig::default(),
            riegel: RiegelConfig::default(),
        }
    }
}

/// Read an f64 environment variable with a default
fn env_f64(name: &str, default: f64) -> AppResult<f64> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {name} value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

/// Read a u32 environment variable with a default
fn env_u32(name: &str, default: u32) -> AppResult<u32> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {name} value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert!((config.solver.tolerance - 1e-4).abs() < f64::EPSILON);
        assert_eq!(config.solver.max_iterations, 100);
        assert!((config.riegel.exponent - 1.06).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_mentions_every_knob() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("solver_tolerance"));
        assert!(summary.contains("riegel_exponent"));
    }
}
