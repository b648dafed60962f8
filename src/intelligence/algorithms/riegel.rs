// ABOUTME: Riegel power-law race-time extrapolation between distances
// ABOUTME: Pure closed form; the fatigue exponent is explicit configuration, not a global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Riegel race-time prediction
//!
//! `t2 = t1 * (d2 / d1) ^ exponent`
//!
//! # Scientific References
//!
//! - Riegel, P.S. (1981). "Athletic records and human endurance."
//!   *American Scientist*, 69(3), 285-290.

use crate::config::RiegelConfig;
use crate::errors::{AppError, AppResult};
use crate::models::Performance;

/// Riegel power-law predictor
#[derive(Debug, Clone, Copy)]
pub struct RiegelPredictor {
    config: RiegelConfig,
}

impl RiegelPredictor {
    /// Create a predictor with the given fatigue exponent configuration
    #[must_use]
    pub const fn new(config: RiegelConfig) -> Self {
        Self { config }
    }

    /// The configured fatigue exponent
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.config.exponent
    }

    /// Predict the time in seconds for `target_distance_meters` from a
    /// known performance
    ///
    /// Predicting the performance's own distance returns its time exactly.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if any distance or the time is
    /// non-positive or non-finite.
    pub fn predict_time(
        &self,
        current_distance_meters: f64,
        current_time_seconds: f64,
        target_distance_meters: f64,
    ) -> AppResult<f64> {
        let performance = Performance::new(current_distance_meters, current_time_seconds)?;
        if !target_distance_meters.is_finite() || target_distance_meters <= 0.0 {
            return Err(AppError::invalid_input("Target distance must be positive"));
        }

        let distance_ratio = target_distance_meters / performance.distance_meters;
        Ok(performance.time_seconds * distance_ratio.powf(self.config.exponent))
    }
}

impl Default for RiegelPredictor {
    fn default() -> Self {
        Self::new(RiegelConfig::default())
    }
}
