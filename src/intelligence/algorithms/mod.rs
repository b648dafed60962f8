// ABOUTME: Calculation strategy modules for each running methodology
// ABOUTME: Each strategy is stateless and takes its tuning as explicit configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Calculation Strategy Module
//!
//! Each methodology lives in its own module behind a small calculator type.
//! There is no shared base abstraction; the strategies only have the
//! formatting utilities and the root-finder in common.

pub mod heart_rate;
pub mod mcmillan;
pub mod riegel;
pub mod vdot;

// Re-export strategy types
pub use heart_rate::{heart_rate_zones, HeartRateZone, HeartRateZones, MaxHrAlgorithm, MaxHrSource};
pub use mcmillan::{McmillanCalculator, McmillanTrainingPaces, RacePrediction, VelocityMarkers};
pub use riegel::RiegelPredictor;
pub use vdot::{TrainingPaces, VdotCalculator};
