// ABOUTME: Jack Daniels' VDOT engine with forward computation, solver inverse, and training paces
// ABOUTME: Zone velocities anchor to characteristic effort durations through the shared root-finder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Daniels VDOT calculations
//!
//! Forward: a race performance maps to a VDOT fitness score through the VO2
//! cost of its velocity and the fraction of VO2max sustainable for its
//! duration. Inverse: the fraction term depends on the unknown time, so
//! predicted times come from a bracketed bisection on the forward formula.
//!
//! # Scientific References
//!
//! - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
//! - Daniels, J. & Gilbert, J. (1979). "Oxygen Power: Performance Tables for Distance Runners"

use crate::config::SolverConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::physiological_constants::daniels::{
    EASY_FAST, EASY_SLOW, INTERVAL, MARATHON, PCT_BASE, PCT_FAST_AMPLITUDE, PCT_FAST_RATE,
    PCT_SLOW_AMPLITUDE, PCT_SLOW_RATE, REPETITION, THRESHOLD, TIME_BRACKET_MULTIPLE, VDOT_MAX,
    VO2_COEF_A, VO2_COEF_B, VO2_COEF_C, ZONE_VELOCITY_BRACKET, ZoneAnchor,
};
use crate::intelligence::solver;
use crate::models::{FormattedPace, PaceRange, Performance};
use serde::{Deserialize, Serialize};

/// Daniels VDOT calculator
///
/// Stateless apart from explicit solver tuning; safe to share across calls.
#[derive(Debug, Clone, Copy)]
pub struct VdotCalculator {
    solver: SolverConfig,
}

/// Training paces derived from a VDOT value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPaces {
    /// Easy pace range (fast and slow bound)
    pub easy: PaceRange,
    /// Marathon pace
    pub marathon: FormattedPace,
    /// Threshold pace
    pub threshold: FormattedPace,
    /// Interval pace
    pub interval: FormattedPace,
    /// Repetition pace
    pub repetition: FormattedPace,
}

impl VdotCalculator {
    /// Create a calculator with the given solver tuning
    #[must_use]
    pub const fn new(solver: SolverConfig) -> Self {
        Self { solver }
    }

    /// Calculate VDOT from a race performance
    ///
    /// # Arguments
    ///
    /// * `distance_meters` - Race distance in meters
    /// * `time_seconds` - Race time in seconds
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance or time is non-positive
    /// or non-finite.
    pub fn calculate_vdot(&self, distance_meters: f64, time_seconds: f64) -> AppResult<f64> {
        let performance = Performance::new(distance_meters, time_seconds)?;
        Ok(Self::vdot_for(
            performance.velocity_m_min(),
            performance.time_seconds / 60.0,
        ))
    }

    /// Predict race time in seconds for a target distance at a given VDOT
    ///
    /// No closed form exists because the fraction-of-VO2max term depends on
    /// the unknown time; the solve bisects the forward formula over a
    /// bracket spanning both sides of a naive estimate at VO2max velocity.
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidInput` for an out-of-range VDOT or non-positive
    ///   distance
    /// - `AppError::ConvergenceFailed` if the solve exhausts its iteration
    ///   budget
    pub fn predict_time(&self, vdot: f64, target_distance_meters: f64) -> AppResult<f64> {
        Self::validate_vdot(vdot)?;
        if !target_distance_meters.is_finite() || target_distance_meters <= 0.0 {
            return Err(AppError::invalid_input("Distance must be positive"));
        }

        let naive_seconds = target_distance_meters / Self::velocity_at_vo2max(vdot)? * 60.0;
        let lo = naive_seconds / TIME_BRACKET_MULTIPLE;
        let hi = naive_seconds * TIME_BRACKET_MULTIPLE;

        solver::find_root(
            |time_seconds| {
                Self::vdot_for(
                    target_distance_meters / (time_seconds / 60.0),
                    time_seconds / 60.0,
                ) - vdot
            },
            lo,
            hi,
            &self.solver,
        )
    }

    /// Derive the five Daniels training paces from a VDOT value
    ///
    /// Each zone velocity is found with the same inverse-solve technique as
    /// race prediction, anchored to the zone's characteristic effort
    /// duration instead of a target distance.
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidInput` for an out-of-range VDOT
    /// - `AppError::ConvergenceFailed` if a zone solve fails
    pub fn training_paces(&self, vdot: f64) -> AppResult<TrainingPaces> {
        Self::validate_vdot(vdot)?;

        let easy_slow = self.zone_pace_seconds_per_km(vdot, EASY_SLOW)?;
        let easy_fast = self.zone_pace_seconds_per_km(vdot, EASY_FAST)?;

        Ok(TrainingPaces {
            easy: PaceRange::from_seconds_per_km(easy_fast, easy_slow)?,
            marathon: FormattedPace::from_seconds_per_km(
                self.zone_pace_seconds_per_km(vdot, MARATHON)?,
            )?,
            threshold: FormattedPace::from_seconds_per_km(
                self.zone_pace_seconds_per_km(vdot, THRESHOLD)?,
            )?,
            interval: FormattedPace::from_seconds_per_km(
                self.zone_pace_seconds_per_km(vdot, INTERVAL)?,
            )?,
            repetition: FormattedPace::from_seconds_per_km(
                self.zone_pace_seconds_per_km(vdot, REPETITION)?,
            )?,
        })
    }

    /// Forward VDOT for a velocity (m/min) sustained over a duration
    /// (minutes); no domain validation, shared by the public forward path
    /// and the solver closures
    fn vdot_for(velocity_m_min: f64, time_minutes: f64) -> f64 {
        let vo2 = (VO2_COEF_A * velocity_m_min)
            .mul_add(velocity_m_min, VO2_COEF_B.mul_add(velocity_m_min, VO2_COEF_C));
        vo2 / Self::percent_of_max(time_minutes)
    }

    /// Fraction of VO2max sustainable for an effort duration in minutes
    fn percent_of_max(time_minutes: f64) -> f64 {
        PCT_SLOW_AMPLITUDE.mul_add(
            (PCT_SLOW_RATE * time_minutes).exp(),
            PCT_FAST_AMPLITUDE.mul_add((PCT_FAST_RATE * time_minutes).exp(), PCT_BASE),
        )
    }

    /// Velocity at VO2max in m/min, from the quadratic inverse of the VO2
    /// cost formula; seeds the inverse-solve bracket
    fn velocity_at_vo2max(vdot: f64) -> AppResult<f64> {
        // vo2 = c + b*v + a*v^2, solve a*v^2 + b*v - (vdot - c) = 0
        let c = -(vdot - VO2_COEF_C);
        let discriminant = VO2_COEF_B.mul_add(VO2_COEF_B, -(4.0 * VO2_COEF_A * c));
        if discriminant < 0.0 {
            return Err(AppError::internal("Invalid VDOT for velocity inversion"));
        }
        Ok((-VO2_COEF_B + discriminant.sqrt()) / (2.0 * VO2_COEF_A))
    }

    /// Solve the velocity (m/min) whose forward VDOT over the anchor
    /// duration equals the zone's fraction of the runner's VDOT, then
    /// convert to seconds per kilometre
    fn zone_pace_seconds_per_km(&self, vdot: f64, (fraction, anchor_minutes): ZoneAnchor) -> AppResult<f64> {
        let target = fraction * vdot;
        let (lo, hi) = ZONE_VELOCITY_BRACKET;
        let velocity_m_min = solver::find_root(
            |velocity| Self::vdot_for(velocity, anchor_minutes) - target,
            lo,
            hi,
            &self.solver,
        )?;
        Ok(60_000.0 / velocity_m_min)
    }

    /// Validate a VDOT fitness score against its domain-valid range
    fn validate_vdot(vdot: f64) -> AppResult<()> {
        if !vdot.is_finite() || vdot <= 0.0 || vdot > VDOT_MAX {
            return Err(AppError::invalid_input(format!(
                "VDOT {vdot:.1} is outside the valid range (0-{VDOT_MAX})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> VdotCalculator {
        VdotCalculator::new(SolverConfig::default())
    }

    #[test]
    fn test_vdot_for_5k_in_25_minutes() {
        let vdot = calculator().calculate_vdot(5000.0, 1500.0).unwrap();
        assert!((vdot - 38.4).abs() < 0.15, "got {vdot}");
    }

    #[test]
    fn test_vdot_increases_with_velocity() {
        let calc = calculator();
        let slower = calc.calculate_vdot(5000.0, 1500.0).unwrap();
        let faster = calc.calculate_vdot(5500.0, 1500.0).unwrap();
        assert!(faster > slower);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let calc = calculator();
        assert!(calc.calculate_vdot(-5000.0, 1500.0).is_err());
        assert!(calc.calculate_vdot(5000.0, 0.0).is_err());
        assert!(calc.predict_time(0.0, 10_000.0).is_err());
        assert!(calc.predict_time(90.0, 10_000.0).is_err());
        assert!(calc.predict_time(50.0, -10.0).is_err());
    }

    #[test]
    fn test_roundtrip_recovers_time() {
        let calc = calculator();
        let vdot = calc.calculate_vdot(5000.0, 1500.0).unwrap();
        let predicted = calc.predict_time(vdot, 5000.0).unwrap();
        assert!((predicted - 1500.0).abs() < 1.0, "got {predicted}");
    }

    #[test]
    fn test_threshold_pace_for_vdot_38_4() {
        let paces = calculator().training_paces(38.4).unwrap();
        assert!(
            (paces.threshold.seconds_per_km - 290.0).abs() < 2.0,
            "got {}",
            paces.threshold.seconds_per_km
        );
        assert_eq!(paces.threshold.value, "4:50");
    }

    #[test]
    fn test_zones_are_strictly_ordered() {
        let paces = calculator().training_paces(50.0).unwrap();
        assert!(paces.easy.upper.seconds_per_km > paces.easy.lower.seconds_per_km);
        assert!(paces.easy.lower.seconds_per_km > paces.marathon.seconds_per_km);
        assert!(paces.marathon.seconds_per_km > paces.threshold.seconds_per_km);
        assert!(paces.threshold.seconds_per_km > paces.interval.seconds_per_km);
        assert!(paces.interval.seconds_per_km > paces.repetition.seconds_per_km);
    }
}
