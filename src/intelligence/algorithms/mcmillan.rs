// ABOUTME: McMillan velocity markers, equivalent race times, and training pace zones
// ABOUTME: Markers anchor the performance onto one characteristic duration, then apply fixed ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! McMillan running calculations
//!
//! The three characteristic velocities each have a duration a trained runner
//! can sustain them for (vVO2 about 10 minutes, CV about 40, vLT about 60).
//! An input performance is projected onto whichever marker its duration most
//! closely represents via the endurance power law, and the other two markers
//! derive from fixed ratio offsets of that anchor. Race predictions blend
//! the markers by target duration; training zones are fixed percentage bands
//! of the relevant marker.
//!
//! # Scientific References
//!
//! - McMillan, G. (2013). "YOU (Only Faster): Training plans to help you
//!   train smarter and run faster"
//! - McMillan Running Calculator: <https://www.mcmillanrunning.com/>

use crate::config::RiegelConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::physiological_constants::mcmillan::{
    CV_DURATION_SECS, GROUP_DESCRIPTIONS, MAX_DISTANCE_METERS, MAX_PACE_SECS_PER_KM,
    MIN_DISTANCE_METERS, MIN_PACE_SECS_PER_KM, MarkerKind, RACE_TIME_ITERATIONS,
    RATIO_VLT_OVER_CV, RATIO_VVO2_OVER_CV, STANDARD_DISTANCES, TRAINING_SUB_ZONES,
    VLT_DURATION_SECS, VVO2_DURATION_SECS,
};
use crate::models::{FormattedDuration, FormattedPace, PaceRange, Performance};
use crate::units::formatting::seconds_to_pace_string;
use serde::{Deserialize, Serialize};

/// A single velocity marker with its pace representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityMarker {
    /// Velocity in meters per second
    pub velocity_ms: f64,
    /// Equivalent pace per kilometre
    pub pace: FormattedPace,
    /// Human-readable description of the marker
    pub description: String,
}

/// The three McMillan velocity markers; `v_lt <= cv <= v_vo2` always holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityMarkers {
    /// Lactate-threshold velocity (slowest)
    pub v_lt: VelocityMarker,
    /// Critical velocity
    pub cv: VelocityMarker,
    /// Velocity at VO2max (fastest)
    pub v_vo2: VelocityMarker,
}

/// A predicted equivalent race performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePrediction {
    /// Event name (e.g. "Half Marathon")
    pub event: String,
    /// Event distance in meters
    pub distance_meters: f64,
    /// Predicted finishing time
    pub time: FormattedDuration,
}

/// One training sub-zone with its pace range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McmillanSubZone {
    /// Sub-zone name (e.g. "tempo_runs")
    pub name: String,
    /// What this sub-zone is for
    pub description: String,
    /// Target pace range, `lower` being the faster end
    pub pace: PaceRange,
}

/// A zone group (endurance, stamina, speed, sprint) with its sub-zones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McmillanZoneGroup {
    /// What this zone group trains
    pub description: String,
    /// Sub-zones in table order
    pub zones: Vec<McmillanSubZone>,
}

/// The full McMillan training pace structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McmillanTrainingPaces {
    /// Easy-effort, long-duration running
    pub endurance: McmillanZoneGroup,
    /// Medium-effort, medium-duration running
    pub stamina: McmillanZoneGroup,
    /// High-effort, short-duration running
    pub speed: McmillanZoneGroup,
    /// Very high speed, very short distances
    pub sprint: McmillanZoneGroup,
}

/// Marker velocities in meters per second, before formatting
#[derive(Debug, Clone, Copy)]
struct MarkerVelocities {
    v_lt: f64,
    cv: f64,
    v_vo2: f64,
}

/// McMillan calculator
///
/// The endurance decay exponent derives from the Riegel fatigue exponent so
/// marker derivation and race projection share one fatigue model.
#[derive(Debug, Clone, Copy)]
pub struct McmillanCalculator {
    decay_exponent: f64,
}

impl McmillanCalculator {
    /// Create a calculator from the Riegel configuration
    #[must_use]
    pub fn new(config: RiegelConfig) -> Self {
        Self {
            decay_exponent: (config.exponent - 1.0) / config.exponent,
        }
    }

    /// Derive the three velocity markers from a race performance
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidInput` for non-positive or implausible inputs
    /// - `AppError::InconsistentMarker` if the derived ordering is violated
    ///   (a calibration defect, not a user error)
    pub fn velocity_markers(&self, distance_meters: f64, time_seconds: f64) -> AppResult<VelocityMarkers> {
        let performance = Self::validate(distance_meters, time_seconds)?;
        let markers = self.marker_velocities(&performance)?;

        Ok(VelocityMarkers {
            v_lt: Self::marker(
                markers.v_lt,
                "Lactate threshold velocity - the fastest pace sustainable for about an hour",
            )?,
            cv: Self::marker(
                markers.cv,
                "Critical velocity - the theoretical maximum sustainable aerobic pace",
            )?,
            v_vo2: Self::marker(
                markers.v_vo2,
                "Velocity at VO2max - the pace eliciting maximal oxygen uptake",
            )?,
        })
    }

    /// Predict equivalent race times for every standard distance
    ///
    /// The input performance's own distance reproduces the input time
    /// unchanged; every other distance resolves the duration-dependent
    /// marker blend with a short fixed-point iteration.
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidInput` for non-positive or implausible inputs
    /// - `AppError::InconsistentMarker` on a calibration defect
    pub fn predict_race_times(&self, distance_meters: f64, time_seconds: f64) -> AppResult<Vec<RacePrediction>> {
        let performance = Self::validate(distance_meters, time_seconds)?;
        let markers = self.marker_velocities(&performance)?;

        let mut predictions = Vec::with_capacity(STANDARD_DISTANCES.len());
        for &(event, event_distance) in STANDARD_DISTANCES {
            let predicted_seconds = if (event_distance - performance.distance_meters).abs() < 0.5 {
                performance.time_seconds
            } else {
                self.race_time(&markers, event_distance)
            };

            predictions.push(RacePrediction {
                event: event.to_owned(),
                distance_meters: event_distance,
                time: FormattedDuration::from_seconds(predicted_seconds)?,
            });
        }

        Ok(predictions)
    }

    /// Derive the training pace zones from a race performance
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidInput` for non-positive or implausible inputs
    /// - `AppError::InconsistentMarker` on a calibration defect
    pub fn training_paces(&self, distance_meters: f64, time_seconds: f64) -> AppResult<McmillanTrainingPaces> {
        let performance = Self::validate(distance_meters, time_seconds)?;
        let markers = self.marker_velocities(&performance)?;

        let mut endurance = Self::group("endurance");
        let mut stamina = Self::group("stamina");
        let mut speed = Self::group("speed");
        let mut sprint = Self::group("sprint");

        for &(group, name, kind, fast_fraction, slow_fraction, description) in TRAINING_SUB_ZONES {
            let anchor = match kind {
                MarkerKind::Vlt => markers.v_lt,
                MarkerKind::Cv => markers.cv,
                MarkerKind::Vvo2 => markers.v_vo2,
            };
            let sub_zone = McmillanSubZone {
                name: name.to_owned(),
                description: description.to_owned(),
                pace: PaceRange::from_seconds_per_km(
                    1000.0 / (anchor * fast_fraction),
                    1000.0 / (anchor * slow_fraction),
                )?,
            };

            match group {
                "endurance" => endurance.zones.push(sub_zone),
                "stamina" => stamina.zones.push(sub_zone),
                "speed" => speed.zones.push(sub_zone),
                _ => sprint.zones.push(sub_zone),
            }
        }

        Ok(McmillanTrainingPaces {
            endurance,
            stamina,
            speed,
            sprint,
        })
    }

    /// Validate positivity and plausibility of a race performance
    fn validate(distance_meters: f64, time_seconds: f64) -> AppResult<Performance> {
        let performance = Performance::new(distance_meters, time_seconds)?;

        if performance.distance_meters < MIN_DISTANCE_METERS {
            return Err(AppError::invalid_input(format!(
                "Distance too short, must be at least {MIN_DISTANCE_METERS}m for meaningful calculations"
            )));
        }
        if performance.distance_meters > MAX_DISTANCE_METERS {
            return Err(AppError::invalid_input(format!(
                "Distance too long, must be at most {MAX_DISTANCE_METERS}m for this calculation method"
            )));
        }

        let pace = performance.pace_seconds_per_km();
        if pace < MIN_PACE_SECS_PER_KM {
            return Err(AppError::invalid_input(format!(
                "Pace appears unrealistically fast (faster than {}/km)",
                pace_label(MIN_PACE_SECS_PER_KM)
            )));
        }
        if pace > MAX_PACE_SECS_PER_KM {
            return Err(AppError::invalid_input(format!(
                "Pace appears unrealistically slow (slower than {}/km)",
                pace_label(MAX_PACE_SECS_PER_KM)
            )));
        }

        Ok(performance)
    }

    /// Project the performance onto its nearest marker duration and derive
    /// the other two markers via the fixed ratios
    fn marker_velocities(&self, performance: &Performance) -> AppResult<MarkerVelocities> {
        let velocity = performance.velocity_ms();
        let duration = performance.time_seconds;

        // Nearest marker duration in log space; durations are ratios, not offsets
        let anchor_duration = [VVO2_DURATION_SECS, CV_DURATION_SECS, VLT_DURATION_SECS]
            .into_iter()
            .min_by(|a, b| {
                let da = (duration / a).ln().abs();
                let db = (duration / b).ln().abs();
                da.total_cmp(&db)
            })
            .unwrap_or(CV_DURATION_SECS);

        let anchor_velocity = velocity * (duration / anchor_duration).powf(self.decay_exponent);

        let cv = if (anchor_duration - VLT_DURATION_SECS).abs() < f64::EPSILON {
            anchor_velocity / RATIO_VLT_OVER_CV
        } else if (anchor_duration - VVO2_DURATION_SECS).abs() < f64::EPSILON {
            anchor_velocity / RATIO_VVO2_OVER_CV
        } else {
            anchor_velocity
        };

        let markers = MarkerVelocities {
            v_lt: cv * RATIO_VLT_OVER_CV,
            cv,
            v_vo2: cv * RATIO_VVO2_OVER_CV,
        };

        if markers.v_lt > markers.cv || markers.cv > markers.v_vo2 {
            return Err(AppError::inconsistent_marker(format!(
                "Marker ordering violated: vLT={:.3} CV={:.3} vVO2={:.3}",
                markers.v_lt, markers.cv, markers.v_vo2
            )));
        }

        Ok(markers)
    }

    /// Sustainable velocity for an effort duration: power-law decay outside
    /// the marker range, log-duration interpolation between markers
    fn velocity_at_duration(&self, markers: &MarkerVelocities, duration_secs: f64) -> f64 {
        if duration_secs <= VVO2_DURATION_SECS {
            markers.v_vo2 * (VVO2_DURATION_SECS / duration_secs).powf(self.decay_exponent)
        } else if duration_secs <= CV_DURATION_SECS {
            let weight = (duration_secs / VVO2_DURATION_SECS).ln()
                / (CV_DURATION_SECS / VVO2_DURATION_SECS).ln();
            weight.mul_add(markers.cv - markers.v_vo2, markers.v_vo2)
        } else if duration_secs <= VLT_DURATION_SECS {
            let weight = (duration_secs / CV_DURATION_SECS).ln()
                / (VLT_DURATION_SECS / CV_DURATION_SECS).ln();
            weight.mul_add(markers.v_lt - markers.cv, markers.cv)
        } else {
            markers.v_lt * (VLT_DURATION_SECS / duration_secs).powf(self.decay_exponent)
        }
    }

    /// Resolve a race time: duration depends on predicted velocity and vice
    /// versa, so iterate the pair to a fixed point
    fn race_time(&self, markers: &MarkerVelocities, distance_meters: f64) -> f64 {
        let mut duration = distance_meters / markers.cv;
        for _ in 0..RACE_TIME_ITERATIONS {
            duration = distance_meters / self.velocity_at_duration(markers, duration);
        }
        duration
    }

    /// Build a display marker from a velocity in m/s
    fn marker(velocity_ms: f64, description: &str) -> AppResult<VelocityMarker> {
        Ok(VelocityMarker {
            velocity_ms,
            pace: FormattedPace::from_seconds_per_km(1000.0 / velocity_ms)?,
            description: description.to_owned(),
        })
    }

    /// Empty zone group with its description
    fn group(name: &str) -> McmillanZoneGroup {
        let description = GROUP_DESCRIPTIONS
            .iter()
            .find(|(group, _)| *group == name)
            .map_or("", |(_, text)| *text);
        McmillanZoneGroup {
            description: description.to_owned(),
            zones: Vec::new(),
        }
    }
}

impl Default for McmillanCalculator {
    fn default() -> Self {
        Self::new(RiegelConfig::default())
    }
}

/// Render a pace limit as "M:SS" for error messages
fn pace_label(seconds_per_km: f64) -> String {
    seconds_to_pace_string(seconds_per_km).unwrap_or_else(|_| format!("{seconds_per_km}s"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_ordering_for_5k() {
        let markers = McmillanCalculator::default()
            .velocity_markers(5000.0, 1500.0)
            .unwrap();
        assert!(markers.v_lt.velocity_ms <= markers.cv.velocity_ms);
        assert!(markers.cv.velocity_ms <= markers.v_vo2.velocity_ms);
        assert_eq!(markers.v_lt.pace.value, "5:15");
        assert_eq!(markers.cv.pace.value, "5:08");
        assert_eq!(markers.v_vo2.pace.value, "4:45");
    }

    #[test]
    fn test_own_distance_reproduces_input_time() {
        let predictions = McmillanCalculator::default()
            .predict_race_times(5000.0, 1500.0)
            .unwrap();
        let five_k = predictions
            .iter()
            .find(|p| p.event == "5000m")
            .unwrap();
        assert!((five_k.time.time_seconds - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_predictions_are_monotone_in_distance() {
        let predictions = McmillanCalculator::default()
            .predict_race_times(5000.0, 1500.0)
            .unwrap();
        for pair in predictions.windows(2) {
            assert!(
                pair[1].time.time_seconds > pair[0].time.time_seconds,
                "{} not slower than {}",
                pair[1].event,
                pair[0].event
            );
        }
    }

    #[test]
    fn test_10k_prediction_close_to_riegel() {
        let predictions = McmillanCalculator::default()
            .predict_race_times(5000.0, 1500.0)
            .unwrap();
        let ten_k = predictions.iter().find(|p| p.event == "10km").unwrap();
        assert!(
            (ten_k.time.time_seconds - 3127.9).abs() < 5.0,
            "got {}",
            ten_k.time.time_seconds
        );
    }

    #[test]
    fn test_implausible_inputs_rejected() {
        let calc = McmillanCalculator::default();
        assert!(calc.velocity_markers(200.0, 60.0).is_err());
        assert!(calc.velocity_markers(200_000.0, 36_000.0).is_err());
        // 5k in 4 minutes is faster than 1:00/km
        assert!(calc.velocity_markers(5000.0, 240.0).is_err());
        // 1km in 25 minutes is slower than 20:00/km
        assert!(calc.velocity_markers(1000.0, 1500.0).is_err());
        assert!(calc.velocity_markers(-5000.0, 1500.0).is_err());
    }

    #[test]
    fn test_training_pace_groups_populated() {
        let paces = McmillanCalculator::default()
            .training_paces(5000.0, 1500.0)
            .unwrap();
        assert_eq!(paces.endurance.zones.len(), 3);
        assert_eq!(paces.stamina.zones.len(), 4);
        assert_eq!(paces.speed.zones.len(), 2);
        assert_eq!(paces.sprint.zones.len(), 2);

        let easy = paces
            .endurance
            .zones
            .iter()
            .find(|z| z.name == "easy_runs")
            .unwrap();
        assert_eq!(easy.pace.lower.value, "6:07");
        assert_eq!(easy.pace.upper.value, "6:44");
    }

    #[test]
    fn test_recovery_is_slower_than_sprint() {
        let paces = McmillanCalculator::default()
            .training_paces(5000.0, 1500.0)
            .unwrap();
        let recovery = &paces.endurance.zones[0];
        let sprint = paces.sprint.zones.last().unwrap();
        assert!(recovery.pace.lower.seconds_per_km > sprint.pace.upper.seconds_per_km);
    }
}
