// ABOUTME: Pace and speed unit conversion through a meters-per-second canonical form
// ABOUTME: Pace units are reciprocal in speed, so pace<->speed conversion is not a linear scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Pace and speed conversion utilities
//!
//! Every conversion canonicalizes the input to meters per second and then
//! reprojects to the target unit. Pace units (minutes per distance) invert
//! speed, so a pace of zero or less has no defined speed and a speed of zero
//! has no finite pace.

use crate::errors::{AppError, AppResult};
use crate::units::formatting::seconds_to_pace_string;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1609.34;

/// Supported pace and speed units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceUnit {
    /// Minutes per kilometre
    MinKm,
    /// Minutes per mile
    MinMile,
    /// Kilometres per hour
    Kmh,
    /// Miles per hour
    Mph,
}

impl PaceUnit {
    /// Whether this unit measures time per distance (a pace) rather than
    /// distance per time (a speed)
    #[must_use]
    pub const fn is_pace(self) -> bool {
        matches!(self, Self::MinKm | Self::MinMile)
    }

    /// Wire token for this unit
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::MinKm => "min_km",
            Self::MinMile => "min_mile",
            Self::Kmh => "kmh",
            Self::Mph => "mph",
        }
    }

    /// Display format label for values in this unit
    #[must_use]
    pub const fn display_format(self) -> &'static str {
        match self {
            Self::MinKm => "min:sec/km",
            Self::MinMile => "min:sec/mile",
            Self::Kmh => "km/h",
            Self::Mph => "mph",
        }
    }
}

impl FromStr for PaceUnit {
    type Err = AppError;

    // Tokens are matched exactly; the tool contract admits no aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min_km" => Ok(Self::MinKm),
            "min_mile" => Ok(Self::MinMile),
            "kmh" => Ok(Self::Kmh),
            "mph" => Ok(Self::Mph),
            other => Err(AppError::unsupported_unit(other)),
        }
    }
}

/// A value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitValue {
    /// Numeric value in `unit`
    pub value: f64,
    /// The unit of `value`
    pub unit: PaceUnit,
}

impl UnitValue {
    /// Render the value for display: "M:SS" for paces, two decimals for
    /// speeds
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if a pace value is negative or
    /// non-finite.
    pub fn formatted(&self) -> AppResult<String> {
        if self.unit.is_pace() {
            seconds_to_pace_string(self.value * 60.0)
        } else {
            Ok(format!("{:.2}", self.value))
        }
    }
}

/// Convert a value between pace/speed units
///
/// # Errors
///
/// - `AppError::InvalidInput` for non-finite values, non-positive paces, or
///   negative speeds
/// - `AppError::DivisionUndefined` when a zero speed is projected onto a
///   pace unit (a stationary runner has no finite pace)
pub fn convert(value: f64, from: PaceUnit, to: PaceUnit) -> AppResult<UnitValue> {
    if !value.is_finite() {
        return Err(AppError::invalid_input("Value must be finite"));
    }
    if from.is_pace() && value <= 0.0 {
        return Err(AppError::invalid_input(
            "Pace must be positive (zero or negative time per distance is undefined)",
        ));
    }
    if !from.is_pace() && value < 0.0 {
        return Err(AppError::invalid_input("Speed must not be negative"));
    }

    let meters_per_second = to_meters_per_second(value, from);

    if to.is_pace() && meters_per_second == 0.0 {
        return Err(AppError::division_undefined(
            "Zero speed has no finite pace",
        ));
    }

    Ok(UnitValue {
        value: from_meters_per_second(meters_per_second, to),
        unit: to,
    })
}

/// Canonicalize a unit value to meters per second
fn to_meters_per_second(value: f64, unit: PaceUnit) -> f64 {
    match unit {
        PaceUnit::MinKm => 1000.0 / (value * 60.0),
        PaceUnit::MinMile => METERS_PER_MILE / (value * 60.0),
        PaceUnit::Kmh => value * (1000.0 / 3600.0),
        PaceUnit::Mph => value * (METERS_PER_MILE / 3600.0),
    }
}

/// Reproject a meters-per-second speed onto the target unit
fn from_meters_per_second(meters_per_second: f64, unit: PaceUnit) -> f64 {
    match unit {
        PaceUnit::MinKm => 1000.0 / meters_per_second / 60.0,
        PaceUnit::MinMile => METERS_PER_MILE / meters_per_second / 60.0,
        PaceUnit::Kmh => meters_per_second * 3.6,
        PaceUnit::Mph => meters_per_second * (3600.0 / METERS_PER_MILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_UNITS: [PaceUnit; 4] = [
        PaceUnit::MinKm,
        PaceUnit::MinMile,
        PaceUnit::Kmh,
        PaceUnit::Mph,
    ];

    #[test]
    fn test_min_km_to_min_mile() {
        let result = convert(5.0, PaceUnit::MinKm, PaceUnit::MinMile).unwrap();
        assert!((result.value - 8.0467).abs() < 1e-4);
        assert_eq!(result.formatted().unwrap(), "8:03");
    }

    #[test]
    fn test_pace_to_speed_is_reciprocal() {
        // 5:00/km is 12 km/h, not a linear rescaling of 5.0
        let result = convert(5.0, PaceUnit::MinKm, PaceUnit::Kmh).unwrap();
        assert!((result.value - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip_all_unit_pairs() {
        for from in ALL_UNITS {
            for to in ALL_UNITS {
                let there = convert(6.2, from, to).unwrap();
                let back = convert(there.value, to, from).unwrap();
                assert!(
                    (back.value - 6.2).abs() < 1e-9,
                    "{} -> {} did not round-trip",
                    from.token(),
                    to.token()
                );
            }
        }
    }

    #[test]
    fn test_zero_speed_to_pace_is_division_undefined() {
        let error = convert(0.0, PaceUnit::Kmh, PaceUnit::MinKm).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::DivisionUndefined);
    }

    #[test]
    fn test_zero_speed_to_speed_is_fine() {
        let result = convert(0.0, PaceUnit::Kmh, PaceUnit::Mph).unwrap();
        assert!((result.value).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nonpositive_pace_rejected() {
        assert!(convert(0.0, PaceUnit::MinKm, PaceUnit::Kmh).is_err());
        assert!(convert(-4.0, PaceUnit::MinMile, PaceUnit::Mph).is_err());
    }

    #[test]
    fn test_unit_tokens_parse_exactly() {
        assert_eq!("min_km".parse::<PaceUnit>().unwrap(), PaceUnit::MinKm);
        assert_eq!("mph".parse::<PaceUnit>().unwrap(), PaceUnit::Mph);
        assert!("MIN_KM".parse::<PaceUnit>().is_err());
        assert!("min/km".parse::<PaceUnit>().is_err());
        assert!("knots".parse::<PaceUnit>().is_err());
    }
}
