// ABOUTME: Immutable value types shared by every calculation engine
// ABOUTME: Pace and duration results always carry numeric seconds plus a display string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Common data structures for running performance calculations
//!
//! Every type here is a value constructed fresh per call and never mutated.
//! Pace and duration results expose both a machine-usable seconds field and
//! a formatted string with its format label, so callers never reparse.

use crate::errors::{AppError, AppResult};
use crate::units::formatting::{seconds_to_clock, seconds_to_pace_string};
use serde::{Deserialize, Serialize};

/// Display format label for absolute durations
pub const DURATION_FORMAT: &str = "HH:MM:SS";

/// Display format label for per-kilometre paces
pub const PACE_FORMAT: &str = "min:sec/km";

/// A single race performance: distance and elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Race distance in meters
    pub distance_meters: f64,
    /// Race time in seconds
    pub time_seconds: f64,
}

impl Performance {
    /// Create a validated performance
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance or time is non-positive
    /// or non-finite.
    pub fn new(distance_meters: f64, time_seconds: f64) -> AppResult<Self> {
        if !distance_meters.is_finite() || distance_meters <= 0.0 {
            return Err(AppError::invalid_input("Distance must be positive"));
        }
        if !time_seconds.is_finite() || time_seconds <= 0.0 {
            return Err(AppError::invalid_input("Time must be positive"));
        }
        Ok(Self {
            distance_meters,
            time_seconds,
        })
    }

    /// Velocity in meters per second
    #[must_use]
    pub fn velocity_ms(&self) -> f64 {
        self.distance_meters / self.time_seconds
    }

    /// Velocity in meters per minute (the canonical Daniels unit)
    #[must_use]
    pub fn velocity_m_min(&self) -> f64 {
        self.distance_meters / (self.time_seconds / 60.0)
    }

    /// Pace in seconds per kilometre
    #[must_use]
    pub fn pace_seconds_per_km(&self) -> f64 {
        self.time_seconds / (self.distance_meters / 1000.0)
    }
}

/// An absolute duration with both numeric and display representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDuration {
    /// Display string, zero-padded "HH:MM:SS"
    pub value: String,
    /// Format label for the display string
    pub format: String,
    /// Duration in seconds, rounded to one decimal
    pub time_seconds: f64,
}

impl FormattedDuration {
    /// Build from a duration in seconds
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the duration is negative or
    /// non-finite.
    pub fn from_seconds(seconds: f64) -> AppResult<Self> {
        Ok(Self {
            value: seconds_to_clock(seconds)?,
            format: DURATION_FORMAT.into(),
            time_seconds: (seconds * 10.0).round() / 10.0,
        })
    }
}

/// A per-kilometre pace with both numeric and display representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPace {
    /// Display string, "M:SS" with two-digit seconds
    pub value: String,
    /// Format label for the display string
    pub format: String,
    /// Pace in seconds per kilometre, rounded to one decimal
    pub seconds_per_km: f64,
}

impl FormattedPace {
    /// Build from a pace in seconds per kilometre
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the pace is negative or
    /// non-finite.
    pub fn from_seconds_per_km(seconds_per_km: f64) -> AppResult<Self> {
        Ok(Self {
            value: seconds_to_pace_string(seconds_per_km)?,
            format: PACE_FORMAT.into(),
            seconds_per_km: (seconds_per_km * 10.0).round() / 10.0,
        })
    }
}

/// A bounded pace range; `lower` is the faster end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceRange {
    /// Faster bound of the range
    pub lower: FormattedPace,
    /// Slower bound of the range
    pub upper: FormattedPace,
}

impl PaceRange {
    /// Build from two paces in seconds per kilometre, ordering them so that
    /// `lower` is always the faster (smaller) one
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either pace is negative or
    /// non-finite.
    pub fn from_seconds_per_km(a: f64, b: f64) -> AppResult<Self> {
        let (fast, slow) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self {
            lower: FormattedPace::from_seconds_per_km(fast)?,
            upper: FormattedPace::from_seconds_per_km(slow)?,
        })
    }
}
