// ABOUTME: Heart-rate training zones under percent-of-max and Karvonen reserve bases
// ABOUTME: Max HR comes from the caller or an age-predicted formula, and the source is reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Heart-rate zone calculations
//!
//! Five intensity zones are produced twice: as percentage bands of maximum
//! heart rate, and as Karvonen bands of heart-rate reserve above resting.
//! When no measured maximum is supplied, an age-predicted formula estimates
//! one and the result records which branch was taken.
//!
//! # Scientific References
//!
//! - Fox, S.M. et al. (1971). "Physical activity and coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
//! - Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.
//! - Nes, B.M. et al. (2013). "Age-predicted maximal heart rate." *Scand J Med Sci Sports*, 23(6), 697-704.
//! - Gulati, M. et al. (2010). "Heart rate response to exercise stress testing." *Circulation*, 122(2), 130-137.
//! - Karvonen, M.J. et al. (1957). "The effects of training on heart rate." *Ann Med Exp Biol Fenn*, 35(3), 307-315.

use crate::errors::{AppError, AppResult};
use crate::intelligence::physiological_constants::heart_rate::{MAX_AGE, MIN_AGE, ZONE_BANDS};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum heart rate estimation algorithm
///
/// - `Fox`: classic 220 - age (±10-12 bpm error, tends to overestimate)
/// - `Tanaka`: 208 - 0.7xage (±7-8 bpm error, current gold standard)
/// - `Nes`: 211 - 0.64xage (±6-7 bpm error, validated in large cohort)
/// - `Gulati`: 206 - 0.88xage (women-specific, ±7-8 bpm error)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxHrAlgorithm {
    /// Fox formula: 220 - age
    ///
    /// The classic formula; least accurate but the conventional default
    #[default]
    Fox,

    /// Tanaka formula: 208 - 0.7 x age
    ///
    /// Based on a meta-analysis of 18,712 subjects
    Tanaka,

    /// Nes formula: 211 - 0.64 x age
    ///
    /// Derived from the Norwegian HUNT study
    Nes,

    /// Gulati formula: 206 - 0.88 x age
    ///
    /// Women-specific formula
    Gulati,
}

impl MaxHrAlgorithm {
    /// Estimate maximum heart rate from age
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if age is outside 1-120 years
    pub fn estimate(self, age: u32) -> AppResult<f64> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(AppError::invalid_input(format!(
                "Age must be between {MIN_AGE} and {MAX_AGE} years, got {age}"
            )));
        }

        let age_f64 = f64::from(age);
        let max_hr = match self {
            Self::Fox => 220.0 - age_f64,
            Self::Tanaka => 0.7f64.mul_add(-age_f64, 208.0),
            Self::Nes => 0.64f64.mul_add(-age_f64, 211.0),
            Self::Gulati => 0.88f64.mul_add(-age_f64, 206.0),
        };

        Ok(max_hr)
    }

    /// Get algorithm name for logging and result reporting
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fox => "fox",
            Self::Tanaka => "tanaka",
            Self::Nes => "nes",
            Self::Gulati => "gulati",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Fox => "220 - age",
            Self::Tanaka => "208 - 0.7 x age",
            Self::Nes => "211 - 0.64 x age",
            Self::Gulati => "206 - 0.88 x age",
        }
    }
}

impl FromStr for MaxHrAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fox" => Ok(Self::Fox),
            "tanaka" => Ok(Self::Tanaka),
            "nes" => Ok(Self::Nes),
            "gulati" => Ok(Self::Gulati),
            other => Err(AppError::invalid_input(format!(
                "Unknown max-HR formula: '{other}'. Valid options: fox, tanaka, nes, gulati"
            ))),
        }
    }
}

/// How the effective maximum heart rate was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum MaxHrSource {
    /// Caller supplied a measured maximum
    Provided,
    /// Estimated from age
    Estimated {
        /// Name of the estimation formula used
        formula: String,
    },
}

/// One heart-rate training zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// Zone label (e.g. "threshold")
    pub label: String,
    /// What this zone trains
    pub description: String,
    /// Lower boundary in BPM
    pub lower_bpm: u32,
    /// Upper boundary in BPM
    pub upper_bpm: u32,
}

/// Full heart-rate zone result under both calculation bases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZones {
    /// Effective maximum heart rate used for the zones
    pub max_heart_rate: u32,
    /// Whether the maximum was provided or estimated
    pub max_heart_rate_source: MaxHrSource,
    /// Resting heart rate
    pub resting_heart_rate: u32,
    /// Zones as percentage bands of maximum heart rate
    pub zones_by_percent_max: Vec<HeartRateZone>,
    /// Karvonen zones: resting + percentage bands of heart-rate reserve
    pub zones_by_reserve: Vec<HeartRateZone>,
}

/// Calculate heart-rate training zones
///
/// # Arguments
///
/// * `age` - Runner's age in years
/// * `resting_hr` - Resting heart rate in BPM
/// * `max_hr` - Measured maximum heart rate, if known
/// * `algorithm` - Estimation formula used when `max_hr` is absent
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if age is outside 1-120, either heart
/// rate is non-positive, or resting HR is not below the effective maximum.
pub fn heart_rate_zones(
    age: u32,
    resting_hr: u32,
    max_hr: Option<u32>,
    algorithm: MaxHrAlgorithm,
) -> AppResult<HeartRateZones> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(AppError::invalid_input(format!(
            "Age must be between {MIN_AGE} and {MAX_AGE} years, got {age}"
        )));
    }
    if resting_hr == 0 {
        return Err(AppError::invalid_input(
            "Resting heart rate must be positive",
        ));
    }
    if max_hr == Some(0) {
        return Err(AppError::invalid_input("Max heart rate must be positive"));
    }

    let (effective_max, source) = match max_hr {
        Some(provided) => (provided, MaxHrSource::Provided),
        None => (
            algorithm.estimate(age)?.round() as u32,
            MaxHrSource::Estimated {
                formula: algorithm.name().to_owned(),
            },
        ),
    };

    if resting_hr >= effective_max {
        return Err(AppError::invalid_input(format!(
            "Resting heart rate ({resting_hr}) must be below max heart rate ({effective_max})"
        )));
    }

    let max_f64 = f64::from(effective_max);
    let resting_f64 = f64::from(resting_hr);
    let reserve = max_f64 - resting_f64;

    let mut zones_by_percent_max = Vec::with_capacity(ZONE_BANDS.len());
    let mut zones_by_reserve = Vec::with_capacity(ZONE_BANDS.len());

    for &(label, lower_pct, upper_pct, description) in ZONE_BANDS {
        let lower = f64::from(lower_pct) / 100.0;
        let upper = f64::from(upper_pct) / 100.0;

        zones_by_percent_max.push(HeartRateZone {
            label: label.to_owned(),
            description: description.to_owned(),
            lower_bpm: (lower * max_f64).round() as u32,
            upper_bpm: (upper * max_f64).round() as u32,
        });

        zones_by_reserve.push(HeartRateZone {
            label: label.to_owned(),
            description: description.to_owned(),
            lower_bpm: lower.mul_add(reserve, resting_f64).round() as u32,
            upper_bpm: upper.mul_add(reserve, resting_f64).round() as u32,
        });
    }

    Ok(HeartRateZones {
        max_heart_rate: effective_max,
        max_heart_rate_source: source,
        resting_heart_rate: resting_hr,
        zones_by_percent_max,
        zones_by_reserve,
    })
}
