// ABOUTME: Named constant tables for every calculation methodology
// ABOUTME: Calibration values are explicit data handed to the strategies, never hidden in code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Physiological constants based on sports science research
//!
//! This module contains the constants used throughout the calculation
//! engines. Values come from the published methodologies where available;
//! where a methodology leaves its calibration undisclosed (McMillan marker
//! offsets, zone bands), the chosen values are documented here and in
//! DESIGN.md.

/// Jack Daniels' VDOT formulation
///
/// References:
/// - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
/// - Daniels, J. & Gilbert, J. (1979). "Oxygen Power: Performance Tables for Distance Runners"
pub mod daniels {
    /// VO2 cost formula coefficient for the velocity-squared term
    pub const VO2_COEF_A: f64 = 0.000_104;

    /// VO2 cost formula coefficient for the velocity term
    pub const VO2_COEF_B: f64 = 0.182_258;

    /// VO2 cost formula constant term
    pub const VO2_COEF_C: f64 = -4.60;

    /// Fraction-of-VO2max curve: asymptotic floor
    pub const PCT_BASE: f64 = 0.8;

    /// Fraction-of-VO2max curve: slow-decay amplitude
    pub const PCT_SLOW_AMPLITUDE: f64 = 0.189_439_3;

    /// Fraction-of-VO2max curve: slow-decay rate (per minute)
    pub const PCT_SLOW_RATE: f64 = -0.012_778;

    /// Fraction-of-VO2max curve: fast-decay amplitude
    pub const PCT_FAST_AMPLITUDE: f64 = 0.298_955_8;

    /// Fraction-of-VO2max curve: fast-decay rate (per minute)
    pub const PCT_FAST_RATE: f64 = -0.193_260_5;

    /// Upper bound of the domain-valid VDOT range
    pub const VDOT_MAX: f64 = 85.0;

    /// Multiple of the naive linear-extrapolation estimate bracketing the
    /// inverse time solve on both sides (near-zero lower bound, generous
    /// upper bound)
    pub const TIME_BRACKET_MULTIPLE: f64 = 10.0;

    /// Velocity bracket for zone-pace solves (meters per minute)
    pub const ZONE_VELOCITY_BRACKET: (f64, f64) = (10.0, 600.0);

    /// Training zone anchor: (fraction of VDOT, characteristic effort
    /// duration in minutes)
    ///
    /// Each zone velocity is the one whose forward-computed VDOT over the
    /// anchor duration equals the given fraction of the runner's VDOT.
    /// Fractions and anchors are calibrated so zones are strictly ordered
    /// easy < marathon < threshold < interval < repetition in velocity.
    pub type ZoneAnchor = (f64, f64);

    /// Easy pace, slow end of the range
    pub const EASY_SLOW: ZoneAnchor = (0.70, 60.0);

    /// Easy pace, fast end of the range
    pub const EASY_FAST: ZoneAnchor = (0.76, 60.0);

    /// Marathon pace: full VDOT sustained over a marathon-length effort
    pub const MARATHON: ZoneAnchor = (1.0, 210.0);

    /// Threshold pace: full VDOT over a hard quarter-hour effort
    pub const THRESHOLD: ZoneAnchor = (1.0, 14.0);

    /// Interval pace: full VDOT over a 3000m-race-length effort
    pub const INTERVAL: ZoneAnchor = (1.0, 8.0);

    /// Repetition pace: full VDOT over a mile-race-length effort
    pub const REPETITION: ZoneAnchor = (1.0, 4.0);
}

/// McMillan velocity-marker calibration
///
/// References:
/// - McMillan, G. (2013). "YOU (Only Faster)"
/// - McMillan Running Calculator: <https://www.mcmillanrunning.com/>
///
/// McMillan does not publish his marker offsets; these values derive the
/// marker ratios from the endurance power law so that marker derivation and
/// race projection share one fatigue model.
pub mod mcmillan {
    /// Characteristic sustainable duration for vVO2max (seconds)
    pub const VVO2_DURATION_SECS: f64 = 600.0;

    /// Characteristic sustainable duration for critical velocity (seconds)
    pub const CV_DURATION_SECS: f64 = 2400.0;

    /// Characteristic sustainable duration for lactate-threshold velocity
    /// (seconds)
    pub const VLT_DURATION_SECS: f64 = 3600.0;

    /// Fixed marker ratio vLT / CV
    ///
    /// Power-law value (2400/3600)^k for k ≈ 0.0566, rounded to three
    /// decimals
    pub const RATIO_VLT_OVER_CV: f64 = 0.977;

    /// Fixed marker ratio vVO2 / CV
    ///
    /// Power-law value (2400/600)^k for k ≈ 0.0566, rounded to three
    /// decimals
    pub const RATIO_VVO2_OVER_CV: f64 = 1.082;

    /// Fixed-point iterations for resolving duration-dependent race
    /// velocity (duration depends on predicted velocity and vice versa)
    pub const RACE_TIME_ITERATIONS: u32 = 6;

    /// Minimum plausible race distance (meters)
    pub const MIN_DISTANCE_METERS: f64 = 400.0;

    /// Maximum plausible race distance (meters, 100 miles)
    pub const MAX_DISTANCE_METERS: f64 = 160_934.0;

    /// Fastest plausible pace (seconds per kilometre)
    pub const MIN_PACE_SECS_PER_KM: f64 = 60.0;

    /// Slowest plausible pace (seconds per kilometre)
    pub const MAX_PACE_SECS_PER_KM: f64 = 1200.0;

    /// Standard race distances for equivalent-performance predictions
    pub const STANDARD_DISTANCES: &[(&str, f64)] = &[
        ("800m", 800.0),
        ("1500m", 1500.0),
        ("Mile", 1609.0),
        ("3000m", 3000.0),
        ("5000m", 5000.0),
        ("8000m", 8000.0),
        ("10km", 10_000.0),
        ("15km", 15_000.0),
        ("10 Miles", 16_093.0),
        ("Half Marathon", 21_097.0),
        ("25km", 25_000.0),
        ("30km", 30_000.0),
        ("Marathon", 42_195.0),
    ];

    /// Which velocity marker anchors a training sub-zone
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MarkerKind {
        /// Lactate-threshold velocity
        Vlt,
        /// Critical velocity
        Cv,
        /// Velocity at VO2max
        Vvo2,
    }

    /// Training sub-zone: (group, name, anchor marker, fast fraction, slow
    /// fraction, description)
    ///
    /// Fractions multiply the anchor marker's velocity; the fast fraction is
    /// the larger one.
    pub type SubZone = (
        &'static str,
        &'static str,
        MarkerKind,
        f64,
        f64,
        &'static str,
    );

    /// Training pace sub-zones, grouped endurance / stamina / speed / sprint
    pub const TRAINING_SUB_ZONES: &[SubZone] = &[
        (
            "endurance",
            "recovery_jogs",
            MarkerKind::Vlt,
            0.78,
            0.72,
            "Very easy recovery runs",
        ),
        (
            "endurance",
            "easy_runs",
            MarkerKind::Vlt,
            0.86,
            0.78,
            "Comfortable aerobic base runs",
        ),
        (
            "endurance",
            "long_runs",
            MarkerKind::Vlt,
            0.84,
            0.76,
            "Long aerobic runs to build endurance",
        ),
        (
            "stamina",
            "steady_state_runs",
            MarkerKind::Vlt,
            0.93,
            0.88,
            "Easy-moderate continuous runs",
        ),
        (
            "stamina",
            "tempo_runs",
            MarkerKind::Vlt,
            0.98,
            0.94,
            "Moderate pace continuous runs",
        ),
        (
            "stamina",
            "tempo_intervals",
            MarkerKind::Vlt,
            1.01,
            0.97,
            "Moderate pace repetitions with short recovery jogs",
        ),
        (
            "stamina",
            "cruise_intervals",
            MarkerKind::Cv,
            1.01,
            0.97,
            "Moderate pace repetitions with very short recovery jogs",
        ),
        (
            "speed",
            "endurance_monster",
            MarkerKind::Vvo2,
            1.04,
            0.98,
            "Speed training for endurance-focused athletes",
        ),
        (
            "speed",
            "speedster",
            MarkerKind::Vvo2,
            1.08,
            1.02,
            "Speed training for speed-focused athletes",
        ),
        (
            "sprint",
            "endurance_monster",
            MarkerKind::Vvo2,
            1.12,
            1.06,
            "Sprint training for endurance-focused athletes",
        ),
        (
            "sprint",
            "speedster",
            MarkerKind::Vvo2,
            1.16,
            1.10,
            "Sprint training for speed-focused athletes",
        ),
    ];

    /// Zone group display descriptions
    pub const GROUP_DESCRIPTIONS: &[(&str, &str)] = &[
        ("endurance", "Running at an easy effort for extended periods of time"),
        ("stamina", "Medium-effort, medium-duration running"),
        ("speed", "Running at a high effort for a short duration"),
        ("sprint", "Running at a very high speed for a very short distance"),
    ];
}

/// Heart-rate zone bands
///
/// References:
/// - Karvonen, M.J. et al. (1957). "The effects of training on heart rate"
/// - American College of Sports Medicine (ACSM) Guidelines for Exercise
///   Testing and Prescription, 11th Edition
pub mod heart_rate {
    /// Zone band: (label, lower percent, upper percent, description)
    ///
    /// The same percentage band applies to percent-of-max and to
    /// heart-rate-reserve (Karvonen) calculations.
    pub type ZoneBand = (&'static str, u32, u32, &'static str);

    /// Five-zone training intensity model
    pub const ZONE_BANDS: &[ZoneBand] = &[
        ("recovery", 50, 60, "Very easy aerobic work and recovery"),
        ("easy", 60, 70, "Comfortable aerobic base building"),
        ("moderate", 70, 80, "Steady aerobic development"),
        ("threshold", 80, 90, "Hard, near lactate threshold"),
        ("maximal", 90, 100, "VO2max and anaerobic efforts"),
    ];

    /// Minimum accepted age (years)
    pub const MIN_AGE: u32 = 1;

    /// Maximum accepted age (years)
    pub const MAX_AGE: u32 = 120;
}
