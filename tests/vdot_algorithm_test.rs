// ABOUTME: Integration tests for the Daniels VDOT engine and Riegel predictor
// ABOUTME: Covers forward/inverse consistency, training pace calibration, and error reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cadence_mcp_server::config::{RiegelConfig, SolverConfig};
use cadence_mcp_server::errors::ErrorCode;
use cadence_mcp_server::intelligence::algorithms::{RiegelPredictor, VdotCalculator};

fn calculator() -> VdotCalculator {
    VdotCalculator::new(SolverConfig::default())
}

// === Forward VDOT ===

#[test]
fn test_vdot_for_25_minute_5k() {
    let vdot = calculator().calculate_vdot(5000.0, 1500.0).unwrap();
    assert!((vdot - 38.4).abs() < 0.15, "expected about 38.4, got {vdot}");
}

#[test]
fn test_vdot_for_20_minute_5k() {
    // 20:00 for 5K is a solidly trained runner, VDOT around 49-50
    let vdot = calculator().calculate_vdot(5000.0, 1200.0).unwrap();
    assert!((49.0..51.0).contains(&vdot), "got {vdot}");
}

#[test]
fn test_vdot_monotone_in_velocity_at_fixed_time() {
    let calc = calculator();
    let mut previous = 0.0;
    for distance in [3000.0, 4000.0, 5000.0, 6000.0] {
        let vdot = calc.calculate_vdot(distance, 1500.0).unwrap();
        assert!(vdot > previous, "VDOT not increasing at {distance}m");
        previous = vdot;
    }
}

#[test]
fn test_negative_distance_reports_invalid_input() {
    let error = calculator().calculate_vdot(-5000.0, 1500.0).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_nonfinite_inputs_report_invalid_input() {
    let calc = calculator();
    assert!(calc.calculate_vdot(f64::NAN, 1500.0).is_err());
    assert!(calc.calculate_vdot(5000.0, f64::INFINITY).is_err());
}

// === Inverse solve ===

#[test]
fn test_roundtrip_recovers_time_within_tolerance() {
    let calc = calculator();
    for (distance, time) in [
        (1500.0, 300.0),
        (5000.0, 1500.0),
        (10_000.0, 2400.0),
        (21_097.0, 5700.0),
        (42_195.0, 12_600.0),
    ] {
        let vdot = calc.calculate_vdot(distance, time).unwrap();
        let predicted = calc.predict_time(vdot, distance).unwrap();
        assert!(
            (predicted - time).abs() < 1.0,
            "round trip at {distance}m drifted: {predicted} vs {time}"
        );
    }
}

#[test]
fn test_predicted_times_increase_with_distance() {
    let calc = calculator();
    let five_k = calc.predict_time(50.0, 5000.0).unwrap();
    let ten_k = calc.predict_time(50.0, 10_000.0).unwrap();
    let marathon = calc.predict_time(50.0, 42_195.0).unwrap();
    assert!(five_k < ten_k);
    assert!(ten_k < marathon);
}

#[test]
fn test_out_of_range_vdot_reports_invalid_input() {
    let calc = calculator();
    assert_eq!(
        calc.predict_time(0.0, 10_000.0).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        calc.predict_time(90.0, 10_000.0).unwrap_err().code,
        ErrorCode::InvalidInput
    );
}

#[test]
fn test_exhausted_iteration_budget_reports_convergence_error() {
    let starved = VdotCalculator::new(SolverConfig {
        tolerance: 1e-12,
        max_iterations: 2,
    });
    let error = starved.predict_time(50.0, 10_000.0).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConvergenceFailed);
}

// === Training paces ===

#[test]
fn test_threshold_pace_for_vdot_38_4() {
    let paces = calculator().training_paces(38.4).unwrap();
    assert!(
        (paces.threshold.seconds_per_km - 290.0).abs() < 2.0,
        "got {}",
        paces.threshold.seconds_per_km
    );
    assert_eq!(paces.threshold.value, "4:50");
    assert_eq!(paces.threshold.format, "min:sec/km");
}

#[test]
fn test_zone_ordering_across_fitness_levels() {
    let calc = calculator();
    for vdot in [32.0, 38.4, 45.0, 55.0, 70.0] {
        let paces = calc.training_paces(vdot).unwrap();
        assert!(
            paces.easy.upper.seconds_per_km > paces.easy.lower.seconds_per_km,
            "easy range inverted at VDOT {vdot}"
        );
        assert!(paces.easy.lower.seconds_per_km > paces.marathon.seconds_per_km);
        assert!(paces.marathon.seconds_per_km > paces.threshold.seconds_per_km);
        assert!(paces.threshold.seconds_per_km > paces.interval.seconds_per_km);
        assert!(paces.interval.seconds_per_km > paces.repetition.seconds_per_km);
    }
}

#[test]
fn test_faster_runners_get_faster_paces() {
    let calc = calculator();
    let slower = calc.training_paces(40.0).unwrap();
    let faster = calc.training_paces(60.0).unwrap();
    assert!(faster.threshold.seconds_per_km < slower.threshold.seconds_per_km);
    assert!(faster.easy.upper.seconds_per_km < slower.easy.upper.seconds_per_km);
}

// === Riegel predictor ===

#[test]
fn test_riegel_5k_to_10k() {
    let predicted = RiegelPredictor::default()
        .predict_time(5000.0, 1500.0, 10_000.0)
        .unwrap();
    assert!((predicted - 3127.4).abs() < 0.1, "got {predicted}");
}

#[test]
fn test_riegel_same_distance_is_exact_identity() {
    let predicted = RiegelPredictor::default()
        .predict_time(5000.0, 1500.0, 5000.0)
        .unwrap();
    assert!((predicted - 1500.0).abs() < f64::EPSILON);
}

#[test]
fn test_riegel_custom_exponent() {
    let flat = RiegelPredictor::new(RiegelConfig { exponent: 1.0 });
    let predicted = flat.predict_time(5000.0, 1500.0, 10_000.0).unwrap();
    // With exponent 1.0 the projection is purely linear
    assert!((predicted - 3000.0).abs() < 1e-9);
}

#[test]
fn test_riegel_rejects_nonpositive_inputs() {
    let predictor = RiegelPredictor::default();
    assert!(predictor.predict_time(0.0, 1500.0, 10_000.0).is_err());
    assert!(predictor.predict_time(5000.0, 0.0, 10_000.0).is_err());
    assert!(predictor.predict_time(5000.0, 1500.0, -5.0).is_err());
}

// === Cross-method consistency ===

#[test]
fn test_riegel_and_daniels_agree_roughly_on_10k() {
    let calc = calculator();
    let riegel = RiegelPredictor::default()
        .predict_time(5000.0, 1500.0, 10_000.0)
        .unwrap();
    let vdot = calc.calculate_vdot(5000.0, 1500.0).unwrap();
    let daniels = calc.predict_time(vdot, 10_000.0).unwrap();
    // Independent methodologies; they should land within about a minute
    assert!(
        (riegel - daniels).abs() < 60.0,
        "riegel {riegel} vs daniels {daniels}"
    );
}
