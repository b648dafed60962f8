// ABOUTME: Integration tests for unit conversion and time formatting utilities
// ABOUTME: Covers conversion invertibility across every unit pair and edge-case errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cadence_mcp_server::errors::ErrorCode;
use cadence_mcp_server::units::conversions::{convert, PaceUnit};
use cadence_mcp_server::units::formatting::{parse_pace, seconds_to_clock, seconds_to_pace_string};

const ALL_UNITS: [PaceUnit; 4] = [
    PaceUnit::MinKm,
    PaceUnit::MinMile,
    PaceUnit::Kmh,
    PaceUnit::Mph,
];

// === Conversion ===

#[test]
fn test_min_km_to_min_mile_scenario() {
    let result = convert(5.0, PaceUnit::MinKm, PaceUnit::MinMile).unwrap();
    assert!((result.value - 8.047).abs() < 1e-3, "got {}", result.value);
    assert_eq!(result.formatted().unwrap(), "8:03");
}

#[test]
fn test_pace_to_speed_uses_reciprocal() {
    let kmh = convert(5.0, PaceUnit::MinKm, PaceUnit::Kmh).unwrap();
    assert!((kmh.value - 12.0).abs() < 1e-9);

    let mph = convert(6.0, PaceUnit::MinMile, PaceUnit::Mph).unwrap();
    assert!((mph.value - 10.0).abs() < 1e-9);
}

#[test]
fn test_speed_to_speed_is_linear() {
    let mph = convert(16.0934, PaceUnit::Kmh, PaceUnit::Mph).unwrap();
    assert!((mph.value - 10.0).abs() < 1e-4);
}

#[test]
fn test_identity_conversion() {
    for unit in ALL_UNITS {
        let result = convert(7.5, unit, unit).unwrap();
        assert!((result.value - 7.5).abs() < 1e-9);
    }
}

#[test]
fn test_every_unit_pair_round_trips() {
    for from in ALL_UNITS {
        for to in ALL_UNITS {
            let there = convert(5.5, from, to).unwrap();
            let back = convert(there.value, to, from).unwrap();
            assert!(
                (back.value - 5.5).abs() < 1e-9,
                "{} -> {} lost precision",
                from.token(),
                to.token()
            );
        }
    }
}

#[test]
fn test_unknown_unit_token_rejected() {
    let error = "furlong_per_fortnight".parse::<PaceUnit>().unwrap_err();
    assert_eq!(error.code, ErrorCode::UnsupportedUnit);
    // Case matters; tokens are exact
    assert!("KMH".parse::<PaceUnit>().is_err());
}

#[test]
fn test_nonpositive_pace_rejected() {
    for unit in [PaceUnit::MinKm, PaceUnit::MinMile] {
        let error = convert(0.0, unit, PaceUnit::Kmh).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(convert(-3.0, unit, PaceUnit::Kmh).is_err());
    }
}

#[test]
fn test_zero_speed_to_pace_is_division_undefined() {
    let error = convert(0.0, PaceUnit::Kmh, PaceUnit::MinKm).unwrap_err();
    assert_eq!(error.code, ErrorCode::DivisionUndefined);
}

#[test]
fn test_zero_speed_to_speed_stays_zero() {
    let result = convert(0.0, PaceUnit::Mph, PaceUnit::Kmh).unwrap();
    assert!(result.value.abs() < f64::EPSILON);
}

// === Formatting ===

#[test]
fn test_clock_format_is_zero_padded() {
    assert_eq!(seconds_to_clock(3127.4).unwrap(), "00:52:07");
    assert_eq!(seconds_to_clock(45.0).unwrap(), "00:00:45");
    assert_eq!(seconds_to_clock(7265.0).unwrap(), "02:01:05");
}

#[test]
fn test_clock_rejects_negative_and_nonfinite() {
    for bad in [-0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let error = seconds_to_clock(bad).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_pace_string_has_no_leading_zero_minutes() {
    assert_eq!(seconds_to_pace_string(290.0).unwrap(), "4:50");
    assert_eq!(seconds_to_pace_string(65.0).unwrap(), "1:05");
}

#[test]
fn test_pace_string_rounds_to_nearest_second() {
    assert_eq!(seconds_to_pace_string(482.8).unwrap(), "8:03");
    assert_eq!(seconds_to_pace_string(482.4).unwrap(), "8:02");
    // Rounding through the minute boundary never renders ":60"
    assert_eq!(seconds_to_pace_string(299.7).unwrap(), "5:00");
}

#[test]
fn test_parse_pace_accepts_both_widths() {
    assert!((parse_pace("4:50").unwrap() - 290.0).abs() < f64::EPSILON);
    assert!((parse_pace("12:05").unwrap() - 725.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_pace_rejects_malformed_input() {
    for bad in ["", "4", "4:5:6", "4:60", "four:fifty", ":30", "4:"] {
        let error = parse_pace(bad).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat, "accepted '{bad}'");
    }
}

#[test]
fn test_parse_inverts_formatting_for_whole_seconds() {
    for seconds in [61.0, 290.0, 482.0, 725.0] {
        let rendered = seconds_to_pace_string(seconds).unwrap();
        assert!((parse_pace(&rendered).unwrap() - seconds).abs() < f64::EPSILON);
    }
}
