// ABOUTME: Integration tests for heart-rate zone calculation under both bases
// ABOUTME: Covers estimated-vs-provided max HR, boundary monotonicity, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cadence_mcp_server::errors::ErrorCode;
use cadence_mcp_server::intelligence::algorithms::heart_rate::{
    heart_rate_zones, MaxHrAlgorithm, MaxHrSource,
};

#[test]
fn test_both_bases_present_with_five_zones() {
    let zones = heart_rate_zones(30, 60, Some(190), MaxHrAlgorithm::default()).unwrap();
    assert_eq!(zones.zones_by_percent_max.len(), 5);
    assert_eq!(zones.zones_by_reserve.len(), 5);
}

#[test]
fn test_provided_branch_is_reported() {
    let zones = heart_rate_zones(30, 60, Some(185), MaxHrAlgorithm::default()).unwrap();
    assert_eq!(zones.max_heart_rate, 185);
    assert_eq!(zones.max_heart_rate_source, MaxHrSource::Provided);
}

#[test]
fn test_estimated_branch_reports_formula() {
    let zones = heart_rate_zones(30, 60, None, MaxHrAlgorithm::default()).unwrap();
    assert_eq!(zones.max_heart_rate, 190); // 220 - 30
    assert_eq!(
        zones.max_heart_rate_source,
        MaxHrSource::Estimated {
            formula: "fox".into()
        }
    );
}

#[test]
fn test_alternative_formulas() {
    let tanaka = heart_rate_zones(40, 55, None, MaxHrAlgorithm::Tanaka).unwrap();
    assert_eq!(tanaka.max_heart_rate, 180); // 208 - 0.7*40

    let nes = heart_rate_zones(40, 55, None, MaxHrAlgorithm::Nes).unwrap();
    assert_eq!(nes.max_heart_rate, 185); // 211 - 0.64*40 = 185.4 rounded

    let gulati = heart_rate_zones(40, 55, None, MaxHrAlgorithm::Gulati).unwrap();
    assert_eq!(gulati.max_heart_rate, 171); // 206 - 0.88*40 = 170.8 rounded
}

#[test]
fn test_reserve_zones_bounded_by_resting_and_max() {
    for (age, resting, max) in [(30, 60, Some(190)), (50, 48, Some(175)), (25, 70, None)] {
        let zones = heart_rate_zones(age, resting, max, MaxHrAlgorithm::default()).unwrap();
        for zone in &zones.zones_by_reserve {
            assert!(zone.lower_bpm >= resting, "below resting in {}", zone.label);
            assert!(
                zone.upper_bpm <= zones.max_heart_rate,
                "above max in {}",
                zone.label
            );
        }
    }
}

#[test]
fn test_boundaries_increase_with_intensity() {
    let zones = heart_rate_zones(30, 60, Some(190), MaxHrAlgorithm::default()).unwrap();
    for set in [&zones.zones_by_percent_max, &zones.zones_by_reserve] {
        for pair in set.windows(2) {
            assert!(pair[1].lower_bpm >= pair[0].lower_bpm);
            assert!(pair[1].upper_bpm > pair[0].upper_bpm);
        }
    }
}

#[test]
fn test_top_zone_reaches_max() {
    let zones = heart_rate_zones(30, 60, Some(190), MaxHrAlgorithm::default()).unwrap();
    assert_eq!(zones.zones_by_percent_max.last().unwrap().upper_bpm, 190);
    assert_eq!(zones.zones_by_reserve.last().unwrap().upper_bpm, 190);
}

#[test]
fn test_karvonen_differs_from_percent_max() {
    let zones = heart_rate_zones(30, 60, Some(190), MaxHrAlgorithm::default()).unwrap();
    // With a 60 bpm resting HR the reserve basis lifts the easy zones
    let percent_recovery = &zones.zones_by_percent_max[0];
    let reserve_recovery = &zones.zones_by_reserve[0];
    assert!(reserve_recovery.lower_bpm > percent_recovery.lower_bpm);
}

#[test]
fn test_resting_at_or_above_max_is_rejected() {
    let algorithm = MaxHrAlgorithm::default();
    let equal = heart_rate_zones(30, 190, Some(190), algorithm).unwrap_err();
    assert_eq!(equal.code, ErrorCode::InvalidInput);
    let above = heart_rate_zones(30, 200, Some(190), algorithm).unwrap_err();
    assert_eq!(above.code, ErrorCode::InvalidInput);
    // Also against an estimated max (220 - 30 = 190)
    let estimated = heart_rate_zones(30, 195, None, algorithm).unwrap_err();
    assert_eq!(estimated.code, ErrorCode::InvalidInput);
}

#[test]
fn test_nonpositive_and_out_of_range_inputs_rejected() {
    let algorithm = MaxHrAlgorithm::default();
    assert!(heart_rate_zones(0, 60, Some(190), algorithm).is_err());
    assert!(heart_rate_zones(130, 60, Some(190), algorithm).is_err());
    assert!(heart_rate_zones(30, 0, Some(190), algorithm).is_err());
    assert!(heart_rate_zones(30, 60, Some(0), algorithm).is_err());
}
