// ABOUTME: Clock and pace string formatting plus pace-string parsing
// ABOUTME: Display strings round to the nearest whole second; computation keeps full precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Time and pace formatting utilities
//!
//! Rounding happens exactly once, on the total seconds, so ":60" can never
//! appear in a rendered string.

use crate::errors::{AppError, AppResult};

/// Format seconds into zero-padded "HH:MM:SS"
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `seconds` is negative or non-finite.
pub fn seconds_to_clock(seconds: f64) -> AppResult<String> {
    if !seconds.is_finite() {
        return Err(AppError::invalid_input("Duration must be finite"));
    }
    if seconds < 0.0 {
        return Err(AppError::invalid_input("Duration must not be negative"));
    }

    let total = seconds.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    Ok(format!("{hours:02}:{minutes:02}:{secs:02}"))
}

/// Format a pace in seconds per kilometre as "M:SS"
///
/// Minutes carry no leading zero; seconds are always two digits.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the pace is negative or non-finite.
pub fn seconds_to_pace_string(seconds_per_km: f64) -> AppResult<String> {
    if !seconds_per_km.is_finite() {
        return Err(AppError::invalid_input("Pace must be finite"));
    }
    if seconds_per_km < 0.0 {
        return Err(AppError::invalid_input("Pace must not be negative"));
    }

    let total = seconds_per_km.round() as u64;
    let minutes = total / 60;
    let secs = total % 60;

    Ok(format!("{minutes}:{secs:02}"))
}

/// Parse a pace string in "M:SS" or "MM:SS" format into seconds
///
/// # Errors
///
/// Returns `AppError::InvalidFormat` if the string is not two
/// colon-separated numbers or the seconds part is 60 or more.
pub fn parse_pace(text: &str) -> AppResult<f64> {
    let mut parts = text.split(':');
    let (Some(minutes_part), Some(seconds_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(AppError::invalid_format(format!(
            "Pace must be in M:SS or MM:SS format, got '{text}'"
        )));
    };

    let minutes: u32 = minutes_part.trim().parse().map_err(|_| {
        AppError::invalid_format(format!("Invalid minutes in pace '{text}'"))
    })?;
    let seconds: u32 = seconds_part.trim().parse().map_err(|_| {
        AppError::invalid_format(format!("Invalid seconds in pace '{text}'"))
    })?;

    if seconds >= 60 {
        return Err(AppError::invalid_format(format!(
            "Seconds must be less than 60 in pace '{text}'"
        )));
    }

    Ok(f64::from(minutes * 60 + seconds))
}
