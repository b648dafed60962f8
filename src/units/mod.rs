// ABOUTME: Unit algebra and display formatting shared by every calculation engine
// ABOUTME: Pace/speed conversion canonicalizes through meters per second
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Pace/speed unit conversion and time formatting utilities

pub mod conversions;
pub mod formatting;

pub use conversions::{convert, PaceUnit, UnitValue};
pub use formatting::{parse_pace, seconds_to_clock, seconds_to_pace_string};
