// ABOUTME: Calculation engines for running performance analysis
// ABOUTME: Independent stateless strategies sharing one root-finder and one constants table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Performance calculation engines
//!
//! Each methodology (Daniels VDOT, Riegel, McMillan, heart-rate zones) is an
//! independent stateless strategy taking a performance and returning its own
//! structured result type. They share only the formatting utilities, the
//! bounded root-finder, and the constants tables.

pub mod algorithms;
pub mod physiological_constants;
pub mod solver;
