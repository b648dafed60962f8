// ABOUTME: Generic bounded bisection root-finder shared by all inverse computations
// ABOUTME: Iteration cap exhaustion is a reported error, never a silently stale estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Bounded numerical root-finding
//!
//! The Daniels forward formula has no closed-form inverse in time, and zone
//! velocities anchor to effort durations the same way. Both invert through
//! this one bisection search, parameterized by the forward function.

use crate::config::SolverConfig;
use crate::errors::{AppError, AppResult};

/// Find a root of a monotonic function on a bracketing interval
///
/// `f` must change sign between `lo` and `hi`; either direction of
/// monotonicity is accepted. The search terminates when the residual drops
/// below `config.tolerance`.
///
/// # Errors
///
/// - `AppError::ConvergenceFailed` if the endpoints do not bracket a root or
///   the iteration cap is exhausted before the residual meets tolerance
pub fn find_root<F>(f: F, lo: f64, hi: f64, config: &SolverConfig) -> AppResult<f64>
where
    F: Fn(f64) -> f64,
{
    let f_lo = f(lo);
    if f_lo.abs() < config.tolerance {
        return Ok(lo);
    }
    let f_hi = f(hi);
    if f_hi.abs() < config.tolerance {
        return Ok(hi);
    }

    if f_lo.signum() == f_hi.signum() {
        return Err(AppError::convergence_failed(format!(
            "Root is not bracketed on [{lo:.3}, {hi:.3}]"
        )));
    }

    let mut lo = lo;
    let mut hi = hi;
    let mut f_lo = f_lo;

    for _ in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        if f_mid.abs() < config.tolerance {
            return Ok(mid);
        }

        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(AppError::convergence_failed(format!(
        "No convergence within {} iterations (tolerance {})",
        config.max_iterations, config.tolerance
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_root_of_decreasing_function() {
        let config = SolverConfig::default();
        // f(x) = 10 - x, root at 10
        let root = find_root(|x| 10.0 - x, 0.0, 100.0, &config).unwrap();
        assert!((root - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_finds_root_of_increasing_function() {
        let config = SolverConfig::default();
        let root = find_root(|x| x * x - 2.0, 0.0, 2.0, &config).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn test_unbracketed_root_is_reported() {
        let config = SolverConfig::default();
        let result = find_root(|x| x + 100.0, 0.0, 1.0, &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_iteration_cap_is_reported() {
        let config = SolverConfig {
            tolerance: 1e-12,
            max_iterations: 3,
        };
        let result = find_root(|x| x - std::f64::consts::PI, 0.0, 10.0, &config);
        assert!(result.is_err());
    }
}
