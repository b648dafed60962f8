// ABOUTME: Shared read-only server resources injected into request handlers
// ABOUTME: Holds the configuration and one instance of each calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! Server resource container
//!
//! All request handlers borrow from one `Arc<ServerResources>`. Everything
//! inside is immutable after startup, so concurrent dispatch needs no
//! coordination.

use crate::config::ServerConfig;
use crate::intelligence::algorithms::{McmillanCalculator, RiegelPredictor, VdotCalculator};

/// Read-only resources shared by all handlers
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Daniels VDOT calculator
    pub vdot: VdotCalculator,
    /// Riegel power-law predictor
    pub riegel: RiegelPredictor,
    /// McMillan calculator
    pub mcmillan: McmillanCalculator,
}

impl ServerResources {
    /// Build resources from configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let vdot = VdotCalculator::new(config.solver);
        let riegel = RiegelPredictor::new(config.riegel);
        let mcmillan = McmillanCalculator::new(config.riegel);
        Self {
            config,
            vdot,
            riegel,
            mcmillan,
        }
    }
}

impl Default for ServerResources {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
