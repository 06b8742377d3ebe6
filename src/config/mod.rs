// ABOUTME: Configuration module for runtime environment and algorithm tuning
// ABOUTME: Environment settings live here; intelligence tuning is re-exported from the algorithms crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module
//!
//! - **Environment**: database location, default tenant, log level
//! - **Intelligence**: scoring, forecasting, production, and alert thresholds

/// Environment and runtime configuration
pub mod environment;

/// Intelligence algorithm configuration
pub mod intelligence {
    pub use cafeteria_intelligence::config::intelligence::*;
}

pub use environment::{DatabaseUrl, EngineEnvironment, Environment, LogLevel};
pub use intelligence::IntelligenceConfig;
