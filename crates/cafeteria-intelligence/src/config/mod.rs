// ABOUTME: Configuration module root for the intelligence crate
// ABOUTME: Exposes the validated IntelligenceConfig and its domain sub-configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Intelligence configuration (thresholds, weights, factors)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
