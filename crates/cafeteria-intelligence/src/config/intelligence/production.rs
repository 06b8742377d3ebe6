// ABOUTME: Production advisor configuration: stock-to-forecast ratios and weekend damping
// ABOUTME: Ratios decide between increase, reduce, and hold for each forecasted item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Production advice ratios

use serde::{Deserialize, Serialize};

/// Production Advisor Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionConfig {
    /// Stock below this share of the forecast triggers an increase (0.5)
    pub increase_below_ratio: f64,
    /// Stock above this share of the forecast triggers a reduction (1.5)
    pub reduce_above_ratio: f64,
    /// Multiplier applied to weekend increases (0.7)
    pub weekend_increase_factor: f64,
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            increase_below_ratio: 0.5,
            reduce_above_ratio: 1.5,
            weekend_increase_factor: 0.7,
        }
    }
}
