// ABOUTME: Demand forecast configuration: averaging weights, weekend damping, confidence cut-offs
// ABOUTME: Also the default floor prediction and the lookback/horizon windows used by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Demand forecast tuning

use serde::{Deserialize, Serialize};

/// Demand Forecast Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Prediction returned for an empty history (10)
    pub default_prediction: u32,
    /// Number of most recent records in the short average (7)
    pub recent_window: usize,
    /// Weight of the short average (0.5)
    pub recent_weight: f64,
    /// Weight of the full-history average (0.3)
    pub overall_weight: f64,
    /// Weight of the same-weekday average (0.2)
    pub weekday_weight: f64,
    /// Multiplier for Saturday/Sunday targets (0.7)
    pub weekend_factor: f64,
    /// More points than this yields high confidence (7)
    pub high_confidence_above: usize,
    /// More points than this yields medium confidence (3)
    pub medium_confidence_above: usize,
    /// History window callers fetch, in days (30)
    pub lookback_days: u32,
    /// Default multi-day outlook length, in days (7)
    pub horizon_days: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_prediction: 10,
            recent_window: 7,
            recent_weight: 0.5,
            overall_weight: 0.3,
            weekday_weight: 0.2,
            weekend_factor: 0.7,
            high_confidence_above: 7,
            medium_confidence_above: 3,
            lookback_days: 30,
            horizon_days: 7,
        }
    }
}
