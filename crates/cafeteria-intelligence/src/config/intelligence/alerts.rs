// ABOUTME: Alert engine configuration: thresholds, de-duplication window, per-type switches
// ABOUTME: Defaults mirror kitchen operations: 20% low stock, 10% waste, 2x demand, 24h window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Alert thresholds and de-duplication settings

use cafeteria_core::models::AlertType;
use serde::{Deserialize, Serialize};

/// Longest accepted de-duplication window: one year
pub const MAX_DEDUP_WINDOW_HOURS: i64 = 8760;

/// Alert Engine Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // One switch per alert type
pub struct AlertConfig {
    /// Stock at or below this percent of minimum stock is low (20.0)
    pub low_stock_threshold_pct: f64,
    /// Waste at or above this percent of consumption is high (10.0)
    pub waste_threshold_pct: f64,
    /// Forecast above this multiple of stock is high demand (2.0)
    pub high_demand_multiplier: f64,
    /// Suppression window for a repeated `(tenant, type)` alert, in hours (24)
    pub dedup_window_hours: i64,
    /// Days of waste and consumption compared for the waste alert (7)
    pub waste_lookback_days: u32,
    /// Emit low stock alerts
    pub enable_low_stock: bool,
    /// Emit out of stock alerts
    pub enable_out_of_stock: bool,
    /// Emit high demand alerts
    pub enable_high_demand: bool,
    /// Emit high waste alerts
    pub enable_high_waste: bool,
}

impl AlertConfig {
    /// Whether alerts of this type may be emitted
    #[must_use]
    pub const fn is_enabled(&self, alert_type: AlertType) -> bool {
        match alert_type {
            AlertType::LowStock => self.enable_low_stock,
            AlertType::OutOfStock => self.enable_out_of_stock,
            AlertType::HighDemand => self.enable_high_demand,
            AlertType::HighWaste => self.enable_high_waste,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold_pct: 20.0,
            waste_threshold_pct: 10.0,
            high_demand_multiplier: 2.0,
            dedup_window_hours: 24,
            waste_lookback_days: 7,
            enable_low_stock: true,
            enable_out_of_stock: true,
            enable_high_demand: true,
            enable_high_waste: true,
        }
    }
}
