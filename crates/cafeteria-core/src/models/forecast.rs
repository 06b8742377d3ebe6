// ABOUTME: Demand forecast and production adjustment models
// ABOUTME: ForecastResult with confidence interval/level and AdjustmentSuggestion with its action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How much history backs a forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Few or no data points
    Low,
    /// A handful of data points
    Medium,
    /// More than a week of data points
    High,
}

/// `prediction ± 1σ` of historical daily quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound, never negative
    pub lower: u32,
    /// Upper bound
    pub upper: u32,
}

/// Explanatory factors attached to a forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastFactors {
    /// Target date falls on Saturday or Sunday
    pub is_weekend: bool,
    /// English weekday name of the target date
    pub weekday_name: String,
    /// Number of history records used
    pub history_points: usize,
}

/// Point forecast for one menu item on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Menu item identifier
    pub menu_id: String,
    /// Target date
    pub date: NaiveDate,
    /// Predicted units
    pub predicted_quantity: u32,
    /// Spread around the prediction
    pub confidence_interval: ConfidenceInterval,
    /// Confidence label derived from sample count
    pub confidence_level: ConfidenceLevel,
    /// Inputs that shaped the prediction
    pub factors: ForecastFactors,
}

/// Production action recommended for an item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProductionAction {
    /// Nothing in stock, cook the full forecast
    Produce,
    /// Stock well below forecast
    Increase,
    /// Stock well above forecast
    Reduce,
    /// Stock matches forecast
    Hold,
}

/// Production change suggested for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentSuggestion {
    /// Menu item identifier
    pub menu_id: String,
    /// Recommended action
    pub action: ProductionAction,
    /// Units to produce, add, or cut
    pub suggested_quantity: u32,
    /// Human-readable justification
    pub reason: String,
}
