// ABOUTME: Per-item demand forecasting with a seasonally adjusted weighted average
// ABOUTME: Produces a point forecast, a ±1σ interval, and a confidence label from sample count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Demand Forecaster
//!
//! A transparent heuristic, not a fitted model:
//!
//! ```text
//! raw = 0.5*avg(last 7 records) + 0.3*avg(all records) + 0.2*avg(same weekday)
//! raw *= 0.7 on Saturday/Sunday
//! interval = prediction ± population σ of all quantities
//! ```
//!
//! Identical inputs always produce identical outputs. An empty history is not
//! an error; it yields the configured default prediction with low confidence.

use crate::config::intelligence::{ForecastConfig, IntelligenceConfig};
use crate::statistics::{mean, population_std_dev};
use cafeteria_core::constants::calendar::WEEKDAY_NAMES;
use cafeteria_core::models::{
    ConfidenceInterval, ConfidenceLevel, ConsumptionRecord, ForecastFactors, ForecastResult,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

/// Forecasts demand for a single menu item
#[derive(Debug, Clone)]
pub struct DemandForecaster {
    config: ForecastConfig,
}

impl Default for DemandForecaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a date falls on Saturday or Sunday
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// English weekday name for a date
#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

impl DemandForecaster {
    /// Create a forecaster using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().forecast.clone(),
        }
    }

    /// Create a forecaster with custom configuration
    #[must_use]
    pub const fn with_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// First day of the history window callers should fetch for `target_date`
    #[must_use]
    pub fn lookback_start(&self, target_date: NaiveDate) -> NaiveDate {
        target_date
            .checked_sub_days(Days::new(u64::from(self.config.lookback_days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Forecast demand of `menu_id` on `target_date`
    ///
    /// `history` must already be restricted to this item and the lookback
    /// window; its order does not matter.
    #[must_use]
    pub fn forecast(
        &self,
        menu_id: &str,
        history: &[ConsumptionRecord],
        target_date: NaiveDate,
    ) -> ForecastResult {
        let weekend = is_weekend(target_date);
        let factors = ForecastFactors {
            is_weekend: weekend,
            weekday_name: weekday_name(target_date).to_owned(),
            history_points: history.len(),
        };

        if history.is_empty() {
            let fallback = self.config.default_prediction;
            debug!(menu_id, %target_date, fallback, "No history, using default forecast");
            return ForecastResult {
                menu_id: menu_id.to_owned(),
                date: target_date,
                predicted_quantity: fallback,
                confidence_interval: ConfidenceInterval {
                    lower: fallback,
                    upper: fallback,
                },
                confidence_level: ConfidenceLevel::Low,
                factors,
            };
        }

        // Newest first; stable so same-day records keep caller order
        let mut newest_first: Vec<&ConsumptionRecord> = history.iter().collect();
        newest_first.sort_by(|a, b| b.date.cmp(&a.date));

        let all: Vec<f64> = newest_first
            .iter()
            .map(|r| f64::from(r.quantity))
            .collect();
        let recent_len = self.config.recent_window.min(all.len());

        let avg_all = mean(&all).unwrap_or_default();
        let avg_recent = mean(&all[..recent_len]).unwrap_or(avg_all);
        let same_weekday: Vec<f64> = newest_first
            .iter()
            .filter(|r| r.date.weekday() == target_date.weekday())
            .map(|r| f64::from(r.quantity))
            .collect();
        let avg_weekday = mean(&same_weekday).unwrap_or(avg_all);

        let mut raw = self.config.recent_weight * avg_recent
            + self.config.overall_weight * avg_all
            + self.config.weekday_weight * avg_weekday;
        if weekend {
            raw *= self.config.weekend_factor;
        }

        let predicted = raw.round().max(0.0);
        let sigma = population_std_dev(&all).unwrap_or_default();
        let lower = (predicted - sigma).round().max(0.0);
        let upper = (predicted + sigma).round();

        let result = ForecastResult {
            menu_id: menu_id.to_owned(),
            date: target_date,
            predicted_quantity: predicted as u32,
            confidence_interval: ConfidenceInterval {
                lower: lower as u32,
                upper: upper as u32,
            },
            confidence_level: self.confidence_for(history.len()),
            factors,
        };

        debug!(
            menu_id,
            %target_date,
            avg_recent,
            avg_all,
            avg_weekday,
            sigma,
            predicted = result.predicted_quantity,
            "Computed demand forecast"
        );

        result
    }

    /// Forecast `days` consecutive dates starting at `start` from one history
    #[must_use]
    pub fn forecast_horizon(
        &self,
        menu_id: &str,
        history: &[ConsumptionRecord],
        start: NaiveDate,
        days: u32,
    ) -> Vec<ForecastResult> {
        start
            .iter_days()
            .take(days as usize)
            .map(|date| self.forecast(menu_id, history, date))
            .collect()
    }

    fn confidence_for(&self, points: usize) -> ConfidenceLevel {
        if points > self.config.high_confidence_above {
            ConfidenceLevel::High
        } else if points > self.config.medium_confidence_above {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}
