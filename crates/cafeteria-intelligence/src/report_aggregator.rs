// ABOUTME: Consumption and waste roll-ups for a reporting period
// ABOUTME: Efficiency, waste reduction against the preceding period, and per-menu/per-reason breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Report Aggregator
//!
//! ```text
//! efficiency_pct      = 100 * (consumed - wasted) / consumed   (100 when consumed == 0)
//! waste_reduction_pct = (prior_cost - cost) / prior_cost * 100  (0 when prior_cost == 0)
//! ```
//!
//! Periods are inclusive date ranges. The prior period is the window of equal
//! length ending the day before the current one starts.

use crate::statistics::{percentage_or, round_to};
use cafeteria_core::errors::{AppError, AppResult};
use cafeteria_core::models::{ConsumptionRecord, WasteRecord};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Named reporting window lengths
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodPreset {
    /// Last 7 days
    Week,
    /// Last 30 days
    #[default]
    Month,
    /// Last 90 days
    Quarter,
}

impl PeriodPreset {
    /// Window length in days
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }
}

impl fmt::Display for PeriodPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodPreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            other => Err(AppError::invalid_input(format!(
                "Unknown report period '{other}', expected week, month, or quarter"
            ))),
        }
    }
}

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day
    pub start: NaiveDate,
    /// Last day
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Build a period, rejecting `end < start`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `end` precedes `start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::invalid_input(format!(
                "Report period ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// The `preset` days ending on `today`
    #[must_use]
    pub fn ending(today: NaiveDate, preset: PeriodPreset) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(preset.days() - 1)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Number of days covered
    #[must_use]
    pub fn len_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    /// Whether `date` falls inside the period
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The immediately preceding period of equal length
    #[must_use]
    pub fn previous(&self) -> Self {
        let end = self.start.pred_opt().unwrap_or(NaiveDate::MIN);
        let start = end
            .checked_sub_days(Days::new(self.len_days() - 1))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Span from the previous period's start to this period's end
    #[must_use]
    pub fn with_previous(&self) -> Self {
        Self {
            start: self.previous().start,
            end: self.end,
        }
    }
}

/// Waste quantity and cost for one menu item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WasteBreakdown {
    /// Units wasted
    pub quantity: u64,
    /// Estimated cost
    pub cost: f64,
}

/// Waste grouped by a reason string
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasonBreakdown {
    /// Units wasted
    pub quantity: u64,
    /// Estimated cost
    pub cost: f64,
    /// Number of waste records
    pub occurrences: usize,
}

/// Aggregated consumption and waste metrics for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Reported period
    pub period: ReportPeriod,
    /// Units consumed in the period
    pub total_consumed: u64,
    /// Units wasted in the period
    pub total_wasted: u64,
    /// Estimated waste cost in the period
    pub total_waste_cost: f64,
    /// Estimated waste cost in the preceding period
    pub prior_waste_cost: f64,
    /// Share of consumption not wasted, in percent
    pub efficiency_pct: f64,
    /// Waste cost drop versus the preceding period, in percent
    pub waste_reduction_pct: f64,
    /// Consumption records in the period
    pub consumption_records: usize,
    /// Waste records in the period
    pub waste_records: usize,
    /// Units consumed per menu item
    pub consumption_by_menu: BTreeMap<String, u64>,
    /// Waste per menu item
    pub waste_by_menu: BTreeMap<String, WasteBreakdown>,
    /// Waste per reason
    pub waste_by_reason: BTreeMap<String, ReasonBreakdown>,
}

/// Summarize consumption and waste for `period`
///
/// Records outside `period` are ignored, except waste inside
/// [`ReportPeriod::previous`], which feeds `waste_reduction_pct`.
#[must_use]
pub fn summarize(
    consumption: &[ConsumptionRecord],
    waste: &[WasteRecord],
    period: &ReportPeriod,
) -> ReportSummary {
    let prior = period.previous();

    let mut consumption_by_menu: BTreeMap<String, u64> = BTreeMap::new();
    let mut consumption_records = 0;
    for record in consumption.iter().filter(|r| period.contains(r.date)) {
        *consumption_by_menu.entry(record.menu_id.clone()).or_default() +=
            u64::from(record.quantity);
        consumption_records += 1;
    }
    let total_consumed: u64 = consumption_by_menu.values().sum();

    let mut waste_by_menu: BTreeMap<String, WasteBreakdown> = BTreeMap::new();
    let mut waste_by_reason: BTreeMap<String, ReasonBreakdown> = BTreeMap::new();
    let mut waste_records = 0;
    let mut prior_waste_cost = 0.0;
    for record in waste {
        if prior.contains(record.date) {
            prior_waste_cost += record.estimated_cost;
            continue;
        }
        if !period.contains(record.date) {
            continue;
        }
        waste_records += 1;

        let by_menu = waste_by_menu.entry(record.menu_id.clone()).or_default();
        by_menu.quantity += u64::from(record.quantity);
        by_menu.cost += record.estimated_cost;

        let by_reason = waste_by_reason.entry(record.reason.clone()).or_default();
        by_reason.quantity += u64::from(record.quantity);
        by_reason.cost += record.estimated_cost;
        by_reason.occurrences += 1;
    }
    let total_wasted: u64 = waste_by_menu.values().map(|w| w.quantity).sum();
    let total_waste_cost: f64 = waste_by_menu.values().map(|w| w.cost).sum();

    let efficiency_pct = percentage_or(
        total_consumed as f64 - total_wasted as f64,
        total_consumed as f64,
        100.0,
    );
    let waste_reduction_pct = percentage_or(
        prior_waste_cost - total_waste_cost,
        prior_waste_cost,
        0.0,
    );

    debug!(
        start = %period.start,
        end = %period.end,
        total_consumed,
        total_wasted,
        efficiency_pct,
        waste_reduction_pct,
        "Summarized report period"
    );

    ReportSummary {
        period: *period,
        total_consumed,
        total_wasted,
        total_waste_cost: round_to(total_waste_cost, 2),
        prior_waste_cost: round_to(prior_waste_cost, 2),
        efficiency_pct: round_to(efficiency_pct, 2),
        waste_reduction_pct: round_to(waste_reduction_pct, 2),
        consumption_records,
        waste_records,
        consumption_by_menu,
        waste_by_menu,
        waste_by_reason,
    }
}
