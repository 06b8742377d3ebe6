// ABOUTME: Append-only consumption and waste facts supplied by the storage collaborator
// ABOUTME: ConsumptionRecord feeds forecasting; WasteRecord feeds waste alerts and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Units of one menu item served on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// Menu item identifier
    pub menu_id: String,
    /// Service day
    pub date: NaiveDate,
    /// Units consumed
    pub quantity: u32,
}

impl ConsumptionRecord {
    /// Convenience constructor
    pub fn new(menu_id: impl Into<String>, date: NaiveDate, quantity: u32) -> Self {
        Self {
            menu_id: menu_id.into(),
            date,
            quantity,
        }
    }
}

/// Units of one menu item discarded on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    /// Menu item identifier
    pub menu_id: String,
    /// Day the waste was registered
    pub date: NaiveDate,
    /// Units discarded
    pub quantity: u32,
    /// Estimated cost of the discarded units
    #[serde(default)]
    pub estimated_cost: f64,
    /// Free-text reason ("expired", "overproduction", ...)
    #[serde(default)]
    pub reason: String,
}
