// ABOUTME: Operational alert evaluation for stock, demand, and waste conditions
// ABOUTME: Applies a per-(tenant, type) de-duplication window against unread alert history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Alert Engine
//!
//! Evaluation has two phases. [`AlertEngine::detect`] is pure: it turns a
//! snapshot of stock, forecast, and waste figures into at most one candidate
//! per [`AlertType`]. [`AlertEngine::evaluate`] then consults the alert
//! history and drops every candidate whose type already has an unread alert
//! younger than the de-duplication window.
//!
//! The engine never persists anything; callers save the returned alerts. The
//! history read and the caller's save form a check-then-insert sequence, so
//! concurrent callers must serialise per `(tenant, type)`.

use crate::config::intelligence::{AlertConfig, IntelligenceConfig, MAX_DEDUP_WINDOW_HOURS};
use crate::statistics::{percentage_or, round_to};
use cafeteria_core::errors::DatabaseError;
use cafeteria_core::models::{Alert, AlertType, MenuItem, TenantId};
use cafeteria_core::repositories::AlertRepository;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

/// Stock level of one catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSnapshot {
    /// Menu item identifier
    pub menu_id: String,
    /// Display name
    pub name: String,
    /// Current stock, `None` when untracked
    pub stock: Option<u32>,
    /// Minimum stock, `None` when unset
    pub min_stock: Option<u32>,
}

impl From<&MenuItem> for StockSnapshot {
    fn from(item: &MenuItem) -> Self {
        Self {
            menu_id: item.id.clone(),
            name: item.name.clone(),
            stock: item.stock,
            min_stock: item.min_stock,
        }
    }
}

/// Forecast demand next to current stock for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSnapshot {
    /// Menu item identifier
    pub menu_id: String,
    /// Display name
    pub name: String,
    /// Forecast units
    pub predicted: u32,
    /// Current stock, `None` when untracked
    pub stock: Option<u32>,
}

/// Waste against consumption over the lookback window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteSnapshot {
    /// Units wasted
    pub wasted: u64,
    /// Units consumed
    pub consumed: u64,
}

/// Everything the engine looks at in one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertInputs {
    /// Catalog stock levels
    pub stock: Vec<StockSnapshot>,
    /// Forecasts for the evaluation date
    pub demand: Vec<DemandSnapshot>,
    /// Recent waste figures, `None` to skip the waste check
    pub waste: Option<WasteSnapshot>,
}

/// A condition that qualifies for an alert before de-duplication
#[derive(Debug, Clone, PartialEq)]
pub struct AlertCandidate {
    /// Alert type
    pub alert_type: AlertType,
    /// Rendered message
    pub message: String,
    /// Structured details
    pub payload: Map<String, Value>,
}

/// Evaluates alert conditions for a tenant
#[derive(Debug, Clone)]
pub struct AlertEngine {
    config: AlertConfig,
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().alerts.clone(),
        }
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub const fn with_config(config: AlertConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Alert types with at least one qualifying condition, in [`AlertType::ALL`] order
    #[must_use]
    pub fn detect(&self, inputs: &AlertInputs) -> Vec<AlertCandidate> {
        AlertType::ALL
            .into_iter()
            .filter(|alert_type| self.config.is_enabled(*alert_type))
            .filter_map(|alert_type| match alert_type {
                AlertType::LowStock => self.low_stock(&inputs.stock),
                AlertType::OutOfStock => Self::out_of_stock(&inputs.stock),
                AlertType::HighDemand => self.high_demand(&inputs.demand),
                AlertType::HighWaste => inputs.waste.and_then(|w| self.high_waste(w)),
            })
            .collect()
    }

    /// New alerts for `tenant_id`, skipping types with a recent unread alert
    ///
    /// An unread alert of the same type younger than the de-duplication
    /// window suppresses the type; a read or older alert does not.
    ///
    /// # Errors
    ///
    /// Propagates any alert history lookup failure
    pub async fn evaluate(
        &self,
        tenant_id: &TenantId,
        inputs: &AlertInputs,
        history: &dyn AlertRepository,
        now: DateTime<Utc>,
    ) -> Result<Vec<Alert>, DatabaseError> {
        let window = Duration::hours(
            self.config
                .dedup_window_hours
                .clamp(0, MAX_DEDUP_WINDOW_HOURS),
        );
        let mut alerts = Vec::new();

        for candidate in self.detect(inputs) {
            let recent = history
                .most_recent_unread(tenant_id, candidate.alert_type)
                .await?;
            if let Some(existing) = recent.filter(|a| !a.read && a.is_within(window, now)) {
                debug!(
                    tenant_id = %tenant_id,
                    alert_type = %candidate.alert_type,
                    existing_id = %existing.id,
                    "Suppressed duplicate alert"
                );
                continue;
            }

            info!(
                tenant_id = %tenant_id,
                alert_type = %candidate.alert_type,
                message = %candidate.message,
                "Alert raised"
            );
            alerts.push(Alert::new(
                tenant_id.clone(),
                candidate.alert_type,
                candidate.message,
                candidate.payload,
                now,
            ));
        }

        Ok(alerts)
    }

    fn low_stock(&self, stock: &[StockSnapshot]) -> Option<AlertCandidate> {
        let items: Vec<(&StockSnapshot, u32, u32, f64)> = stock
            .iter()
            .filter_map(|s| {
                let current = s.stock?;
                let minimum = s.min_stock.filter(|m| *m > 0)?;
                let pct = f64::from(current) / f64::from(minimum) * 100.0;
                (pct <= self.config.low_stock_threshold_pct).then_some((s, current, minimum, pct))
            })
            .collect();
        let (first, current, minimum, _) = items.first()?;

        let message = with_more(
            format!(
                "Low stock of {}. Current stock: {current}, minimum: {minimum}",
                first.name
            ),
            items.len(),
        );
        let listed = items
            .iter()
            .map(|(s, current, minimum, pct)| {
                json!({
                    "menu_id": s.menu_id,
                    "name": s.name,
                    "stock": current,
                    "min_stock": minimum,
                    "percentage": round_to(*pct, 2),
                })
            })
            .collect();

        Some(candidate(AlertType::LowStock, message, items_payload(listed)))
    }

    fn out_of_stock(stock: &[StockSnapshot]) -> Option<AlertCandidate> {
        let items: Vec<&StockSnapshot> = stock.iter().filter(|s| s.stock == Some(0)).collect();
        let first = items.first()?;

        let message = with_more(format!("Out of stock: {}", first.name), items.len());
        let listed = items
            .iter()
            .map(|s| json!({ "menu_id": s.menu_id, "name": s.name }))
            .collect();

        Some(candidate(AlertType::OutOfStock, message, items_payload(listed)))
    }

    fn high_demand(&self, demand: &[DemandSnapshot]) -> Option<AlertCandidate> {
        let items: Vec<(&DemandSnapshot, u32)> = demand
            .iter()
            .filter_map(|d| {
                let current = d.stock?;
                (f64::from(d.predicted) > self.config.high_demand_multiplier * f64::from(current))
                    .then_some((d, current))
            })
            .collect();
        let (first, current) = items.first()?;

        let message = with_more(
            format!(
                "High predicted demand for {}. Current stock: {current}, predicted demand: {}",
                first.name, first.predicted
            ),
            items.len(),
        );
        let listed = items
            .iter()
            .map(|(d, current)| {
                json!({
                    "menu_id": d.menu_id,
                    "name": d.name,
                    "stock": current,
                    "predicted": d.predicted,
                    "shortfall": d.predicted.saturating_sub(*current),
                })
            })
            .collect();

        Some(candidate(AlertType::HighDemand, message, items_payload(listed)))
    }

    fn high_waste(&self, waste: WasteSnapshot) -> Option<AlertCandidate> {
        if waste.wasted == 0 {
            return None;
        }
        // Waste with no recorded consumption counts as total loss
        let pct = percentage_or(waste.wasted as f64, waste.consumed as f64, 100.0);
        if pct < self.config.waste_threshold_pct {
            return None;
        }

        let pct = round_to(pct, 2);
        let message = format!(
            "High waste detected: {pct}% of consumption over the last {} days",
            self.config.waste_lookback_days
        );
        let mut payload = Map::new();
        payload.insert("wasted".to_owned(), json!(waste.wasted));
        payload.insert("consumed".to_owned(), json!(waste.consumed));
        payload.insert("percentage".to_owned(), json!(pct));
        payload.insert(
            "lookback_days".to_owned(),
            json!(self.config.waste_lookback_days),
        );

        Some(candidate(AlertType::HighWaste, message, payload))
    }
}

fn candidate(
    alert_type: AlertType,
    message: String,
    payload: Map<String, Value>,
) -> AlertCandidate {
    AlertCandidate {
        alert_type,
        message,
        payload,
    }
}

fn with_more(message: String, count: usize) -> String {
    if count > 1 {
        format!("{message} (and {} more)", count - 1)
    } else {
        message
    }
}

fn items_payload(items: Vec<Value>) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("count".to_owned(), json!(items.len()));
    payload.insert("items".to_owned(), Value::Array(items));
    payload
}
