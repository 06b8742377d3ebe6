// ABOUTME: Alert use case: gather stock, demand, and waste signals, evaluate, and persist new alerts
// ABOUTME: Check-then-insert runs under per-(tenant, type) async locks so concurrent checks never double-insert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Alert Service
//!
//! `check_and_record` reads the catalog, forecasts today's demand, compares
//! recent waste with consumption, and hands the snapshot to the
//! [`AlertEngine`]. De-duplication reads the alert history and then writes to
//! it; the locks below make that sequence atomic per `(tenant, alert type)`.
//! Locks are always taken in [`AlertType::ALL`] order.

use super::elapsed_ms;
use super::forecasting::ForecastService;
use crate::config::intelligence::IntelligenceConfig;
use crate::errors::{AppResult, DatabaseError};
use crate::intelligence::{AlertEngine, AlertInputs, DemandSnapshot, StockSnapshot, WasteSnapshot};
use crate::logging::AppLogger;
use crate::models::{Alert, AlertType, MenuItem, TenantId};
use crate::repositories::{
    AlertRepository, CatalogRepository, ConsumptionRepository, WasteRepository,
};
use chrono::{DateTime, Days, NaiveDate, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

type LockKey = (TenantId, AlertType);

/// Operational alert checks and acknowledgement
#[derive(Clone)]
pub struct AlertService {
    catalog: Arc<dyn CatalogRepository>,
    consumption: Arc<dyn ConsumptionRepository>,
    waste: Arc<dyn WasteRepository>,
    history: Arc<dyn AlertRepository>,
    forecasts: ForecastService,
    engine: AlertEngine,
    locks: Arc<DashMap<LockKey, Arc<Mutex<()>>>>,
}

impl AlertService {
    /// Create the service; `forecasts` supplies today's demand
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        consumption: Arc<dyn ConsumptionRepository>,
        waste: Arc<dyn WasteRepository>,
        history: Arc<dyn AlertRepository>,
        forecasts: ForecastService,
        config: &IntelligenceConfig<true>,
    ) -> Self {
        Self {
            catalog,
            consumption,
            waste,
            history,
            forecasts,
            engine: AlertEngine::with_config(config.alerts.clone()),
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Evaluate every alert condition for `tenant_id` and persist the new alerts
    ///
    /// Returns only the alerts created by this call; suppressed duplicates
    /// are not returned.
    ///
    /// # Errors
    ///
    /// Returns the first repository error; alerts saved before the failure
    /// stay saved
    pub async fn check_and_record(
        &self,
        tenant_id: &TenantId,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Alert>> {
        let start = Instant::now();
        let inputs = self.gather_inputs(tenant_id, now.date_naive()).await?;

        let _guards = self.lock_tenant(tenant_id).await;
        let alerts = self
            .engine
            .evaluate(tenant_id, &inputs, self.history.as_ref(), now)
            .await?;
        for alert in &alerts {
            self.history.save(alert).await?;
            AppLogger::log_alert_event(tenant_id, alert.alert_type, true);
        }
        for candidate in self.engine.detect(&inputs) {
            if !alerts.iter().any(|a| a.alert_type == candidate.alert_type) {
                AppLogger::log_alert_event(tenant_id, candidate.alert_type, false);
            }
        }

        AppLogger::log_engine_operation(
            tenant_id,
            "check_alerts",
            alerts.len(),
            elapsed_ms(start),
        );
        Ok(alerts)
    }

    /// Unread alerts of a tenant, newest first
    ///
    /// # Errors
    ///
    /// Returns the alert repository error
    pub async fn unread(&self, tenant_id: &TenantId) -> AppResult<Vec<Alert>> {
        Ok(self.history.list_unread(tenant_id).await?)
    }

    /// Mark an alert as read; `false` if it was missing or already read
    ///
    /// # Errors
    ///
    /// Returns the alert repository error
    pub async fn acknowledge(&self, alert_id: Uuid) -> AppResult<bool> {
        Ok(self.history.mark_read(alert_id).await?)
    }

    async fn lock_tenant(&self, tenant_id: &TenantId) -> Vec<OwnedMutexGuard<()>> {
        let mut guards = Vec::with_capacity(AlertType::ALL.len());
        for alert_type in AlertType::ALL {
            // Clone the Arc out so no shard lock is held across the await
            let lock = self
                .locks
                .entry((tenant_id.clone(), alert_type))
                .or_default()
                .clone();
            guards.push(lock.lock_owned().await);
        }
        guards
    }

    async fn gather_inputs(
        &self,
        tenant_id: &TenantId,
        today: NaiveDate,
    ) -> Result<AlertInputs, DatabaseError> {
        let items = self.catalog.list_menu_items(tenant_id).await?;
        let forecast = self
            .forecasts
            .forecast_items(tenant_id, &items, today)
            .await?;

        let demand = items
            .iter()
            .filter(|item| item.stock.is_some())
            .filter_map(|item| {
                forecast
                    .get(&item.id)
                    .map(|f| demand_snapshot(item, f.predicted_quantity))
            })
            .collect();

        Ok(AlertInputs {
            stock: items.iter().map(StockSnapshot::from).collect(),
            demand,
            waste: Some(self.waste_snapshot(tenant_id, today).await?),
        })
    }

    async fn waste_snapshot(
        &self,
        tenant_id: &TenantId,
        today: NaiveDate,
    ) -> Result<WasteSnapshot, DatabaseError> {
        let days = self.engine.config().waste_lookback_days.max(1);
        let since = today
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .unwrap_or(NaiveDate::MIN);

        let wasted = self
            .waste
            .waste_between(tenant_id, since, today)
            .await?
            .iter()
            .map(|r| u64::from(r.quantity))
            .sum();
        let consumed = self
            .consumption
            .consumption_between(tenant_id, since, today)
            .await?
            .iter()
            .map(|r| u64::from(r.quantity))
            .sum();

        Ok(WasteSnapshot { wasted, consumed })
    }
}

fn demand_snapshot(item: &MenuItem, predicted: u32) -> DemandSnapshot {
    DemandSnapshot {
        menu_id: item.id.clone(),
        name: item.name.clone(),
        predicted,
        stock: item.stock,
    }
}
