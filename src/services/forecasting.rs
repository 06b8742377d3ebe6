// ABOUTME: Forecasting use cases over the catalog and consumption history
// ABOUTME: Per-item and cafeteria-wide forecasts, multi-day outlooks, and production plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Forecast Service
//!
//! Histories are fetched concurrently (one repository call per item), then the
//! forecasts are computed on the rayon pool. Only records strictly before the
//! target date count as history, so a forecast never sees the day it predicts.

use super::elapsed_ms;
use crate::config::intelligence::IntelligenceConfig;
use crate::errors::{AppResult, DatabaseError};
use crate::intelligence::{DemandForecaster, ProductionAdvisor, ProductionPlan};
use crate::logging::AppLogger;
use crate::models::{ConsumptionRecord, ForecastResult, MenuItem, TenantId};
use crate::repositories::{CatalogRepository, ConsumptionRepository};
use chrono::NaiveDate;
use futures_util::future::try_join_all;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Forecasts for every item of a tenant on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeteriaForecast {
    /// Cafeteria the forecast belongs to
    pub tenant_id: TenantId,
    /// Service date
    pub date: NaiveDate,
    /// One forecast per item, highest predicted demand first
    pub forecasts: Vec<ForecastResult>,
    /// Sum of every predicted quantity
    pub total_predicted: u64,
}

impl CafeteriaForecast {
    fn new(tenant_id: &TenantId, date: NaiveDate, mut forecasts: Vec<ForecastResult>) -> Self {
        // Stable: equal demand keeps catalog order
        forecasts.sort_by(|a, b| b.predicted_quantity.cmp(&a.predicted_quantity));
        let total_predicted = forecasts
            .iter()
            .map(|f| u64::from(f.predicted_quantity))
            .sum();

        Self {
            tenant_id: tenant_id.clone(),
            date,
            forecasts,
            total_predicted,
        }
    }

    /// Forecast of one item, if the item was part of the catalog
    #[must_use]
    pub fn get(&self, menu_id: &str) -> Option<&ForecastResult> {
        self.forecasts.iter().find(|f| f.menu_id == menu_id)
    }
}

/// Demand forecasting and production planning
#[derive(Clone)]
pub struct ForecastService {
    catalog: Arc<dyn CatalogRepository>,
    consumption: Arc<dyn ConsumptionRepository>,
    forecaster: DemandForecaster,
    advisor: ProductionAdvisor,
}

impl ForecastService {
    /// Create the service over a catalog and consumption history
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        consumption: Arc<dyn ConsumptionRepository>,
        config: &IntelligenceConfig<true>,
    ) -> Self {
        Self {
            catalog,
            consumption,
            forecaster: DemandForecaster::with_config(config.forecast.clone()),
            advisor: ProductionAdvisor::with_config(config.production.clone()),
        }
    }

    /// Forecast one item on `date`
    ///
    /// # Errors
    ///
    /// Returns the consumption repository error
    pub async fn forecast_menu(&self, menu_id: &str, date: NaiveDate) -> AppResult<ForecastResult> {
        let history = self.history(menu_id, date).await?;
        Ok(self.forecaster.forecast(menu_id, &history, date))
    }

    /// Forecast every catalog item of `tenant_id` on `date`
    ///
    /// # Errors
    ///
    /// Returns the first catalog or consumption repository error
    pub async fn forecast_cafeteria(
        &self,
        tenant_id: &TenantId,
        date: NaiveDate,
    ) -> AppResult<CafeteriaForecast> {
        let start = Instant::now();
        let items = self.catalog.list_menu_items(tenant_id).await?;
        let forecast = self.forecast_items(tenant_id, &items, date).await?;

        AppLogger::log_engine_operation(
            tenant_id,
            "forecast_cafeteria",
            forecast.forecasts.len(),
            elapsed_ms(start),
        );
        Ok(forecast)
    }

    /// Forecast `days` consecutive dates from `start`, one entry per day
    ///
    /// Every day uses the history available before `start`.
    ///
    /// # Errors
    ///
    /// Returns the first catalog or consumption repository error
    pub async fn forecast_horizon(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        days: u32,
    ) -> AppResult<Vec<CafeteriaForecast>> {
        let timer = Instant::now();
        let items = self.catalog.list_menu_items(tenant_id).await?;
        let histories = self.histories(&items, start).await?;

        let per_item: Vec<Vec<ForecastResult>> = items
            .par_iter()
            .zip(histories.par_iter())
            .map(|(item, history)| {
                self.forecaster
                    .forecast_horizon(&item.id, history, start, days)
            })
            .collect();

        let outlook: Vec<CafeteriaForecast> = start
            .iter_days()
            .take(days as usize)
            .enumerate()
            .map(|(offset, date)| {
                let day = per_item
                    .iter()
                    .filter_map(|forecasts| forecasts.get(offset).cloned())
                    .collect();
                CafeteriaForecast::new(tenant_id, date, day)
            })
            .collect();

        AppLogger::log_engine_operation(
            tenant_id,
            "forecast_horizon",
            outlook.len(),
            elapsed_ms(timer),
        );
        Ok(outlook)
    }

    /// Production suggestions for every stock-tracked item on `date`
    ///
    /// Items without stock tracking have nothing to compare and are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first catalog or consumption repository error
    pub async fn production_plan(
        &self,
        tenant_id: &TenantId,
        date: NaiveDate,
    ) -> AppResult<ProductionPlan> {
        let start = Instant::now();
        let items = self.catalog.list_menu_items(tenant_id).await?;
        let forecast = self.forecast_items(tenant_id, &items, date).await?;

        // Catalog order, not demand order
        let pairs: Vec<(ForecastResult, u32)> = items
            .iter()
            .filter_map(|item| {
                let stock = item.stock?;
                forecast.get(&item.id).map(|f| (f.clone(), stock))
            })
            .collect();
        let plan = self.advisor.plan(date, &pairs);

        AppLogger::log_engine_operation(
            tenant_id,
            "production_plan",
            plan.suggestions.len(),
            elapsed_ms(start),
        );
        Ok(plan)
    }

    pub(crate) async fn forecast_items(
        &self,
        tenant_id: &TenantId,
        items: &[MenuItem],
        date: NaiveDate,
    ) -> Result<CafeteriaForecast, DatabaseError> {
        let histories = self.histories(items, date).await?;

        let forecasts: Vec<ForecastResult> = items
            .par_iter()
            .zip(histories.par_iter())
            .map(|(item, history)| self.forecaster.forecast(&item.id, history, date))
            .collect();

        debug!(tenant_id = %tenant_id, %date, items = items.len(), "Forecast cafeteria demand");
        Ok(CafeteriaForecast::new(tenant_id, date, forecasts))
    }

    async fn histories(
        &self,
        items: &[MenuItem],
        target: NaiveDate,
    ) -> Result<Vec<Vec<ConsumptionRecord>>, DatabaseError> {
        try_join_all(items.iter().map(|item| self.history(&item.id, target))).await
    }

    async fn history(
        &self,
        menu_id: &str,
        target: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        let since = self.forecaster.lookback_start(target);
        let mut history = self.consumption.history_for(menu_id, since).await?;
        history.retain(|record| record.date < target);
        Ok(history)
    }
}
