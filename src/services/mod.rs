// ABOUTME: Orchestration services composing repository ports with the intelligence components
// ABOUTME: Recommendation, forecasting, alerting, and reporting use cases behind one engine handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Service layer
//!
//! Services receive their repositories as `Arc<dyn Port>` and their tuning as
//! an explicit [`IntelligenceConfig`], so any storage backend (SQLite, in
//! memory, instrumented) can be injected and no service reads globals.

/// Operational alert checks with serialized de-duplication
pub mod alerts;

/// Per-item and cafeteria-wide demand forecasts, production plans
pub mod forecasting;

/// Profile analysis plus ranked menu recommendations
pub mod recommendation;

/// Consumption and waste reports
pub mod reports;

pub use alerts::AlertService;
pub use forecasting::{CafeteriaForecast, ForecastService};
pub use recommendation::{RecommendationResponse, RecommendationService};
pub use reports::ReportService;

use crate::config::IntelligenceConfig;
use crate::database::{
    AlertRepositoryImpl, CatalogRepositoryImpl, ConsumptionRepositoryImpl, Database,
    InMemoryStore, Instrumented, WasteRepositoryImpl,
};
use crate::repositories::{
    AlertRepository, CatalogRepository, ConsumptionRepository, WasteRepository,
};
use std::sync::Arc;
use std::time::Instant;

/// The four repository ports a service set needs
#[derive(Clone)]
pub struct Repositories {
    /// Menu catalog and stock
    pub catalog: Arc<dyn CatalogRepository>,
    /// Consumption facts
    pub consumption: Arc<dyn ConsumptionRepository>,
    /// Waste records
    pub waste: Arc<dyn WasteRepository>,
    /// Alert history
    pub alerts: Arc<dyn AlertRepository>,
}

impl Repositories {
    /// SQLite-backed repositories, each wrapped in [`Instrumented`]
    #[must_use]
    pub fn from_database(db: &Database) -> Self {
        Self {
            catalog: Arc::new(Instrumented::new(CatalogRepositoryImpl::new(db.clone()))),
            consumption: Arc::new(Instrumented::new(ConsumptionRepositoryImpl::new(
                db.clone(),
            ))),
            waste: Arc::new(Instrumented::new(WasteRepositoryImpl::new(db.clone()))),
            alerts: Arc::new(Instrumented::new(AlertRepositoryImpl::new(db.clone()))),
        }
    }

    /// All four ports served by one shared in-memory store
    #[must_use]
    pub fn in_memory(store: &Arc<InMemoryStore>) -> Self {
        Self {
            catalog: store.clone(),
            consumption: store.clone(),
            waste: store.clone(),
            alerts: store.clone(),
        }
    }
}

/// Every service wired to the same repositories and configuration
#[derive(Clone)]
pub struct CafeteriaEngine {
    /// Menu recommendations
    pub recommendations: RecommendationService,
    /// Demand forecasts and production plans
    pub forecasts: ForecastService,
    /// Operational alerts
    pub alerts: AlertService,
    /// Period reports
    pub reports: ReportService,
}

impl CafeteriaEngine {
    /// Build every service over `repositories`
    #[must_use]
    pub fn new(repositories: &Repositories, config: &IntelligenceConfig<true>) -> Self {
        let forecasts = ForecastService::new(
            repositories.catalog.clone(),
            repositories.consumption.clone(),
            config,
        );

        Self {
            recommendations: RecommendationService::new(repositories.catalog.clone(), config),
            alerts: AlertService::new(
                repositories.catalog.clone(),
                repositories.consumption.clone(),
                repositories.waste.clone(),
                repositories.alerts.clone(),
                forecasts.clone(),
                config,
            ),
            reports: ReportService::new(
                repositories.consumption.clone(),
                repositories.waste.clone(),
            ),
            forecasts,
        }
    }
}

/// Milliseconds since `start`, saturating
pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
