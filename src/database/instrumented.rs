// ABOUTME: Timing decorator that wraps any repository port with structured logging
// ABOUTME: Every call reports operation, table, duration, and success through AppLogger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Instrumented Repositories
//!
//! [`Instrumented`] wraps a repository implementation and forwards every call
//! unchanged, logging how long it took and whether it succeeded. Wrapping is
//! uniform: any backend implementing a port can be decorated, and callers see
//! the same port trait.
//!
//! ```text
//! let catalog: Arc<dyn CatalogRepository> =
//!     Arc::new(Instrumented::new(CatalogRepositoryImpl::new(db.clone())));
//! ```

use crate::constants::tables;
use crate::errors::DatabaseError;
use crate::logging::AppLogger;
use crate::models::{Alert, AlertType, ConsumptionRecord, MenuItem, TenantId, WasteRecord};
use crate::repositories::{
    AlertRepository, CatalogRepository, ConsumptionRepository, WasteRepository,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::future::Future;
use std::time::Instant;
use uuid::Uuid;

/// Repository decorator logging every operation
pub struct Instrumented<R> {
    inner: R,
}

impl<R> Instrumented<R> {
    /// Wrap a repository implementation
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// The wrapped implementation
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwrap the decorator
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

async fn timed<T, F>(operation: &str, table: &str, call: F) -> Result<T, DatabaseError>
where
    F: Future<Output = Result<T, DatabaseError>> + Send,
{
    let start = Instant::now();
    let result = call.await;
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_database_operation(operation, table, result.is_ok(), duration_ms);
    result
}

#[async_trait]
impl<R: CatalogRepository> CatalogRepository for Instrumented<R> {
    async fn list_menu_items(&self, tenant_id: &TenantId) -> Result<Vec<MenuItem>, DatabaseError> {
        timed(
            "list_menu_items",
            tables::MENU_ITEMS,
            self.inner.list_menu_items(tenant_id),
        )
        .await
    }

    async fn get_stock(&self, menu_id: &str) -> Result<Option<u32>, DatabaseError> {
        timed("get_stock", tables::MENU_ITEMS, self.inner.get_stock(menu_id)).await
    }
}

#[async_trait]
impl<R: ConsumptionRepository> ConsumptionRepository for Instrumented<R> {
    async fn history_for(
        &self,
        menu_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        timed(
            "history_for",
            tables::CONSUMPTION,
            self.inner.history_for(menu_id, since),
        )
        .await
    }

    async fn consumption_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        timed(
            "consumption_between",
            tables::CONSUMPTION,
            self.inner.consumption_between(tenant_id, start, end),
        )
        .await
    }
}

#[async_trait]
impl<R: WasteRepository> WasteRepository for Instrumented<R> {
    async fn waste_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WasteRecord>, DatabaseError> {
        timed(
            "waste_between",
            tables::WASTE,
            self.inner.waste_between(tenant_id, start, end),
        )
        .await
    }
}

#[async_trait]
impl<R: AlertRepository> AlertRepository for Instrumented<R> {
    async fn most_recent_unread(
        &self,
        tenant_id: &TenantId,
        alert_type: AlertType,
    ) -> Result<Option<Alert>, DatabaseError> {
        timed(
            "most_recent_unread",
            tables::ALERTS,
            self.inner.most_recent_unread(tenant_id, alert_type),
        )
        .await
    }

    async fn save(&self, alert: &Alert) -> Result<(), DatabaseError> {
        timed("save", tables::ALERTS, self.inner.save(alert)).await
    }

    async fn list_unread(&self, tenant_id: &TenantId) -> Result<Vec<Alert>, DatabaseError> {
        timed(
            "list_unread",
            tables::ALERTS,
            self.inner.list_unread(tenant_id),
        )
        .await
    }

    async fn mark_read(&self, alert_id: Uuid) -> Result<bool, DatabaseError> {
        timed("mark_read", tables::ALERTS, self.inner.mark_read(alert_id)).await
    }
}
