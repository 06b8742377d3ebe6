// ABOUTME: Async repository ports through which the engine reads catalog, history, and alerts
// ABOUTME: Storage backends implement these traits; components receive them by injection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Repository ports.
//!
//! Every method may fail with [`DatabaseError`]. Implementations own retries and
//! timeouts; the engine propagates failures unchanged.

use crate::errors::DatabaseError;
use crate::models::{Alert, AlertType, ConsumptionRecord, MenuItem, TenantId, WasteRecord};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Read-only access to the menu catalog
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All menu items offered by a tenant, in catalog order
    async fn list_menu_items(&self, tenant_id: &TenantId) -> Result<Vec<MenuItem>, DatabaseError>;

    /// Current stock of one item; `None` when the item does not track stock
    async fn get_stock(&self, menu_id: &str) -> Result<Option<u32>, DatabaseError>;
}

/// Read-only access to consumption facts
#[async_trait]
pub trait ConsumptionRepository: Send + Sync {
    /// Consumption of one item on or after `since`
    async fn history_for(
        &self,
        menu_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError>;

    /// Consumption of every item of a tenant within `[start, end]`
    async fn consumption_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError>;
}

/// Read-only access to waste records
#[async_trait]
pub trait WasteRepository: Send + Sync {
    /// Waste of every item of a tenant within `[start, end]`
    async fn waste_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WasteRecord>, DatabaseError>;
}

/// Alert history used for de-duplication and persistence
#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Newest unread alert of `(tenant_id, alert_type)`, if any
    async fn most_recent_unread(
        &self,
        tenant_id: &TenantId,
        alert_type: AlertType,
    ) -> Result<Option<Alert>, DatabaseError>;

    /// Persist a new alert
    async fn save(&self, alert: &Alert) -> Result<(), DatabaseError>;

    /// Unread alerts of a tenant, newest first
    async fn list_unread(&self, tenant_id: &TenantId) -> Result<Vec<Alert>, DatabaseError>;

    /// Mark one alert as read; returns whether it existed and was unread
    async fn mark_read(&self, alert_id: Uuid) -> Result<bool, DatabaseError>;
}
