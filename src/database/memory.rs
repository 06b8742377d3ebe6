// ABOUTME: Concurrent in-memory store implementing every repository port
// ABOUTME: Backs tests, benchmarks, and fixture-driven runs without a database file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::DatabaseError;
use crate::models::{Alert, AlertType, ConsumptionRecord, MenuItem, TenantId, WasteRecord};
use crate::repositories::{
    AlertRepository, CatalogRepository, ConsumptionRepository, WasteRepository,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

/// In-memory catalog, consumption, waste, and alert storage
///
/// Cloning is not supported; share it behind an `Arc`.
#[derive(Default)]
pub struct InMemoryStore {
    catalogs: DashMap<TenantId, Vec<MenuItem>>,
    consumption: DashMap<TenantId, Vec<ConsumptionRecord>>,
    waste: DashMap<TenantId, Vec<WasteRecord>>,
    alerts: DashMap<Uuid, Alert>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a menu item, keeping catalog order
    pub fn upsert_menu_item(&self, tenant_id: &TenantId, item: MenuItem) {
        let mut catalog = self.catalogs.entry(tenant_id.clone()).or_default();
        if let Some(existing) = catalog.iter_mut().find(|m| m.id == item.id) {
            *existing = item;
        } else {
            catalog.push(item);
        }
    }

    /// Overwrite the stock of one item
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no tenant offers the item
    pub fn set_stock(&self, menu_id: &str, stock: Option<u32>) -> Result<(), DatabaseError> {
        for mut catalog in self.catalogs.iter_mut() {
            if let Some(item) = catalog.iter_mut().find(|m| m.id == menu_id) {
                item.stock = stock;
                return Ok(());
            }
        }
        Err(DatabaseError::NotFound {
            entity_type: "menu_item",
            entity_id: menu_id.to_owned(),
        })
    }

    /// Append a consumption fact
    pub fn record_consumption(&self, tenant_id: &TenantId, record: ConsumptionRecord) {
        self.consumption
            .entry(tenant_id.clone())
            .or_default()
            .push(record);
    }

    /// Append a waste fact
    pub fn record_waste(&self, tenant_id: &TenantId, record: WasteRecord) {
        self.waste.entry(tenant_id.clone()).or_default().push(record);
    }

    /// Every stored alert of a tenant (read or unread), oldest first
    #[must_use]
    pub fn alerts_for(&self, tenant_id: &TenantId) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|entry| &entry.tenant_id == tenant_id)
            .map(|entry| entry.value().clone())
            .collect();
        alerts.sort_by_key(|a| a.created_at);
        alerts
    }

    fn unread_newest_first(&self, tenant_id: &TenantId) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|entry| &entry.tenant_id == tenant_id && !entry.read)
            .map(|entry| entry.value().clone())
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        alerts
    }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
    async fn list_menu_items(&self, tenant_id: &TenantId) -> Result<Vec<MenuItem>, DatabaseError> {
        Ok(self
            .catalogs
            .get(tenant_id)
            .map_or_else(Vec::new, |catalog| catalog.clone()))
    }

    async fn get_stock(&self, menu_id: &str) -> Result<Option<u32>, DatabaseError> {
        self.catalogs
            .iter()
            .find_map(|catalog| catalog.iter().find(|m| m.id == menu_id).map(|m| m.stock))
            .ok_or_else(|| DatabaseError::NotFound {
                entity_type: "menu_item",
                entity_id: menu_id.to_owned(),
            })
    }
}

#[async_trait]
impl ConsumptionRepository for InMemoryStore {
    async fn history_for(
        &self,
        menu_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        let mut history: Vec<ConsumptionRecord> = self
            .consumption
            .iter()
            .flat_map(|records| {
                records
                    .iter()
                    .filter(|r| r.menu_id == menu_id && r.date >= since)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        history.sort_by_key(|r| r.date);
        Ok(history)
    }

    async fn consumption_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        let mut records: Vec<ConsumptionRecord> = self
            .consumption
            .get(tenant_id)
            .map_or_else(Vec::new, |records| {
                records
                    .iter()
                    .filter(|r| start <= r.date && r.date <= end)
                    .cloned()
                    .collect()
            });
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}

#[async_trait]
impl WasteRepository for InMemoryStore {
    async fn waste_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WasteRecord>, DatabaseError> {
        let mut records: Vec<WasteRecord> = self
            .waste
            .get(tenant_id)
            .map_or_else(Vec::new, |records| {
                records
                    .iter()
                    .filter(|r| start <= r.date && r.date <= end)
                    .cloned()
                    .collect()
            });
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}

#[async_trait]
impl AlertRepository for InMemoryStore {
    async fn most_recent_unread(
        &self,
        tenant_id: &TenantId,
        alert_type: AlertType,
    ) -> Result<Option<Alert>, DatabaseError> {
        Ok(self
            .unread_newest_first(tenant_id)
            .into_iter()
            .find(|a| a.alert_type == alert_type))
    }

    async fn save(&self, alert: &Alert) -> Result<(), DatabaseError> {
        self.alerts.insert(alert.id, alert.clone());
        Ok(())
    }

    async fn list_unread(&self, tenant_id: &TenantId) -> Result<Vec<Alert>, DatabaseError> {
        Ok(self.unread_newest_first(tenant_id))
    }

    async fn mark_read(&self, alert_id: Uuid) -> Result<bool, DatabaseError> {
        Ok(self.alerts.get_mut(&alert_id).is_some_and(|mut alert| {
            let was_unread = !alert.read;
            alert.read = true;
            was_unread
        }))
    }
}
