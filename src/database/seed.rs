// ABOUTME: JSON fixture loading and seeding for the SQLite and in-memory stores
// ABOUTME: A fixture carries a tenant's catalog plus its consumption and waste history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Fixture seeding
//!
//! ```json
//! {
//!   "tenant_id": "campus-north",
//!   "menu_items": [{ "id": "m-1", "name": "Lentil stew", "calories": 540 }],
//!   "consumption": [{ "menu_id": "m-1", "date": "2024-01-15", "quantity": 120 }],
//!   "waste": [{ "menu_id": "m-1", "date": "2024-01-15", "quantity": 6, "estimated_cost": 9.0, "reason": "overproduction" }]
//! }
//! ```
//!
//! Parsing rejects records that reference menu items missing from the fixture.

use super::{Database, InMemoryStore};
use crate::errors::{AppError, AppResult};
use crate::models::{ConsumptionRecord, MenuItem, TenantId, WasteRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Catalog and history for one tenant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedFixture {
    /// Tenant the data belongs to; the caller's default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    /// Catalog in display order
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    /// Consumption facts
    #[serde(default)]
    pub consumption: Vec<ConsumptionRecord>,
    /// Waste facts
    #[serde(default)]
    pub waste: Vec<WasteRecord>,
}

/// Counts of what a seeding run wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    /// Tenant that received the data
    pub tenant_id: TenantId,
    /// Menu items inserted or updated
    pub menu_items: usize,
    /// Consumption records appended
    pub consumption: usize,
    /// Waste records appended
    pub waste: usize,
}

impl SeedFixture {
    /// Parse a fixture from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON, or `InvalidInput`
    /// when a record references a menu item missing from the fixture
    pub fn from_json(json: &str) -> AppResult<Self> {
        let fixture: Self = serde_json::from_str(json)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Read and parse a fixture file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the file cannot be read, otherwise the
    /// errors of [`SeedFixture::from_json`]
    pub async fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).await.map_err(|e| {
            AppError::invalid_input(format!("Cannot read fixture {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Tenant to seed: the fixture's own, else `fallback`
    #[must_use]
    pub fn tenant_or(&self, fallback: &TenantId) -> TenantId {
        self.tenant_id.clone().unwrap_or_else(|| fallback.clone())
    }

    fn validate(&self) -> AppResult<()> {
        let known: HashSet<&str> = self.menu_items.iter().map(|m| m.id.as_str()).collect();
        let referenced = self
            .consumption
            .iter()
            .map(|r| r.menu_id.as_str())
            .chain(self.waste.iter().map(|r| r.menu_id.as_str()));

        for menu_id in referenced {
            if !known.contains(menu_id) {
                return Err(AppError::invalid_input(format!(
                    "Fixture references unknown menu item '{menu_id}'"
                ))
                .with_resource_id(menu_id));
            }
        }
        Ok(())
    }

    /// Write the fixture into a SQLite database
    ///
    /// # Errors
    ///
    /// Returns the first database error
    pub async fn seed_database(
        &self,
        database: &Database,
        fallback_tenant: &TenantId,
    ) -> AppResult<SeedSummary> {
        let tenant_id = self.tenant_or(fallback_tenant);
        let menus = database.menus();
        let history = database.consumption();

        for item in &self.menu_items {
            menus.upsert(&tenant_id, item).await?;
        }
        for record in &self.consumption {
            history.record_consumption(&tenant_id, record).await?;
        }
        for record in &self.waste {
            history.record_waste(&tenant_id, record).await?;
        }

        Ok(self.summary(tenant_id))
    }

    /// Write the fixture into an in-memory store
    #[must_use]
    pub fn seed_memory(&self, store: &InMemoryStore, fallback_tenant: &TenantId) -> SeedSummary {
        let tenant_id = self.tenant_or(fallback_tenant);

        for item in &self.menu_items {
            store.upsert_menu_item(&tenant_id, item.clone());
        }
        for record in &self.consumption {
            store.record_consumption(&tenant_id, record.clone());
        }
        for record in &self.waste {
            store.record_waste(&tenant_id, record.clone());
        }

        self.summary(tenant_id)
    }

    fn summary(&self, tenant_id: TenantId) -> SeedSummary {
        let summary = SeedSummary {
            tenant_id,
            menu_items: self.menu_items.len(),
            consumption: self.consumption.len(),
            waste: self.waste.len(),
        };
        info!(
            tenant_id = %summary.tenant_id,
            menu_items = summary.menu_items,
            consumption = summary.consumption,
            waste = summary.waste,
            "Seeded fixture"
        );
        summary
    }
}
