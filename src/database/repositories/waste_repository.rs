// ABOUTME: Waste repository implementation over the waste table
// ABOUTME: Serves tenant waste records for a date range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::WasteRepository;
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::models::{TenantId, WasteRecord};
use async_trait::async_trait;
use chrono::NaiveDate;

/// SQLite implementation of `WasteRepository`
#[derive(Clone)]
pub struct WasteRepositoryImpl {
    db: Database,
}

impl WasteRepositoryImpl {
    /// Create a new `WasteRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WasteRepository for WasteRepositoryImpl {
    async fn waste_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WasteRecord>, DatabaseError> {
        self.db.consumption().waste_between(tenant_id, start, end).await
    }
}
