// ABOUTME: Consumption repository implementation over the consumption table
// ABOUTME: Serves per-item forecast history and tenant-wide date ranges for reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::ConsumptionRepository;
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::models::{ConsumptionRecord, TenantId};
use async_trait::async_trait;
use chrono::NaiveDate;

/// SQLite implementation of `ConsumptionRepository`
#[derive(Clone)]
pub struct ConsumptionRepositoryImpl {
    db: Database,
}

impl ConsumptionRepositoryImpl {
    /// Create a new `ConsumptionRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConsumptionRepository for ConsumptionRepositoryImpl {
    async fn history_for(
        &self,
        menu_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        self.db.consumption().history_for(menu_id, since).await
    }

    async fn consumption_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        self.db
            .consumption()
            .consumption_between(tenant_id, start, end)
            .await
    }
}
