// ABOUTME: Alert repository implementation over the alerts table
// ABOUTME: De-duplication lookups, persistence, unread listings, and acknowledgement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::AlertRepository;
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::models::{Alert, AlertType, TenantId};
use async_trait::async_trait;
use uuid::Uuid;

/// SQLite implementation of `AlertRepository`
#[derive(Clone)]
pub struct AlertRepositoryImpl {
    db: Database,
}

impl AlertRepositoryImpl {
    /// Create a new `AlertRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AlertRepository for AlertRepositoryImpl {
    async fn most_recent_unread(
        &self,
        tenant_id: &TenantId,
        alert_type: AlertType,
    ) -> Result<Option<Alert>, DatabaseError> {
        self.db
            .alerts()
            .most_recent_unread(tenant_id, alert_type)
            .await
    }

    async fn save(&self, alert: &Alert) -> Result<(), DatabaseError> {
        self.db.alerts().save(alert).await
    }

    async fn list_unread(&self, tenant_id: &TenantId) -> Result<Vec<Alert>, DatabaseError> {
        self.db.alerts().list_unread(tenant_id).await
    }

    async fn mark_read(&self, alert_id: Uuid) -> Result<bool, DatabaseError> {
        self.db.alerts().mark_read(alert_id).await
    }
}
