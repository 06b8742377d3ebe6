// ABOUTME: Database operations for operational alerts
// ABOUTME: Saves alerts, finds the newest unread alert per type, lists and acknowledges alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::DatabaseError;
use crate::models::{Alert, AlertPriority, AlertType, TenantId};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Alert queries
pub struct AlertManager {
    pool: SqlitePool,
}

impl AlertManager {
    /// Create a new alert manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new alert
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn save(&self, alert: &Alert) -> Result<(), DatabaseError> {
        let payload = serde_json::to_string(&alert.payload)?;

        sqlx::query(
            r"
            INSERT INTO alerts (id, tenant_id, alert_type, message, payload, created_at, read, priority)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(alert.id.to_string())
        .bind(alert.tenant_id.as_str())
        .bind(alert.alert_type.as_str())
        .bind(&alert.message)
        .bind(payload)
        // Fixed width keeps text ordering chronological
        .bind(alert.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .bind(alert.read)
        .bind(alert.priority.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Newest unread alert of `(tenant_id, alert_type)`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn most_recent_unread(
        &self,
        tenant_id: &TenantId,
        alert_type: AlertType,
    ) -> Result<Option<Alert>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, tenant_id, alert_type, message, payload, created_at, read, priority
            FROM alerts
            WHERE tenant_id = $1 AND alert_type = $2 AND read = 0
            ORDER BY created_at DESC
            LIMIT 1
            ",
        )
        .bind(tenant_id.as_str())
        .bind(alert_type.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_alert(&r)).transpose()
    }

    /// Unread alerts of a tenant, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_unread(&self, tenant_id: &TenantId) -> Result<Vec<Alert>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT id, tenant_id, alert_type, message, payload, created_at, read, priority
            FROM alerts
            WHERE tenant_id = $1 AND read = 0
            ORDER BY created_at DESC
            ",
        )
        .bind(tenant_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_alert).collect()
    }

    /// Mark an alert as read; `false` if it was missing or already read
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn mark_read(&self, alert_id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE alerts SET read = 1 WHERE id = $1 AND read = 0")
            .bind(alert_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_alert(row: &SqliteRow) -> Result<Alert, DatabaseError> {
    let id_str: String = row.try_get("id")?;
    let type_str: String = row.try_get("alert_type")?;
    let payload_json: String = row.try_get("payload")?;
    let created_at_str: String = row.try_get("created_at")?;
    let priority_str: String = row.try_get("priority")?;
    let tenant: String = row.try_get("tenant_id")?;

    let id = Uuid::parse_str(&id_str).map_err(|e| DatabaseError::SerializationError {
        context: format!("Invalid alert id '{id_str}': {e}"),
    })?;
    let alert_type =
        AlertType::parse(&type_str).ok_or_else(|| DatabaseError::SerializationError {
            context: format!("Unknown alert type '{type_str}'"),
        })?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DatabaseError::SerializationError {
            context: format!("Invalid alert timestamp '{created_at_str}': {e}"),
        })?
        .with_timezone(&Utc);
    let priority =
        AlertPriority::parse(&priority_str).ok_or_else(|| DatabaseError::SerializationError {
            context: format!("Unknown alert priority '{priority_str}'"),
        })?;
    let payload: Map<String, Value> = serde_json::from_str(&payload_json)?;

    Ok(Alert {
        id,
        alert_type,
        tenant_id: TenantId::new(tenant),
        message: row.try_get("message")?,
        payload,
        created_at,
        read: row.try_get("read")?,
        priority,
    })
}
