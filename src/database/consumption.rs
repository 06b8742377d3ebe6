// ABOUTME: Database operations for consumption and waste facts
// ABOUTME: Records daily quantities and reads per-item history and tenant date ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::DatabaseError;
use crate::models::{ConsumptionRecord, TenantId, WasteRecord};
use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Consumption and waste queries
pub struct ConsumptionManager {
    pool: SqlitePool,
}

impl ConsumptionManager {
    /// Create a new consumption manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a consumption fact
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn record_consumption(
        &self,
        tenant_id: &TenantId,
        record: &ConsumptionRecord,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO consumption (tenant_id, menu_id, date, quantity) VALUES ($1, $2, $3, $4)",
        )
        .bind(tenant_id.as_str())
        .bind(&record.menu_id)
        .bind(record.date.format(DATE_FORMAT).to_string())
        .bind(i64::from(record.quantity))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Append a waste fact
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn record_waste(
        &self,
        tenant_id: &TenantId,
        record: &WasteRecord,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            INSERT INTO waste (tenant_id, menu_id, date, quantity, estimated_cost, reason)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(tenant_id.as_str())
        .bind(&record.menu_id)
        .bind(record.date.format(DATE_FORMAT).to_string())
        .bind(i64::from(record.quantity))
        .bind(record.estimated_cost)
        .bind(&record.reason)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Consumption of one item on or after `since`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn history_for(
        &self,
        menu_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT menu_id, date, quantity
            FROM consumption
            WHERE menu_id = $1 AND date >= $2
            ORDER BY date ASC, id ASC
            ",
        )
        .bind(menu_id)
        .bind(since.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_consumption).collect()
    }

    /// Tenant consumption within `[start, end]`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn consumption_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT menu_id, date, quantity
            FROM consumption
            WHERE tenant_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date ASC, id ASC
            ",
        )
        .bind(tenant_id.as_str())
        .bind(start.format(DATE_FORMAT).to_string())
        .bind(end.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_consumption).collect()
    }

    /// Tenant waste within `[start, end]`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn waste_between(
        &self,
        tenant_id: &TenantId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WasteRecord>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT menu_id, date, quantity, estimated_cost, reason
            FROM waste
            WHERE tenant_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date ASC, id ASC
            ",
        )
        .bind(tenant_id.as_str())
        .bind(start.format(DATE_FORMAT).to_string())
        .bind(end.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_waste).collect()
    }
}

fn parse_date(row: &SqliteRow) -> Result<NaiveDate, DatabaseError> {
    let raw: String = row.try_get("date")?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| DatabaseError::SerializationError {
        context: format!("Invalid stored date '{raw}': {e}"),
    })
}

fn parse_quantity(row: &SqliteRow) -> Result<u32, DatabaseError> {
    let raw: i64 = row.try_get("quantity")?;
    u32::try_from(raw).map_err(|_| DatabaseError::SerializationError {
        context: format!("Stored quantity {raw} out of range"),
    })
}

fn row_to_consumption(row: &SqliteRow) -> Result<ConsumptionRecord, DatabaseError> {
    Ok(ConsumptionRecord {
        menu_id: row.try_get("menu_id")?,
        date: parse_date(row)?,
        quantity: parse_quantity(row)?,
    })
}

fn row_to_waste(row: &SqliteRow) -> Result<WasteRecord, DatabaseError> {
    Ok(WasteRecord {
        menu_id: row.try_get("menu_id")?,
        date: parse_date(row)?,
        quantity: parse_quantity(row)?,
        estimated_cost: row.try_get("estimated_cost")?,
        reason: row.try_get("reason")?,
    })
}
