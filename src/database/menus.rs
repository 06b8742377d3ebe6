// ABOUTME: Database operations for the menu catalog
// ABOUTME: Upserts, tenant listings in catalog order, and stock lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::DatabaseError;
use crate::models::{MenuItem, TenantId};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::BTreeSet;

/// Menu catalog queries
pub struct MenuManager {
    pool: SqlitePool,
}

impl MenuManager {
    /// Create a new menu manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace a menu item; new items go to the end of the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the statement fails
    pub async fn upsert(&self, tenant_id: &TenantId, item: &MenuItem) -> Result<(), DatabaseError> {
        let allergens = serde_json::to_string(&item.allergens)?;
        let tags = serde_json::to_string(&item.tags)?;

        sqlx::query(
            r"
            INSERT INTO menu_items (
                id, tenant_id, position, name, category, calories, protein_g, carbs_g, fat_g,
                allergens, tags, stock, min_stock, times_ordered, rating
            )
            VALUES (
                ?1, ?2,
                COALESCE((SELECT position FROM menu_items WHERE id = ?1),
                         (SELECT COALESCE(MAX(position), -1) + 1 FROM menu_items WHERE tenant_id = ?2)),
                ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14
            )
            ON CONFLICT(id) DO UPDATE SET
                tenant_id = excluded.tenant_id,
                name = excluded.name,
                category = excluded.category,
                calories = excluded.calories,
                protein_g = excluded.protein_g,
                carbs_g = excluded.carbs_g,
                fat_g = excluded.fat_g,
                allergens = excluded.allergens,
                tags = excluded.tags,
                stock = excluded.stock,
                min_stock = excluded.min_stock,
                times_ordered = excluded.times_ordered,
                rating = excluded.rating
            ",
        )
        .bind(&item.id)
        .bind(tenant_id.as_str())
        .bind(&item.name)
        .bind(&item.category)
        .bind(i64::from(item.calories))
        .bind(item.protein_g)
        .bind(item.carbs_g)
        .bind(item.fat_g)
        .bind(allergens)
        .bind(tags)
        .bind(item.stock.map(i64::from))
        .bind(item.min_stock.map(i64::from))
        .bind(i64::from(item.times_ordered))
        .bind(item.rating)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All menu items of a tenant in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list(&self, tenant_id: &TenantId) -> Result<Vec<MenuItem>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT id, name, category, calories, protein_g, carbs_g, fat_g,
                   allergens, tags, stock, min_stock, times_ordered, rating
            FROM menu_items
            WHERE tenant_id = $1
            ORDER BY position ASC
            ",
        )
        .bind(tenant_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_menu_item).collect()
    }

    /// Current stock of one item
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist
    pub async fn stock(&self, menu_id: &str) -> Result<Option<u32>, DatabaseError> {
        let row = sqlx::query("SELECT stock FROM menu_items WHERE id = $1")
            .bind(menu_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity_type: "menu_item",
                entity_id: menu_id.to_owned(),
            })?;

        let stock: Option<i64> = row.try_get("stock")?;
        Ok(stock.map(to_u32))
    }

    /// Overwrite the stock of one item
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist
    pub async fn set_stock(&self, menu_id: &str, stock: Option<u32>) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE menu_items SET stock = $1 WHERE id = $2")
            .bind(stock.map(i64::from))
            .bind(menu_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound {
                entity_type: "menu_item",
                entity_id: menu_id.to_owned(),
            });
        }
        Ok(())
    }
}

/// Clamp a stored integer into `u32`
fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn row_to_menu_item(row: &SqliteRow) -> Result<MenuItem, DatabaseError> {
    let allergens_json: String = row.try_get("allergens")?;
    let tags_json: String = row.try_get("tags")?;
    let calories: i64 = row.try_get("calories")?;
    let stock: Option<i64> = row.try_get("stock")?;
    let min_stock: Option<i64> = row.try_get("min_stock")?;
    let times_ordered: i64 = row.try_get("times_ordered")?;

    let allergens: BTreeSet<String> = serde_json::from_str(&allergens_json)?;
    let tags: BTreeSet<String> = serde_json::from_str(&tags_json)?;

    Ok(MenuItem {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        calories: to_u32(calories),
        protein_g: row.try_get("protein_g")?,
        carbs_g: row.try_get("carbs_g")?,
        fat_g: row.try_get("fat_g")?,
        allergens,
        tags,
        stock: stock.map(to_u32),
        min_stock: min_stock.map(to_u32),
        times_ordered: to_u32(times_ordered),
        rating: row.try_get("rating")?,
    })
}
