// ABOUTME: SQLite database management and schema migrations for catalog, consumption, waste, and alerts
// ABOUTME: Also hosts the repository implementations, the in-memory store, and the instrumentation decorator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Database Management
//!
//! [`Database`] owns a SQLite pool. Table-specific managers
//! ([`MenuManager`], [`ConsumptionManager`], [`AlertManager`]) run the
//! queries; the `*RepositoryImpl` types in [`repositories`] expose them through
//! the repository ports.
//!
//! [`SeedFixture`] loads JSON fixtures into either backend.
//!
//! Dates are stored as `YYYY-MM-DD` text and timestamps as RFC 3339 text.

mod alerts;
mod consumption;
mod menus;

/// In-memory implementation of every repository port
pub mod memory;

/// Timing and logging decorator for repository ports
pub mod instrumented;

/// SQLite implementations of the repository ports
pub mod repositories;

/// JSON fixture loading and seeding
pub mod seed;

pub use alerts::AlertManager;
pub use consumption::ConsumptionManager;
pub use instrumented::Instrumented;
pub use memory::InMemoryStore;
pub use menus::MenuManager;
pub use repositories::{
    AlertRepositoryImpl, CatalogRepositoryImpl, ConsumptionRepositoryImpl, WasteRepositoryImpl,
};
pub use seed::{SeedFixture, SeedSummary};

use crate::constants::tables;
use crate::errors::{AppResult, DatabaseError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Database manager for the engine's SQLite store
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    url: String,
}

impl Database {
    /// Open (creating if missing) the database at `database_url` and run migrations
    ///
    /// In-memory URLs get a single-connection pool so every query sees the
    /// same database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DatabaseError::ConnectionError {
                context: format!("Invalid database URL '{database_url}': {e}"),
            })?
            .create_if_missing(true);

        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            5
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionError {
                context: format!("Failed to open '{database_url}': {e}"),
            })?;

        let db = Self {
            pool,
            url: database_url.to_owned(),
        };

        db.migrate().await?;
        info!(url = %database_url, "Database ready");

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// URL this database was opened with
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Manager for the `menu_items` table
    #[must_use]
    pub fn menus(&self) -> MenuManager {
        MenuManager::new(self.pool.clone())
    }

    /// Manager for the `consumption` and `waste` tables
    #[must_use]
    pub fn consumption(&self) -> ConsumptionManager {
        ConsumptionManager::new(self.pool.clone())
    }

    /// Manager for the `alerts` table
    #[must_use]
    pub fn alerts(&self) -> AlertManager {
        AlertManager::new(self.pool.clone())
    }

    /// Create every table and index if missing
    ///
    /// # Errors
    ///
    /// Returns `MigrationError` if a statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.migrate_menu_items().await?;
        self.migrate_consumption().await?;
        self.migrate_waste().await?;
        self.migrate_alerts().await?;
        debug!("Database migrations applied");
        Ok(())
    }

    async fn execute_migration(&self, table: &str, statement: &str) -> Result<(), DatabaseError> {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::MigrationError {
                context: format!("{table}: {e}"),
            })?;
        Ok(())
    }

    async fn migrate_menu_items(&self) -> Result<(), DatabaseError> {
        self.execute_migration(
            tables::MENU_ITEMS,
            r"
            CREATE TABLE IF NOT EXISTS menu_items (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL,
                position INTEGER NOT NULL,
                name TEXT NOT NULL,
                category TEXT NOT NULL DEFAULT '',
                calories INTEGER NOT NULL,
                protein_g REAL NOT NULL DEFAULT 0,
                carbs_g REAL NOT NULL DEFAULT 0,
                fat_g REAL NOT NULL DEFAULT 0,
                allergens TEXT NOT NULL DEFAULT '[]', -- JSON array
                tags TEXT NOT NULL DEFAULT '[]', -- JSON array
                stock INTEGER,
                min_stock INTEGER,
                times_ordered INTEGER NOT NULL DEFAULT 0,
                rating REAL NOT NULL DEFAULT 0
            )
            ",
        )
        .await?;

        self.execute_migration(
            tables::MENU_ITEMS,
            "CREATE INDEX IF NOT EXISTS idx_menu_items_tenant ON menu_items(tenant_id, position)",
        )
        .await
    }

    async fn migrate_consumption(&self) -> Result<(), DatabaseError> {
        self.execute_migration(
            tables::CONSUMPTION,
            r"
            CREATE TABLE IF NOT EXISTS consumption (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tenant_id TEXT NOT NULL,
                menu_id TEXT NOT NULL,
                date TEXT NOT NULL, -- YYYY-MM-DD
                quantity INTEGER NOT NULL CHECK (quantity >= 0)
            )
            ",
        )
        .await?;

        self.execute_migration(
            tables::CONSUMPTION,
            "CREATE INDEX IF NOT EXISTS idx_consumption_menu_date ON consumption(menu_id, date)",
        )
        .await?;

        self.execute_migration(
            tables::CONSUMPTION,
            "CREATE INDEX IF NOT EXISTS idx_consumption_tenant_date ON consumption(tenant_id, date)",
        )
        .await
    }

    async fn migrate_waste(&self) -> Result<(), DatabaseError> {
        self.execute_migration(
            tables::WASTE,
            r"
            CREATE TABLE IF NOT EXISTS waste (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tenant_id TEXT NOT NULL,
                menu_id TEXT NOT NULL,
                date TEXT NOT NULL, -- YYYY-MM-DD
                quantity INTEGER NOT NULL CHECK (quantity >= 0),
                estimated_cost REAL NOT NULL DEFAULT 0,
                reason TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .await?;

        self.execute_migration(
            tables::WASTE,
            "CREATE INDEX IF NOT EXISTS idx_waste_tenant_date ON waste(tenant_id, date)",
        )
        .await
    }

    async fn migrate_alerts(&self) -> Result<(), DatabaseError> {
        self.execute_migration(
            tables::ALERTS,
            r"
            CREATE TABLE IF NOT EXISTS alerts (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL,
                alert_type TEXT NOT NULL,
                message TEXT NOT NULL,
                payload TEXT NOT NULL DEFAULT '{}', -- JSON object
                created_at TEXT NOT NULL, -- RFC 3339
                read INTEGER NOT NULL DEFAULT 0,
                priority TEXT NOT NULL
            )
            ",
        )
        .await?;

        self.execute_migration(
            tables::ALERTS,
            "CREATE INDEX IF NOT EXISTS idx_alerts_dedup ON alerts(tenant_id, alert_type, read, created_at)",
        )
        .await
    }
}
