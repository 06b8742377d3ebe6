// ABOUTME: Catalog repository implementation over the menu_items table
// ABOUTME: Lists a tenant's menu in catalog order and looks up stock per item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::CatalogRepository;
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::models::{MenuItem, TenantId};
use async_trait::async_trait;

/// SQLite implementation of `CatalogRepository`
#[derive(Clone)]
pub struct CatalogRepositoryImpl {
    db: Database,
}

impl CatalogRepositoryImpl {
    /// Create a new `CatalogRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn list_menu_items(&self, tenant_id: &TenantId) -> Result<Vec<MenuItem>, DatabaseError> {
        self.db.menus().list(tenant_id).await
    }

    async fn get_stock(&self, menu_id: &str) -> Result<Option<u32>, DatabaseError> {
        self.db.menus().stock(menu_id).await
    }
}
