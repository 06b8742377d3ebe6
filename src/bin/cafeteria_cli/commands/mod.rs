// ABOUTME: Command implementations for cafeteria-cli
// ABOUTME: Shared command context plus seeding, planning, alert, and report commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

mod alerts;
mod planning;
mod seed;

pub use alerts::alerts;
pub use planning::{forecast, plan, recommend, report};
pub use seed::seed;

use cafeteria_engine::database::Database;
use cafeteria_engine::models::TenantId;
use cafeteria_engine::services::CafeteriaEngine;
use chrono::{NaiveDate, Utc};

/// Handles every command needs
pub struct CommandContext<'a> {
    pub database: &'a Database,
    pub engine: &'a CafeteriaEngine,
    pub default_tenant: &'a TenantId,
}

impl CommandContext<'_> {
    /// The named tenant, or the environment default
    pub fn tenant(&self, tenant: Option<TenantId>) -> TenantId {
        tenant.unwrap_or_else(|| self.default_tenant.clone())
    }
}

/// The given date, or today in UTC
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}
