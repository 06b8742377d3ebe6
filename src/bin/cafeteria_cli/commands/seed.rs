// ABOUTME: Fixture seeding command for cafeteria-cli
// ABOUTME: Loads a JSON fixture into the SQLite store and prints what was written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::Result;
use cafeteria_engine::database::SeedFixture;
use cafeteria_engine::models::TenantId;
use std::path::Path;
use tracing::info;

use super::CommandContext;
use crate::helpers::display::print_json;

/// Seed the database from a fixture file
pub async fn seed(ctx: &CommandContext<'_>, fixture: &Path, tenant: Option<TenantId>) -> Result<()> {
    info!("Loading fixture {}", fixture.display());
    let fixture = SeedFixture::load(fixture).await?;
    let summary = fixture
        .seed_database(ctx.database, &ctx.tenant(tenant))
        .await?;
    print_json(&summary)
}
