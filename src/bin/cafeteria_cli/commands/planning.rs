// ABOUTME: Recommendation, forecast, production plan, and report commands for cafeteria-cli
// ABOUTME: Each command calls one engine service and prints its result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::{bail, Result};
use cafeteria_engine::intelligence::PeriodPreset;
use cafeteria_engine::models::{ActivityLevel, TenantId, UserProfile};
use chrono::NaiveDate;
use std::path::Path;

use super::{date_or_today, CommandContext};
use crate::helpers::display::{print_json, read_json};

/// Rank the tenant's menu for a profile file
pub async fn recommend(
    ctx: &CommandContext<'_>,
    tenant: Option<TenantId>,
    profile: &Path,
    limit: Option<usize>,
    weekly_sessions: Option<&str>,
) -> Result<()> {
    let mut profile: UserProfile = read_json(profile).await?;
    if let Some(answer) = weekly_sessions {
        profile.activity_level = ActivityLevel::from_weekly_sessions(answer);
    }
    let response = ctx
        .engine
        .recommendations
        .recommend(&profile, &ctx.tenant(tenant), limit)
        .await?;
    print_json(&response)
}

/// Forecast one item, one day, or several days
pub async fn forecast(
    ctx: &CommandContext<'_>,
    tenant: Option<TenantId>,
    date: Option<NaiveDate>,
    days: u32,
    menu: Option<String>,
) -> Result<()> {
    if days == 0 {
        bail!("--days must be at least 1");
    }
    let date = date_or_today(date);
    let forecasts = &ctx.engine.forecasts;

    if let Some(menu_id) = menu {
        return print_json(&forecasts.forecast_menu(&menu_id, date).await?);
    }

    let tenant = ctx.tenant(tenant);
    if days == 1 {
        print_json(&forecasts.forecast_cafeteria(&tenant, date).await?)
    } else {
        print_json(&forecasts.forecast_horizon(&tenant, date, days).await?)
    }
}

/// Production suggestions for one date
pub async fn plan(
    ctx: &CommandContext<'_>,
    tenant: Option<TenantId>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let plan = ctx
        .engine
        .forecasts
        .production_plan(&ctx.tenant(tenant), date_or_today(date))
        .await?;
    print_json(&plan)
}

/// Efficiency and waste report for a preset window
pub async fn report(
    ctx: &CommandContext<'_>,
    tenant: Option<TenantId>,
    period: PeriodPreset,
    today: Option<NaiveDate>,
) -> Result<()> {
    let summary = ctx
        .engine
        .reports
        .full_report(&ctx.tenant(tenant), period, date_or_today(today))
        .await?;
    print_json(&summary)
}
