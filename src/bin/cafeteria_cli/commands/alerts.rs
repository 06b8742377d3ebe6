// ABOUTME: Alert command for cafeteria-cli
// ABOUTME: Runs an alert check and lists unread alerts, or acknowledges one alert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::Result;
use cafeteria_engine::models::{Alert, TenantId};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use super::CommandContext;
use crate::helpers::display::print_json;

#[derive(Serialize)]
struct AlertReport {
    created: Vec<Alert>,
    unread: Vec<Alert>,
}

/// Check alert conditions now, or acknowledge `acknowledge`
pub async fn alerts(
    ctx: &CommandContext<'_>,
    tenant: Option<TenantId>,
    acknowledge: Option<Uuid>,
) -> Result<()> {
    let service = &ctx.engine.alerts;

    if let Some(alert_id) = acknowledge {
        let acknowledged = service.acknowledge(alert_id).await?;
        if !acknowledged {
            warn!(%alert_id, "Alert not found or already read");
        }
        return print_json(&json!({ "id": alert_id, "acknowledged": acknowledged }));
    }

    let tenant = ctx.tenant(tenant);
    let created = service.check_and_record(&tenant, Utc::now()).await?;
    let unread = service.unread(&tenant).await?;
    print_json(&AlertReport { created, unread })
}
