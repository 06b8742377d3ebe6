// ABOUTME: End-to-end tests for the engine services over the seeded in-memory store
// ABOUTME: Covers recommendations, cafeteria forecasts, production plans, alert recording, and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use cafeteria_engine::errors::{DatabaseError, ErrorCode};
use cafeteria_engine::intelligence::PeriodPreset;
use cafeteria_engine::models::{
    AlertType, ConsumptionRecord, DietPreference, MenuItem, ProductionAction, TenantId, UserProfile,
};
use cafeteria_engine::repositories::CatalogRepository;
use cafeteria_engine::services::{CafeteriaEngine, Repositories};
use chrono::{DateTime, TimeZone, Utc};
use common::{config, date, engine_for, profile, seeded_store, tenant, waste};
use std::collections::BTreeSet;
use std::sync::Arc;

fn monday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

struct OfflineCatalog;

#[async_trait]
impl CatalogRepository for OfflineCatalog {
    async fn list_menu_items(&self, _tenant_id: &TenantId) -> Result<Vec<MenuItem>, DatabaseError> {
        Err(DatabaseError::ConnectionError {
            context: "catalog offline".to_owned(),
        })
    }

    async fn get_stock(&self, _menu_id: &str) -> Result<Option<u32>, DatabaseError> {
        Ok(None)
    }
}

fn offline_engine() -> CafeteriaEngine {
    let store = seeded_store();
    let repositories = Repositories {
        catalog: Arc::new(OfflineCatalog),
        ..Repositories::in_memory(&store)
    };
    CafeteriaEngine::new(&repositories, &config())
}

#[tokio::test]
async fn test_recommend_ranks_catalog_for_profile() {
    common::init_test_logging();
    let engine = engine_for(&seeded_store());

    let response = engine
        .recommendations
        .recommend(&profile(), &tenant(), Some(2))
        .await
        .unwrap();

    assert_eq!(response.analysis.daily_calories, 2628);
    assert_eq!(response.menus.len(), 2);
    assert!(response.menus[0].raw_score >= response.menus[1].raw_score);
    assert!(response
        .menus
        .iter()
        .all(|m| (0.0..=100.0).contains(&m.score)));
}

#[tokio::test]
async fn test_vegetarian_profile_prefers_vegetarian_dish() {
    let engine = engine_for(&seeded_store());
    let vegetarian = UserProfile {
        diet_preference: DietPreference::Vegetarian,
        ..profile()
    };

    let response = engine
        .recommendations
        .recommend(&vegetarian, &tenant(), None)
        .await
        .unwrap();

    assert_eq!(response.menus.len(), 3);
    assert_eq!(response.menus[0].item.id, "salad");
}

#[tokio::test]
async fn test_invalid_profile_fails_before_catalog_is_read() {
    let engine = offline_engine();
    let invalid = UserProfile {
        weight_kg: 0.0,
        ..profile()
    };

    let error = engine
        .recommendations
        .recommend(&invalid, &tenant(), None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidProfile);

    let error = engine
        .recommendations
        .recommend(&profile(), &tenant(), None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::DatabaseError);
}

#[tokio::test]
async fn test_forecast_cafeteria_orders_by_demand() {
    let engine = engine_for(&seeded_store());

    let forecast = engine
        .forecasts
        .forecast_cafeteria(&tenant(), date(2024, 1, 15))
        .await
        .unwrap();

    let ids: Vec<&str> = forecast.forecasts.iter().map(|f| f.menu_id.as_str()).collect();
    assert_eq!(ids, vec!["stew", "pasta", "salad"]);
    assert_eq!(forecast.get("stew").unwrap().predicted_quantity, 133);
    assert_eq!(forecast.get("pasta").unwrap().predicted_quantity, 10);
    assert_eq!(forecast.get("salad").unwrap().predicted_quantity, 5);
    assert_eq!(forecast.total_predicted, 148);
    assert_eq!(forecast.tenant_id, tenant());
}

#[tokio::test]
async fn test_forecast_ignores_history_on_or_after_target() {
    let store = seeded_store();
    store.record_consumption(
        &tenant(),
        ConsumptionRecord::new("stew", date(2024, 1, 15), 1000),
    );
    let engine = engine_for(&store);

    let result = engine
        .forecasts
        .forecast_menu("stew", date(2024, 1, 15))
        .await
        .unwrap();

    assert_eq!(result.predicted_quantity, 133);
}

#[tokio::test]
async fn test_forecast_horizon_returns_one_forecast_per_day() {
    let engine = engine_for(&seeded_store());

    let outlook = engine
        .forecasts
        .forecast_horizon(&tenant(), date(2024, 1, 15), 7)
        .await
        .unwrap();

    assert_eq!(outlook.len(), 7);
    assert_eq!(outlook[0].date, date(2024, 1, 15));
    assert_eq!(outlook[6].date, date(2024, 1, 21));
    assert!(outlook.iter().all(|day| day.forecasts.len() == 3));
    assert!(outlook[5].total_predicted < outlook[0].total_predicted);
}

#[tokio::test]
async fn test_production_plan_covers_tracked_items_in_catalog_order() {
    let engine = engine_for(&seeded_store());

    let plan = engine
        .forecasts
        .production_plan(&tenant(), date(2024, 1, 15))
        .await
        .unwrap();

    let ids: Vec<&str> = plan.suggestions.iter().map(|s| s.menu_id.as_str()).collect();
    assert_eq!(ids, vec!["stew", "pasta"]);

    assert_eq!(plan.suggestions[0].action, ProductionAction::Increase);
    assert_eq!(plan.suggestions[0].suggested_quantity, 131);
    assert_eq!(plan.suggestions[1].action, ProductionAction::Produce);
    assert_eq!(plan.suggestions[1].suggested_quantity, 10);
    assert_eq!(plan.impact.additional_production_units, 141);
    assert_eq!(plan.impact.waste_avoided_units, 0);
}

#[tokio::test]
async fn test_check_and_record_creates_each_alert_once() {
    let store = seeded_store();
    let engine = engine_for(&store);

    let alerts = engine
        .alerts
        .check_and_record(&tenant(), monday())
        .await
        .unwrap();

    let types: BTreeSet<AlertType> = alerts.iter().map(|a| a.alert_type).collect();
    assert_eq!(
        types,
        BTreeSet::from([
            AlertType::LowStock,
            AlertType::OutOfStock,
            AlertType::HighDemand
        ])
    );
    assert_eq!(alerts.len(), 3);

    let again = engine
        .alerts
        .check_and_record(&tenant(), monday())
        .await
        .unwrap();
    assert!(again.is_empty());
    assert_eq!(store.alerts_for(&tenant()).len(), 3);
}

#[tokio::test]
async fn test_concurrent_checks_do_not_duplicate_alerts() {
    let store = seeded_store();
    let engine = engine_for(&store);
    let tenant = tenant();

    let (first, second) = tokio::join!(
        engine.alerts.check_and_record(&tenant, monday()),
        engine.alerts.check_and_record(&tenant, monday()),
    );

    let created = first.unwrap().len() + second.unwrap().len();
    assert_eq!(created, 3);
    assert_eq!(store.alerts_for(&tenant).len(), 3);
}

#[tokio::test]
async fn test_high_waste_alert_uses_recent_window() {
    let store = seeded_store();
    store.record_waste(&tenant(), waste("salad", date(2024, 1, 14), 200, 300.0, "expired"));
    let engine = engine_for(&store);

    let alerts = engine
        .alerts
        .check_and_record(&tenant(), monday())
        .await
        .unwrap();

    assert!(alerts.iter().any(|a| a.alert_type == AlertType::HighWaste));
}

#[tokio::test]
async fn test_acknowledged_alerts_leave_the_unread_list() {
    let engine = engine_for(&seeded_store());
    let created = engine
        .alerts
        .check_and_record(&tenant(), monday())
        .await
        .unwrap();
    let first = created[0].id;

    assert!(engine.alerts.acknowledge(first).await.unwrap());
    assert!(!engine.alerts.acknowledge(first).await.unwrap());

    let unread = engine.alerts.unread(&tenant()).await.unwrap();
    assert_eq!(unread.len(), 2);
    assert!(unread.iter().all(|a| a.id != first));
}

#[tokio::test]
async fn test_full_report_over_weekly_window() {
    let store = seeded_store();
    store.record_waste(&tenant(), waste("stew", date(2024, 1, 3), 10, 20.0, "expired"));
    store.record_waste(&tenant(), waste("stew", date(2024, 1, 12), 4, 8.0, "overproduction"));
    let engine = engine_for(&store);

    let report = engine
        .reports
        .full_report(&tenant(), PeriodPreset::Week, date(2024, 1, 14))
        .await
        .unwrap();

    // Jan 8-14: stew 131..150 and salad 5 a day
    assert_eq!(report.total_consumed, 981 + 35);
    assert_eq!(report.total_wasted, 4);
    assert!((report.total_waste_cost - 8.0).abs() < 1e-9);
    assert!((report.prior_waste_cost - 20.0).abs() < 1e-9);
    assert!((report.waste_reduction_pct - 60.0).abs() < 1e-9);
    assert_eq!(report.consumption_records, 14);
}
