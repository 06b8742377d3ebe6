// ABOUTME: Integration tests for the in-memory store and the instrumentation decorator
// ABOUTME: Verifies the repository port contracts both backends must share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use cafeteria_engine::database::{InMemoryStore, Instrumented};
use cafeteria_engine::errors::DatabaseError;
use cafeteria_engine::models::{Alert, AlertType, ConsumptionRecord, TenantId};
use cafeteria_engine::repositories::{
    AlertRepository, CatalogRepository, ConsumptionRepository, WasteRepository,
};
use chrono::{Duration, TimeZone, Utc};
use common::{date, menu_item, regression_history, tenant, tracked_item, waste};
use serde_json::Map;
use uuid::Uuid;

#[tokio::test]
async fn test_upsert_replaces_in_place() {
    let store = InMemoryStore::new();
    store.upsert_menu_item(&tenant(), menu_item("a", "First", 500));
    store.upsert_menu_item(&tenant(), menu_item("b", "Second", 500));
    store.upsert_menu_item(&tenant(), menu_item("a", "First again", 400));

    let items = store.list_menu_items(&tenant()).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "First again");
    assert_eq!(items[1].id, "b");
    assert!(store
        .list_menu_items(&TenantId::new("nobody"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_stock_lookup_and_update() {
    let store = InMemoryStore::new();
    store.upsert_menu_item(&tenant(), tracked_item("stew", "Lentil stew", 2, 20));

    assert_eq!(store.get_stock("stew").await.unwrap(), Some(2));
    store.set_stock("stew", Some(25)).unwrap();
    assert_eq!(store.get_stock("stew").await.unwrap(), Some(25));

    assert!(matches!(
        store.get_stock("missing").await,
        Err(DatabaseError::NotFound { .. })
    ));
    assert!(store.set_stock("missing", None).is_err());
}

#[tokio::test]
async fn test_history_for_sorts_and_filters() {
    let store = InMemoryStore::new();
    for day in [5, 1, 3] {
        store.record_consumption(
            &tenant(),
            ConsumptionRecord::new("stew", date(2024, 1, day), day),
        );
    }
    store.record_consumption(&tenant(), ConsumptionRecord::new("salad", date(2024, 1, 4), 9));

    let history = store.history_for("stew", date(2024, 1, 2)).await.unwrap();

    let days: Vec<u32> = history.iter().map(|r| r.quantity).collect();
    assert_eq!(days, vec![3, 5]);
}

#[tokio::test]
async fn test_between_ranges_are_inclusive() {
    let store = InMemoryStore::new();
    for day in [7, 8, 14, 15] {
        store.record_waste(
            &tenant(),
            waste("stew", date(2024, 3, day), day, 1.0, "expired"),
        );
    }

    let records = store
        .waste_between(&tenant(), date(2024, 3, 8), date(2024, 3, 14))
        .await
        .unwrap();

    let quantities: Vec<u32> = records.iter().map(|r| r.quantity).collect();
    assert_eq!(quantities, vec![8, 14]);
    assert!(store
        .waste_between(&TenantId::new("nobody"), date(2024, 3, 1), date(2024, 3, 31))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_alerts_newest_first_and_mark_read_once() {
    let store = InMemoryStore::new();
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let older = Alert::new(
        tenant(),
        AlertType::HighWaste,
        "older".to_owned(),
        Map::new(),
        now - Duration::hours(2),
    );
    let newer = Alert::new(
        tenant(),
        AlertType::HighWaste,
        "newer".to_owned(),
        Map::new(),
        now,
    );
    store.save(&older).await.unwrap();
    store.save(&newer).await.unwrap();

    let unread = store.list_unread(&tenant()).await.unwrap();
    assert_eq!(unread[0].id, newer.id);

    assert!(store.mark_read(newer.id).await.unwrap());
    assert!(!store.mark_read(newer.id).await.unwrap());
    assert!(!store.mark_read(Uuid::new_v4()).await.unwrap());

    let recent = store
        .most_recent_unread(&tenant(), AlertType::HighWaste)
        .await
        .unwrap();
    assert_eq!(recent.map(|a| a.id), Some(older.id));
    assert_eq!(store.alerts_for(&tenant()).len(), 2);
}

#[tokio::test]
async fn test_instrumented_store_delegates_unchanged() {
    common::init_test_logging();
    let instrumented = Instrumented::new(InMemoryStore::new());
    let store = instrumented.inner();
    store.upsert_menu_item(&tenant(), tracked_item("stew", "Lentil stew", 2, 20));
    for record in regression_history("stew") {
        store.record_consumption(&tenant(), record);
    }

    assert_eq!(
        instrumented.list_menu_items(&tenant()).await.unwrap(),
        store.list_menu_items(&tenant()).await.unwrap()
    );
    assert_eq!(
        instrumented
            .history_for("stew", date(2024, 1, 1))
            .await
            .unwrap()
            .len(),
        14
    );
    assert!(matches!(
        instrumented.get_stock("missing").await,
        Err(DatabaseError::NotFound { .. })
    ));

    let alert = Alert::new(
        tenant(),
        AlertType::OutOfStock,
        "Out of stock: Pasta bake".to_owned(),
        Map::new(),
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    );
    instrumented.save(&alert).await.unwrap();
    assert_eq!(instrumented.into_inner().alerts_for(&tenant()), vec![alert]);
}
