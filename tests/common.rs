// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, menu and profile builders, and a seeded in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `cafeteria_engine`

use cafeteria_engine::config::IntelligenceConfig;
use cafeteria_engine::database::InMemoryStore;
use cafeteria_engine::models::{
    ActivityLevel, ConsumptionRecord, DietPreference, MenuItem, NutritionGoal, Sex, TenantId,
    UserProfile, WasteRecord,
};
use cafeteria_engine::services::{CafeteriaEngine, Repositories};
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Tenant used by every fixture
pub const TENANT: &str = "campus-north";

/// Two weeks of slowly rising demand, Monday 2024-01-01 through Sunday 2024-01-14
pub const REGRESSION_QUANTITIES: [u32; 14] = [
    110, 113, 116, 119, 122, 125, 128, 131, 134, 137, 140, 143, 146, 150,
];

pub fn tenant() -> TenantId {
    TenantId::new(TENANT)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Default validated configuration
pub fn config() -> IntelligenceConfig<true> {
    IntelligenceConfig::default()
}

pub fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Untracked main course with neutral ratings
pub fn menu_item(id: &str, name: &str, calories: u32) -> MenuItem {
    MenuItem {
        id: id.to_owned(),
        name: name.to_owned(),
        category: "main".to_owned(),
        calories,
        protein_g: 20.0,
        carbs_g: 50.0,
        fat_g: 15.0,
        allergens: BTreeSet::new(),
        tags: BTreeSet::new(),
        stock: None,
        min_stock: None,
        times_ordered: 0,
        rating: 0.0,
    }
}

/// Menu item with stock tracking
pub fn tracked_item(id: &str, name: &str, stock: u32, min_stock: u32) -> MenuItem {
    MenuItem {
        stock: Some(stock),
        min_stock: Some(min_stock),
        ..menu_item(id, name, 600)
    }
}

/// 30 year old moderately active man, 70 kg, 175 cm, maintaining weight
///
/// BMR 1695.667 kcal, daily need 2628 kcal, BMI 22.86.
pub fn profile() -> UserProfile {
    UserProfile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        sex: Sex::Male,
        activity_level: ActivityLevel::Moderate,
        diet_preference: DietPreference::None,
        allergens: BTreeSet::new(),
        nutrition_goal: NutritionGoal::Maintain,
        habits: None,
    }
}

/// Consumption of `menu_id` following [`REGRESSION_QUANTITIES`]
pub fn regression_history(menu_id: &str) -> Vec<ConsumptionRecord> {
    let start = date(2024, 1, 1);
    REGRESSION_QUANTITIES
        .iter()
        .enumerate()
        .map(|(offset, quantity)| {
            let day = start.checked_add_days(Days::new(offset as u64)).unwrap();
            ConsumptionRecord::new(menu_id, day, *quantity)
        })
        .collect()
}

pub fn waste(menu_id: &str, day: NaiveDate, quantity: u32, cost: f64, reason: &str) -> WasteRecord {
    WasteRecord {
        menu_id: menu_id.to_owned(),
        date: day,
        quantity,
        estimated_cost: cost,
        reason: reason.to_owned(),
    }
}

/// Store with a three item catalog for [`TENANT`]
///
/// - `stew`: stock 2 of minimum 20, regression history
/// - `salad`: vegetarian, untracked, 5 units a day
/// - `pasta`: stock 0 of minimum 10, no history
pub fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    let tenant = tenant();

    store.upsert_menu_item(&tenant, tracked_item("stew", "Lentil stew", 2, 20));
    store.upsert_menu_item(
        &tenant,
        MenuItem {
            category: "vegetarian".to_owned(),
            ..menu_item("salad", "Garden salad", 350)
        },
    );
    store.upsert_menu_item(&tenant, tracked_item("pasta", "Pasta bake", 0, 10));

    for record in regression_history("stew") {
        store.record_consumption(&tenant, record);
    }
    for record in regression_history("salad") {
        store.record_consumption(&tenant, ConsumptionRecord::new("salad", record.date, 5));
    }
    store
}

/// Engine over `store` with default configuration
pub fn engine_for(store: &Arc<InMemoryStore>) -> CafeteriaEngine {
    CafeteriaEngine::new(&Repositories::in_memory(store), &config())
}
