// ABOUTME: Criterion benchmarks for the scoring, forecasting, and reporting paths
// ABOUTME: Measures pure algorithms on synthetic catalogs and the forecast service over the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the cafeteria engine.
//!
//! Synthetic catalogs and consumption histories are generated
//! deterministically so runs are comparable.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::cast_possible_truncation,
    missing_docs
)]

use cafeteria_engine::config::IntelligenceConfig;
use cafeteria_engine::database::InMemoryStore;
use cafeteria_engine::intelligence::nutrition_calculator::analyze_profile;
use cafeteria_engine::intelligence::report_aggregator::summarize;
use cafeteria_engine::intelligence::{DemandForecaster, MenuScorer, ReportPeriod};
use cafeteria_engine::models::{
    ActivityLevel, ConsumptionRecord, DietPreference, MenuItem, NutritionGoal, Sex, TenantId,
    UserProfile, WasteRecord,
};
use cafeteria_engine::services::{CafeteriaEngine, Repositories};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::runtime::Runtime;

const HISTORY_DAYS: u64 = 30;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn target_date() -> NaiveDate {
    start_date().checked_add_days(Days::new(HISTORY_DAYS)).unwrap()
}

fn profile() -> UserProfile {
    UserProfile {
        weight_kg: 72.0,
        height_cm: 178.0,
        age_years: 34,
        sex: Sex::Female,
        activity_level: ActivityLevel::Intense,
        diet_preference: DietPreference::Vegetarian,
        allergens: ["peanut".to_owned()].into_iter().collect(),
        nutrition_goal: NutritionGoal::GainMuscle,
        habits: None,
    }
}

fn generate_catalog(count: usize) -> Vec<MenuItem> {
    (0..count)
        .map(|index| {
            let mut tags = BTreeSet::new();
            if index % 3 == 0 {
                tags.insert("vegetarian".to_owned());
            }
            let mut allergens = BTreeSet::new();
            if index % 7 == 0 {
                allergens.insert("Peanuts".to_owned());
            }

            MenuItem {
                id: format!("menu-{index}"),
                name: format!("Dish {index}"),
                category: if index % 2 == 0 { "main" } else { "side" }.to_owned(),
                calories: 250 + ((index * 37) % 700) as u32,
                protein_g: 5.0 + ((index * 13) % 40) as f64,
                carbs_g: 20.0 + ((index * 11) % 60) as f64,
                fat_g: 5.0 + ((index * 7) % 30) as f64,
                allergens,
                tags,
                stock: Some(((index * 19) % 120) as u32),
                min_stock: Some(20),
                times_ordered: ((index * 29) % 500) as u32,
                rating: ((index * 3) % 50) as f64 / 10.0,
            }
        })
        .collect()
}

fn generate_history(menu_id: &str, days: u64) -> Vec<ConsumptionRecord> {
    (0..days)
        .map(|offset| {
            let date = start_date().checked_add_days(Days::new(offset)).unwrap();
            ConsumptionRecord::new(menu_id, date, 80 + ((offset * 17) % 60) as u32)
        })
        .collect()
}

fn generate_waste(days: u64) -> Vec<WasteRecord> {
    (0..days)
        .map(|offset| WasteRecord {
            menu_id: format!("menu-{}", offset % 10),
            date: start_date().checked_add_days(Days::new(offset)).unwrap(),
            quantity: 2 + (offset % 9) as u32,
            estimated_cost: 3.5 * (offset % 5) as f64,
            reason: if offset % 2 == 0 { "expired" } else { "overproduction" }.to_owned(),
        })
        .collect()
}

fn seeded_store(items: &[MenuItem]) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    let tenant = TenantId::new("bench");
    for item in items {
        store.upsert_menu_item(&tenant, item.clone());
        for record in generate_history(&item.id, HISTORY_DAYS) {
            store.record_consumption(&tenant, record);
        }
    }
    store
}

/// Benchmark menu ranking with varying catalog sizes
fn bench_menu_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_scoring");
    let config = IntelligenceConfig::<true>::default();
    let profile = profile();
    let analysis = analyze_profile(&profile, &config.nutrition).unwrap();
    let scorer = MenuScorer::with_config(config.scoring.clone());

    for count in [10, 100, 1000] {
        let catalog = generate_catalog(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("recommend", count), &catalog, |b, catalog| {
            b.iter(|| {
                scorer.recommend(
                    black_box(catalog),
                    black_box(&analysis.target),
                    black_box(&profile),
                    None,
                )
            });
        });
    }

    group.finish();
}

/// Benchmark single item forecasts and week-long horizons
fn bench_forecasting(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecasting");
    let forecaster = DemandForecaster::new();

    for days in [7, 30, 90] {
        let history = generate_history("menu-0", days);
        group.bench_with_input(BenchmarkId::new("forecast", days), &history, |b, history| {
            b.iter(|| forecaster.forecast("menu-0", black_box(history), target_date()));
        });
    }

    let history = generate_history("menu-0", HISTORY_DAYS);
    group.bench_function("horizon_7_days", |b| {
        b.iter(|| forecaster.forecast_horizon("menu-0", black_box(&history), target_date(), 7));
    });

    group.finish();
}

/// Benchmark the cafeteria-wide forecast and production plan over the in-memory store
fn bench_forecast_service(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("forecast_service");
    group.sample_size(30);

    let tenant = TenantId::new("bench");
    let config = IntelligenceConfig::<true>::default();

    for count in [10, 100] {
        let store = seeded_store(&generate_catalog(count));
        let engine = CafeteriaEngine::new(&Repositories::in_memory(&store), &config);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::new("forecast_cafeteria", count), |b| {
            b.iter(|| {
                rt.block_on(async {
                    engine
                        .forecasts
                        .forecast_cafeteria(black_box(&tenant), target_date())
                        .await
                })
            });
        });
        group.bench_function(BenchmarkId::new("production_plan", count), |b| {
            b.iter(|| {
                rt.block_on(async {
                    engine
                        .forecasts
                        .production_plan(black_box(&tenant), target_date())
                        .await
                })
            });
        });
    }

    group.finish();
}

/// Benchmark report aggregation over a quarter of records
fn bench_report_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_aggregation");

    let consumption: Vec<ConsumptionRecord> = (0..50)
        .flat_map(|index| generate_history(&format!("menu-{index}"), 90))
        .collect();
    let waste = generate_waste(90);
    let period = ReportPeriod::new(
        start_date().checked_add_days(Days::new(45)).unwrap(),
        start_date().checked_add_days(Days::new(89)).unwrap(),
    )
    .unwrap();

    group.throughput(Throughput::Elements(consumption.len() as u64));
    group.bench_function("summarize_quarter", |b| {
        b.iter(|| summarize(black_box(&consumption), black_box(&waste), black_box(&period)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_menu_scoring,
    bench_forecasting,
    bench_forecast_service,
    bench_report_aggregation,
);
criterion_main!(benches);
