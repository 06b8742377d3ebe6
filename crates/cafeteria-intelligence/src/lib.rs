// ABOUTME: Cafeteria intelligence engine: nutrition targets, menu ranking, demand forecasting
// ABOUTME: Also production advice, de-duplicated alerting, and consumption/waste reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Cafeteria Intelligence
//!
//! Deterministic, explainable algorithms behind menu recommendations and
//! kitchen planning. Every component is a pure function of its explicit inputs
//! plus an injected configuration; the only I/O happens through the repository
//! ports handed to [`alert_engine::AlertEngine::evaluate`].
//!
//! Components, leaf first:
//!
//! - [`nutrition_calculator`]: body metrics to caloric and macro targets
//! - [`menu_scorer`]: additive scoring and ranking of menu items
//! - [`demand_forecaster`]: weighted-average demand forecast with confidence bounds
//! - [`production_advisor`]: produce / increase / reduce / hold suggestions
//! - [`alert_engine`]: threshold alerts with a per-type de-duplication window
//! - [`report_aggregator`]: efficiency and waste-reduction roll-ups

/// Configuration for every intelligence component
pub mod config;

/// Small descriptive statistics helpers
pub mod statistics;

/// BMR, daily calories, macro targets, BMI, and profile analysis
pub mod nutrition_calculator;

/// Menu scoring and ranking against a nutrition target
pub mod menu_scorer;

/// Per-item demand forecasting
pub mod demand_forecaster;

/// Stock versus forecast production suggestions
pub mod production_advisor;

/// Operational alert evaluation with de-duplication
pub mod alert_engine;

/// Consumption and waste report aggregation
pub mod report_aggregator;

pub use alert_engine::{AlertEngine, AlertInputs, DemandSnapshot, StockSnapshot, WasteSnapshot};
pub use demand_forecaster::DemandForecaster;
pub use menu_scorer::MenuScorer;
pub use production_advisor::{ProductionAdvisor, ProductionImpact, ProductionPlan};
pub use report_aggregator::{PeriodPreset, ReportPeriod, ReportSummary};
