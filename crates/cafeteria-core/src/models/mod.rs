// ABOUTME: Core data models for the cafeteria intelligence engine
// ABOUTME: Re-exports profile, menu, consumption, forecast, alert, and tenant types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Plain serde-friendly structs exchanged between the repositories, the
//! intelligence components, and callers. Field names match the JSON the
//! outer web layer emits.

mod alert;
mod consumption;
mod forecast;
mod menu;
mod profile;
mod tenant;

// Profiles and targets
pub use profile::{
    ActivityLevel, DietPreference, HabitAnswers, NutritionGoal, NutritionTarget, Sex, UserProfile,
};

// Catalog
pub use menu::{MenuItem, ScoredMenuItem};

// Historical facts
pub use consumption::{ConsumptionRecord, WasteRecord};

// Forecasting and production
pub use forecast::{
    AdjustmentSuggestion, ConfidenceInterval, ConfidenceLevel, ForecastFactors, ForecastResult,
    ProductionAction,
};

// Alerts
pub use alert::{Alert, AlertPriority, AlertType};

// Tenancy
pub use tenant::TenantId;
