// ABOUTME: Menu scoring configuration with additive rule points and calorie distance bands
// ABOUTME: Every constant the menu scorer uses, named and defaulted for tuning without code changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Menu scoring rule points

use serde::{Deserialize, Serialize};

/// Menu Scoring Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuScoringConfig {
    /// Calorie proximity bands and their points
    pub calories: CalorieProximityConfig,
    /// Points for individual rules
    pub points: ScoringPoints,
    /// Display clamp and result limits
    pub limits: ScoringLimits,
}

/// Calorie distance bands, compared with `|item - target|`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieProximityConfig {
    /// Distance under which an item is a close match (100 kcal)
    pub close_kcal: f64,
    /// Distance under which an item is a near match (200 kcal)
    pub near_kcal: f64,
    /// Points for a close match (30)
    pub close_points: f64,
    /// Points for a near match (20)
    pub near_points: f64,
    /// Points otherwise (10)
    pub far_points: f64,
}

impl Default for CalorieProximityConfig {
    fn default() -> Self {
        Self {
            close_kcal: 100.0,
            near_kcal: 200.0,
            close_points: 30.0,
            near_points: 20.0,
            far_points: 10.0,
        }
    }
}

/// Points awarded or deducted by each rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPoints {
    /// Diet preference found in category or tags (+25)
    pub diet_match: f64,
    /// No allergen conflict (+20)
    pub allergen_safe: f64,
    /// Deducted on allergen conflict (50)
    pub allergen_penalty: f64,
    /// Protein threshold for the muscle-gain bonus (25 g)
    pub high_protein_min_g: f64,
    /// Muscle-gain high-protein bonus (+15)
    pub high_protein: f64,
    /// Item is available (+10)
    pub availability: f64,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            diet_match: 25.0,
            allergen_safe: 20.0,
            allergen_penalty: 50.0,
            high_protein_min_g: 25.0,
            high_protein: 15.0,
            availability: 10.0,
        }
    }
}

/// Display clamp and result size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringLimits {
    /// Lowest displayed score (0)
    pub min_display_score: f64,
    /// Highest displayed score (100)
    pub max_display_score: f64,
    /// Default number of recommendations returned (10)
    pub default_recommendations: usize,
}

impl Default for ScoringLimits {
    fn default() -> Self {
        Self {
            min_display_score: 0.0,
            max_display_score: 100.0,
            default_recommendations: 10,
        }
    }
}
