// ABOUTME: Menu catalog models and their scored projection for recommendations
// ABOUTME: MenuItem as supplied by the catalog and ScoredMenuItem produced by the menu scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A dish offered by the cafeteria
///
/// Read-only to the engine: stock and order counts are maintained by the
/// ordering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category (e.g. "main", "vegetarian", "dessert")
    #[serde(default)]
    pub category: String,
    /// Energy per serving (kcal)
    pub calories: u32,
    /// Protein per serving (g)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates per serving (g)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat per serving (g)
    #[serde(default)]
    pub fat_g: f64,
    /// Allergens present in the dish
    #[serde(default)]
    pub allergens: BTreeSet<String>,
    /// Free-form tags (diet markers, cuisine, ...)
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Units in stock; `None` means untracked / unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Minimum stock level the kitchen wants to keep
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<u32>,
    /// Lifetime order count
    #[serde(default)]
    pub times_ordered: u32,
    /// Average rating (0-5)
    #[serde(default)]
    pub rating: f64,
}

impl MenuItem {
    /// Whether the item can currently be served
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self.stock, Some(0))
    }
}

/// Menu item annotated with its recommendation score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMenuItem {
    /// The scored catalog entry
    #[serde(flatten)]
    pub item: MenuItem,
    /// Display score clamped to `[0, 100]`
    pub score: f64,
    /// Unclamped score used for ranking
    pub raw_score: f64,
    /// Human-readable explanation, in rule order
    pub match_reasons: Vec<String>,
}
