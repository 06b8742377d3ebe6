// ABOUTME: Menu scoring and ranking against a nutrition target and dietary restrictions
// ABOUTME: Purely additive, traceable rules: calories, diet, allergens, protein, availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Menu Scorer
//!
//! Each rule adds (or for allergens, subtracts) a fixed number of points and
//! may append a reason, so every score is explainable. Scores are a pure
//! function of `(UserProfile, MenuItem, NutritionTarget)` plus configuration.
//!
//! Ranking uses the unclamped score. Items conflicting with the user's
//! allergens always sort after every safe item.

use crate::config::intelligence::{IntelligenceConfig, MenuScoringConfig};
use cafeteria_core::models::{
    DietPreference, MenuItem, NutritionGoal, NutritionTarget, ScoredMenuItem, UserProfile,
};
use std::cmp::Ordering;
use tracing::debug;

/// Ranks menu items for a user
#[derive(Debug, Clone)]
pub struct MenuScorer {
    config: MenuScoringConfig,
}

impl Default for MenuScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Score plus the allergen flag used as the primary sort key
struct RankedItem {
    scored: ScoredMenuItem,
    allergen_conflict: bool,
}

impl MenuScorer {
    /// Create a scorer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().scoring.clone(),
        }
    }

    /// Create a scorer with custom configuration
    #[must_use]
    pub const fn with_config(config: MenuScoringConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &MenuScoringConfig {
        &self.config
    }

    /// Score and rank every item, best first
    ///
    /// An empty catalog yields an empty ranking.
    #[must_use]
    pub fn score(
        &self,
        items: &[MenuItem],
        target: &NutritionTarget,
        profile: &UserProfile,
    ) -> Vec<ScoredMenuItem> {
        let mut ranked: Vec<RankedItem> = items
            .iter()
            .map(|item| self.rank_item(item, target, profile))
            .collect();

        // Stable: full ties keep catalog order
        ranked.sort_by(compare_ranked);

        debug!(
            items = ranked.len(),
            conflicts = ranked.iter().filter(|r| r.allergen_conflict).count(),
            "Scored menu items"
        );

        ranked.into_iter().map(|r| r.scored).collect()
    }

    /// Top `limit` items (configured default when `None`)
    #[must_use]
    pub fn recommend(
        &self,
        items: &[MenuItem],
        target: &NutritionTarget,
        profile: &UserProfile,
        limit: Option<usize>,
    ) -> Vec<ScoredMenuItem> {
        let limit = limit.unwrap_or(self.config.limits.default_recommendations);
        let mut ranked = self.score(items, target, profile);
        ranked.truncate(limit);
        ranked
    }

    /// Score a single item without ranking
    #[must_use]
    pub fn score_item(
        &self,
        item: &MenuItem,
        target: &NutritionTarget,
        profile: &UserProfile,
    ) -> ScoredMenuItem {
        self.rank_item(item, target, profile).scored
    }

    fn rank_item(
        &self,
        item: &MenuItem,
        target: &NutritionTarget,
        profile: &UserProfile,
    ) -> RankedItem {
        let cal = &self.config.calories;
        let points = &self.config.points;
        let mut raw_score = 0.0;
        let mut match_reasons = Vec::new();

        let distance = (f64::from(item.calories) - f64::from(target.calories)).abs();
        if distance < cal.close_kcal {
            raw_score += cal.close_points;
            match_reasons.push("calories match your target".to_owned());
        } else if distance < cal.near_kcal {
            raw_score += cal.near_points;
        } else {
            raw_score += cal.far_points;
        }

        if matches_diet(item, profile.diet_preference) {
            raw_score += points.diet_match;
            match_reasons.push(format!(
                "aligned with your {} diet",
                profile.diet_preference
            ));
        }

        let conflict = find_allergen_conflict(item, profile);
        if let Some(allergen) = conflict {
            raw_score -= points.allergen_penalty;
            match_reasons.push(format!("contains {allergen}, which you avoid"));
        } else {
            raw_score += points.allergen_safe;
        }

        if profile.nutrition_goal == NutritionGoal::GainMuscle
            && item.protein_g >= points.high_protein_min_g
        {
            raw_score += points.high_protein;
            match_reasons.push("high protein content".to_owned());
        }

        if item.is_available() {
            raw_score += points.availability;
        }

        let score = raw_score.clamp(
            self.config.limits.min_display_score,
            self.config.limits.max_display_score,
        );

        RankedItem {
            scored: ScoredMenuItem {
                item: item.clone(),
                score,
                raw_score,
                match_reasons,
            },
            allergen_conflict: conflict.is_some(),
        }
    }
}

fn compare_ranked(a: &RankedItem, b: &RankedItem) -> Ordering {
    a.allergen_conflict
        .cmp(&b.allergen_conflict)
        .then_with(|| b.scored.raw_score.total_cmp(&a.scored.raw_score))
        .then_with(|| b.scored.item.rating.total_cmp(&a.scored.item.rating))
        .then_with(|| b.scored.item.times_ordered.cmp(&a.scored.item.times_ordered))
}

/// Catalog markers accepted for each diet
fn diet_markers(preference: DietPreference) -> &'static [&'static str] {
    match preference {
        DietPreference::None => &[],
        // Vegan dishes are vegetarian too
        DietPreference::Vegetarian => &["vegetarian", "vegan"],
        DietPreference::Vegan => &["vegan"],
        DietPreference::Keto => &["keto"],
    }
}

fn matches_diet(item: &MenuItem, preference: DietPreference) -> bool {
    let markers = diet_markers(preference);
    if markers.is_empty() {
        return false;
    }
    let category = item.category.to_lowercase();
    markers.iter().any(|marker| {
        category.contains(marker) || item.tags.iter().any(|tag| tag.to_lowercase().contains(marker))
    })
}

/// First profile allergen contained in any item allergen (case-insensitive)
fn find_allergen_conflict<'a>(item: &MenuItem, profile: &'a UserProfile) -> Option<&'a str> {
    profile
        .allergens
        .iter()
        .map(String::as_str)
        .filter(|allergen| !allergen.trim().is_empty())
        .find(|allergen| {
            let needle = allergen.trim().to_lowercase();
            item.allergens
                .iter()
                .any(|present| present.to_lowercase().contains(&needle))
        })
}
