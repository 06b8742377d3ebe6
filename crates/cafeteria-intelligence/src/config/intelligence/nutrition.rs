// ABOUTME: Nutrition configuration for caloric needs, macro splits, BMI brackets, and meal shares
// ABOUTME: Harris-Benedict coefficients, activity factors, and per-goal macronutrient percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrition Profiling Configuration
//!
//! # Scientific References
//!
//! - BMR: Roza & Shizgal (1984), revised Harris-Benedict equations.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology.
//! - BMI: WHO Technical Report Series 894 (2000).

use super::error::ConfigError;
use cafeteria_core::models::{ActivityLevel, NutritionGoal};
use serde::{Deserialize, Serialize};

/// Nutrition Profiling Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Macro split per nutrition goal
    pub macro_splits: MacroSplitConfig,
    /// BMI category boundaries
    pub bmi: BmiConfig,
    /// Share of daily calories per meal
    pub meal_distribution: MealDistributionConfig,
    /// Figures quoted in personalised advice
    pub advice: AdviceConfig,
}

/// Revised Harris-Benedict BMR coefficients
///
/// `BMR = constant + weight_coef*kg + height_coef*cm - age_coef*years`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male intercept (88.362)
    pub male_constant: f64,
    /// Male weight coefficient (13.397)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799)
    pub male_height_coef: f64,
    /// Male age coefficient (5.677)
    pub male_age_coef: f64,
    /// Female intercept (447.593)
    pub female_constant: f64,
    /// Female weight coefficient (9.247)
    pub female_weight_coef: f64,
    /// Female height coefficient (3.098)
    pub female_height_coef: f64,
    /// Female age coefficient (4.330)
    pub female_age_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_constant: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_constant: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

/// Activity factor multipliers applied to BMR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Intense: 1.725
    pub intense: f64,
    /// Very intense: 1.9
    pub very_intense: f64,
}

impl ActivityFactorsConfig {
    /// Factor for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Intense => self.intense,
            ActivityLevel::VeryIntense => self.very_intense,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            intense: 1.725,
            very_intense: 1.9,
        }
    }
}

/// Macronutrient distribution as percentages of calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.protein_pct as u16 + self.carbs_pct as u16 + self.fat_pct as u16
    }
}

/// Macro split per nutrition goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Lose weight: 30/40/30
    pub lose_weight: MacroDistribution,
    /// Gain muscle: 35/45/20
    pub gain_muscle: MacroDistribution,
    /// Gain weight: 25/50/25
    pub gain_weight: MacroDistribution,
    /// Maintain: 30/45/25
    pub maintain: MacroDistribution,
}

impl MacroSplitConfig {
    /// Distribution for a nutrition goal
    #[must_use]
    pub const fn for_goal(&self, goal: NutritionGoal) -> MacroDistribution {
        match goal {
            NutritionGoal::LoseWeight => self.lose_weight,
            NutritionGoal::GainMuscle => self.gain_muscle,
            NutritionGoal::GainWeight => self.gain_weight,
            NutritionGoal::Maintain => self.maintain,
        }
    }

    /// Validate that every split sums to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first offending goal
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("lose_weight", self.lose_weight),
            ("gain_muscle", self.gain_muscle),
            ("gain_weight", self.gain_weight),
            ("maintain", self.maintain),
        ];
        for (name, split) in splits {
            if split.total() != 100 {
                return Err(ConfigError::InvalidWeights(Box::leak(
                    format!(
                        "{name} macro split must sum to 100%, got {}%",
                        split.total()
                    )
                    .into_boxed_str(),
                )));
            }
        }
        Ok(())
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            lose_weight: MacroDistribution::new(30, 40, 30),
            gain_muscle: MacroDistribution::new(35, 45, 20),
            gain_weight: MacroDistribution::new(25, 50, 25),
            maintain: MacroDistribution::new(30, 45, 25),
        }
    }
}

/// BMI category upper bounds (exclusive)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiConfig {
    /// Below this is underweight (18.5)
    pub underweight_below: f64,
    /// Below this is normal (25.0)
    pub normal_below: f64,
    /// Below this is overweight, at or above is obese (30.0)
    pub overweight_below: f64,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            normal_below: 25.0,
            overweight_below: 30.0,
        }
    }
}

/// Share of daily calories per meal, in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDistributionConfig {
    /// Breakfast: 25%
    pub breakfast_pct: u8,
    /// Lunch: 35%
    pub lunch_pct: u8,
    /// Dinner: 30%
    pub dinner_pct: u8,
    /// Snacks: 10%
    pub snacks_pct: u8,
}

impl Default for MealDistributionConfig {
    fn default() -> Self {
        Self {
            breakfast_pct: 25,
            lunch_pct: 35,
            dinner_pct: 30,
            snacks_pct: 10,
        }
    }
}

/// Figures quoted in advice tips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceConfig {
    /// Daily deficit suggested for weight loss (kcal)
    pub weight_loss_deficit_kcal: u32,
    /// Daily carbohydrate ceiling quoted for keto (g)
    pub keto_carb_limit_g: u32,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: 500,
            keto_carb_limit_g: 50,
        }
    }
}
