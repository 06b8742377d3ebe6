// ABOUTME: User nutrition profile models consumed by the nutrition calculator and menu scorer
// ABOUTME: UserProfile, Sex, ActivityLevel, DietPreference, NutritionGoal, and NutritionTarget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Biological sex used by the BMR equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male equation branch
    Male,
    /// Female equation branch
    Female,
}

/// Weekly physical activity level, ordered from least to most active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-2 sessions per week
    Light,
    /// 3-4 sessions per week
    Moderate,
    /// 5+ sessions per week
    Intense,
    /// Hard daily training or physical job
    VeryIntense,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Intense,
        Self::VeryIntense,
    ];

    /// Map the questionnaire answer for weekly training sessions to a level
    ///
    /// Accepts `"0"`, `"1-2"`, `"3-4"`, `"5-mas"` (or `"5+"`) and `"daily"`.
    /// Unknown answers fall back to sedentary.
    #[must_use]
    pub fn from_weekly_sessions(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "1-2" => Self::Light,
            "3-4" => Self::Moderate,
            "5-mas" | "5+" => Self::Intense,
            "daily" => Self::VeryIntense,
            _ => Self::Sedentary,
        }
    }
}

/// Dietary preference declared by the user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    /// No restriction
    #[default]
    None,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Very low carbohydrate
    Keto,
}

impl DietPreference {
    /// Lowercase identifier also used as the catalog marker for this diet
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
        }
    }

    /// Parse a preference, treating anything unknown as no preference
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            "keto" => Self::Keto,
            _ => Self::None,
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrition goal driving the macro split
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    /// Caloric deficit
    LoseWeight,
    /// Protein-forward surplus
    GainMuscle,
    /// Carbohydrate-forward surplus
    GainWeight,
    /// Energy balance
    #[default]
    Maintain,
}

/// Answers from the eating habits questionnaire
///
/// Values are the questionnaire's answer codes; unknown codes trigger no advice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitAnswers {
    /// Meals per day (`"2"`, `"3"`, `"4-5"`, ...)
    #[serde(default)]
    pub meals_per_day: Option<String>,
    /// Glasses of water per day (`"menos-4"`, `"4-6"`, `"7-8"`, ...)
    #[serde(default)]
    pub water_glasses: Option<String>,
    /// Fruit and vegetable portions per day (`"0-1"`, `"2-3"`, `"4-5"`, ...)
    #[serde(default)]
    pub fruit_veg_portions: Option<String>,
}

impl HabitAnswers {
    /// Two or three meals a day
    #[must_use]
    pub fn eats_few_meals(&self) -> bool {
        matches!(self.meals_per_day.as_deref().map(str::trim), Some("2" | "3"))
    }

    /// Fewer than seven glasses of water a day
    #[must_use]
    pub fn drinks_little_water(&self) -> bool {
        matches!(
            self.water_glasses.as_deref().map(str::trim),
            Some("menos-4" | "4-6")
        )
    }

    /// Fewer than four fruit and vegetable portions a day
    #[must_use]
    pub fn eats_little_produce(&self) -> bool {
        matches!(
            self.fruit_veg_portions.as_deref().map(str::trim),
            Some("0-1" | "2-3")
        )
    }
}

/// Body metrics and dietary constraints for one user
///
/// Owned by user management; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Sex for BMR equation selection
    pub sex: Sex,
    /// Weekly activity level
    pub activity_level: ActivityLevel,
    /// Dietary preference
    #[serde(default)]
    pub diet_preference: DietPreference,
    /// Allergens to avoid (free text, matched case-insensitively)
    #[serde(default)]
    pub allergens: BTreeSet<String>,
    /// Nutrition goal
    #[serde(default)]
    pub nutrition_goal: NutritionGoal,
    /// Eating habits questionnaire, when the user filled it in
    #[serde(default)]
    pub habits: Option<HabitAnswers>,
}

/// Daily caloric and macronutrient target
///
/// Grams are rounded independently per macronutrient, so
/// `protein_g*4 + carbs_g*4 + fat_g*9` may drift from `calories` by a few kcal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTarget {
    /// Daily energy target (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

impl NutritionTarget {
    /// Energy implied by the macro grams (4/4/9 kcal per gram)
    #[must_use]
    pub const fn macro_calories(&self) -> u32 {
        self.protein_g * 4 + self.carbs_g * 4 + self.fat_g * 9
    }
}
