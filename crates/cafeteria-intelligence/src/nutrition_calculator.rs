// ABOUTME: Nutrition profiling: revised Harris-Benedict BMR, daily calories, macros, and BMI
// ABOUTME: Also the profile analysis with per-meal calorie shares and personalised advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrition Calculator Module
//!
//! Pure functions converting body metrics into a daily caloric need and a
//! macronutrient target. No I/O, no shared state.
//!
//! Macro grams are rounded independently, so the calorie identity
//! `protein*4 + carbs*4 + fat*9 == calories` holds only within a couple of
//! percent. That drift is accepted behaviour, not an error.
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.

use crate::config::intelligence::{
    AdviceConfig, BmiConfig, BmrConfig, MacroSplitConfig, MealDistributionConfig, NutritionConfig,
};
use cafeteria_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use cafeteria_core::errors::{AppError, AppResult};
use cafeteria_core::models::{DietPreference, NutritionGoal, NutritionTarget, Sex, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body Mass Index category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

/// Daily calories split across meals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCalorieDistribution {
    /// Breakfast kcal
    pub breakfast: u32,
    /// Lunch kcal
    pub lunch: u32,
    /// Dinner kcal
    pub dinner: u32,
    /// Snacks kcal
    pub snacks: u32,
}

/// Complete nutrition profile analysis for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    /// Basal metabolic rate (kcal/day, unrounded)
    pub bmr: f64,
    /// Daily caloric need (BMR x activity factor, rounded)
    pub daily_calories: u32,
    /// Macro target for the user's goal
    pub target: NutritionTarget,
    /// Body Mass Index
    pub bmi: f64,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Suggested calories per meal
    pub meal_distribution: MealCalorieDistribution,
    /// Ordered advice tips
    pub advice: Vec<String>,
}

fn ensure_positive(value: f64, field: &str) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_profile(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

fn validate_profile(profile: &UserProfile) -> AppResult<()> {
    ensure_positive(profile.weight_kg, "weight_kg")?;
    ensure_positive(profile.height_cm, "height_cm")?;
    if profile.age_years == 0 {
        return Err(AppError::invalid_profile("age_years must be positive"));
    }
    Ok(())
}

/// Calculate Basal Metabolic Rate with the revised Harris-Benedict equation
///
/// - Male: `88.362 + 13.397*kg + 4.799*cm - 5.677*age`
/// - Female: `447.593 + 9.247*kg + 3.098*cm - 4.330*age`
///
/// # Errors
///
/// Returns `InvalidProfile` if weight, height, or age is non-positive, or if
/// the equation yields a non-positive BMR (implausible metrics).
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> AppResult<f64> {
    validate_profile(profile)?;

    let age = f64::from(profile.age_years);
    let bmr = match profile.sex {
        Sex::Male => {
            config.male_constant + config.male_weight_coef * profile.weight_kg
                + config.male_height_coef * profile.height_cm
                - config.male_age_coef * age
        }
        Sex::Female => {
            config.female_constant + config.female_weight_coef * profile.weight_kg
                + config.female_height_coef * profile.height_cm
                - config.female_age_coef * age
        }
    };

    if bmr <= 0.0 {
        return Err(AppError::invalid_profile(format!(
            "Body metrics produce a non-positive BMR ({bmr:.1} kcal)"
        )));
    }
    Ok(bmr)
}

/// Daily caloric need: BMR x activity factor, rounded to the nearest kcal
///
/// # Errors
///
/// Returns `InvalidProfile` under the same conditions as [`calculate_bmr`]
pub fn compute_daily_calories(profile: &UserProfile, config: &NutritionConfig) -> AppResult<u32> {
    let bmr = calculate_bmr(profile, &config.bmr)?;
    let factor = config.activity_factors.factor_for(profile.activity_level);
    let calories = (bmr * factor).round();

    debug!(
        bmr,
        factor,
        calories,
        activity = ?profile.activity_level,
        "Computed daily calories"
    );

    Ok(calories as u32)
}

/// Split calories into protein/carbs/fat grams for a goal
///
/// Each macro is `round(calories * pct / kcal_per_gram)` on its own; the
/// grams are not renormalised to hit `calories` exactly.
#[must_use]
pub fn compute_macro_targets(
    calories: u32,
    goal: NutritionGoal,
    splits: &MacroSplitConfig,
) -> NutritionTarget {
    let (protein_pct, carbs_pct, fat_pct) = splits.for_goal(goal).as_tuple();
    let kcal = f64::from(calories);
    let grams = |pct: u8, kcal_per_gram: f64| (kcal * f64::from(pct) / 100.0 / kcal_per_gram).round() as u32;

    NutritionTarget {
        calories,
        protein_g: grams(protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs_g: grams(carbs_pct, KCAL_PER_GRAM_CARBS),
        fat_g: grams(fat_pct, KCAL_PER_GRAM_FAT),
    }
}

/// Body Mass Index: `kg / m²`
///
/// # Errors
///
/// Returns `InvalidProfile` if weight or height is non-positive
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    ensure_positive(weight_kg, "weight_kg")?;
    ensure_positive(height_cm, "height_cm")?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Categorize BMI; each bracket includes its lower bound
///
/// # Errors
///
/// Returns `InvalidProfile` if weight or height is non-positive
pub fn categorize_bmi(weight_kg: f64, height_cm: f64, config: &BmiConfig) -> AppResult<BmiCategory> {
    let bmi = calculate_bmi(weight_kg, height_cm)?;
    Ok(bmi_category_for(bmi, config))
}

fn bmi_category_for(bmi: f64, config: &BmiConfig) -> BmiCategory {
    if bmi < config.underweight_below {
        BmiCategory::Underweight
    } else if bmi < config.normal_below {
        BmiCategory::Normal
    } else if bmi < config.overweight_below {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Split daily calories across meals using configured shares
#[must_use]
pub fn distribute_meal_calories(
    calories: u32,
    config: &MealDistributionConfig,
) -> MealCalorieDistribution {
    let share = |pct: u8| (f64::from(calories) * f64::from(pct) / 100.0).round() as u32;
    MealCalorieDistribution {
        breakfast: share(config.breakfast_pct),
        lunch: share(config.lunch_pct),
        dinner: share(config.dinner_pct),
        snacks: share(config.snacks_pct),
    }
}

/// Personalised advice driven by BMI category, goal, diet, and habits, in that order
#[must_use]
pub fn build_advice(
    profile: &UserProfile,
    bmi_category: BmiCategory,
    target: &NutritionTarget,
    config: &AdviceConfig,
) -> Vec<String> {
    let mut advice = Vec::new();

    match bmi_category {
        BmiCategory::Overweight | BmiCategory::Obese => {
            advice.push("Favor low-calorie, high-fiber foods to stay satiated.".to_owned());
            advice.push(
                "Include lean protein in every meal to preserve muscle while losing weight."
                    .to_owned(),
            );
        }
        BmiCategory::Underweight => {
            advice.push(
                "Add calorie-dense healthy foods such as nuts, avocado, and olive oil.".to_owned(),
            );
            advice.push("Eat more frequent meals to gain weight steadily.".to_owned());
        }
        BmiCategory::Normal => {}
    }

    match profile.nutrition_goal {
        NutritionGoal::LoseWeight => {
            let goal_kcal = target
                .calories
                .saturating_sub(config.weight_loss_deficit_kcal);
            advice.push(format!(
                "Keep a moderate caloric deficit: aim for about {goal_kcal} kcal per day."
            ));
            advice.push("Prefer nutrient-dense foods with low energy density.".to_owned());
        }
        NutritionGoal::GainMuscle => {
            advice.push(format!(
                "Eat at least {} g of protein per day to support muscle growth.",
                target.protein_g
            ));
            advice.push("Have a protein serving within 30 minutes after training.".to_owned());
        }
        NutritionGoal::GainWeight | NutritionGoal::Maintain => {}
    }

    match profile.diet_preference {
        DietPreference::Vegetarian => {
            advice.push(
                "Include plant proteins such as legumes, quinoa, tofu, or tempeh.".to_owned(),
            );
        }
        DietPreference::Vegan => {
            advice.push("Get vitamin B12 from fortified foods or supplements.".to_owned());
            advice.push("Combine legumes with grains for complete protein.".to_owned());
        }
        DietPreference::Keto => {
            advice.push(format!(
                "Keep carbohydrates below {} g per day to stay in ketosis.",
                config.keto_carb_limit_g
            ));
            advice.push("Favor healthy fats like avocado, nuts, or olive oil.".to_owned());
        }
        DietPreference::None => {}
    }

    if let Some(habits) = &profile.habits {
        if habits.eats_few_meals() {
            advice.push(
                "Aim for 4-5 meals a day to keep your metabolism active and avoid hunger spikes."
                    .to_owned(),
            );
        }
        if habits.drinks_little_water() {
            advice.push("Drink at least 7-8 glasses of water a day to stay hydrated.".to_owned());
        }
        if habits.eats_little_produce() {
            advice.push(
                "Include at least 5 portions of fruit and vegetables a day for vitamins and fiber."
                    .to_owned(),
            );
        }
    }

    advice
}

/// Full profile analysis: calories, macros, BMI, meal shares, and advice
///
/// # Errors
///
/// Returns `InvalidProfile` if the body metrics are invalid
pub fn analyze_profile(profile: &UserProfile, config: &NutritionConfig) -> AppResult<ProfileAnalysis> {
    let bmr = calculate_bmr(profile, &config.bmr)?;
    let daily_calories = compute_daily_calories(profile, config)?;
    let target = compute_macro_targets(daily_calories, profile.nutrition_goal, &config.macro_splits);
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;
    let bmi_category = bmi_category_for(bmi, &config.bmi);

    Ok(ProfileAnalysis {
        bmr,
        daily_calories,
        target,
        bmi,
        bmi_category,
        meal_distribution: distribute_meal_calories(daily_calories, &config.meal_distribution),
        advice: build_advice(profile, bmi_category, &target, &config.advice),
    })
}
