// ABOUTME: Integration tests for nutrition profiling through the public calculator API
// ABOUTME: Covers BMR, activity scaling, macro splits, BMI brackets, meal shares, and advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use cafeteria_engine::config::intelligence::{BmiConfig, MacroSplitConfig, NutritionConfig};
use cafeteria_engine::errors::ErrorCode;
use cafeteria_engine::intelligence::nutrition_calculator::{
    analyze_profile, calculate_bmr, categorize_bmi, compute_daily_calories,
    compute_macro_targets, BmiCategory,
};
use cafeteria_engine::models::{
    ActivityLevel, DietPreference, HabitAnswers, NutritionGoal, Sex, UserProfile,
};
use common::profile;

fn female_profile() -> UserProfile {
    UserProfile {
        weight_kg: 60.0,
        height_cm: 165.0,
        age_years: 28,
        sex: Sex::Female,
        activity_level: ActivityLevel::Sedentary,
        ..profile()
    }
}

#[test]
fn test_bmr_uses_sex_specific_equation() {
    let config = NutritionConfig::default();

    let male = calculate_bmr(&profile(), &config.bmr).unwrap();
    assert!((male - 1695.667).abs() < 1e-6);

    let female = calculate_bmr(&female_profile(), &config.bmr).unwrap();
    assert!((female - 1392.343).abs() < 1e-6);
}

#[test]
fn test_daily_calories_apply_activity_factor() {
    let config = NutritionConfig::default();

    assert_eq!(compute_daily_calories(&profile(), &config).unwrap(), 2628);
    assert_eq!(
        compute_daily_calories(&female_profile(), &config).unwrap(),
        1671
    );
}

#[test]
fn test_daily_calories_grow_with_activity() {
    let config = NutritionConfig::default();
    let calories: Vec<u32> = ActivityLevel::ALL
        .into_iter()
        .map(|activity_level| {
            let p = UserProfile {
                activity_level,
                ..profile()
            };
            compute_daily_calories(&p, &config).unwrap()
        })
        .collect();

    assert!(calories.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_invalid_body_metrics_are_rejected() {
    let config = NutritionConfig::default();
    let cases = [
        UserProfile {
            weight_kg: 0.0,
            ..profile()
        },
        UserProfile {
            height_cm: -170.0,
            ..profile()
        },
        UserProfile {
            weight_kg: f64::NAN,
            ..profile()
        },
        UserProfile {
            age_years: 0,
            ..profile()
        },
    ];

    for case in cases {
        let error = compute_daily_calories(&case, &config).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidProfile);
    }
}

#[test]
fn test_macro_targets_follow_goal_split() {
    let splits = MacroSplitConfig::default();

    let maintain = compute_macro_targets(2628, NutritionGoal::Maintain, &splits);
    assert_eq!(
        (maintain.protein_g, maintain.carbs_g, maintain.fat_g),
        (197, 296, 73)
    );

    let muscle = compute_macro_targets(2628, NutritionGoal::GainMuscle, &splits);
    assert_eq!((muscle.protein_g, muscle.carbs_g, muscle.fat_g), (230, 296, 58));

    let lose = compute_macro_targets(2628, NutritionGoal::LoseWeight, &splits);
    assert_eq!((lose.protein_g, lose.carbs_g, lose.fat_g), (197, 263, 88));

    let gain = compute_macro_targets(2628, NutritionGoal::GainWeight, &splits);
    assert_eq!((gain.protein_g, gain.carbs_g, gain.fat_g), (164, 328, 73));
}

#[test]
fn test_macro_grams_stay_close_to_calories() {
    let splits = MacroSplitConfig::default();
    for goal in [
        NutritionGoal::LoseWeight,
        NutritionGoal::GainMuscle,
        NutritionGoal::GainWeight,
        NutritionGoal::Maintain,
    ] {
        let target = compute_macro_targets(2628, goal, &splits);
        assert_eq!(target.calories, 2628);
        // Independent rounding drifts by at most 2 + 2 + 4.5 kcal
        assert!(target.macro_calories().abs_diff(2628) <= 9);
    }
}

#[test]
fn test_bmi_brackets_include_lower_bound() {
    let config = BmiConfig::default();

    // 2 m tall makes BMI = weight / 4 exactly
    assert_eq!(
        categorize_bmi(70.0, 200.0, &config).unwrap(),
        BmiCategory::Underweight
    );
    assert_eq!(
        categorize_bmi(74.0, 200.0, &config).unwrap(),
        BmiCategory::Normal
    );
    assert_eq!(
        categorize_bmi(100.0, 200.0, &config).unwrap(),
        BmiCategory::Overweight
    );
    assert_eq!(
        categorize_bmi(120.0, 200.0, &config).unwrap(),
        BmiCategory::Obese
    );
    assert!(categorize_bmi(70.0, 0.0, &config).is_err());
}

#[test]
fn test_analysis_combines_every_figure() {
    let analysis = analyze_profile(&profile(), &NutritionConfig::default()).unwrap();

    assert_eq!(analysis.daily_calories, 2628);
    assert_eq!(analysis.target.protein_g, 197);
    assert_eq!(analysis.bmi_category, BmiCategory::Normal);
    assert!((analysis.bmi - 22.857).abs() < 1e-3);

    let meals = analysis.meal_distribution;
    assert_eq!(
        (meals.breakfast, meals.lunch, meals.dinner, meals.snacks),
        (657, 920, 788, 263)
    );
    // Normal BMI, maintain goal, no diet: nothing to advise
    assert!(analysis.advice.is_empty());
}

#[test]
fn test_advice_follows_bmi_goal_and_diet_order() {
    let overweight_vegan = UserProfile {
        weight_kg: 85.0,
        nutrition_goal: NutritionGoal::LoseWeight,
        diet_preference: DietPreference::Vegan,
        ..profile()
    };
    let analysis = analyze_profile(&overweight_vegan, &NutritionConfig::default()).unwrap();

    assert_eq!(analysis.bmi_category, BmiCategory::Overweight);
    assert_eq!(analysis.advice.len(), 6);
    assert!(analysis.advice[0].contains("low-calorie"));
    let deficit = analysis.daily_calories - 500;
    assert!(analysis.advice[2].contains(&format!("{deficit} kcal")));
    assert!(analysis.advice[4].contains("B12"));
}

#[test]
fn test_keto_advice_quotes_carb_ceiling() {
    let keto = UserProfile {
        diet_preference: DietPreference::Keto,
        ..profile()
    };
    let analysis = analyze_profile(&keto, &NutritionConfig::default()).unwrap();

    assert!(analysis.advice.iter().any(|tip| tip.contains("below 50 g")));
}

#[test]
fn test_bmi_extremes_at_average_height() {
    let config = BmiConfig::default();

    assert_eq!(
        categorize_bmi(50.0, 175.0, &config).unwrap(),
        BmiCategory::Underweight
    );
    assert_eq!(
        categorize_bmi(100.0, 175.0, &config).unwrap(),
        BmiCategory::Obese
    );
}

#[test]
fn test_habit_answers_add_advice_after_diet() {
    let vegetarian_with_habits = UserProfile {
        diet_preference: DietPreference::Vegetarian,
        habits: Some(HabitAnswers {
            meals_per_day: Some("3".to_owned()),
            water_glasses: Some("menos-4".to_owned()),
            fruit_veg_portions: Some("2-3".to_owned()),
        }),
        ..profile()
    };
    let analysis = analyze_profile(&vegetarian_with_habits, &NutritionConfig::default()).unwrap();

    assert_eq!(analysis.advice.len(), 4);
    assert!(analysis.advice[0].contains("plant proteins"));
    assert!(analysis.advice[1].contains("4-5 meals"));
    assert!(analysis.advice[2].contains("7-8 glasses"));
    assert!(analysis.advice[3].contains("5 portions"));
}

#[test]
fn test_healthy_or_unknown_habits_add_nothing() {
    let healthy = UserProfile {
        habits: Some(HabitAnswers {
            meals_per_day: Some("4-5".to_owned()),
            water_glasses: Some("7-8".to_owned()),
            fruit_veg_portions: Some("4-5".to_owned()),
        }),
        ..profile()
    };
    let unanswered = UserProfile {
        habits: Some(HabitAnswers::default()),
        ..profile()
    };

    for p in [healthy, unanswered] {
        let analysis = analyze_profile(&p, &NutritionConfig::default()).unwrap();
        assert!(analysis.advice.is_empty());
    }
}

#[test]
fn test_weekly_sessions_answers_map_to_activity_levels() {
    let cases = [
        ("0", ActivityLevel::Sedentary),
        ("1-2", ActivityLevel::Light),
        ("3-4", ActivityLevel::Moderate),
        ("5-mas", ActivityLevel::Intense),
        ("5+", ActivityLevel::Intense),
        ("daily", ActivityLevel::VeryIntense),
        ("sometimes", ActivityLevel::Sedentary),
    ];

    for (answer, expected) in cases {
        assert_eq!(ActivityLevel::from_weekly_sessions(answer), expected, "{answer}");
    }
}

#[test]
fn test_profile_json_without_habits_still_parses() {
    let json = r#"{
        "weight_kg": 70.0, "height_cm": 175.0, "age_years": 30,
        "sex": "male", "activity_level": "moderate"
    }"#;
    let parsed: UserProfile = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.habits, None);
    assert_eq!(parsed, profile());
}
