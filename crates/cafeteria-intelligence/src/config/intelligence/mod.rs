// ABOUTME: Intelligence configuration for nutrition, scoring, forecasting, production, and alerts
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and env loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Intelligence Configuration Module
//!
//! Type-safe configuration for every intelligence component. Defaults encode
//! the documented constants; deployments override them through `CAFETERIA_*`
//! environment variables, and [`IntelligenceConfig::load`] rejects
//! inconsistent combinations before any component sees them.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, macro splits, BMI brackets
//! - `scoring` - Menu scoring rule points and calorie bands
//! - `forecast` - Demand forecast weights, damping, confidence cut-offs
//! - `production` - Stock-to-forecast ratios
//! - `alerts` - Alert thresholds and de-duplication window

pub mod alerts;
pub mod error;
pub mod forecast;
pub mod nutrition;
pub mod production;
pub mod scoring;

pub use alerts::{AlertConfig, MAX_DEDUP_WINDOW_HOURS};
pub use error::ConfigError;
pub use forecast::ForecastConfig;
pub use nutrition::{
    ActivityFactorsConfig, AdviceConfig, BmiConfig, BmrConfig, MacroDistribution,
    MacroSplitConfig, MealDistributionConfig, NutritionConfig,
};
pub use production::ProductionConfig;
pub use scoring::{CalorieProximityConfig, MenuScoringConfig, ScoringLimits, ScoringPoints};

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig<true>> = OnceLock::new();

/// Allowed drift when checking that weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Main intelligence configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig<const VALIDATED: bool = false> {
    /// Configuration for nutrition profiling
    pub nutrition: NutritionConfig,
    /// Configuration for menu scoring
    pub scoring: MenuScoringConfig,
    /// Configuration for demand forecasting
    pub forecast: ForecastConfig,
    /// Configuration for production advice
    pub production: ProductionConfig,
    /// Configuration for operational alerts
    pub alerts: AlertConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl IntelligenceConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_scoring()?;
        self.validate_forecast()?;
        self.validate_production()?;
        self.validate_alerts()
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.male_weight_coef <= 0.0
            || nutr.bmr.male_height_coef <= 0.0
            || nutr.bmr.female_weight_coef <= 0.0
            || nutr.bmr.female_height_coef <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.very_intense > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.intense
            || factors.intense >= factors.very_intense
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        nutr.macro_splits.validate()?;

        let bmi = &nutr.bmi;
        if bmi.underweight_below <= 0.0
            || bmi.underweight_below >= bmi.normal_below
            || bmi.normal_below >= bmi.overweight_below
        {
            return Err(ConfigError::InvalidRange(
                "BMI boundaries must be positive and ascending",
            ));
        }

        let meals = &nutr.meal_distribution;
        let meal_total = u16::from(meals.breakfast_pct)
            + u16::from(meals.lunch_pct)
            + u16::from(meals.dinner_pct)
            + u16::from(meals.snacks_pct);
        if meal_total != 100 {
            return Err(ConfigError::InvalidWeights(
                "Meal calorie distribution must sum to 100%",
            ));
        }

        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;

        if scoring.calories.close_kcal <= 0.0
            || scoring.calories.close_kcal >= scoring.calories.near_kcal
        {
            return Err(ConfigError::InvalidRange(
                "close_kcal must be positive and < near_kcal",
            ));
        }
        if scoring.points.allergen_penalty < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "allergen_penalty is a deduction and must be non-negative",
            ));
        }
        if scoring.limits.min_display_score >= scoring.limits.max_display_score {
            return Err(ConfigError::InvalidRange(
                "min_display_score must be < max_display_score",
            ));
        }
        if scoring.limits.default_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_recommendations must be at least 1",
            ));
        }

        Ok(())
    }

    fn validate_forecast(&self) -> Result<(), ConfigError> {
        let fc = &self.forecast;

        if fc.recent_weight < 0.0 || fc.overall_weight < 0.0 || fc.weekday_weight < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Forecast weights must be non-negative",
            ));
        }
        let weight_sum = fc.recent_weight + fc.overall_weight + fc.weekday_weight;
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Forecast weights must sum to 1.0",
            ));
        }
        if fc.weekend_factor <= 0.0 || fc.weekend_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weekend factor must be in (0, 1]",
            ));
        }
        if fc.recent_window == 0 || fc.lookback_days == 0 || fc.horizon_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Forecast windows must be at least 1",
            ));
        }
        if fc.medium_confidence_above >= fc.high_confidence_above {
            return Err(ConfigError::InvalidRange(
                "medium_confidence_above must be < high_confidence_above",
            ));
        }

        Ok(())
    }

    fn validate_production(&self) -> Result<(), ConfigError> {
        let prod = &self.production;

        if prod.increase_below_ratio <= 0.0 || prod.increase_below_ratio >= prod.reduce_above_ratio
        {
            return Err(ConfigError::InvalidRange(
                "increase_below_ratio must be positive and < reduce_above_ratio",
            ));
        }
        // Increase means stock is short of demand, reduce means it exceeds it
        if prod.increase_below_ratio > 1.0 || prod.reduce_above_ratio < 1.0 {
            return Err(ConfigError::InvalidRange(
                "increase_below_ratio must be <= 1.0 <= reduce_above_ratio",
            ));
        }
        if prod.weekend_increase_factor <= 0.0 || prod.weekend_increase_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weekend increase factor must be in (0, 1]",
            ));
        }

        Ok(())
    }

    fn validate_alerts(&self) -> Result<(), ConfigError> {
        let alerts = &self.alerts;

        if alerts.low_stock_threshold_pct <= 0.0 || alerts.low_stock_threshold_pct > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Low stock threshold must be in (0, 100]",
            ));
        }
        if alerts.waste_threshold_pct <= 0.0 || alerts.waste_threshold_pct > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Waste threshold must be in (0, 100]",
            ));
        }
        if alerts.high_demand_multiplier <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "High demand multiplier must be positive",
            ));
        }
        if alerts.dedup_window_hours < 0 || alerts.dedup_window_hours > MAX_DEDUP_WINDOW_HOURS {
            return Err(ConfigError::ValueOutOfRange(
                "De-duplication window must be between 0 and 8760 hours",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    // Long function: Systematic env var parsing for all intelligence subsystems
    #[allow(clippy::too_many_lines)]
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity factor overrides
        let factors = &mut self.nutrition.activity_factors;
        Self::apply_env_var("CAFETERIA_ACTIVITY_FACTOR_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("CAFETERIA_ACTIVITY_FACTOR_LIGHT", &mut factors.light)?;
        Self::apply_env_var("CAFETERIA_ACTIVITY_FACTOR_MODERATE", &mut factors.moderate)?;
        Self::apply_env_var("CAFETERIA_ACTIVITY_FACTOR_INTENSE", &mut factors.intense)?;
        Self::apply_env_var(
            "CAFETERIA_ACTIVITY_FACTOR_VERY_INTENSE",
            &mut factors.very_intense,
        )?;

        // Menu scoring overrides
        Self::apply_env_var(
            "CAFETERIA_SCORING_CLOSE_KCAL",
            &mut self.scoring.calories.close_kcal,
        )?;
        Self::apply_env_var(
            "CAFETERIA_SCORING_NEAR_KCAL",
            &mut self.scoring.calories.near_kcal,
        )?;
        Self::apply_env_var(
            "CAFETERIA_SCORING_ALLERGEN_PENALTY",
            &mut self.scoring.points.allergen_penalty,
        )?;
        Self::apply_env_var(
            "CAFETERIA_SCORING_HIGH_PROTEIN_MIN_G",
            &mut self.scoring.points.high_protein_min_g,
        )?;
        Self::apply_env_var(
            "CAFETERIA_RECOMMENDATION_LIMIT",
            &mut self.scoring.limits.default_recommendations,
        )?;

        // Forecast overrides
        let fc = &mut self.forecast;
        Self::apply_env_var(
            "CAFETERIA_FORECAST_DEFAULT_PREDICTION",
            &mut fc.default_prediction,
        )?;
        Self::apply_env_var("CAFETERIA_FORECAST_RECENT_WINDOW", &mut fc.recent_window)?;
        Self::apply_env_var("CAFETERIA_FORECAST_RECENT_WEIGHT", &mut fc.recent_weight)?;
        Self::apply_env_var("CAFETERIA_FORECAST_OVERALL_WEIGHT", &mut fc.overall_weight)?;
        Self::apply_env_var("CAFETERIA_FORECAST_WEEKDAY_WEIGHT", &mut fc.weekday_weight)?;
        Self::apply_env_var("CAFETERIA_FORECAST_WEEKEND_FACTOR", &mut fc.weekend_factor)?;
        Self::apply_env_var("CAFETERIA_FORECAST_LOOKBACK_DAYS", &mut fc.lookback_days)?;
        Self::apply_env_var("CAFETERIA_FORECAST_HORIZON_DAYS", &mut fc.horizon_days)?;

        // Production overrides
        let prod = &mut self.production;
        Self::apply_env_var(
            "CAFETERIA_PRODUCTION_INCREASE_RATIO",
            &mut prod.increase_below_ratio,
        )?;
        Self::apply_env_var(
            "CAFETERIA_PRODUCTION_REDUCE_RATIO",
            &mut prod.reduce_above_ratio,
        )?;
        Self::apply_env_var(
            "CAFETERIA_PRODUCTION_WEEKEND_FACTOR",
            &mut prod.weekend_increase_factor,
        )?;

        // Alert overrides
        let alerts = &mut self.alerts;
        Self::apply_env_var(
            "CAFETERIA_ALERT_LOW_STOCK_PCT",
            &mut alerts.low_stock_threshold_pct,
        )?;
        Self::apply_env_var("CAFETERIA_ALERT_WASTE_PCT", &mut alerts.waste_threshold_pct)?;
        Self::apply_env_var(
            "CAFETERIA_ALERT_DEMAND_MULTIPLIER",
            &mut alerts.high_demand_multiplier,
        )?;
        Self::apply_env_var(
            "CAFETERIA_ALERT_DEDUP_HOURS",
            &mut alerts.dedup_window_hours,
        )?;
        Self::apply_env_var(
            "CAFETERIA_ALERT_ENABLE_LOW_STOCK",
            &mut alerts.enable_low_stock,
        )?;
        Self::apply_env_var(
            "CAFETERIA_ALERT_ENABLE_OUT_OF_STOCK",
            &mut alerts.enable_out_of_stock,
        )?;
        Self::apply_env_var(
            "CAFETERIA_ALERT_ENABLE_HIGH_DEMAND",
            &mut alerts.enable_high_demand,
        )?;
        Self::apply_env_var(
            "CAFETERIA_ALERT_ENABLE_HIGH_WASTE",
            &mut alerts.enable_high_waste,
        )?;

        Ok(self)
    }
}

impl Default for IntelligenceConfig<true> {
    fn default() -> Self {
        Self {
            nutrition: NutritionConfig::default(),
            scoring: MenuScoringConfig::default(),
            forecast: ForecastConfig::default(),
            production: ProductionConfig::default(),
            alerts: AlertConfig::default(),
            _phantom: PhantomData,
        }
    }
}
