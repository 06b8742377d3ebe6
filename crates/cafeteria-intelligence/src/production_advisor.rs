// ABOUTME: Production advice comparing current stock against forecast demand
// ABOUTME: Produce/increase/reduce/hold decision table plus a multi-item plan with impact totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::intelligence::{IntelligenceConfig, ProductionConfig};
use cafeteria_core::models::{AdjustmentSuggestion, ForecastResult, ProductionAction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregate effect of a production plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionImpact {
    /// Units not cooked thanks to `reduce` suggestions
    pub waste_avoided_units: u32,
    /// Units added by `produce` and `increase` suggestions
    pub additional_production_units: u32,
}

/// Suggestions for every forecast item on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// Service date the plan targets
    pub date: NaiveDate,
    /// One suggestion per item, in input order
    pub suggestions: Vec<AdjustmentSuggestion>,
    /// Totals across all suggestions
    pub impact: ProductionImpact,
}

/// Turns forecasts and stock levels into production adjustments
#[derive(Debug, Clone)]
pub struct ProductionAdvisor {
    config: ProductionConfig,
}

impl Default for ProductionAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductionAdvisor {
    /// Create an advisor using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().production.clone(),
        }
    }

    /// Create an advisor with custom configuration
    #[must_use]
    pub const fn with_config(config: ProductionConfig) -> Self {
        Self { config }
    }

    /// Suggest a production change for one item; first matching rule wins
    #[must_use]
    pub fn advise(&self, forecast: &ForecastResult, current_stock: u32) -> AdjustmentSuggestion {
        let predicted = forecast.predicted_quantity;
        let stock = f64::from(current_stock);
        let demand = f64::from(predicted);

        let (action, mut quantity, mut reason) = if current_stock == 0 {
            (
                ProductionAction::Produce,
                predicted,
                "no stock available".to_owned(),
            )
        } else if stock < self.config.increase_below_ratio * demand {
            (
                ProductionAction::Increase,
                predicted.saturating_sub(current_stock),
                format!("stock of {current_stock} is below predicted demand of {predicted}"),
            )
        } else if stock > self.config.reduce_above_ratio * demand {
            (
                ProductionAction::Reduce,
                current_stock.saturating_sub(predicted),
                format!("stock of {current_stock} exceeds predicted demand of {predicted}"),
            )
        } else {
            (
                ProductionAction::Hold,
                0,
                "stock adequate for predicted demand".to_owned(),
            )
        };

        if action == ProductionAction::Increase && forecast.factors.is_weekend {
            quantity = (f64::from(quantity) * self.config.weekend_increase_factor).round() as u32;
            reason.push_str(" (adjusted for weekend)");
        }

        debug!(
            menu_id = %forecast.menu_id,
            current_stock,
            predicted,
            ?action,
            quantity,
            "Production advice"
        );

        AdjustmentSuggestion {
            menu_id: forecast.menu_id.clone(),
            action,
            suggested_quantity: quantity,
            reason,
        }
    }

    /// Advise every `(forecast, stock)` pair and total the impact
    #[must_use]
    pub fn plan(&self, date: NaiveDate, items: &[(ForecastResult, u32)]) -> ProductionPlan {
        let suggestions: Vec<AdjustmentSuggestion> = items
            .iter()
            .map(|(forecast, stock)| self.advise(forecast, *stock))
            .collect();

        let impact = suggestions
            .iter()
            .fold(ProductionImpact::default(), |mut acc, s| {
                match s.action {
                    ProductionAction::Reduce => {
                        acc.waste_avoided_units += s.suggested_quantity;
                    }
                    ProductionAction::Produce | ProductionAction::Increase => {
                        acc.additional_production_units += s.suggested_quantity;
                    }
                    ProductionAction::Hold => {}
                }
                acc
            });

        ProductionPlan {
            date,
            suggestions,
            impact,
        }
    }
}
