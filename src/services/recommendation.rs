// ABOUTME: Recommendation use case: analyze a profile then rank the tenant's menu against it
// ABOUTME: An invalid profile fails the request; an empty catalog yields an empty ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::elapsed_ms;
use crate::config::intelligence::{IntelligenceConfig, NutritionConfig};
use crate::errors::AppResult;
use crate::intelligence::nutrition_calculator::{analyze_profile, ProfileAnalysis};
use crate::intelligence::MenuScorer;
use crate::logging::AppLogger;
use crate::models::{ScoredMenuItem, TenantId, UserProfile};
use crate::repositories::CatalogRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Profile analysis together with the ranked menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Caloric need, macro target, BMI, and advice for the user
    pub analysis: ProfileAnalysis,
    /// Best matching menu items, best first
    pub menus: Vec<ScoredMenuItem>,
}

/// Ranks a tenant's catalog for one user
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<dyn CatalogRepository>,
    nutrition: NutritionConfig,
    scorer: MenuScorer,
}

impl RecommendationService {
    /// Create the service over a catalog
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>, config: &IntelligenceConfig<true>) -> Self {
        Self {
            catalog,
            nutrition: config.nutrition.clone(),
            scorer: MenuScorer::with_config(config.scoring.clone()),
        }
    }

    /// Analyze `profile` and return the top `limit` menu items for it
    ///
    /// The profile is validated before the catalog is read.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` for unusable body metrics, or the catalog
    /// repository error
    pub async fn recommend(
        &self,
        profile: &UserProfile,
        tenant_id: &TenantId,
        limit: Option<usize>,
    ) -> AppResult<RecommendationResponse> {
        let start = Instant::now();
        let analysis = analyze_profile(profile, &self.nutrition)?;
        let items = self.catalog.list_menu_items(tenant_id).await?;
        let menus = self
            .scorer
            .recommend(&items, &analysis.target, profile, limit);

        AppLogger::log_engine_operation(
            tenant_id,
            "recommend",
            menus.len(),
            elapsed_ms(start),
        );

        Ok(RecommendationResponse { analysis, menus })
    }
}
