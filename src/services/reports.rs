// ABOUTME: Report use case: fetch consumption and waste for a period and its predecessor, then summarize
// ABOUTME: Waste of the preceding window of equal length feeds the waste reduction figure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::elapsed_ms;
use crate::errors::AppResult;
use crate::intelligence::report_aggregator::summarize;
use crate::intelligence::{PeriodPreset, ReportPeriod, ReportSummary};
use crate::logging::AppLogger;
use crate::models::TenantId;
use crate::repositories::{ConsumptionRepository, WasteRepository};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;

/// Consumption and waste reporting
#[derive(Clone)]
pub struct ReportService {
    consumption: Arc<dyn ConsumptionRepository>,
    waste: Arc<dyn WasteRepository>,
}

impl ReportService {
    /// Create the service over consumption and waste history
    #[must_use]
    pub fn new(
        consumption: Arc<dyn ConsumptionRepository>,
        waste: Arc<dyn WasteRepository>,
    ) -> Self {
        Self { consumption, waste }
    }

    /// Report for the preset window ending on `today` (inclusive)
    ///
    /// # Errors
    ///
    /// Returns the first consumption or waste repository error
    pub async fn full_report(
        &self,
        tenant_id: &TenantId,
        preset: PeriodPreset,
        today: NaiveDate,
    ) -> AppResult<ReportSummary> {
        self.report_for(tenant_id, ReportPeriod::ending(today, preset))
            .await
    }

    /// Report for an explicit period
    ///
    /// # Errors
    ///
    /// Returns the first consumption or waste repository error
    pub async fn report_for(
        &self,
        tenant_id: &TenantId,
        period: ReportPeriod,
    ) -> AppResult<ReportSummary> {
        let start = Instant::now();
        let span = period.with_previous();

        let (consumption, waste) = tokio::try_join!(
            self.consumption
                .consumption_between(tenant_id, period.start, period.end),
            self.waste.waste_between(tenant_id, span.start, span.end),
        )?;
        let summary = summarize(&consumption, &waste, &period);

        AppLogger::log_engine_operation(
            tenant_id,
            "report",
            summary.consumption_records + summary.waste_records,
            elapsed_ms(start),
        );
        Ok(summary)
    }
}
