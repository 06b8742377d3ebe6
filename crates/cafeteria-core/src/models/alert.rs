// ABOUTME: Operational alert models created by the alert engine
// ABOUTME: Alert, AlertType, and AlertPriority with their snake_case wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::TenantId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Kind of operational condition an alert reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Stock at or below the configured share of minimum stock
    LowStock,
    /// Tracked stock is zero
    OutOfStock,
    /// Forecast demand far exceeds stock
    HighDemand,
    /// Waste share of consumption above threshold
    HighWaste,
}

impl AlertType {
    /// Every alert type, in the fixed order used for lock acquisition
    pub const ALL: [Self; 4] = [
        Self::LowStock,
        Self::OutOfStock,
        Self::HighDemand,
        Self::HighWaste,
    ];

    /// Wire/storage name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
            Self::HighDemand => "high_demand",
            Self::HighWaste => "high_waste",
        }
    }

    /// Parse a stored name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Fixed priority for this type
    #[must_use]
    pub const fn priority(&self) -> AlertPriority {
        match self {
            Self::OutOfStock => AlertPriority::High,
            Self::HighDemand => AlertPriority::Medium,
            Self::LowStock | Self::HighWaste => AlertPriority::Low,
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert urgency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    /// Informational
    Low,
    /// Needs attention today
    Medium,
    /// Needs attention now
    High,
}

impl AlertPriority {
    /// Wire/storage name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a stored name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Operational alert for one tenant
///
/// Created unread; marked read by an external UI action; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert ID
    pub id: Uuid,
    /// Condition type
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Owning cafeteria
    pub tenant_id: TenantId,
    /// Rendered message
    pub message: String,
    /// Structured details (affected items, figures)
    #[serde(default)]
    pub payload: Map<String, Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Whether a user acknowledged the alert
    #[serde(default)]
    pub read: bool,
    /// Urgency derived from the type
    pub priority: AlertPriority,
}

impl Alert {
    /// Build an unread alert with the type's priority
    #[must_use]
    pub fn new(
        tenant_id: TenantId,
        alert_type: AlertType,
        message: String,
        payload: Map<String, Value>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            alert_type,
            tenant_id,
            message,
            payload,
            created_at,
            read: false,
            priority: alert_type.priority(),
        }
    }

    /// Whether the alert is younger than `window` at instant `now`
    #[must_use]
    pub fn is_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.created_at) < window
    }
}
