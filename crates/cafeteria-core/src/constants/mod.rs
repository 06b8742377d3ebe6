// ABOUTME: Application constants for the cafeteria engine organized by domain
// ABOUTME: Energy conversion factors, calendar names, service identifiers, and storage defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants shared across the workspace.
//!
//! Tunable thresholds do not live here; they belong to the intelligence
//! configuration so they can be overridden per deployment.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Calendar helpers
pub mod calendar {
    /// English weekday names indexed from Monday (`chrono::Weekday::num_days_from_monday`)
    pub const WEEKDAY_NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
}

/// Service names used in structured logs
pub mod service_names {
    /// Engine library / CLI service name
    pub const CAFETERIA_ENGINE: &str = "cafeteria-engine";
    /// Command-line tool
    pub const CAFETERIA_CLI: &str = "cafeteria-cli";
}

/// Storage defaults
pub mod storage {
    /// Default `SQLite` database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/cafeteria.db";
    /// Tenant used when none is configured
    pub const DEFAULT_TENANT: &str = "default";
}

/// Repository table names (used in instrumentation and logs)
pub mod tables {
    /// Menu catalog
    pub const MENU_ITEMS: &str = "menu_items";
    /// Daily consumption facts
    pub const CONSUMPTION: &str = "consumption";
    /// Waste records
    pub const WASTE: &str = "waste";
    /// Operational alerts
    pub const ALERTS: &str = "alerts";
}
