// ABOUTME: Tests for environment configuration and intelligence configuration loading
// ABOUTME: Validates env var parsing, defaults, overrides, and rejection of inconsistent settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cafeteria_engine::config::intelligence::{ConfigError, MAX_DEDUP_WINDOW_HOURS};
use cafeteria_engine::config::{
    DatabaseUrl, EngineEnvironment, Environment, IntelligenceConfig, LogLevel,
};
use cafeteria_engine::errors::{AppError, ErrorCode};
use cafeteria_engine::models::TenantId;
use serial_test::serial;
use std::env;
use std::path::Path;

const ENGINE_VARS: [&str; 4] = ["DATABASE_URL", "CAFETERIA_TENANT", "ENVIRONMENT", "RUST_LOG"];

fn clear_engine_vars() {
    for var in ENGINE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_database_url_parsing() {
    let file = DatabaseUrl::parse_url("sqlite:./data/cafeteria.db").unwrap();
    assert_eq!(file.to_connection_string(), "sqlite:./data/cafeteria.db");
    assert_eq!(file.file_path(), Some(Path::new("./data/cafeteria.db")));

    let memory = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
    assert!(memory.is_memory());
    assert_eq!(memory.file_path(), None);
    assert_eq!(memory.to_connection_string(), "sqlite::memory:");

    let bare = DatabaseUrl::parse_url("/var/lib/cafeteria.db").unwrap();
    assert_eq!(bare.to_connection_string(), "sqlite:/var/lib/cafeteria.db");
}

#[test]
fn test_database_url_rejects_other_schemes() {
    let error = DatabaseUrl::parse_url("postgresql://localhost/cafeteria").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(DatabaseUrl::parse_url("   ").is_err());
}

#[test]
#[serial]
fn test_engine_environment_defaults() {
    clear_engine_vars();

    let environment = EngineEnvironment::from_env().unwrap();

    assert_eq!(environment, EngineEnvironment::default());
    assert_eq!(environment.default_tenant, TenantId::new("default"));
    assert_eq!(
        environment.database.to_connection_string(),
        "sqlite:./data/cafeteria.db"
    );
}

#[test]
#[serial]
fn test_engine_environment_reads_variables() {
    clear_engine_vars();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("CAFETERIA_TENANT", "campus-north");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");

    let environment = EngineEnvironment::from_env().unwrap();
    clear_engine_vars();

    assert!(environment.database.is_memory());
    assert_eq!(environment.default_tenant, TenantId::new("campus-north"));
    assert_eq!(environment.environment, Environment::Production);
    assert_eq!(environment.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_engine_environment_rejects_bad_database_url() {
    clear_engine_vars();
    env::set_var("DATABASE_URL", "redis://localhost");

    let result = EngineEnvironment::from_env();
    clear_engine_vars();

    assert!(result.is_err());
}

#[test]
fn test_default_intelligence_config_is_valid() {
    let config = IntelligenceConfig::<true>::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.forecast.lookback_days, 30);
    assert_eq!(config.alerts.dedup_window_hours, 24);
    assert_eq!(config.scoring.limits.default_recommendations, 10);
}

#[test]
#[serial]
fn test_intelligence_config_env_override() {
    env::set_var("CAFETERIA_FORECAST_WEEKEND_FACTOR", "0.8");
    env::set_var("CAFETERIA_RECOMMENDATION_LIMIT", "5");

    let config = IntelligenceConfig::load();
    env::remove_var("CAFETERIA_FORECAST_WEEKEND_FACTOR");
    env::remove_var("CAFETERIA_RECOMMENDATION_LIMIT");

    let config = config.unwrap();
    assert!((config.forecast.weekend_factor - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.scoring.limits.default_recommendations, 5);
}

#[test]
#[serial]
fn test_intelligence_config_rejects_unparsable_override() {
    env::set_var("CAFETERIA_ALERT_DEDUP_HOURS", "a day");

    let result = IntelligenceConfig::load();
    env::remove_var("CAFETERIA_ALERT_DEDUP_HOURS");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_intelligence_config_rejects_unbalanced_weights() {
    env::set_var("CAFETERIA_FORECAST_RECENT_WEIGHT", "0.9");

    let result = IntelligenceConfig::load();
    env::remove_var("CAFETERIA_FORECAST_RECENT_WEIGHT");

    assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
}

#[test]
fn test_validation_catches_inverted_production_ratios() {
    let mut config = IntelligenceConfig::<true>::default();
    config.production.increase_below_ratio = 2.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
#[serial]
fn test_increase_ratio_above_one_is_rejected() {
    env::set_var("CAFETERIA_PRODUCTION_INCREASE_RATIO", "1.2");

    let result = IntelligenceConfig::load();
    env::remove_var("CAFETERIA_PRODUCTION_INCREASE_RATIO");

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_reduce_ratio_below_one_is_rejected() {
    let mut config = IntelligenceConfig::<true>::default();
    config.production.increase_below_ratio = 0.4;
    config.production.reduce_above_ratio = 0.9;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
#[serial]
fn test_dedup_window_is_bounded() {
    env::set_var("CAFETERIA_ALERT_DEDUP_HOURS", "9223372036854775807");

    let result = IntelligenceConfig::load();
    env::remove_var("CAFETERIA_ALERT_DEDUP_HOURS");
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));

    let mut config = IntelligenceConfig::<true>::default();
    config.alerts.dedup_window_hours = MAX_DEDUP_WINDOW_HOURS;
    assert!(config.validate().is_ok());
    config.alerts.dedup_window_hours = MAX_DEDUP_WINDOW_HOURS + 1;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_errors_map_to_read_or_validation_codes() {
    let unreadable = AppError::from(ConfigError::Parse("CAFETERIA_MENU_LIMIT".into()));
    let inconsistent = AppError::from(ConfigError::InvalidWeights("scorer weights"));
    let out_of_range = AppError::from(ConfigError::ValueOutOfRange("dedup window"));

    assert_eq!(unreadable.code, ErrorCode::ConfigError);
    assert_eq!(inconsistent.code, ErrorCode::ConfigInvalid);
    assert_eq!(out_of_range.code, ErrorCode::ConfigInvalid);
    assert!(inconsistent.message.contains("scorer weights"));
}
