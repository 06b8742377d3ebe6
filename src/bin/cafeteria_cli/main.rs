// ABOUTME: Cafeteria CLI - command-line front end for the cafeteria intelligence engine
// ABOUTME: Seeds fixtures and runs recommendations, forecasts, production plans, alerts, and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Load a catalog with consumption and waste history
//! cafeteria-cli seed --fixture data/campus.json
//!
//! # Rank today's menu for a user profile
//! cafeteria-cli recommend --tenant campus-north --profile profile.json --limit 5
//!
//! # Forecast the next three days
//! cafeteria-cli forecast --tenant campus-north --date 2024-01-15 --days 3
//!
//! # Production suggestions for one day
//! cafeteria-cli plan --tenant campus-north --date 2024-01-15
//!
//! # Raise operational alerts and list unread ones
//! cafeteria-cli alerts --tenant campus-north
//!
//! # Monthly efficiency and waste report
//! cafeteria-cli report --tenant campus-north --period month
//! ```
//!
//! Results are printed to stdout as pretty JSON; logs go to stderr. Engine
//! failures are printed to stderr as a JSON error body with a stable code.

mod commands;
mod helpers;

use anyhow::{Context, Result};
use cafeteria_engine::config::{DatabaseUrl, EngineEnvironment, IntelligenceConfig};
use cafeteria_engine::database::Database;
use cafeteria_engine::intelligence::PeriodPreset;
use cafeteria_engine::logging::LoggingConfig;
use cafeteria_engine::models::TenantId;
use cafeteria_engine::services::{CafeteriaEngine, Repositories};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use commands::CommandContext;

#[derive(Parser)]
#[command(
    name = "cafeteria-cli",
    about = "Cafeteria Intelligence Engine CLI",
    long_about = "Menu recommendations, demand forecasts, production plans, alerts, and reports over a SQLite store."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (defaults to DATABASE_URL, then sqlite:./data/cafeteria.db)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Load a JSON fixture (catalog, consumption, waste)
    Seed {
        /// Fixture file
        #[arg(long)]
        fixture: PathBuf,

        /// Tenant to seed when the fixture does not name one
        #[arg(long)]
        tenant: Option<TenantId>,
    },

    /// Analyze a profile and rank the menu for it
    Recommend {
        /// Cafeteria identifier
        #[arg(long)]
        tenant: Option<TenantId>,

        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Number of menu items to return (default 10)
        #[arg(long)]
        limit: Option<usize>,

        /// Weekly training sessions answer (0, 1-2, 3-4, 5-mas); overrides the profile's activity level
        #[arg(long)]
        weekly_sessions: Option<String>,
    },

    /// Forecast demand for every menu item, or for one
    Forecast {
        /// Cafeteria identifier
        #[arg(long)]
        tenant: Option<TenantId>,

        /// First forecast date, YYYY-MM-DD (default today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of consecutive days
        #[arg(long, default_value = "1")]
        days: u32,

        /// Forecast only this menu item
        #[arg(long)]
        menu: Option<String>,
    },

    /// Production suggestions comparing stock with forecast demand
    Plan {
        /// Cafeteria identifier
        #[arg(long)]
        tenant: Option<TenantId>,

        /// Service date, YYYY-MM-DD (default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Evaluate alert conditions, then list unread alerts
    Alerts {
        /// Cafeteria identifier
        #[arg(long)]
        tenant: Option<TenantId>,

        /// Mark this alert as read instead of checking
        #[arg(long)]
        acknowledge: Option<Uuid>,
    },

    /// Consumption efficiency and waste report
    Report {
        /// Cafeteria identifier
        #[arg(long)]
        tenant: Option<TenantId>,

        /// Reporting window: week, month, or quarter
        #[arg(long, default_value = "month")]
        period: PeriodPreset,

        /// Last day of the window, YYYY-MM-DD (default today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::display::print_error(error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    LoggingConfig::for_cli(cli.verbose).init()?;

    let environment = EngineEnvironment::from_env()?;
    let database_url = match cli.database_url.as_deref() {
        Some(url) => DatabaseUrl::parse_url(url)?,
        None => environment.database.clone(),
    };

    if let Some(parent) = database_url
        .file_path()
        .and_then(|path| path.parent())
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let connection = database_url.to_connection_string();
    info!("Connecting to database: {}", connection);
    let database = Database::new(&connection).await?;

    let config = IntelligenceConfig::global();
    let engine = CafeteriaEngine::new(&Repositories::from_database(&database), config);
    let ctx = CommandContext {
        database: &database,
        engine: &engine,
        default_tenant: &environment.default_tenant,
    };

    match cli.command {
        Command::Seed { fixture, tenant } => {
            commands::seed(&ctx, &fixture, tenant).await?;
        }
        Command::Recommend {
            tenant,
            profile,
            limit,
            weekly_sessions,
        } => {
            commands::recommend(&ctx, tenant, &profile, limit, weekly_sessions.as_deref()).await?;
        }
        Command::Forecast {
            tenant,
            date,
            days,
            menu,
        } => {
            commands::forecast(&ctx, tenant, date, days, menu).await?;
        }
        Command::Plan { tenant, date } => {
            commands::plan(&ctx, tenant, date).await?;
        }
        Command::Alerts {
            tenant,
            acknowledge,
        } => {
            commands::alerts(&ctx, tenant, acknowledge).await?;
        }
        Command::Report {
            tenant,
            period,
            today,
        } => {
            commands::report(&ctx, tenant, period, today).await?;
        }
    }

    Ok(())
}
