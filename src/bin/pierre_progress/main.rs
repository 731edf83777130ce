// ABOUTME: Pierre Progress CLI - compliance and training volume reports from the command line
// ABOUTME: Offline reports from snapshots, live reports, and tracking writes against the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Report from a JSON snapshot, volume restricted to the week of a date
//! pierre-progress report --snapshot week.json --week 2025-01-06
//!
//! # Live report of the signed-in client, or of one of a coach's clients
//! PIERRE_TOKEN=... pierre-progress fetch
//! PIERRE_TOKEN=... pierre-progress fetch --client 42 --json
//!
//! # Today's plan and tracking writes
//! PIERRE_TOKEN=... pierre-progress today --day Lundi
//! PIERRE_TOKEN=... pierre-progress toggle --day Lundi --field breakfast
//! PIERRE_TOKEN=... pierre-progress log-set --day Lundi --exercise Bench --set 1 --weight 50
//!
//! # Sign a development token
//! pierre-progress token --client-id 42 --role client
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pierre_progress::{
    config::ProgressConfig,
    errors::AppResult,
    logging::LoggingConfig,
    models::{TrackingField, Weekday},
    report::ProgressService,
    session::{Role, SessionManager},
    stores::{http_client::initialize_shared_client, HttpProgramStore, HttpTrackingStore},
};
use tracing::{debug, warn};

use commands::Context;

/// Environment variable holding the bearer token
const TOKEN_ENV: &str = "PIERRE_TOKEN";

#[derive(Parser)]
#[command(
    name = "pierre-progress",
    about = "Pierre Progress CLI",
    long_about = "Compliance and training volume reports for coach/client programs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Bearer token (defaults to the PIERRE_TOKEN environment variable)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a report offline from a JSON snapshot
    Report {
        /// Snapshot file with program, tracking, and exercise_sets
        #[arg(long)]
        snapshot: PathBuf,

        /// Restrict the per-workout volume to the week of this date
        #[arg(long)]
        week: Option<NaiveDate>,
    },

    /// Fetch a live report from the services
    Fetch {
        /// Client to report on (coach view); defaults to the signed-in client
        #[arg(long)]
        client: Option<i64>,

        /// Restrict the per-workout volume to the week of this date
        #[arg(long)]
        week: Option<NaiveDate>,
    },

    /// Show the plan and tracking state of one weekday
    Today {
        /// Weekday (Lundi or Monday); defaults to today
        #[arg(long)]
        day: Option<Weekday>,
    },

    /// Flip one tracked action of a day
    Toggle {
        /// Weekday of the tracking record
        #[arg(long)]
        day: Weekday,

        /// Meal name (breakfast, lunch, dinner), workout, or a wire key
        #[arg(long)]
        field: TrackingField,
    },

    /// Log the weight of one set
    LogSet {
        /// Weekday of the program day
        #[arg(long)]
        day: Weekday,

        /// Exercise name as written in the program
        #[arg(long)]
        exercise: String,

        /// One-based set index
        #[arg(long = "set")]
        set_index: i64,

        /// Weight lifted; omit to clear the set
        #[arg(long)]
        weight: Option<f64>,

        /// Session date; defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Compliance overview of a coach's clients
    Overview {
        /// Coach identifier; defaults to the signed-in user
        #[arg(long)]
        coach: Option<i64>,
    },

    /// Sign a development token with the configured secret
    Token {
        /// User identifier for the subject claim
        #[arg(long)]
        client_id: i64,

        /// Role claim
        #[arg(long, default_value = "client")]
        role: Role,

        /// Lifetime in minutes
        #[arg(long, default_value_t = 60)]
        minutes: i64,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let config = ProgressConfig::from_env()?;
    LoggingConfig::for_cli(config.log_level, cli.verbose).init()?;
    if config.session.uses_dev_secret() {
        warn!("Signing and verifying tokens with the development secret");
    }
    debug!("{}", config.summary());
    initialize_shared_client(config.http);

    let sessions = SessionManager::new(&config.session);
    let token = cli.token.or_else(|| env::var(TOKEN_ENV).ok());
    let session = sessions.resolve(token.as_deref());

    let service = ProgressService::new(
        Arc::new(HttpProgramStore::new(config.endpoints.clone())),
        Arc::new(HttpTrackingStore::new(config.endpoints.clone())),
    );
    let ctx = Context {
        session: session.as_ref(),
        json: cli.json,
    };

    match cli.command {
        Command::Report { snapshot, week } => {
            commands::report::offline(&ctx, &snapshot, week).await?;
        }
        Command::Fetch { client, week } => {
            commands::report::fetch(&ctx, &service, client, week).await?;
        }
        Command::Today { day } => {
            commands::report::today(&ctx, &service, day.unwrap_or_else(Weekday::today)).await?;
        }
        Command::Toggle { day, field } => {
            commands::tracking::toggle(&ctx, &config, day, field).await?;
        }
        Command::LogSet {
            day,
            exercise,
            set_index,
            weight,
            date,
        } => {
            commands::tracking::log_set(&ctx, &config, day, exercise, set_index, weight, date)
                .await?;
        }
        Command::Overview { coach } => {
            commands::report::overview(&ctx, &service, coach).await?;
        }
        Command::Token {
            client_id,
            role,
            minutes,
        } => {
            commands::tracking::issue_token(&sessions, client_id, role, minutes)?;
        }
    }

    Ok(())
}
