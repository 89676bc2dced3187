// ABOUTME: Planner CLI - command-line front end for the concept recommendation engine
// ABOUTME: Generates proposals from a JSON catalog snapshot and inspects level windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors
//!
//! Usage:
//! ```bash
//! # Proposals for team 1 in season 2025, as JSON
//! planner-cli generate --snapshot catalog.json --team 1 --season 2025
//!
//! # Cap suggestions and focus on one section
//! planner-cli generate --snapshot catalog.json --team 1 --season 2025 \
//!     --max-concepts 10 --section-focus Ataque --format summary
//!
//! # Level window for a stage-3 team rated 7/6
//! planner-cli window --stage 3 --technical 7 --tactical 6
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use sport_planner::{
    constants::env_config,
    errors::{AppError, AppResult},
    logging::{LogFormat, LoggingConfig},
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "planner-cli",
    about = "Sport Planner concept proposal CLI",
    long_about = "Generate training concept proposals for a team from a catalog snapshot, or inspect the development level window used to filter concepts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Log output format (json, pretty, compact)
    #[arg(long, global = true, default_value = "compact")]
    log_format: String,
}

/// How proposals are printed
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Full response as pretty JSON
    Json,
    /// Grouped human-readable listing
    Summary,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate concept proposals for a team
    Generate {
        /// Catalog snapshot (JSON); defaults to $PLANNER_CATALOG_SNAPSHOT
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Team id
        #[arg(long)]
        team: i64,

        /// Season id
        #[arg(long)]
        season: i64,

        /// Maximum number of suggested concepts
        #[arg(long)]
        max_concepts: Option<usize>,

        /// Only concepts under this category, parent, or grandparent name
        #[arg(long)]
        section_focus: Option<String>,

        /// Category ids to exclude (repeatable)
        #[arg(long = "exclude-category")]
        exclude_categories: Vec<i64>,

        /// Concept ids to always include (repeatable)
        #[arg(long = "include-concept")]
        include_concepts: Vec<i64>,

        /// Planning template that pins the expected stage
        #[arg(long)]
        template: Option<i64>,

        /// Manual shift of the level window
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        level_offset: i32,

        /// Do not filter concepts by the level window
        #[arg(long)]
        skip_level_filter: bool,

        /// Planned duration in days
        #[arg(long)]
        duration_days: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the expected stage and level window for a team profile
    Window {
        /// Expected stage; derived from --min-age when omitted
        #[arg(long)]
        stage: Option<i32>,

        /// Category minimum age used when --stage is omitted
        #[arg(long)]
        min_age: Option<i32>,

        /// Team technical level
        #[arg(long)]
        technical: i32,

        /// Team tactical level
        #[arg(long)]
        tactical: i32,

        /// Manual shift of the window
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::display::print_error(error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env()
        .with_level(log_level)
        .with_format(LogFormat::from_name(&cli.log_format))
        .init()
        .map_err(|e| AppError::config(e.to_string()))?;

    match cli.command {
        Command::Generate {
            snapshot,
            team,
            season,
            max_concepts,
            section_focus,
            exclude_categories,
            include_concepts,
            template,
            level_offset,
            skip_level_filter,
            duration_days,
            format,
        } => {
            let snapshot = snapshot
                .or_else(|| env::var(env_config::CATALOG_SNAPSHOT).ok().map(PathBuf::from))
                .ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "No catalog snapshot: pass --snapshot or set {}",
                        env_config::CATALOG_SNAPSHOT
                    ))
                })?;

            let options = commands::generate::GenerateOptions {
                team_id: team,
                season_id: season,
                max_concepts,
                section_focus,
                exclude_category_ids: exclude_categories,
                include_concept_ids: include_concepts,
                planning_template_id: template,
                level_offset,
                skip_level_filter,
                duration_days,
            };
            let response = commands::generate::run(&snapshot, options).await?;

            match format {
                OutputFormat::Json => helpers::display::print_json(&response)?,
                OutputFormat::Summary => helpers::display::print_summary(&response),
            }
        }
        Command::Window {
            stage,
            min_age,
            technical,
            tactical,
            offset,
        } => {
            let report = commands::window::run(stage, min_age, technical, tactical, offset);
            helpers::display::print_window(&report);
        }
    }

    Ok(())
}
