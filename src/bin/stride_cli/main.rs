// ABOUTME: Stride CLI - generates and exports a personalized 7-week half marathon plan
// ABOUTME: Handles plan generation, pace calibration output, and stored profile management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors
//!
//! Usage:
//! ```bash
//! # Plan from a 20:00 5K, starting next Monday, exporting to ./exports
//! stride-cli generate --baseline-distance 5 --baseline-time 20:00
//!
//! # Plan backwards from a race date, without writing files
//! stride-cli generate --race-date 2026-04-19 --no-export
//!
//! # Show training paces for a 45:00 10K
//! stride-cli paces --baseline-distance 10 --baseline-time 45:00
//!
//! # Store defaults for future runs
//! stride-cli profile set --baseline-distance 10 --baseline-time 45:00 --weekly-km 30
//! stride-cli profile show
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use stride_planner::{
    config::CliConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    utils::time::parse_race_time,
};
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "stride-cli",
    version,
    about = "Stride half marathon planner",
    long_about = "Generate a 7-week half marathon plan (3 days/week) from a recent race result and export JSON/ICS."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a plan, print it, and export JSON/ICS
    Generate(GenerateArgs),

    /// Print training paces calibrated from a baseline race
    Paces(BaselineArgs),

    /// Inspect or update the stored profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Print the stored profile
    Show,

    /// Update stored profile fields
    Set(ProfileSetArgs),
}

/// Baseline race used for pace calibration
#[derive(Args, Debug, Clone)]
struct BaselineArgs {
    /// Baseline race distance in km (default: stored profile, else 5.0)
    #[arg(long)]
    baseline_distance: Option<f64>,

    /// Baseline race time as MM:SS or HH:MM:SS (default: stored profile, else 20:00)
    #[arg(long, value_parser = parse_time_arg)]
    baseline_time: Option<u32>,
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[command(flatten)]
    baseline: BaselineArgs,

    /// Race date (YYYY-MM-DD); defaults to the last day of the plan
    #[arg(long)]
    race_date: Option<NaiveDate>,

    /// Plan start date (YYYY-MM-DD); aligned to the next Monday
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Week one volume in km instead of the baseline-derived value
    #[arg(long)]
    start_weekly_km: Option<f64>,

    /// Directory to write plan.json and plan.ics
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Do not write JSON/ICS export files
    #[arg(long)]
    no_export: bool,

    /// Store the baseline, race date, and export directory used for this plan
    #[arg(long)]
    save_profile: bool,
}

#[derive(Args, Debug, Clone)]
struct ProfileSetArgs {
    #[command(flatten)]
    baseline: BaselineArgs,

    /// Current weekly volume in km (used as week one volume)
    #[arg(long)]
    weekly_km: Option<f64>,

    /// Current longest run in km
    #[arg(long)]
    long_run_km: Option<f64>,

    /// Goal race date (YYYY-MM-DD)
    #[arg(long)]
    race_date: Option<NaiveDate>,

    /// Preferred export directory
    #[arg(long)]
    export_dir: Option<String>,
}

fn parse_time_arg(value: &str) -> Result<u32, String> {
    parse_race_time(value).map_err(|e| e.message)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbosity(cli.verbose).init() {
        eprintln!("warning: logging disabled: {e}");
    }

    let config = CliConfig::from_env();
    debug!(?config, "Loaded configuration");

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

async fn run(command: Command, config: &CliConfig) -> AppResult<()> {
    match command {
        Command::Generate(args) => commands::generate::run(args, config).await,
        Command::Paces(args) => commands::paces::run(args, config).await,
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(config).await,
            ProfileCommand::Set(args) => commands::profile::set(args, config).await,
        },
    }
}

fn report(e: &AppError) -> ExitCode {
    error!(code = ?e.code, "{}", e.message);
    eprintln!("error: {e}");
    ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
}
