// ABOUTME: Fittrack CLI - command-line front end for the metrics engine
// ABOUTME: Computes BMI, energy needs, strength level, and full reports as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors
//!
//! Usage:
//! ```bash
//! # BMI and category
//! fittrack-cli bmi --height-cm 175 --weight-kg 70
//!
//! # BMR and daily energy needs (age computed against today unless --on is given)
//! fittrack-cli energy --height-cm 175 --weight-kg 70 --dob 1990-01-01 --gender male
//!
//! # Strength level of a lift, with estimated one-rep max when --reps is given
//! fittrack-cli strength --body-weight-kg 70 --height-cm 175 --lift-kg 56 --gender female --reps 5
//!
//! # Everything for a profile
//! fittrack-cli report --height-cm 175 --weight-kg 70 --dob 1990-01-01 --gender male --on 2025-06-01
//!
//! # Effective configuration
//! fittrack-cli config
//! ```

mod commands;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use fittrack_metrics::errors::{AppResult, ErrorResponse};
use fittrack_metrics::logging::LoggingConfig;
use fittrack_metrics::models::{AnthropometricProfile, Gender};
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "Fittrack body and strength metrics",
    long_about = "Computes BMI, Mifflin-St Jeor BMR with daily energy needs, and strength levels. Results are printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Body Mass Index and category
    Bmi {
        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,
    },

    /// Basal metabolic rate and daily energy needs
    Energy {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Strength level of a lift
    Strength {
        /// Body weight in kilograms
        #[arg(long)]
        body_weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Lifted load in kilograms
        #[arg(long)]
        lift_kg: f64,

        /// Gender ("male" selects the male formulas, anything else the female ones)
        #[arg(long)]
        gender: Gender,

        /// Repetitions performed; adds an estimated one-rep max to the output
        #[arg(long)]
        reps: Option<u32>,
    },

    /// Age, BMI, and energy needs in one report
    Report {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the effective metrics configuration
    Config,
}

/// Body profile arguments shared by `energy` and `report`
#[derive(clap::Args)]
struct ProfileArgs {
    /// Height in centimeters
    #[arg(long)]
    height_cm: Option<f64>,

    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: Option<f64>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: Option<NaiveDate>,

    /// Gender ("male" selects the male formulas, anything else the female ones)
    #[arg(long)]
    gender: Option<Gender>,

    /// Reference date for the age calculation (YYYY-MM-DD, defaults to today UTC)
    #[arg(long)]
    on: Option<NaiveDate>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env().with_level(log_level).init() {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = ?e.code, "{}", e);
            let status = if e.code.is_client_error() { 2 } else { 1 };
            let body = ErrorResponse::from(e);
            match serde_json::to_string_pretty(&body) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", body.error.message),
            }
            ExitCode::from(status)
        }
    }
}

fn run(command: Command) -> AppResult<String> {
    match command {
        Command::Bmi {
            height_cm,
            weight_kg,
        } => commands::bmi(height_cm, weight_kg),
        Command::Energy { profile } => {
            let (profile, on) = profile.into_parts();
            commands::energy(&profile, on)
        }
        Command::Strength {
            body_weight_kg,
            height_cm,
            lift_kg,
            gender,
            reps,
        } => commands::strength(body_weight_kg, height_cm, lift_kg, gender, reps),
        Command::Report { profile } => {
            let (profile, on) = profile.into_parts();
            commands::report(&profile, on)
        }
        Command::Config => commands::config(),
    }
}

impl ProfileArgs {
    fn into_parts(self) -> (AnthropometricProfile, NaiveDate) {
        let profile = AnthropometricProfile {
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            date_of_birth: self.dob,
            gender: self.gender,
        };
        let on = self.on.unwrap_or_else(|| Utc::now().date_naive());
        (profile, on)
    }
}
