// ABOUTME: Formtrack CLI - replays recordings and simulates sessions from the command line
// ABOUTME: Prints smoothed snapshots and session summaries as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack
//!
//! Usage:
//! ```bash
//! # Smooth a recorded JSON Lines stream, printing each frame and the summary
//! formtrack-cli replay --input session.jsonl --exercise squat
//!
//! # Print only the summary
//! formtrack-cli replay --input session.jsonl --summary-only
//!
//! # Re-derive scores from recorded landmarks
//! formtrack-cli replay --input session.jsonl --rescore
//!
//! # Run a live session against the synthetic analyzer
//! formtrack-cli simulate --exercise push_up --frames 40 --seed 7
//!
//! # List supported exercises
//! formtrack-cli exercises
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formtrack::config::{FormtrackConfig, LogLevel};
use formtrack::logging::LoggingConfig;
use formtrack_core::models::ExerciseType;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "formtrack-cli",
    about = "Formtrack pose smoothing CLI",
    long_about = "Replay recorded pose-analysis streams or simulate live tracking sessions."
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
    /// Smooth a recorded JSON Lines stream of raw backend results
    Replay {
        /// Recording path
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Exercise the recording belongs to
        #[arg(long, short = 'e', default_value = "squat")]
        exercise: ExerciseType,

        /// Skip the per-frame output
        #[arg(long)]
        summary_only: bool,

        /// Re-analyze frames that carry landmarks instead of trusting their recorded scores
        #[arg(long)]
        rescore: bool,
    },

    /// Run a live session against the synthetic analyzer
    Simulate {
        /// Exercise to simulate
        #[arg(long, short = 'e', default_value = "squat")]
        exercise: ExerciseType,

        /// Number of frames to submit
        #[arg(long, short = 'n', default_value = "30")]
        frames: u32,

        /// Generator seed
        #[arg(long, default_value = "7")]
        seed: u64,

        /// Fraction of analyzer calls that fail (0.0-1.0)
        #[arg(long, default_value = "0.0")]
        failure_rate: f64,

        /// Override the configured frame rate
        #[arg(long)]
        fps: Option<u32>,
    },

    /// List supported exercises
    Exercises,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_crate_level(LogLevel::Debug);
    }
    logging.init()?;

    let mut config = FormtrackConfig::from_env()?;
    info!(environment = %config.environment, "Formtrack CLI");

    match cli.command {
        Command::Replay {
            input,
            exercise,
            summary_only,
            rescore,
        } => commands::replay::run(&config, &input, exercise, !summary_only, rescore).await?,
        Command::Simulate {
            exercise,
            frames,
            seed,
            failure_rate,
            fps,
        } => {
            if let Some(fps) = fps {
                config.session.max_frames_per_second = fps;
            }
            commands::simulate::run(config, exercise, frames, seed, failure_rate).await?;
        }
        Command::Exercises => commands::exercises::run()?,
    }

    Ok(())
}
