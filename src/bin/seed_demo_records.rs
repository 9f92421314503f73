// ABOUTME: Demo data seeder for the Wodbook record tracker
// ABOUTME: Populates a JSON store with realistic per-workout record history for manual testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Demo data seeder for Wodbook.
//!
//! Populates the JSON store with a realistic record history across the
//! built-in catalog so the record list, best markers, and progress
//! timelines have something to show.
//!
//! Usage:
//! ```bash
//! # Seed into the default data directory
//! cargo run --bin seed-demo-records
//!
//! # Seed into a specific directory, wiping what was there
//! cargo run --bin seed-demo-records -- --data-dir /tmp/wodbook --reset
//!
//! # Verbose output
//! cargo run --bin seed-demo-records -- -v
//! ```

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use tracing::info;

use wodbook::catalog::WorkoutCatalog;
use wodbook::config::TrackerConfig;
use wodbook::logging::{init, LogFormat, LoggingConfig};
use wodbook::models::{RecordType, WeightUnit};
use wodbook::storage::JsonFileStore;
use wodbook::tracker::RecordTracker;

#[derive(Parser)]
#[command(
    name = "seed-demo-records",
    about = "Wodbook demo data seeder",
    long_about = "Populate the JSON store with realistic demo records for manual testing"
)]
struct SeedArgs {
    /// Data directory override (defaults to the platform data directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Delete existing documents before seeding
    #[arg(long)]
    reset: bool,

    /// Days of history to spread the demo records over
    #[arg(long, default_value = "30")]
    days: i64,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// One workout's demo history, oldest value first
struct DemoWorkout {
    workout: &'static str,
    record_type: RecordType,
    unit: WeightUnit,
    values: &'static [&'static str],
}

const DEMO_WORKOUTS: &[DemoWorkout] = &[
    DemoWorkout {
        workout: "Fran",
        record_type: RecordType::Time,
        unit: WeightUnit::Kg,
        values: &["055500", "051000", "044500"],
    },
    DemoWorkout {
        workout: "Murph",
        record_type: RecordType::Time,
        unit: WeightUnit::Kg,
        values: &["014800", "013900"],
    },
    DemoWorkout {
        workout: "Deadlift",
        record_type: RecordType::Weight,
        unit: WeightUnit::Kg,
        values: &["140", "150", "155"],
    },
    DemoWorkout {
        workout: "Back Squat",
        record_type: RecordType::Weight,
        unit: WeightUnit::Lb,
        values: &["225", "245"],
    },
    DemoWorkout {
        workout: "Pull-ups",
        record_type: RecordType::Reps,
        unit: WeightUnit::Kg,
        values: &["12", "18", "25"],
    },
    DemoWorkout {
        workout: "Cindy",
        record_type: RecordType::Reps,
        unit: WeightUnit::Kg,
        values: &["14", "17"],
    },
];

fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let logging = if args.verbose {
        LoggingConfig {
            level: "debug".into(),
            format: LogFormat::Pretty,
        }
    } else {
        LoggingConfig::from_env()
    };
    init(&logging)?;

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => TrackerConfig::from_env()?.data_dir,
    };
    info!(data_dir = %data_dir.display(), "seeding demo records");

    let store = JsonFileStore::new(&data_dir);
    if args.reset {
        reset_documents(&store)?;
    }

    let mut tracker = RecordTracker::load(store, WorkoutCatalog::builtin())?;
    let now = Utc::now();
    let mut seeded = 0_usize;
    for demo in DEMO_WORKOUTS {
        let attempts = demo.values.len() as i64;
        for (attempt, value) in demo.values.iter().enumerate() {
            // Oldest value furthest back, newest most recent
            let age = args.days - (attempt as i64 * args.days) / attempts;
            let date = now - Duration::days(age.max(1));
            tracker.add_record(demo.workout, demo.record_type, value, demo.unit, date)?;
            seeded += 1;
        }
    }

    info!(seeded, workouts = DEMO_WORKOUTS.len(), "demo records written");
    Ok(())
}

fn reset_documents(store: &JsonFileStore) -> Result<()> {
    use wodbook::constants::storage::{CUSTOM_CATALOG_FILE, RECORDS_FILE};

    for file_name in [RECORDS_FILE, CUSTOM_CATALOG_FILE] {
        let path = store.dir().join(file_name);
        match std::fs::remove_file(&path) {
            Ok(()) => info!(path = %path.display(), "removed existing document"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
