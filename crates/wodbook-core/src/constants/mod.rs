// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, value grammar, and storage documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Constants module
//!
//! Application constants grouped by domain rather than collected in a
//! single large file.

/// Unit conversion constants
pub mod units {
    /// Kilograms per pound
    ///
    /// Fixed conversion factor for weight comparison; not configurable.
    pub const LB_TO_KG: f64 = 0.453_592;
}

/// Time value grammar constants
pub mod time_format {
    /// Digits before the first colon (`HH`)
    pub const HOURS_DIGITS: usize = 2;
    /// Digits before the second colon (`HHMM`)
    pub const HOURS_MINUTES_DIGITS: usize = 4;
    /// Maximum digits a time value holds (`HHMMSS`)
    pub const MAX_DIGITS: usize = 6;
}

/// Storage document names
pub mod storage {
    /// Records document inside the data directory
    pub const RECORDS_FILE: &str = "records.json";
    /// Custom catalog entries document inside the data directory
    pub const CUSTOM_CATALOG_FILE: &str = "custom_workouts.json";
    /// Directory under the platform data dir that holds the documents
    pub const APP_DIR: &str = "wodbook";
}
