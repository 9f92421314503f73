// ABOUTME: Environment-driven configuration for the tracker application layer
// ABOUTME: Resolves the data directory holding the JSON store documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Tracker configuration
//!
//! Environment-only configuration: the few knobs this application has come
//! from environment variables with platform defaults, no config files.

use std::env;
use std::path::PathBuf;

use wodbook_core::constants::storage::APP_DIR;
use wodbook_core::errors::{AppError, AppResult};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WODBOOK_DATA_DIR";

/// Tracker application configuration
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Directory the JSON store documents live in
    pub data_dir: PathBuf,
}

impl TrackerConfig {
    /// Resolve configuration from the environment
    ///
    /// `WODBOOK_DATA_DIR` overrides the platform data directory (e.g.
    /// `~/.local/share/wodbook` on Linux). Fails only when neither source
    /// yields a directory.
    pub fn from_env() -> AppResult<Self> {
        let data_dir = match env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or_else(|| {
                    AppError::config(format!(
                        "no platform data directory; set {DATA_DIR_ENV}"
                    ))
                })?
                .join(APP_DIR),
        };
        Ok(Self { data_dir })
    }
}
