// ABOUTME: Shared test utilities for the integration suite
// ABOUTME: Quiet logging bootstrap and record fixture helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

//! Shared test utilities for the Wodbook integration tests.

use std::sync::Once;

use chrono::{DateTime, Utc};
use wodbook::models::{Record, RecordType};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Record fixture with a fixed workout name
pub fn record(record_type: RecordType, value: &str, date: &str) -> Record {
    named_record("test", record_type, value, date)
}

/// Record fixture
pub fn named_record(workout: &str, record_type: RecordType, value: &str, date: &str) -> Record {
    let date: DateTime<Utc> = date.parse().unwrap();
    Record::new(workout, record_type, value, date)
}
