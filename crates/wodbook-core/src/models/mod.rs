// ABOUTME: Core data models for the Wodbook record tracker
// ABOUTME: Record entity, record type and weight unit enums, and catalog types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Core data models
//!
//! Key types:
//! - `Record`: one logged workout result (value + type + date)
//! - `RecordType`: the unit-of-measure category for a workout
//! - `WeightUnit`: weight magnitudes are entered in kilograms or pounds
//! - `CatalogEntry` / `WorkoutCategory`: the curated workout catalog

// Domain modules
mod catalog;
mod record;

// Re-export all public types for convenience
pub use catalog::{CatalogEntry, WorkoutCategory};
pub use record::{Record, RecordType, WeightUnit};
