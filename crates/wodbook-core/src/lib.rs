// ABOUTME: Core types and constants for the Wodbook record tracker
// ABOUTME: Foundation crate with record models, error types, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

#![deny(unsafe_code)]

//! # Wodbook Core
//!
//! Foundation crate providing shared types and constants for the Wodbook
//! personal record tracker. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **formatters**: Input and display formatting for record values and dates
//! - **models**: Core data models (`Record`, `RecordType`, `WeightUnit`, catalog types)

/// Unified error handling for the tracker application layer
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Input and display formatting helpers
pub mod formatters;

/// Core data models (`Record`, `RecordType`, `WeightUnit`, catalog types)
pub mod models;
