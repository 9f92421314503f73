// ABOUTME: Record ranking and normalization engine for the Wodbook tracker
// ABOUTME: Normalizes heterogeneous record values and orders records best-to-worst
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

#![deny(unsafe_code)]

//! # Wodbook Intelligence
//!
//! The record ranking and comparison engine. Given a batch of records that
//! share one record type, this crate decides how two results compare, which
//! one is "best", and how heterogeneous stored values (time strings,
//! weight+unit pairs, integer rep counts) normalize into comparable
//! quantities.
//!
//! Every operation here is a pure, synchronous computation over borrowed
//! data: inputs are never mutated, outputs are fresh vectors, and no
//! operation can fail. Malformed values degrade silently to bottom-rank
//! placement rather than surfacing errors; availability beats strict
//! validation for this application.

/// Value normalization: raw stored strings to comparable magnitudes
pub mod normalizer;

/// Ranking engine: best-to-worst ordering and best-record selection
pub mod ranking;

/// Progress timeline series for the per-workout chart
pub mod timeline;

pub use normalizer::{normalize, Magnitude, Unparseable};
pub use ranking::{best_index, rank, rank_by_date};
pub use timeline::{is_plottable, progress_series, TimelinePoint};
