// ABOUTME: Ranking engine ordering same-type records best-to-worst
// ABOUTME: Stable type-dispatched comparison, best-record selection, and chronological ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Ranking engine
//!
//! Orders a batch of records that share one record type from best to worst
//! and identifies the best record. Comparison semantics per type:
//!
//! - `Time`: ascending lexicographic order of the value string (lower
//!   elapsed time is better; correct because the grammar is fixed-width
//!   zero-padded `HH:MM:SS`)
//! - `Reps`: descending by parsed count (more is better)
//! - `Weight`: descending by kilogram-normalized magnitude (heavier is
//!   better)
//!
//! The sort is stable, so records with equal values keep their original
//! relative order; ties get no further deterministic tie-break. Inputs are
//! borrowed and never reordered in place - the canonical stored collection
//! must keep its insertion order, so every operation returns a fresh
//! vector.

use std::cmp::Ordering;

use tracing::trace;

use wodbook_core::models::{Record, RecordType};

use crate::normalizer::{reps_count, weight_kg, Magnitude};

/// Order records best-to-worst
///
/// Stable; degenerate inputs pass through unchanged (an empty batch has no
/// type to dispatch on and sorts to an empty batch). Unparseable values
/// keep their place in the output but rank below every parseable value.
#[must_use]
pub fn rank(records: &[Record]) -> Vec<Record> {
    let mut ranked = records.to_vec();
    if let Some(first) = records.first() {
        trace!(record_type = %first.record_type, count = records.len(), "ranking records");
        ranked.sort_by(compare);
    }
    ranked
}

/// Index of the best record within the original, unsorted input order
///
/// `None` for an empty batch. Downstream presentation renders the original
/// order annotated with a "best" marker, so the index must point into the
/// input as given, not into the ranked order. Records are decorated with
/// their original index before sorting; searching the ranked output back
/// into the input would mis-handle textually identical duplicates.
///
/// If several records tie for best, the stable sort leaves the earliest
/// one first and its index is returned.
#[must_use]
pub fn best_index(records: &[Record]) -> Option<usize> {
    let mut decorated: Vec<(usize, &Record)> = records.iter().enumerate().collect();
    decorated.sort_by(|(_, a), (_, b)| compare(a, b));
    decorated.first().map(|(index, _)| *index)
}

/// Order records chronologically by the date they were added
///
/// Independent of record type; drives the progress timeline only and never
/// picks a "best".
#[must_use]
pub fn rank_by_date(records: &[Record]) -> Vec<Record> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));
    ordered
}

/// Type-dispatched comparison, best first
///
/// Dispatches on the left record's type: within one ranking operation all
/// records share their type, the batch invariant the callers uphold.
fn compare(a: &Record, b: &Record) -> Ordering {
    match a.record_type {
        RecordType::Time => a.value.cmp(&b.value),
        RecordType::Reps => compare_magnitudes(
            reps_count(&a.value).map(|n| n as f64),
            reps_count(&b.value).map(|n| n as f64),
        ),
        RecordType::Weight => compare_magnitudes(weight_kg(&a.value), weight_kg(&b.value)),
    }
}

/// Descending comparison over magnitudes with unparseable values at the bottom
fn compare_magnitudes(a: Magnitude, b: Magnitude) -> Ordering {
    match (a, b) {
        (Ok(a), Ok(b)) => b.total_cmp(&a),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    }
}
