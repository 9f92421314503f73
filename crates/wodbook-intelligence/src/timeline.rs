// ABOUTME: Progress timeline series for the per-workout chart view
// ABOUTME: Chronological points with per-type numeric y-values extracted from stored records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Progress timeline series
//!
//! Feeds the per-workout line chart: records in chronological order, each
//! mapped to an optional numeric y-value. Weight records plot their
//! magnitude as entered (no kilogram conversion - the chart shows what the
//! user logged), rep records plot the parsed count, and time records plot
//! no numeric value at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wodbook_core::models::{Record, RecordType};

use crate::normalizer::{leading_magnitude, reps_count};
use crate::ranking::rank_by_date;

/// One point of a workout's progress timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelinePoint {
    /// When the record was added
    pub date: DateTime<Utc>,
    /// Plottable y-value; `None` for time records and unparseable values
    pub value: Option<f64>,
}

/// Build the chronological progress series for one workout's records
#[must_use]
pub fn progress_series(records: &[Record]) -> Vec<TimelinePoint> {
    rank_by_date(records)
        .into_iter()
        .map(|record| TimelinePoint {
            date: record.date,
            value: plot_value(&record),
        })
        .collect()
}

/// Whether a series is worth charting (a single point draws no line)
#[must_use]
pub fn is_plottable(series: &[TimelinePoint]) -> bool {
    series.len() > 1
}

fn plot_value(record: &Record) -> Option<f64> {
    match record.record_type {
        RecordType::Weight => leading_magnitude(&record.value),
        RecordType::Reps => reps_count(&record.value).ok().map(|n| n as f64),
        RecordType::Time => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    fn record(record_type: RecordType, value: &str, date: &str) -> Record {
        Record::new("test", record_type, value, date.parse().unwrap())
    }

    #[test]
    fn test_series_is_chronological() {
        let records = vec![
            record(RecordType::Reps, "25", "2026-02-01T00:00:00Z"),
            record(RecordType::Reps, "10", "2026-01-01T00:00:00Z"),
        ];
        let series = progress_series(&records);
        assert_eq!(series[0].value, Some(10.0));
        assert_eq!(series[1].value, Some(25.0));
        assert!(is_plottable(&series));
    }

    #[test]
    fn test_weight_plots_entered_magnitude() {
        let records = vec![record(RecordType::Weight, "150 LB", "2026-01-01T00:00:00Z")];
        let series = progress_series(&records);
        // As entered, not kilogram-normalized
        assert_eq!(series[0].value, Some(150.0));
        assert!(!is_plottable(&series));
    }

    #[test]
    fn test_time_plots_no_value() {
        let records = vec![record(RecordType::Time, "00:30:00", "2026-01-01T00:00:00Z")];
        let series = progress_series(&records);
        assert_eq!(series[0].value, None);
    }
}
