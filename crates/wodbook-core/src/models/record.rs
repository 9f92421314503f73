// ABOUTME: Record entity and its closed enumerations for the Wodbook tracker
// ABOUTME: Defines Record, RecordType, and WeightUnit with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The unit-of-measure category for a workout's results
///
/// Every record of a given workout shares one record type; it determines
/// the value grammar, how two results compare, and which result is "best"
/// (lowest time, heaviest weight, highest rep count).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordType {
    /// Elapsed time result, stored as a fixed-width `"HH:MM:SS"` string
    Time,
    /// Load result, stored as `"<magnitude> <unit>"` (e.g. `"100 KG"`)
    Weight,
    /// Repetition count result, stored as a decimal integer string
    Reps,
}

impl RecordType {
    /// Stable string form used in stored documents and display chips
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "TIME",
            Self::Weight => "WEIGHT",
            Self::Reps => "REPS",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TIME" => Ok(Self::Time),
            "WEIGHT" => Ok(Self::Weight),
            "REPS" => Ok(Self::Reps),
            other => Err(AppError::invalid_input(format!(
                "unknown record type: {other}"
            ))),
        }
    }
}

/// Unit a weight magnitude was entered in
///
/// Stored verbatim as the suffix of a weight record's value string.
/// Comparison always happens in kilograms; see the intelligence crate's
/// normalizer for the conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    /// Kilograms
    Kg,
    /// Pounds
    Lb,
}

impl WeightUnit {
    /// Stable string form used as the stored value suffix (`"KG"` / `"LB"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "KG",
            Self::Lb => "LB",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KG" => Ok(Self::Kg),
            "LB" => Ok(Self::Lb),
            other => Err(AppError::invalid_input(format!(
                "unknown weight unit: {other}"
            ))),
        }
    }
}

/// One logged workout result
///
/// Records are immutable once created; the tracker supports only add and
/// delete. Deletion matches by full-field equality because local-only
/// storage guarantees no stable identifier, which is why `PartialEq`
/// covers every field.
///
/// Serde field names keep the original document spelling (`recordType`,
/// `recordValue`) so data written by earlier versions of the app loads
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Workout identifier this result belongs to; non-empty, not unique
    pub workout: String,
    /// Unit-of-measure category, fixed per workout by its first record
    pub record_type: RecordType,
    /// Raw value string; grammar depends on `record_type`
    #[serde(rename = "recordValue")]
    pub value: String,
    /// When the record was added (UTC)
    pub date: DateTime<Utc>,
}

impl Record {
    /// Create a record with the given fields
    #[must_use]
    pub fn new(
        workout: impl Into<String>,
        record_type: RecordType,
        value: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            workout: workout.into(),
            record_type,
            value: value.into(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_record_type_round_trip() {
        for ty in [RecordType::Time, RecordType::Weight, RecordType::Reps] {
            let parsed: RecordType = ty.as_str().parse().unwrap();
            assert_eq!(parsed, ty);
        }
        assert!("SPEED".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_record_document_spelling() {
        let record = Record::new(
            "Fran",
            RecordType::Time,
            "00:04:30",
            "2026-03-01T10:00:00Z".parse().unwrap(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["recordType"], "TIME");
        assert_eq!(json["recordValue"], "00:04:30");
        assert_eq!(json["workout"], "Fran");
    }

    #[test]
    fn test_record_loads_legacy_document() {
        // Document shape written by earlier app versions
        let json = r#"{
            "workout": "Deadlift",
            "recordType": "WEIGHT",
            "recordValue": "150 LB",
            "date": "2025-11-20T08:30:00.000Z"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, RecordType::Weight);
        assert_eq!(record.value, "150 LB");
    }
}
