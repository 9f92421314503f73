// ABOUTME: Catalog entry and workout category types for workout classification
// ABOUTME: Curated catalog rows pair a workout name with its record type and display category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RecordType;

/// Display category a workout belongs to
///
/// Categories only group workouts for presentation; they carry no
/// comparison semantics. `Custom` marks user-created catalog entries and
/// first-time unknown names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutCategory {
    /// Barbell and olympic lifts
    Lifts,
    /// Bodyweight and rig movements
    Gymnastics,
    /// Rowing, running, and machine efforts
    Cardio,
    /// Benchmark and hero workouts
    #[serde(rename = "WOD")]
    Wod,
    /// User-created catalog entries and unseen workout names
    Custom,
    /// Known names that fit no other bucket
    Other,
}

impl WorkoutCategory {
    /// Display string shown in category chips
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lifts => "Lifts",
            Self::Gymnastics => "Gymnastics",
            Self::Cardio => "Cardio",
            Self::Wod => "WOD",
            Self::Custom => "Custom",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the workout catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Workout name as displayed and matched
    pub name: String,
    /// Default record type for this workout
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Display category
    pub category: WorkoutCategory,
}

impl CatalogEntry {
    /// Create a catalog entry
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        category: WorkoutCategory,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            category,
        }
    }

    /// Case-insensitive key used when merging catalog sources
    ///
    /// User record matching does NOT go through this key; it is exact.
    #[must_use]
    pub fn merge_key(&self) -> String {
        self.name.to_lowercase()
    }
}
