// ABOUTME: Workout classification catalog with built-in, custom, and user-record tiers
// ABOUTME: Resolves a workout name to its record type and display category by precedence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Workout classification
//!
//! Assigns each workout name a record type and a display category. This is
//! table lookup feeding the ranking engine's type dispatch and the entry
//! form's read-only/override behavior; it carries no comparison semantics
//! of its own.
//!
//! Lookup precedence, highest first:
//!
//! 1. an exact match among the user's own records for that name
//!    (case-SENSITIVE - a record for `"fran"` does not pin `"Fran"`)
//! 2. a built-in catalog entry (case-insensitive name key)
//! 3. a user-created custom entry (case-insensitive name key)
//! 4. default: `Time` type, `Custom` category, for first-time names
//!
//! The sensitivity split between tier 1 and tiers 2-3 is intentional;
//! see DESIGN.md before changing it.

use std::collections::HashSet;

use wodbook_core::models::{CatalogEntry, Record, RecordType, WorkoutCategory};

/// Where a classification's record type came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    /// Pinned by the user's own records for this exact name
    UserRecords,
    /// Built-in curated catalog
    Builtin,
    /// User-created custom entry
    Custom,
    /// Unseen name; defaults applied
    Default,
}

/// Resolved record type and category for a workout name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Record type the entry form should preselect
    pub record_type: RecordType,
    /// Display category for the workout's chip
    pub category: WorkoutCategory,
    /// Which tier resolved the record type
    pub source: ClassificationSource,
}

/// The workout catalog: built-in entries plus user-created custom entries
#[derive(Debug, Clone)]
pub struct WorkoutCatalog {
    builtin: Vec<CatalogEntry>,
    custom: Vec<CatalogEntry>,
}

impl WorkoutCatalog {
    /// Build the catalog with the curated built-in entries
    #[must_use]
    pub fn builtin() -> Self {
        let mut builtin = benchmark_wods();
        builtin.extend(lifts());
        builtin.extend(gymnastics());
        builtin.extend(cardio());
        Self {
            builtin,
            custom: Vec::new(),
        }
    }

    /// Replace the custom entries (loaded from the store)
    pub fn set_custom_entries(&mut self, entries: Vec<CatalogEntry>) {
        self.custom = entries;
    }

    /// Add a custom entry unless its case-insensitive key is already taken
    ///
    /// Returns whether the entry was added.
    pub fn add_custom_entry(&mut self, name: &str, record_type: RecordType) -> bool {
        let key = name.to_lowercase();
        let taken = self
            .builtin
            .iter()
            .chain(&self.custom)
            .any(|entry| entry.merge_key() == key);
        if taken {
            return false;
        }
        self.custom
            .push(CatalogEntry::new(name, record_type, WorkoutCategory::Custom));
        true
    }

    /// Custom entries in insertion order
    #[must_use]
    pub fn custom_entries(&self) -> &[CatalogEntry] {
        &self.custom
    }

    /// Case-insensitive catalog lookup, built-in before custom
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        let key = name.to_lowercase();
        self.builtin
            .iter()
            .chain(&self.custom)
            .find(|entry| entry.merge_key() == key)
    }

    /// Resolve a workout name against the user's records and the catalog
    #[must_use]
    pub fn classify(&self, name: &str, records: &[Record]) -> Classification {
        // Category always comes from the catalog; records carry no category.
        let category = self
            .entry(name)
            .map_or(WorkoutCategory::Custom, |entry| entry.category);

        if let Some(matched) = records.iter().find(|record| record.workout == name) {
            return Classification {
                record_type: matched.record_type,
                category,
                source: ClassificationSource::UserRecords,
            };
        }

        let key = name.to_lowercase();
        if let Some(entry) = self.builtin.iter().find(|entry| entry.merge_key() == key) {
            return Classification {
                record_type: entry.record_type,
                category: entry.category,
                source: ClassificationSource::Builtin,
            };
        }
        if let Some(entry) = self.custom.iter().find(|entry| entry.merge_key() == key) {
            return Classification {
                record_type: entry.record_type,
                category: entry.category,
                source: ClassificationSource::Custom,
            };
        }

        Classification {
            record_type: RecordType::Time,
            category: WorkoutCategory::Custom,
            source: ClassificationSource::Default,
        }
    }

    /// Suggestion list for the entry form's autocomplete
    ///
    /// The user's own workout names first (first-seen order, exact
    /// spelling), then built-in names, then custom names, de-duplicated on
    /// a case-insensitive key with the earlier source winning.
    #[must_use]
    pub fn merged_names(&self, records: &[Record]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        let record_names = records
            .iter()
            .filter(|record| !record.workout.is_empty())
            .map(|record| record.workout.as_str());
        let catalog_names = self
            .builtin
            .iter()
            .chain(&self.custom)
            .map(|entry| entry.name.as_str());
        for name in record_names.chain(catalog_names) {
            if seen.insert(name.to_lowercase()) {
                names.push(name.to_owned());
            }
        }
        names
    }
}

impl Default for WorkoutCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Benchmark and hero workouts
fn benchmark_wods() -> Vec<CatalogEntry> {
    let wod = |name, record_type| CatalogEntry::new(name, record_type, WorkoutCategory::Wod);
    vec![
        wod("Murph", RecordType::Time),
        wod("Fran", RecordType::Time),
        wod("Grace", RecordType::Time),
        wod("Helen", RecordType::Time),
        wod("Cindy", RecordType::Reps),
        wod("DT", RecordType::Weight),
        wod("Annie", RecordType::Time),
        wod("Karen", RecordType::Time),
        wod("Eva", RecordType::Time),
        wod("Jackie", RecordType::Time),
        wod("Fight Gone Bad", RecordType::Reps),
        wod("Barbara", RecordType::Reps),
        wod("Chelsea", RecordType::Reps),
        wod("Linda", RecordType::Weight),
        wod("Nancy", RecordType::Time),
        wod("Kelly", RecordType::Time),
        wod("Filthy Fifty", RecordType::Time),
        wod("The Seven", RecordType::Time),
        wod("Hyrox", RecordType::Time),
        wod("Hyrox Doubles", RecordType::Time),
    ]
}

/// Barbell and olympic lifts
fn lifts() -> Vec<CatalogEntry> {
    [
        "Back Squat",
        "Front Squat",
        "Overhead Squat",
        "Deadlift",
        "Clean",
        "Power Clean",
        "Squat Clean",
        "Snatch",
        "Power Snatch",
        "Squat Snatch",
        "Clean and Jerk",
        "Push Press",
        "Push Jerk",
        "Split Jerk",
    ]
    .into_iter()
    .map(|name| CatalogEntry::new(name, RecordType::Weight, WorkoutCategory::Lifts))
    .collect()
}

/// Bodyweight and rig movements
fn gymnastics() -> Vec<CatalogEntry> {
    [
        "Pull-ups",
        "Chest-to-bar Pull-ups",
        "Bar Muscle-ups",
        "Ring Muscle-ups",
        "Handstand Walk",
        "Handstand Push-ups",
        "Toes-to-Bar",
        "Double Unders",
        "Rope Climbs",
    ]
    .into_iter()
    .map(|name| CatalogEntry::new(name, RecordType::Reps, WorkoutCategory::Gymnastics))
    .collect()
}

/// Rowing, running, and machine efforts
fn cardio() -> Vec<CatalogEntry> {
    [
        "500m Row",
        "1k Row",
        "2k Row",
        "5k Run",
        "1 Mile Run",
        "Assault Bike 50 cal",
        "1000m Ski Erg",
    ]
    .into_iter()
    .map(|name| CatalogEntry::new(name, RecordType::Time, WorkoutCategory::Cardio))
    .collect()
}
