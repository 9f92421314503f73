// ABOUTME: Record tracker service wiring storage, catalog, and the ranking engine
// ABOUTME: Add/delete flows, per-workout grouping, search filtering, and form support lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Record tracker service
//!
//! The application service between the collaborating surfaces (entry form,
//! record list) and the core. It owns the in-memory record collection,
//! persists through a [`RecordStore`], and hands the presentation layer
//! plain data: groups, suggestion lists, classifications. Ranking itself
//! stays in the intelligence crate and is applied per group by the caller,
//! on copies - the canonical collection here keeps insertion order.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use wodbook_core::errors::{AppError, AppResult};
use wodbook_core::formatters::format_time_input;
use wodbook_core::models::{Record, RecordType, WeightUnit};

use crate::catalog::{Classification, WorkoutCatalog};
use crate::storage::RecordStore;

/// Tracker service owning the record collection and its store
#[derive(Debug)]
pub struct RecordTracker<S: RecordStore> {
    store: S,
    catalog: WorkoutCatalog,
    records: Vec<Record>,
}

impl<S: RecordStore> RecordTracker<S> {
    /// Load a tracker from the store
    ///
    /// Reads the record collection and the user's custom catalog entries;
    /// absent documents start empty.
    pub fn load(store: S, mut catalog: WorkoutCatalog) -> AppResult<Self> {
        let records = store.load_records()?;
        catalog.set_custom_entries(store.load_custom_entries()?);
        debug!(count = records.len(), "loaded records");
        Ok(Self {
            store,
            catalog,
            records,
        })
    }

    /// The canonical record collection, in insertion order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The catalog backing classification and suggestions
    #[must_use]
    pub fn catalog(&self) -> &WorkoutCatalog {
        &self.catalog
    }

    /// Add a record from validated form input
    ///
    /// Composes the stored value from the raw input: weight records get
    /// their unit suffix (`"100 KG"`), time records pass through the
    /// digit-stripping formatter that defines the `HH:MM:SS` grammar, rep
    /// records store the trimmed raw string. The record is timestamped
    /// with the supplied date, appended, and persisted.
    ///
    /// The record type is taken as given: the form pins the type for known
    /// workouts via [`Self::type_for`], and the ranking engine does not
    /// enforce the pin either.
    pub fn add_record(
        &mut self,
        workout: &str,
        record_type: RecordType,
        raw_value: &str,
        weight_unit: WeightUnit,
        date: DateTime<Utc>,
    ) -> AppResult<Record> {
        let workout = workout.trim();
        let raw_value = raw_value.trim();
        if workout.is_empty() {
            return Err(AppError::invalid_input("workout name is required"));
        }
        if raw_value.is_empty() {
            return Err(AppError::invalid_input("record value is required"));
        }

        let value = match record_type {
            RecordType::Weight => format!("{raw_value} {weight_unit}"),
            RecordType::Time => format_time_input(raw_value),
            RecordType::Reps => raw_value.to_owned(),
        };
        let record = Record::new(workout, record_type, value, date);
        self.records.push(record.clone());
        self.store.save_records(&self.records)?;
        info!(workout, %record_type, "record added");
        Ok(record)
    }

    /// Delete the first record equal to `target` in every field
    ///
    /// Records carry no stable identifier, so deletion matches by
    /// full-field equality; one of several identical duplicates is
    /// removed. Returns whether a record was deleted.
    pub fn delete_record(&mut self, target: &Record) -> AppResult<bool> {
        let Some(position) = self.records.iter().position(|record| record == target) else {
            debug!(workout = %target.workout, "no matching record to delete");
            return Ok(false);
        };
        self.records.remove(position);
        self.store.save_records(&self.records)?;
        info!(workout = %target.workout, "record deleted");
        Ok(true)
    }

    /// Records grouped by workout name
    ///
    /// Group keys are exact workout strings; groups appear in
    /// first-appearance order and records keep insertion order within a
    /// group. Ranking is applied per group by the caller.
    #[must_use]
    pub fn grouped(&self) -> Vec<(&str, Vec<&Record>)> {
        let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();
        for record in &self.records {
            match groups.iter_mut().find(|(name, _)| *name == record.workout) {
                Some((_, members)) => members.push(record),
                None => groups.push((record.workout.as_str(), vec![record])),
            }
        }
        groups
    }

    /// Groups whose workout name contains the query, case-insensitively
    #[must_use]
    pub fn filter_groups(&self, query: &str) -> Vec<(&str, Vec<&Record>)> {
        let query = query.to_lowercase();
        self.grouped()
            .into_iter()
            .filter(|(name, _)| name.to_lowercase().contains(&query))
            .collect()
    }

    /// Suggestion list for the entry form's autocomplete
    #[must_use]
    pub fn workout_options(&self) -> Vec<String> {
        self.catalog.merged_names(&self.records)
    }

    /// Resolve a workout name's record type and category
    #[must_use]
    pub fn classify(&self, name: &str) -> Classification {
        self.catalog.classify(name, &self.records)
    }

    /// Record type pinned by the workout's existing records, if any
    ///
    /// Exact-match lookup backing the form's read-only type selector: once
    /// a workout has a record, its type is fixed.
    #[must_use]
    pub fn type_for(&self, workout: &str) -> Option<RecordType> {
        self.records
            .iter()
            .find(|record| record.workout == workout)
            .map(|record| record.record_type)
    }

    /// Add a user-created custom catalog entry and persist the collection
    ///
    /// Returns whether the entry was added; a name whose case-insensitive
    /// key is already cataloged is left alone.
    pub fn add_custom_entry(&mut self, name: &str, record_type: RecordType) -> AppResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("workout name is required"));
        }
        if !self.catalog.add_custom_entry(name, record_type) {
            return Ok(false);
        }
        self.store
            .save_custom_entries(self.catalog.custom_entries())?;
        info!(name, "custom workout added");
        Ok(true)
    }
}
