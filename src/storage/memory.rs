// ABOUTME: In-memory storage backend for tests and ephemeral sessions
// ABOUTME: Mutex-guarded document copies with RecordStore semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

use std::sync::{Mutex, PoisonError};

use wodbook_core::errors::AppResult;
use wodbook_core::models::{CatalogEntry, Record};

use super::RecordStore;

/// In-memory store; contents vanish with the value
///
/// Backs tests and ephemeral sessions. Documents are held behind mutexes
/// so the store can be shared immutably like the file-backed one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Record>>,
    custom_entries: Mutex<Vec<CatalogEntry>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with records
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            custom_entries: Mutex::new(Vec::new()),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load_records(&self) -> AppResult<Vec<Record>> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save_records(&self, records: &[Record]) -> AppResult<()> {
        *self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = records.to_vec();
        Ok(())
    }

    fn load_custom_entries(&self) -> AppResult<Vec<CatalogEntry>> {
        Ok(self
            .custom_entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save_custom_entries(&self, entries: &[CatalogEntry]) -> AppResult<()> {
        *self
            .custom_entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = entries.to_vec();
        Ok(())
    }
}
