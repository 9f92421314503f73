// ABOUTME: Storage abstraction for the record tracker
// ABOUTME: RecordStore trait with pluggable in-memory and JSON-file backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! Storage abstraction layer
//!
//! The persistence collaborator behind the tracker. The core ranking logic
//! never touches storage; it receives record collections already resident
//! in memory. The store only loads and saves whole documents, with
//! last-write-wins semantics and no conflict resolution.

use wodbook_core::errors::AppResult;
use wodbook_core::models::{CatalogEntry, Record};

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Core storage abstraction trait
///
/// All storage backends implement this trait to provide a consistent
/// interface for the tracker layer.
pub trait RecordStore {
    /// Load every stored record; an absent document yields the empty list
    fn load_records(&self) -> AppResult<Vec<Record>>;

    /// Persist the full record collection
    fn save_records(&self, records: &[Record]) -> AppResult<()>;

    /// Load user-created custom catalog entries
    fn load_custom_entries(&self) -> AppResult<Vec<CatalogEntry>>;

    /// Persist the full custom catalog entry collection
    fn save_custom_entries(&self, entries: &[CatalogEntry]) -> AppResult<()>;
}
