// ABOUTME: JSON-file storage backend under the platform data directory
// ABOUTME: Whole-document load/save with lenient reads and logged degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use wodbook_core::constants::storage::{CUSTOM_CATALOG_FILE, RECORDS_FILE};
use wodbook_core::errors::{AppError, AppResult};
use wodbook_core::models::{CatalogEntry, Record};

use super::RecordStore;

/// JSON-document store rooted at a data directory
///
/// Each collection is one pretty-printed JSON array file. Reads are
/// lenient: a missing document is the empty collection, and a corrupt
/// document degrades to empty with a logged warning instead of failing the
/// load. Writes create the directory on demand and replace the whole
/// document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given data directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the documents live in
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load_document<T: DeserializeOwned>(&self, file_name: &str) -> AppResult<Vec<T>> {
        let path = self.dir.join(file_name);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "document not found, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(AppError::storage(format!("reading {file_name}"), err)),
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(path = %path.display(), %err, "corrupt document, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_document<T: Serialize>(&self, file_name: &str, items: &[T]) -> AppResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|err| AppError::storage("creating data directory", err))?;
        let raw = serde_json::to_string_pretty(items)
            .map_err(|err| AppError::serialization(format!("encoding {file_name}"), err))?;
        let path = self.dir.join(file_name);
        fs::write(&path, raw).map_err(|err| AppError::storage(format!("writing {file_name}"), err))
    }
}

impl RecordStore for JsonFileStore {
    fn load_records(&self) -> AppResult<Vec<Record>> {
        self.load_document(RECORDS_FILE)
    }

    fn save_records(&self, records: &[Record]) -> AppResult<()> {
        self.save_document(RECORDS_FILE, records)
    }

    fn load_custom_entries(&self) -> AppResult<Vec<CatalogEntry>> {
        self.load_document(CUSTOM_CATALOG_FILE)
    }

    fn save_custom_entries(&self, entries: &[CatalogEntry]) -> AppResult<()> {
        self.save_document(CUSTOM_CATALOG_FILE, entries)
    }
}
