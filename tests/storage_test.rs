// ABOUTME: Integration tests for the JSON-file storage backend
// ABOUTME: Covers document round-trips, missing-file and corrupt-file degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{init_test_logging, named_record};
use tempfile::TempDir;
use wodbook::constants::storage::{CUSTOM_CATALOG_FILE, RECORDS_FILE};
use wodbook::models::{CatalogEntry, RecordType, WorkoutCategory};
use wodbook::storage::{JsonFileStore, RecordStore};

fn temp_store() -> (TempDir, JsonFileStore) {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    (dir, store)
}

#[test]
fn test_missing_documents_load_empty() {
    let (_dir, store) = temp_store();
    assert!(store.load_records().unwrap().is_empty());
    assert!(store.load_custom_entries().unwrap().is_empty());
}

#[test]
fn test_records_document_round_trip() {
    let (_dir, store) = temp_store();
    let records = vec![
        named_record("Fran", RecordType::Time, "00:04:30", "2026-01-05T18:00:00Z"),
        named_record("Deadlift", RecordType::Weight, "150 LB", "2026-01-06T18:00:00Z"),
        named_record("Pull-ups", RecordType::Reps, "25", "2026-01-07T18:00:00Z"),
    ];
    store.save_records(&records).unwrap();
    assert_eq!(store.load_records().unwrap(), records);
}

#[test]
fn test_custom_entries_document_round_trip() {
    let (_dir, store) = temp_store();
    let entries = vec![CatalogEntry::new(
        "Sled Push",
        RecordType::Weight,
        WorkoutCategory::Custom,
    )];
    store.save_custom_entries(&entries).unwrap();
    assert_eq!(store.load_custom_entries().unwrap(), entries);
}

#[test]
fn test_corrupt_document_degrades_to_empty() {
    let (dir, store) = temp_store();
    fs::write(dir.path().join(RECORDS_FILE), "{not json").unwrap();
    fs::write(dir.path().join(CUSTOM_CATALOG_FILE), "[{\"name\":").unwrap();
    // Lenient load: corrupt documents start empty rather than failing
    assert!(store.load_records().unwrap().is_empty());
    assert!(store.load_custom_entries().unwrap().is_empty());
}

#[test]
fn test_save_creates_data_directory() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deep").join("wodbook");
    let store = JsonFileStore::new(&nested);
    store
        .save_records(&[named_record(
            "Grace",
            RecordType::Time,
            "00:03:00",
            "2026-01-01T00:00:00Z",
        )])
        .unwrap();
    assert!(nested.join(RECORDS_FILE).exists());
    assert_eq!(store.load_records().unwrap().len(), 1);
}

#[test]
fn test_document_keeps_original_field_spelling() {
    let (dir, store) = temp_store();
    store
        .save_records(&[named_record(
            "Fran",
            RecordType::Time,
            "00:04:30",
            "2026-01-05T18:00:00Z",
        )])
        .unwrap();
    let raw = fs::read_to_string(dir.path().join(RECORDS_FILE)).unwrap();
    // Documents written by earlier app versions stay loadable, so the
    // spelling must not drift
    assert!(raw.contains("\"recordType\""));
    assert!(raw.contains("\"recordValue\""));
}

#[test]
fn test_loads_legacy_document() {
    let (dir, store) = temp_store();
    let legacy = r#"[
        {
            "workout": "Back Squat",
            "recordType": "WEIGHT",
            "recordValue": "120 KG",
            "date": "2025-10-02T19:45:12.345Z"
        }
    ]"#;
    fs::write(dir.path().join(RECORDS_FILE), legacy).unwrap();
    let records = store.load_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type, RecordType::Weight);
    assert_eq!(records[0].value, "120 KG");
}
