// ABOUTME: Unified error handling for the Wodbook application layer
// ABOUTME: AppError enum with source-chained storage and serialization variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Wodbook Project

//! # Unified Error Handling
//!
//! Error types for the application layer (storage, configuration, tracker
//! input validation). The ranking and normalization core deliberately never
//! fails: malformed values degrade to bottom-rank placement, empty inputs
//! produce sentinel values, and unknown states fall back to no-ops. These
//! types exist for the layers around the core, where failure is real
//! (file I/O, corrupt documents, rejected form input).

use thiserror::Error;

/// Result type alias used throughout the application layer
pub type AppResult<T> = Result<T, AppError>;

/// Unified error type for the tracker application layer
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected user input (empty workout name, empty value, bad enum string)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Storage read/write failure
    #[error("storage error: {context}")]
    Storage {
        /// What the store was doing when it failed
        context: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Document serialization/deserialization failure
    #[error("serialization error: {context}")]
    Serialization {
        /// What was being (de)serialized
        context: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration failure (unresolvable data directory, bad env value)
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Rejected user input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Storage failure with the operation that was in flight
    #[must_use]
    pub fn storage(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }

    /// Serialization failure with the document that was in flight
    #[must_use]
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Configuration failure
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
