// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the store, the parse side and the writer side.

use thiserror::Error;

/// Backing store faults.
///
/// The typed accessors on models treat these as fatal; callers working with
/// a [`BackingStore`](crate::store::BackingStore) directly get them as
/// ordinary results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("backing store key cannot be empty")]
    EmptyKey,

    #[error("no subscription with id '{0}'")]
    UnknownSubscription(String),

    #[error("slot '{key}' holds {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors raised while reading values out of a parse node.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid {kind} value '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid uuid: {0}")]
    Uuid(#[from] uuid::Error),

    #[error("invalid date/time: {0}")]
    DateTime(#[from] chrono::ParseError),

    #[error("invalid ISO-8601 duration '{0}'")]
    Duration(String),

    #[error("field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach the wire name of the field being read.
    pub fn in_field(self, field: &str) -> Self {
        Self::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }
}

/// Errors raised by a serialization writer.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("writer state: {0}")]
    InvalidState(String),

    #[error("'{0}' is not a finite number")]
    NonFiniteNumber(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
