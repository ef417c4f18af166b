// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON wire format (OData JSON conventions).
//!
//! Timestamps are RFC 3339, dates `YYYY-MM-DD`, times `HH:MM:SS[.fff]`,
//! durations ISO 8601, byte arrays standard base64 and UUIDs hyphenated.

mod parse_node;
mod writer;

pub use parse_node::{JsonDocument, JsonParseNode};
pub use writer::{JsonSerializationWriter, JsonWriterOptions};

use crate::error::{ParseError, WriteError};
use crate::model::{Model, ModelFactory};
use crate::serialization::{ParseNode, SerializationWriter as _};

/// Deserialize a JSON payload; `factory` picks the concrete type.
///
/// A top-level `null` yields `Ok(None)`.
pub fn from_slice(bytes: &[u8], factory: ModelFactory) -> Result<Option<Box<dyn Model>>, ParseError> {
    let doc = JsonDocument::parse(bytes)?;
    from_value(doc.value(), factory)
}

/// Deserialize an already parsed JSON value.
pub fn from_value(
    value: &serde_json::Value,
    factory: ModelFactory,
) -> Result<Option<Box<dyn Model>>, ParseError> {
    let root = JsonParseNode::new(value);
    let node: &dyn ParseNode = &root;
    node.object_value(factory)
}

/// Serialize a model to a JSON value.
pub fn to_value(model: &dyn Model) -> Result<serde_json::Value, WriteError> {
    let mut writer = JsonSerializationWriter::new();
    writer.write_object_value("", Some(model))?;
    writer.into_value()
}

/// Serialize a model to compact JSON bytes.
pub fn to_vec(model: &dyn Model) -> Result<Vec<u8>, WriteError> {
    to_vec_with(model, JsonWriterOptions::default())
}

/// Serialize a model to JSON bytes with explicit options.
pub fn to_vec_with(model: &dyn Model, options: JsonWriterOptions) -> Result<Vec<u8>, WriteError> {
    let mut writer = JsonSerializationWriter::with_options(options);
    writer.write_object_value("", Some(model))?;
    writer.content()
}
