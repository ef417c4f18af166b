// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decode reports and round-trip comparison.

use anyhow::{Context, Result};
use odata_model::json::{self, JsonWriterOptions};
use odata_model::model::{ADDITIONAL_DATA_SLOT, ODATA_TYPE_SLOT};
use odata_model::models::factory_for;
use odata_model::{Model, ModelFactory, Value};
use serde_json::Value as JsonValue;
use std::fmt;

/// Resolve a family name given on the command line or in the config.
pub fn resolve_factory(name: &str) -> Result<ModelFactory> {
    factory_for(name)
        .with_context(|| format!("unknown type '{}' (see `odata-inspect types`)", name))
}

/// Parse a payload and dispatch it through `factory`.
pub fn decode(bytes: &[u8], factory: ModelFactory) -> Result<Box<dyn Model>> {
    json::from_slice(bytes, factory)
        .context("cannot deserialize payload")?
        .context("payload is null")
}

/// What a decoded model holds.
#[derive(Debug)]
pub struct Report {
    pub type_name: &'static str,
    pub odata_type: Option<String>,
    /// Stored properties other than nested models, in store order.
    pub properties: Vec<(String, String)>,
    pub additional: Vec<String>,
    /// Nested models, `name` or `name[index]`.
    pub nested: Vec<(String, Report)>,
}

/// Build a report for `model`; nested models are expanded when `nested`.
pub fn describe(model: &dyn Model, nested: bool) -> Report {
    let mut report = Report {
        type_name: model.type_name(),
        odata_type: model.odata_type(),
        properties: Vec::new(),
        additional: model.additional_data().keys().cloned().collect(),
        nested: Vec::new(),
    };

    for (key, value) in model.backing_store().enumerate() {
        if key == ADDITIONAL_DATA_SLOT || key == ODATA_TYPE_SLOT {
            continue;
        }
        match value {
            Value::Object(child) if nested => {
                report
                    .nested
                    .push((key.to_string(), describe(child.as_ref(), true)));
            }
            Value::Objects(children) if nested => {
                for (index, child) in children.iter().enumerate() {
                    report
                        .nested
                        .push((format!("{}[{}]", key, index), describe(child.as_ref(), true)));
                }
            }
            _ => report.properties.push((key.to_string(), value.to_string())),
        }
    }
    report
}

impl Report {
    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth + 1);
        for (key, value) in &self.properties {
            writeln!(f, "{}{} = {}", pad, key, value)?;
        }
        if !self.additional.is_empty() {
            writeln!(f, "{}additional: {}", pad, self.additional.join(", "))?;
        }
        for (key, child) in &self.nested {
            write!(f, "{}{}: ", pad, key)?;
            child.write_header(f)?;
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.odata_type {
            Some(tag) => writeln!(f, "{} ({})", self.type_name, tag),
            None => writeln!(f, "{}", self.type_name),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_indented(f, 0)
    }
}

/// Result of a decode then encode pass.
#[derive(Debug)]
pub struct RoundTrip {
    pub output: Vec<u8>,
    /// JSON pointer paths where the output departs from the input.
    pub differences: Vec<String>,
}

pub fn roundtrip(bytes: &[u8], factory: ModelFactory, options: JsonWriterOptions) -> Result<RoundTrip> {
    let input: JsonValue = serde_json::from_slice(bytes).context("input is not valid JSON")?;
    let model = json::from_value(&input, factory)
        .context("cannot deserialize payload")?
        .context("payload is null")?;

    let written = json::to_value(model.as_ref()).context("cannot serialize model")?;
    let output = json::to_vec_with(model.as_ref(), options).context("cannot serialize model")?;

    let mut differences = Vec::new();
    diff("", &input, &written, &mut differences);
    Ok(RoundTrip { output, differences })
}

/// Collect paths where `right` departs from `left`. Member order is ignored.
pub fn diff(path: &str, left: &JsonValue, right: &JsonValue, out: &mut Vec<String>) {
    match (left, right) {
        (JsonValue::Object(a), JsonValue::Object(b)) => {
            for (key, value) in a {
                let child = format!("{}/{}", path, key);
                match b.get(key) {
                    Some(other) => diff(&child, value, other, out),
                    None => out.push(format!("{}: dropped", child)),
                }
            }
            for key in b.keys().filter(|k| !a.contains_key(*k)) {
                out.push(format!("{}/{}: added", path, key));
            }
        }
        (JsonValue::Array(a), JsonValue::Array(b)) if a.len() == b.len() => {
            for (index, (x, y)) in a.iter().zip(b).enumerate() {
                diff(&format!("{}/{}", path, index), x, y, out);
            }
        }
        _ if left != right => {
            let at = if path.is_empty() { "/" } else { path };
            out.push(format!("{}: {} -> {}", at, left, right));
        }
        _ => {}
    }
}
