// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! [`ParseNode`] over `serde_json::Value`.

use crate::duration::IsoDuration;
use crate::error::ParseError;
use crate::serialization::ParseNode;
use crate::value::{AdditionalData, Value};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// An owned, parsed JSON payload.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    value: JsonValue,
}

impl JsonDocument {
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        Ok(Self {
            value: serde_json::from_slice(bytes)?,
        })
    }

    pub fn from_value(value: JsonValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// Parse node for the top-level value.
    pub fn root(&self) -> JsonParseNode<'_> {
        JsonParseNode::new(&self.value)
    }
}

/// A borrowed view of one JSON value.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a JsonValue,
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a JsonValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a JsonValue {
        self.value
    }

    fn mismatch(&self, expected: &'static str) -> ParseError {
        ParseError::TypeMismatch {
            expected,
            found: kind(self.value),
        }
    }

    fn text(&self, expected: &'static str) -> Result<Option<&'a str>, ParseError> {
        match self.value {
            JsonValue::Null => Ok(None),
            JsonValue::String(s) => Ok(Some(s)),
            _ => Err(self.mismatch(expected)),
        }
    }

    fn integer<T: TryFrom<i64>>(&self, expected: &'static str) -> Result<Option<T>, ParseError> {
        match self.value {
            JsonValue::Null => Ok(None),
            JsonValue::Number(n) => n
                .as_i64()
                .and_then(|v| T::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| ParseError::InvalidValue {
                    kind: expected,
                    value: n.to_string(),
                }),
            _ => Err(self.mismatch(expected)),
        }
    }

    fn boxed(value: &'a JsonValue) -> Box<dyn ParseNode + 'a> {
        Box::new(JsonParseNode::new(value))
    }
}

fn untyped(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Value::I64(i),
            (None, Some(u)) => Value::U64(u),
            (None, None) => Value::F64(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::List(items.iter().map(untyped).collect()),
        JsonValue::Object(map) => Value::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), untyped(v)))
                .collect::<AdditionalData>(),
        ),
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, ParseError> {
        Ok(self
            .value
            .as_object()
            .and_then(|map| map.get(name))
            .map(Self::boxed))
    }

    fn fields(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, ParseError> {
        match self.value {
            JsonValue::Object(map) => Ok(map
                .iter()
                .map(|(k, v)| (k.clone(), Self::boxed(v)))
                .collect()),
            _ => Err(self.mismatch("object")),
        }
    }

    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, ParseError> {
        match self.value {
            JsonValue::Null => Ok(None),
            JsonValue::Array(items) => Ok(Some(items.iter().map(Self::boxed).collect())),
            _ => Err(self.mismatch("array")),
        }
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn string_value(&self) -> Result<Option<String>, ParseError> {
        Ok(self.text("string")?.map(str::to_string))
    }

    fn bool_value(&self) -> Result<Option<bool>, ParseError> {
        match self.value {
            JsonValue::Null => Ok(None),
            JsonValue::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("bool")),
        }
    }

    fn byte_value(&self) -> Result<Option<u8>, ParseError> {
        self.integer("byte")
    }

    fn sbyte_value(&self) -> Result<Option<i8>, ParseError> {
        self.integer("sbyte")
    }

    fn i32_value(&self) -> Result<Option<i32>, ParseError> {
        self.integer("int32")
    }

    fn i64_value(&self) -> Result<Option<i64>, ParseError> {
        self.integer("int64")
    }

    fn f32_value(&self) -> Result<Option<f32>, ParseError> {
        Ok(self.f64_value()?.map(|v| v as f32))
    }

    fn f64_value(&self) -> Result<Option<f64>, ParseError> {
        match self.value {
            JsonValue::Null => Ok(None),
            JsonValue::Number(n) => n.as_f64().map(Some).ok_or_else(|| ParseError::InvalidValue {
                kind: "double",
                value: n.to_string(),
            }),
            _ => Err(self.mismatch("number")),
        }
    }

    fn byte_array_value(&self) -> Result<Option<Vec<u8>>, ParseError> {
        match self.text("base64 string")? {
            Some(s) => Ok(Some(STANDARD.decode(s)?)),
            None => Ok(None),
        }
    }

    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, ParseError> {
        match self.text("date-time string")? {
            Some(s) => Ok(Some(DateTime::parse_from_rfc3339(s)?)),
            None => Ok(None),
        }
    }

    fn date_only_value(&self) -> Result<Option<NaiveDate>, ParseError> {
        match self.text("date string")? {
            Some(s) => Ok(Some(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)),
            None => Ok(None),
        }
    }

    fn time_only_value(&self) -> Result<Option<NaiveTime>, ParseError> {
        match self.text("time string")? {
            Some(s) => Ok(Some(NaiveTime::parse_from_str(s, "%H:%M:%S%.f")?)),
            None => Ok(None),
        }
    }

    fn duration_value(&self) -> Result<Option<IsoDuration>, ParseError> {
        match self.text("duration string")? {
            Some(s) => Ok(Some(s.parse()?)),
            None => Ok(None),
        }
    }

    fn uuid_value(&self) -> Result<Option<Uuid>, ParseError> {
        match self.text("uuid string")? {
            Some(s) => Ok(Some(Uuid::parse_str(s)?)),
            None => Ok(None),
        }
    }

    fn untyped_value(&self) -> Result<Value, ParseError> {
        Ok(untyped(self.value))
    }
}
