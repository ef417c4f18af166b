// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! [`SerializationWriter`] producing `serde_json::Value`.

use crate::duration::IsoDuration;
use crate::error::WriteError;
use crate::model::Model;
use crate::serialization::SerializationWriter;
use crate::value::Value;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde_json::{Map, Number, Value as JsonValue};
use uuid::Uuid;

/// Output options for [`JsonSerializationWriter::content`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonWriterOptions {
    /// Indented output instead of compact.
    pub pretty: bool,
}

impl JsonWriterOptions {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug)]
enum Frame {
    Object(Map<String, JsonValue>),
    Array(Vec<JsonValue>),
}

/// Builds a JSON document from nested writer calls.
///
/// Objects and arrays open a frame; values land in the innermost frame
/// under their key, or become the document root when no frame is open.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    options: JsonWriterOptions,
    stack: Vec<Frame>,
    root: Option<JsonValue>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: JsonWriterOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The finished document.
    pub fn into_value(self) -> Result<JsonValue, WriteError> {
        if !self.stack.is_empty() {
            return Err(WriteError::InvalidState(format!(
                "{} unterminated frame(s)",
                self.stack.len()
            )));
        }
        self.root
            .ok_or_else(|| WriteError::InvalidState("nothing was written".into()))
    }

    /// The finished document as bytes, compact or pretty per options.
    pub fn content(self) -> Result<Vec<u8>, WriteError> {
        let pretty = self.options.pretty;
        let value = self.into_value()?;
        let bytes = if pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        Ok(bytes)
    }

    fn emit(&mut self, key: &str, value: JsonValue) -> Result<(), WriteError> {
        match self.stack.last_mut() {
            Some(Frame::Object(map)) => {
                if key.is_empty() {
                    return Err(WriteError::InvalidState(
                        "anonymous value inside an object".into(),
                    ));
                }
                map.insert(key.to_string(), value);
            }
            Some(Frame::Array(items)) => items.push(value),
            None => {
                if self.root.is_some() {
                    return Err(WriteError::InvalidState("root value already written".into()));
                }
                self.root = Some(value);
            }
        }
        Ok(())
    }

    fn close(&mut self) -> Result<JsonValue, WriteError> {
        match self.stack.pop() {
            Some(Frame::Object(map)) => Ok(JsonValue::Object(map)),
            Some(Frame::Array(items)) => Ok(JsonValue::Array(items)),
            None => Err(WriteError::InvalidState("no open frame".into())),
        }
    }

    fn float(key: &str, value: f64) -> Result<JsonValue, WriteError> {
        Number::from_f64(value)
            .map(JsonValue::Number)
            .ok_or_else(|| WriteError::NonFiniteNumber(key.to_string()))
    }

    fn scalar(key: &str, value: &Value) -> Result<JsonValue, WriteError> {
        Ok(match value {
            Value::Bool(v) => JsonValue::Bool(*v),
            Value::U8(v) => JsonValue::from(*v),
            Value::I8(v) => JsonValue::from(*v),
            Value::I32(v) => JsonValue::from(*v),
            Value::I64(v) => JsonValue::from(*v),
            Value::U64(v) => JsonValue::from(*v),
            Value::F32(v) => Self::float(key, widen(*v))?,
            Value::F64(v) => Self::float(key, *v)?,
            Value::String(v) => JsonValue::String(v.clone()),
            Value::Bytes(v) => JsonValue::String(STANDARD.encode(v)),
            Value::DateTime(v) => JsonValue::String(format_date_time(v)),
            Value::Date(v) => JsonValue::String(v.format("%Y-%m-%d").to_string()),
            Value::Time(v) => JsonValue::String(v.to_string()),
            Value::Duration(v) => JsonValue::String(v.to_string()),
            Value::Uuid(v) => JsonValue::String(v.hyphenated().to_string()),
            Value::Enum(v) => JsonValue::String(v.wire.clone()),
            Value::Null => JsonValue::Null,
            Value::List(_) | Value::Map(_) | Value::Object(_) | Value::Objects(_) => {
                return Err(WriteError::InvalidState(format!(
                    "'{key}' is a composite value"
                )))
            }
        })
    }
}

/// Widen through the shortest decimal form so `0.1f32` stays `0.1` on the wire.
fn widen(value: f32) -> f64 {
    value.to_string().parse().unwrap_or_else(|_| f64::from(value))
}

fn format_date_time(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::String(v.to_string())),
            None => Ok(()),
        }
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::Bool(v)),
            None => Ok(()),
        }
    }

    fn write_byte_value(&mut self, key: &str, value: Option<u8>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::from(v)),
            None => Ok(()),
        }
    }

    fn write_sbyte_value(&mut self, key: &str, value: Option<i8>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::from(v)),
            None => Ok(()),
        }
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::from(v)),
            None => Ok(()),
        }
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::from(v)),
            None => Ok(()),
        }
    }

    fn write_f32_value(&mut self, key: &str, value: Option<f32>) -> Result<(), WriteError> {
        self.write_f64_value(key, value.map(widen))
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), WriteError> {
        match value {
            Some(v) => {
                let number = Self::float(key, v)?;
                self.emit(key, number)
            }
            None => Ok(()),
        }
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::String(STANDARD.encode(v))),
            None => Ok(()),
        }
    }

    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<DateTime<FixedOffset>>,
    ) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::String(format_date_time(&v))),
            None => Ok(()),
        }
    }

    fn write_date_only_value(&mut self, key: &str, value: Option<NaiveDate>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::String(v.format("%Y-%m-%d").to_string())),
            None => Ok(()),
        }
    }

    fn write_time_only_value(&mut self, key: &str, value: Option<NaiveTime>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::String(v.to_string())),
            None => Ok(()),
        }
    }

    fn write_duration_value(
        &mut self,
        key: &str,
        value: Option<IsoDuration>,
    ) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::String(v.to_string())),
            None => Ok(()),
        }
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), WriteError> {
        match value {
            Some(v) => self.emit(key, JsonValue::String(v.hyphenated().to_string())),
            None => Ok(()),
        }
    }

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Model>) -> Result<(), WriteError> {
        let Some(model) = value else {
            return Ok(());
        };
        self.stack.push(Frame::Object(Map::new()));
        model.serialize(self)?;
        let object = self.close()?;
        self.emit(key, object)
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[Box<dyn Model>]>,
    ) -> Result<(), WriteError> {
        let Some(models) = values else {
            return Ok(());
        };
        self.stack.push(Frame::Array(Vec::with_capacity(models.len())));
        for model in models {
            self.write_object_value("", Some(&**model))?;
        }
        let array = self.close()?;
        self.emit(key, array)
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), WriteError> {
        match values {
            Some(items) => self.emit(
                key,
                JsonValue::Array(items.iter().cloned().map(JsonValue::String).collect()),
            ),
            None => Ok(()),
        }
    }

    fn write_collection_of_values(
        &mut self,
        key: &str,
        values: Option<&[Value]>,
    ) -> Result<(), WriteError> {
        let Some(items) = values else {
            return Ok(());
        };
        self.stack.push(Frame::Array(Vec::with_capacity(items.len())));
        for item in items {
            self.write_any_value("", item)?;
        }
        let array = self.close()?;
        self.emit(key, array)
    }

    fn write_null_value(&mut self, key: &str) -> Result<(), WriteError> {
        self.emit(key, JsonValue::Null)
    }

    fn write_any_value(&mut self, key: &str, value: &Value) -> Result<(), WriteError> {
        match value {
            Value::Object(model) => self.write_object_value(key, Some(&**model)),
            Value::Objects(models) => {
                self.write_collection_of_object_values(key, Some(models.as_slice()))
            }
            Value::List(items) => self.write_collection_of_values(key, Some(items.as_slice())),
            Value::Map(map) => {
                self.stack.push(Frame::Object(Map::new()));
                self.write_additional_data(map)?;
                let object = self.close()?;
                self.emit(key, object)
            }
            scalar => {
                let json = Self::scalar(key, scalar)?;
                self.emit(key, json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AdditionalData;
    use serde_json::json;

    fn written(f: impl FnOnce(&mut JsonSerializationWriter) -> Result<(), WriteError>) -> JsonValue {
        let mut writer = JsonSerializationWriter::new();
        writer.stack.push(Frame::Object(Map::new()));
        f(&mut writer).unwrap();
        let object = writer.close().unwrap();
        writer.emit("", object).unwrap();
        writer.into_value().unwrap()
    }

    #[test]
    fn none_values_are_skipped() {
        let value = written(|w| {
            w.write_string_value("a", None)?;
            w.write_i32_value("b", None)?;
            w.write_collection_of_string_values("c", None)?;
            w.write_object_value("d", None)
        });
        assert_eq!(value, json!({}));
    }

    #[test]
    fn scalars_use_wire_formats() {
        let at = DateTime::parse_from_rfc3339("2024-03-01T10:15:00Z").unwrap();
        let value = written(|w| {
            w.write_string_value("s", Some("x"))?;
            w.write_byte_value("b", Some(255))?;
            w.write_f32_value("f", Some(0.25))?;
            w.write_byte_array_value("blob", Some(b"hello"))?;
            w.write_date_time_value("at", Some(at))?;
            w.write_date_only_value("day", NaiveDate::from_ymd_opt(2024, 2, 29))?;
            w.write_time_only_value("time", NaiveTime::from_hms_opt(8, 30, 0))?;
            w.write_duration_value("d", Some(IsoDuration::from_millis(1_500)))?;
            w.write_null_value("n")
        });
        assert_eq!(
            value,
            json!({
                "s": "x",
                "b": 255,
                "f": 0.25,
                "blob": "aGVsbG8=",
                "at": "2024-03-01T10:15:00Z",
                "day": "2024-02-29",
                "time": "08:30:00",
                "d": "PT1.5S",
                "n": null
            })
        );
    }

    #[test]
    fn f32_keeps_its_decimal_form() {
        let value = written(|w| w.write_f32_value("jitter", Some(0.1)));
        assert_eq!(value, json!({"jitter": 0.1}));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut writer = JsonSerializationWriter::new();
        writer.stack.push(Frame::Object(Map::new()));
        let err = writer.write_f64_value("ratio", Some(f64::NAN)).unwrap_err();
        assert!(matches!(err, WriteError::NonFiniteNumber(ref key) if key == "ratio"));
    }

    #[test]
    fn anonymous_member_is_an_error() {
        let mut writer = JsonSerializationWriter::new();
        writer.stack.push(Frame::Object(Map::new()));
        assert!(matches!(
            writer.write_string_value("", Some("x")),
            Err(WriteError::InvalidState(_))
        ));
    }

    #[test]
    fn nested_additional_data() {
        let mut inner = AdditionalData::new();
        inner.insert("depth".into(), Value::I64(2));
        let mut data = AdditionalData::new();
        data.insert("tags".into(), Value::List(vec![Value::String("a".into()), Value::Null]));
        data.insert("meta".into(), Value::Map(inner));

        let value = written(|w| w.write_additional_data(&data));
        assert_eq!(value, json!({"tags": ["a", null], "meta": {"depth": 2}}));
    }

    #[test]
    fn empty_writer_has_no_content() {
        assert!(JsonSerializationWriter::new().into_value().is_err());
    }

    #[test]
    fn pretty_output_is_indented() {
        let mut writer = JsonSerializationWriter::with_options(JsonWriterOptions::pretty());
        writer.write_any_value("", &Value::List(vec![Value::I32(1)])).unwrap();
        let text = String::from_utf8(writer.content().unwrap()).unwrap();
        assert_eq!(text, "[\n  1\n]");
    }
}
