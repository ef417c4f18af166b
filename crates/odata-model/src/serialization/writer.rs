// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Write side.

use super::Primitive;
use crate::duration::IsoDuration;
use crate::enums::ModelEnum;
use crate::error::WriteError;
use crate::model::Model;
use crate::value::{AdditionalData, IntoValue, Value};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

/// Sink for model properties.
///
/// `None` values are skipped. An empty `key` writes an anonymous value, as
/// used for the root object and for collection elements.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), WriteError>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), WriteError>;

    fn write_byte_value(&mut self, key: &str, value: Option<u8>) -> Result<(), WriteError>;

    fn write_sbyte_value(&mut self, key: &str, value: Option<i8>) -> Result<(), WriteError>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), WriteError>;

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), WriteError>;

    fn write_f32_value(&mut self, key: &str, value: Option<f32>) -> Result<(), WriteError>;

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), WriteError>;

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), WriteError>;

    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<DateTime<FixedOffset>>,
    ) -> Result<(), WriteError>;

    fn write_date_only_value(&mut self, key: &str, value: Option<NaiveDate>)
        -> Result<(), WriteError>;

    fn write_time_only_value(&mut self, key: &str, value: Option<NaiveTime>)
        -> Result<(), WriteError>;

    fn write_duration_value(&mut self, key: &str, value: Option<IsoDuration>)
        -> Result<(), WriteError>;

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), WriteError>;

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Model>)
        -> Result<(), WriteError>;

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[Box<dyn Model>]>,
    ) -> Result<(), WriteError>;

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), WriteError>;

    /// Array of untyped values (primitive and enum collections).
    fn write_collection_of_values(
        &mut self,
        key: &str,
        values: Option<&[Value]>,
    ) -> Result<(), WriteError>;

    fn write_null_value(&mut self, key: &str) -> Result<(), WriteError>;

    /// Write any store value verbatim.
    fn write_any_value(&mut self, key: &str, value: &Value) -> Result<(), WriteError>;

    /// Write every entry of `data` as a top-level member.
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), WriteError> {
        for (key, value) in data {
            self.write_any_value(key, value)?;
        }
        Ok(())
    }
}

impl<'a> dyn SerializationWriter + 'a {
    /// Write an enum as its wire string. An empty flag set is skipped.
    pub fn write_enum_value<E: ModelEnum>(
        &mut self,
        key: &str,
        value: Option<E>,
    ) -> Result<(), WriteError> {
        match value.map(|v| v.to_wire()) {
            Some(wire) if !wire.is_empty() => self.write_string_value(key, Some(&wire)),
            _ => Ok(()),
        }
    }

    /// Write enums as an array of wire strings.
    pub fn write_collection_of_enum_values<E: ModelEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<(), WriteError> {
        let Some(values) = values else {
            return Ok(());
        };
        let wires: Vec<String> = values
            .iter()
            .map(ModelEnum::to_wire)
            .filter(|wire| !wire.is_empty())
            .collect();
        self.write_collection_of_string_values(key, Some(&wires))
    }

    /// Write primitives as an array.
    pub fn write_collection_of_primitive_values<V: Primitive>(
        &mut self,
        key: &str,
        values: Option<&[V]>,
    ) -> Result<(), WriteError> {
        let Some(values) = values else {
            return Ok(());
        };
        let items: Vec<Value> = values.iter().cloned().map(IntoValue::into_value).collect();
        self.write_collection_of_values(key, Some(&items))
    }
}
