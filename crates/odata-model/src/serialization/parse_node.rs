// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read side.

use super::Primitive;
use crate::duration::IsoDuration;
use crate::enums::ModelEnum;
use crate::error::ParseError;
use crate::model::{Model, ModelFactory};
use crate::value::Value;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

/// One node of a parsed payload.
///
/// Every typed getter returns `Ok(None)` for an explicit null and an error
/// when the node holds a value of another shape.
pub trait ParseNode {
    /// Member `name` of an object node. `None` when absent or when this is
    /// not an object.
    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, ParseError>;

    /// Members of an object node, in payload order.
    fn fields(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, ParseError>;

    /// Elements of an array node; `None` for null.
    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, ParseError>;

    fn is_null(&self) -> bool;

    fn string_value(&self) -> Result<Option<String>, ParseError>;

    fn bool_value(&self) -> Result<Option<bool>, ParseError>;

    fn byte_value(&self) -> Result<Option<u8>, ParseError>;

    fn sbyte_value(&self) -> Result<Option<i8>, ParseError>;

    fn i32_value(&self) -> Result<Option<i32>, ParseError>;

    fn i64_value(&self) -> Result<Option<i64>, ParseError>;

    fn f32_value(&self) -> Result<Option<f32>, ParseError>;

    fn f64_value(&self) -> Result<Option<f64>, ParseError>;

    fn byte_array_value(&self) -> Result<Option<Vec<u8>>, ParseError>;

    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, ParseError>;

    fn date_only_value(&self) -> Result<Option<NaiveDate>, ParseError>;

    fn time_only_value(&self) -> Result<Option<NaiveTime>, ParseError>;

    fn duration_value(&self) -> Result<Option<IsoDuration>, ParseError>;

    fn uuid_value(&self) -> Result<Option<Uuid>, ParseError>;

    /// The node as an untyped value, for additional data.
    fn untyped_value(&self) -> Result<Value, ParseError>;
}

impl<'a> dyn ParseNode + 'a {
    /// Read an object, letting `factory` pick the concrete type.
    pub fn object_value(&self, factory: ModelFactory) -> Result<Option<Box<dyn Model>>, ParseError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut model = factory(Some(self));
        deserialize_into(model.as_mut(), self)?;
        Ok(Some(model))
    }

    /// Read an enum; an unrecognised wire value is `None`.
    pub fn enum_value<E: ModelEnum>(&self) -> Result<Option<E>, ParseError> {
        let Some(wire) = self.string_value()? else {
            return Ok(None);
        };
        let parsed = E::parse(&wire);
        if parsed.is_none() {
            log::debug!("unknown {} value '{}'", E::TYPE_NAME, wire);
        }
        Ok(parsed)
    }

    /// Read an array of objects. The result is only produced when every
    /// element reads; null elements are skipped.
    pub fn collection_of_object_values(
        &self,
        factory: ModelFactory,
    ) -> Result<Option<Vec<Box<dyn Model>>>, ParseError> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut out = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if let Some(model) = node
                .object_value(factory)
                .map_err(|err| err.in_field(&index.to_string()))?
            {
                out.push(model);
            }
        }
        Ok(Some(out))
    }

    /// Read an array of primitives; null elements are skipped.
    pub fn collection_of_primitive_values<V: Primitive>(&self) -> Result<Option<Vec<V>>, ParseError> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut out = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if let Some(value) = V::read(&**node).map_err(|err| err.in_field(&index.to_string()))? {
                out.push(value);
            }
        }
        Ok(Some(out))
    }

    /// Read an array of enum values; unrecognised and null elements are
    /// skipped.
    pub fn collection_of_enum_values<E: ModelEnum>(&self) -> Result<Option<Vec<E>>, ParseError> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut out = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if let Some(value) = node
                .enum_value::<E>()
                .map_err(|err| err.in_field(&index.to_string()))?
            {
                out.push(value);
            }
        }
        Ok(Some(out))
    }
}

/// Populate `model` from an object node.
///
/// Declared fields go through the model's field deserializers; every other
/// member lands in additional data. The first failing field aborts the walk
/// and fields read before it stay set. Once the walk completes the store is
/// marked initialized, so later edits are tracked as changes.
pub fn deserialize_into(model: &mut dyn Model, node: &dyn ParseNode) -> Result<(), ParseError> {
    for (name, child) in node.fields()? {
        match model.deserialize_field(&name, &*child) {
            Some(result) => result?,
            None => {
                let value = child.untyped_value().map_err(|err| err.in_field(&name))?;
                log::trace!("{}: '{}' kept as additional data", model.type_name(), name);
                model.additional_data_mut().insert(name, value);
            }
        }
    }
    model.backing_store_mut().set_initialization_completed(true);
    Ok(())
}
