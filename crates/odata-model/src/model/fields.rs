// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field deserializer maps.
//!
//! A derived type starts from its base type's map ([`FieldDeserializers::extend`])
//! and adds its own entries, so every base field stays readable through the
//! derived type.

use crate::enums::ModelEnum;
use crate::error::ParseError;
use crate::model::{Model, ModelFactory};
use crate::serialization::{ParseNode, Primitive};
use indexmap::IndexMap;
use std::fmt;

/// Reads one field from a parse node into a model.
pub type FieldFn<T> = Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), ParseError> + Send + Sync>;

fn boxed<T, F>(f: F) -> FieldFn<T>
where
    F: Fn(&mut T, &dyn ParseNode) -> Result<(), ParseError> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Wire name to field reader, in declaration order.
pub struct FieldDeserializers<T: 'static> {
    fields: IndexMap<&'static str, FieldFn<T>>,
}

impl<T: Model> FieldDeserializers<T> {
    /// An empty map, for root types.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Start from the map of base type `B`; `base` projects a `T` onto its
    /// base part.
    pub fn extend<B: Model>(inherited: FieldDeserializers<B>, base: fn(&mut T) -> &mut B) -> Self {
        let fields = inherited
            .fields
            .into_iter()
            .map(|(name, read)| {
                let projected = boxed(move |model: &mut T, node: &dyn ParseNode| {
                    read(base(model), node)
                });
                (name, projected)
            })
            .collect();
        Self { fields }
    }

    /// Add a field with a hand-written reader.
    ///
    /// An existing entry with the same name is replaced in place.
    pub fn field<F>(mut self, name: &'static str, read: F) -> Self
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<(), ParseError> + Send + Sync + 'static,
    {
        self.fields.insert(name, boxed(read));
        self
    }

    /// Scalar field (string, number, bool, temporal, UUID, bytes).
    pub fn scalar<V: Primitive>(self, name: &'static str, set: fn(&mut T, Option<V>)) -> Self {
        self.field(name, move |model, node| {
            if let Some(value) = V::read(node)? {
                set(model, Some(value));
            }
            Ok(())
        })
    }

    /// Enum field; unknown wire values leave the property unset.
    pub fn enumeration<E: ModelEnum>(self, name: &'static str, set: fn(&mut T, Option<E>)) -> Self {
        self.field(name, move |model, node| {
            if let Some(value) = node.enum_value::<E>()? {
                set(model, Some(value));
            }
            Ok(())
        })
    }

    /// Nested object, resolved through `factory`.
    pub fn object(
        self,
        name: &'static str,
        factory: ModelFactory,
        set: fn(&mut T, Option<Box<dyn Model>>),
    ) -> Self {
        self.field(name, move |model, node| {
            if let Some(value) = node.object_value(factory)? {
                set(model, Some(value));
            }
            Ok(())
        })
    }

    /// Collection of nested objects; stored only when every element reads.
    pub fn objects(
        self,
        name: &'static str,
        factory: ModelFactory,
        set: fn(&mut T, Option<Vec<Box<dyn Model>>>),
    ) -> Self {
        self.field(name, move |model, node| {
            if let Some(values) = node.collection_of_object_values(factory)? {
                set(model, Some(values));
            }
            Ok(())
        })
    }

    /// Collection of primitive values.
    pub fn primitives<V: Primitive>(
        self,
        name: &'static str,
        set: fn(&mut T, Option<Vec<V>>),
    ) -> Self {
        self.field(name, move |model, node| {
            if let Some(values) = node.collection_of_primitive_values::<V>()? {
                set(model, Some(values));
            }
            Ok(())
        })
    }

    /// Collection of enum values.
    pub fn enumerations<E: ModelEnum>(
        self,
        name: &'static str,
        set: fn(&mut T, Option<Vec<E>>),
    ) -> Self {
        self.field(name, move |model, node| {
            if let Some(values) = node.collection_of_enum_values::<E>()? {
                set(model, Some(values));
            }
            Ok(())
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Wire names in declaration order, base type names first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Run the reader for `name`; `None` when the field is not declared.
    pub fn deserialize(
        &self,
        model: &mut T,
        name: &str,
        node: &dyn ParseNode,
    ) -> Option<Result<(), ParseError>> {
        self.fields
            .get(name)
            .map(|read| read(model, node).map_err(|err| err.in_field(name)))
    }
}

impl<T: Model> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.fields.keys()).finish()
    }
}
