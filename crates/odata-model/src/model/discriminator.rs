// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Polymorphic dispatch on `@odata.type`.
//!
//! Each polymorphic base type owns one [`DiscriminatorMap`] listing the
//! subtypes it can stand for. Resolution never fails: a missing, unreadable
//! or unknown discriminator yields the base type.

use crate::model::{Model, ODATA_TYPE_KEY};
use crate::serialization::ParseNode;
use std::collections::HashMap;
use std::fmt;

/// Construct a default instance of `T` behind a trait object.
pub fn construct<T: Model + Default>() -> Box<dyn Model> {
    Box::new(T::default())
}

/// Read the `@odata.type` value of an object node, if any.
///
/// Read failures are logged and treated as an absent discriminator.
pub fn discriminator_value(node: &dyn ParseNode) -> Option<String> {
    let child = match node.child_node(ODATA_TYPE_KEY) {
        Ok(child) => child?,
        Err(err) => {
            log::debug!("cannot read {}: {}", ODATA_TYPE_KEY, err);
            return None;
        }
    };
    match child.string_value() {
        Ok(value) => value,
        Err(err) => {
            log::debug!("cannot read {}: {}", ODATA_TYPE_KEY, err);
            None
        }
    }
}

/// Discriminator value to constructor, for one base type.
pub struct DiscriminatorMap {
    base_name: &'static str,
    base: fn() -> Box<dyn Model>,
    subtypes: HashMap<&'static str, fn() -> Box<dyn Model>>,
}

impl DiscriminatorMap {
    /// A map whose fallback is the base type `T`.
    pub fn new<T: Model + Default>() -> Self {
        Self {
            base_name: std::any::type_name::<T>(),
            base: construct::<T>,
            subtypes: HashMap::new(),
        }
    }

    /// Register subtype `S` under discriminator `tag` (`#namespace.typeName`).
    pub fn subtype<S: Model + Default>(mut self, tag: &'static str) -> Self {
        self.subtypes.insert(tag, construct::<S>);
        self
    }

    /// Build the instance for `node`.
    pub fn resolve(&self, node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        let Some(tag) = node.and_then(discriminator_value) else {
            return (self.base)();
        };
        match self.subtypes.get(tag.as_str()) {
            Some(ctor) => ctor(),
            None => {
                log::debug!(
                    "unknown discriminator '{}', falling back to {}",
                    tag,
                    self.base_name
                );
                (self.base)()
            }
        }
    }

    /// Whether `tag` resolves to a registered subtype.
    pub fn contains(&self, tag: &str) -> bool {
        self.subtypes.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.subtypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtypes.is_empty()
    }
}

impl fmt::Debug for DiscriminatorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.subtypes.keys().collect();
        tags.sort();
        f.debug_struct("DiscriminatorMap")
            .field("base", &self.base_name)
            .field("subtypes", &tags)
            .finish()
    }
}
