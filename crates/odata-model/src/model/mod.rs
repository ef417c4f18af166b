// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The model capability set.
//!
//! A model type is a thin facade over a [`BackingStore`]. Types that extend
//! another type hold their base by value and report it from
//! [`Model::parent`], so [`as_type`] can view any instance as one of its
//! ancestors.

mod discriminator;
mod fields;
mod macros;

pub use discriminator::{construct, discriminator_value, DiscriminatorMap};
pub use fields::{FieldDeserializers, FieldFn};

use crate::error::{ParseError, WriteError};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::BackingStore;
use crate::value::{AdditionalData, Value};
use std::any::Any;
use std::fmt;
use std::sync::OnceLock;

/// Wire name of the type discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Store slot holding the discriminator value.
pub const ODATA_TYPE_SLOT: &str = "odataType";

/// Store slot holding additional data.
pub const ADDITIONAL_DATA_SLOT: &str = "additionalData";

/// Build a model instance for a parse node, inspecting its discriminator.
pub type ModelFactory = fn(Option<&dyn ParseNode>) -> Box<dyn Model>;

/// Capabilities shared by every model type.
///
/// Implementations are generated with [`impl_model!`](crate::impl_model);
/// the provided methods cover additional data and the discriminator slot.
pub trait Model: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The base part of a derived type, `None` for a root type.
    fn parent(&self) -> Option<&dyn Model>;

    fn parent_mut(&mut self) -> Option<&mut dyn Model>;

    /// Rust name of the concrete type.
    fn type_name(&self) -> &'static str;

    fn backing_store(&self) -> &dyn BackingStore;

    fn backing_store_mut(&mut self) -> &mut dyn BackingStore;

    /// Swap the store behind this instance (and every base part).
    fn set_backing_store(&mut self, store: Box<dyn BackingStore>);

    /// Wire names this type knows how to read, base type names first.
    fn field_names(&self) -> Vec<&'static str>;

    /// Read one field. `None` when `name` is not a declared field.
    fn deserialize_field(
        &mut self,
        name: &str,
        node: &dyn ParseNode,
    ) -> Option<Result<(), ParseError>>;

    /// Write declared properties, base type first.
    fn serialize_properties(&self, writer: &mut dyn SerializationWriter)
        -> Result<(), WriteError>;

    fn clone_model(&self) -> Box<dyn Model>;

    /// Write declared properties followed by additional data.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), WriteError> {
        self.serialize_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }

    /// Undeclared properties. Never absent: an empty map when nothing was
    /// captured.
    fn additional_data(&self) -> &AdditionalData {
        self.backing_store()
            .map(ADDITIONAL_DATA_SLOT)
            .unwrap_or_else(|| empty_additional_data())
    }

    /// Mutable additional data, created on first access.
    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        let slot = self
            .backing_store_mut()
            .slot_or_insert_with(ADDITIONAL_DATA_SLOT, || Value::Map(AdditionalData::new()));
        match slot {
            Value::Map(map) => map,
            other => crate::store::fatal(
                ADDITIONAL_DATA_SLOT,
                crate::error::StoreError::TypeMismatch {
                    key: ADDITIONAL_DATA_SLOT.to_string(),
                    expected: "map",
                    found: other.kind(),
                },
            ),
        }
    }

    fn set_additional_data(&mut self, data: AdditionalData) {
        self.backing_store_mut().put(ADDITIONAL_DATA_SLOT, Some(data));
    }

    /// The `@odata.type` value stored on this instance.
    fn odata_type(&self) -> Option<String> {
        self.backing_store().value(ODATA_TYPE_SLOT)
    }

    fn set_odata_type(&mut self, value: Option<String>) {
        self.backing_store_mut().put(ODATA_TYPE_SLOT, value);
    }
}

fn empty_additional_data() -> &'static AdditionalData {
    static EMPTY: OnceLock<AdditionalData> = OnceLock::new();
    EMPTY.get_or_init(AdditionalData::new)
}

impl Clone for Box<dyn Model> {
    fn clone(&self) -> Self {
        self.clone_model()
    }
}

impl PartialEq for dyn Model {
    /// Same concrete type and the same stored values.
    fn eq(&self, other: &Self) -> bool {
        if self.as_any().type_id() != other.as_any().type_id() {
            return false;
        }
        let mine = self.backing_store().enumerate();
        let theirs = other.backing_store().enumerate();
        mine.len() == theirs.len()
            && mine
                .iter()
                .all(|(key, value)| theirs.iter().any(|(k, v)| k == key && v == value))
    }
}

/// View a model as `T`, walking up the base chain.
///
/// ```
/// use odata_model::model::as_type;
/// use odata_model::models::security::{Artifact, Hostname};
///
/// let hostname = Hostname::new();
/// assert!(as_type::<Artifact>(&hostname).is_some());
/// ```
pub fn as_type<T: Model>(model: &dyn Model) -> Option<&T> {
    let mut current = Some(model);
    while let Some(m) = current {
        if let Some(found) = m.as_any().downcast_ref::<T>() {
            return Some(found);
        }
        current = m.parent();
    }
    None
}

/// Mutable counterpart of [`as_type`].
pub fn as_type_mut<T: Model>(model: &mut dyn Model) -> Option<&mut T> {
    if model.as_any().is::<T>() {
        return model.as_any_mut().downcast_mut::<T>();
    }
    model.parent_mut().and_then(as_type_mut::<T>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::security::{Artifact, Host, Hostname, IpAddress};
    use crate::models::Entity;

    #[test]
    fn additional_data_is_never_absent() {
        let entity = Entity::new();
        assert!(entity.additional_data().is_empty());

        let mut entity = Entity::new();
        entity.backing_store_mut().clear();
        assert!(entity.additional_data().is_empty());
        entity
            .additional_data_mut()
            .insert("note".into(), Value::String("x".into()));
        assert_eq!(
            entity.additional_data().get("note"),
            Some(&Value::String("x".into()))
        );
    }

    #[test]
    fn set_additional_data_replaces_map() {
        let mut entity = Entity::new();
        let mut data = AdditionalData::new();
        data.insert("a".into(), Value::I64(1));
        data.insert("b".into(), Value::Bool(false));
        entity.set_additional_data(data.clone());
        assert_eq!(entity.additional_data(), &data);
    }

    #[test]
    fn as_type_walks_the_chain() {
        let hostname = Hostname::new();
        assert!(as_type::<Hostname>(&hostname).is_some());
        assert!(as_type::<Host>(&hostname).is_some());
        assert!(as_type::<Artifact>(&hostname).is_some());
        assert!(as_type::<Entity>(&hostname).is_some());
        assert!(as_type::<IpAddress>(&hostname).is_none());
    }

    #[test]
    fn as_type_mut_reaches_base() {
        let mut boxed: Box<dyn Model> = Box::new(IpAddress::new());
        as_type_mut::<Entity>(boxed.as_mut())
            .unwrap()
            .set_id(Some("ip-1".into()));
        assert_eq!(
            as_type::<IpAddress>(boxed.as_ref()).unwrap().id(),
            Some("ip-1".to_string())
        );
    }

    #[test]
    fn equality_compares_type_and_values() {
        let mut a: Box<dyn Model> = Box::new(Host::new());
        let b: Box<dyn Model> = Box::new(Host::new());
        assert_eq!(&a, &b);
        as_type_mut::<Entity>(a.as_mut())
            .unwrap()
            .set_id(Some("h".into()));
        assert_ne!(&a, &b);

        let c: Box<dyn Model> = Box::new(Hostname::new());
        assert_ne!(&b, &c);
    }

    #[test]
    fn clone_is_deep() {
        let mut original = Host::new();
        original.set_id(Some("one".into()));
        let mut copy = original.clone();
        copy.set_id(Some("two".into()));
        assert_eq!(original.id(), Some("one".to_string()));
        assert_eq!(copy.id(), Some("two".to_string()));
    }
}
