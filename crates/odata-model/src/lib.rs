// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Backing-store object model for schema-generated OData clients.
//!
//! Every model instance keeps its properties in a [`BackingStore`] and
//! exposes typed accessors over it. Deserialization goes through a
//! per-type [`FieldDeserializers`] map composed along the inheritance
//! chain, and a per-family [`DiscriminatorMap`] that picks the concrete
//! type from the `@odata.type` annotation.
//!
//! # Example
//!
//! ```
//! use odata_model::json;
//! use odata_model::models::security::{Alert, AlertSeverity};
//! use odata_model::models::Entity;
//! use odata_model::model::as_type;
//! use odata_model::Model;
//!
//! let payload = br##"{
//!     "@odata.type": "#microsoft.graph.security.alert",
//!     "id": "da637",
//!     "severity": "high",
//!     "customerTag": "blue"
//! }"##;
//!
//! let model = json::from_slice(payload, Entity::create_from_discriminator_value)
//!     .unwrap()
//!     .unwrap();
//! let alert = as_type::<Alert>(model.as_ref()).unwrap();
//! assert_eq!(alert.severity(), Some(AlertSeverity::High));
//! assert!(alert.additional_data().contains_key("customerTag"));
//! ```

pub mod duration;
pub mod enums;
pub mod error;
pub mod json;
pub mod model;
pub mod models;
pub mod serialization;
pub mod store;
pub mod value;

pub use duration::IsoDuration;
pub use enums::{FlagEnum, ModelEnum};
pub use error::{ParseError, StoreError, WriteError};
pub use model::{
    as_type, as_type_mut, DiscriminatorMap, FieldDeserializers, Model, ModelFactory,
    ODATA_TYPE_KEY,
};
pub use serialization::{deserialize_into, ParseNode, Primitive, SerializationWriter};
pub use store::{
    backing_store_factory, new_backing_store, set_backing_store_factory, BackingStore,
    BackingStoreFactory, InMemoryBackingStore, InMemoryBackingStoreFactory,
};
pub use value::{AdditionalData, EnumValue, FromValue, IntoValue, Value};
