// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::security::{Alert, Artifact, Host, Hostname, IpAddress};
use super::{AppRoleAssignment, Attachment, DirectoryObject, FileAttachment};
use crate::error::WriteError;
use crate::model::{DiscriminatorMap, FieldDeserializers, Model, ODATA_TYPE_KEY};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;
use std::sync::OnceLock;

/// Root of every addressable Graph resource.
#[derive(Debug, Clone)]
pub struct Entity {
    store: Box<dyn BackingStore>,
}

impl Entity {
    pub fn new() -> Self {
        let mut entity = Self {
            store: new_backing_store(),
        };
        entity.set_additional_data(AdditionalData::new());
        entity
    }

    /// Subtypes reachable from an `entity`-typed property.
    pub fn discriminators() -> &'static DiscriminatorMap {
        static MAP: OnceLock<DiscriminatorMap> = OnceLock::new();
        MAP.get_or_init(|| {
            DiscriminatorMap::new::<Entity>()
                .subtype::<DirectoryObject>("#microsoft.graph.directoryObject")
                .subtype::<AppRoleAssignment>("#microsoft.graph.appRoleAssignment")
                .subtype::<Attachment>("#microsoft.graph.attachment")
                .subtype::<FileAttachment>("#microsoft.graph.fileAttachment")
                .subtype::<Alert>("#microsoft.graph.security.alert")
                .subtype::<Artifact>("#microsoft.graph.security.artifact")
                .subtype::<Host>("#microsoft.graph.security.host")
                .subtype::<Hostname>("#microsoft.graph.security.hostname")
                .subtype::<IpAddress>("#microsoft.graph.security.ipAddress")
        })
    }

    pub fn create_from_discriminator_value(node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        Self::discriminators().resolve(node)
    }

    properties! {
        /// Unique identifier. Read-only on the service side.
        id / set_id: String = "id";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .scalar("id", Self::set_id)
            .scalar(ODATA_TYPE_KEY, Self::set_odata_type)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_string_value("id", self.id().as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type().as_deref())
    }
}

crate::impl_model!(Entity, store);
