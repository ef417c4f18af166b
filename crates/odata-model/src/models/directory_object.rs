// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{AppRoleAssignment, Entity};
use crate::error::WriteError;
use crate::model::{DiscriminatorMap, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};
use chrono::{DateTime, FixedOffset};
use std::sync::OnceLock;

/// Directory object (users, groups, assignments).
#[derive(Debug, Clone)]
pub struct DirectoryObject {
    base: Entity,
}

impl DirectoryObject {
    pub fn new() -> Self {
        let mut object = Self { base: Entity::new() };
        object.set_odata_type(Some("#microsoft.graph.directoryObject".into()));
        object
    }

    pub fn discriminators() -> &'static DiscriminatorMap {
        static MAP: OnceLock<DiscriminatorMap> = OnceLock::new();
        MAP.get_or_init(|| {
            DiscriminatorMap::new::<DirectoryObject>()
                .subtype::<AppRoleAssignment>("#microsoft.graph.appRoleAssignment")
        })
    }

    pub fn create_from_discriminator_value(node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        Self::discriminators().resolve(node)
    }

    properties! {
        /// When the object was soft-deleted; absent for live objects.
        deleted_date_time / set_deleted_date_time: DateTime<FixedOffset> = "deletedDateTime";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(Entity::field_deserializers(), |m| &mut m.base)
            .scalar("deletedDateTime", Self::set_deleted_date_time)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_date_time_value("deletedDateTime", self.deleted_date_time())
    }
}

crate::impl_model!(DirectoryObject, base = base: Entity);
