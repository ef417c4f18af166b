// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{Host, Hostname, IpAddress};
use crate::error::WriteError;
use crate::model::{DiscriminatorMap, FieldDeserializers, Model};
use crate::models::Entity;
use crate::serialization::{ParseNode, SerializationWriter};
use std::sync::OnceLock;

/// Threat intelligence artifact. Declares no properties of its own.
#[derive(Debug, Clone)]
pub struct Artifact {
    base: Entity,
}

impl Artifact {
    pub fn new() -> Self {
        let mut artifact = Self { base: Entity::new() };
        artifact.set_odata_type(Some("#microsoft.graph.security.artifact".into()));
        artifact
    }

    pub fn discriminators() -> &'static DiscriminatorMap {
        static MAP: OnceLock<DiscriminatorMap> = OnceLock::new();
        MAP.get_or_init(|| {
            DiscriminatorMap::new::<Artifact>()
                .subtype::<Host>("#microsoft.graph.security.host")
                .subtype::<Hostname>("#microsoft.graph.security.hostname")
                .subtype::<IpAddress>("#microsoft.graph.security.ipAddress")
        })
    }

    pub fn create_from_discriminator_value(node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        Self::discriminators().resolve(node)
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(Entity::field_deserializers(), |m| &mut m.base)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)
    }
}

crate::impl_model!(Artifact, base = base: Entity);
