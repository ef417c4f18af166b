// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{Artifact, Hostname, IpAddress};
use crate::error::WriteError;
use crate::model::{DiscriminatorMap, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};
use chrono::{DateTime, FixedOffset};
use std::sync::OnceLock;

/// Host observed on the internet (hostname or IP address).
#[derive(Debug, Clone)]
pub struct Host {
    base: Artifact,
}

impl Host {
    pub fn new() -> Self {
        let mut host = Self {
            base: Artifact::new(),
        };
        host.set_odata_type(Some("#microsoft.graph.security.host".into()));
        host
    }

    pub fn discriminators() -> &'static DiscriminatorMap {
        static MAP: OnceLock<DiscriminatorMap> = OnceLock::new();
        MAP.get_or_init(|| {
            DiscriminatorMap::new::<Host>()
                .subtype::<Hostname>("#microsoft.graph.security.hostname")
                .subtype::<IpAddress>("#microsoft.graph.security.ipAddress")
        })
    }

    pub fn create_from_discriminator_value(node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        Self::discriminators().resolve(node)
    }

    properties! {
        first_seen_date_time / set_first_seen_date_time: DateTime<FixedOffset> = "firstSeenDateTime";
        last_seen_date_time / set_last_seen_date_time: DateTime<FixedOffset> = "lastSeenDateTime";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(Artifact::field_deserializers(), |m| &mut m.base)
            .scalar("firstSeenDateTime", Self::set_first_seen_date_time)
            .scalar("lastSeenDateTime", Self::set_last_seen_date_time)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_date_time_value("firstSeenDateTime", self.first_seen_date_time())?;
        writer.write_date_time_value("lastSeenDateTime", self.last_seen_date_time())
    }
}

crate::impl_model!(Host, base = base: Artifact);
