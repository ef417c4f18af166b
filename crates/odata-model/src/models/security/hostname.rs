// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::Host;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};

#[derive(Debug, Clone)]
pub struct Hostname {
    base: Host,
}

impl Hostname {
    pub fn new() -> Self {
        let mut hostname = Self { base: Host::new() };
        hostname.set_odata_type(Some("#microsoft.graph.security.hostname".into()));
        hostname
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        /// Company or individual who registered the hostname (WHOIS).
        registrant / set_registrant: String = "registrant";
        registrar / set_registrar: String = "registrar";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(Host::field_deserializers(), |m| &mut m.base)
            .scalar("registrant", Self::set_registrant)
            .scalar("registrar", Self::set_registrar)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_string_value("registrant", self.registrant().as_deref())?;
        writer.write_string_value("registrar", self.registrar().as_deref())
    }
}

crate::impl_model!(Hostname, base = base: Host);
