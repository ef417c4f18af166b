// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::Host;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};

#[derive(Debug, Clone)]
pub struct IpAddress {
    base: Host,
}

impl IpAddress {
    pub fn new() -> Self {
        let mut address = Self { base: Host::new() };
        address.set_odata_type(Some("#microsoft.graph.security.ipAddress".into()));
        address
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        country_or_region / set_country_or_region: String = "countryOrRegion";
        hosting_provider / set_hosting_provider: String = "hostingProvider";
        /// Block of addresses this one belongs to, in CIDR form.
        netblock / set_netblock: String = "netblock";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(Host::field_deserializers(), |m| &mut m.base)
            .scalar("countryOrRegion", Self::set_country_or_region)
            .scalar("hostingProvider", Self::set_hosting_provider)
            .scalar("netblock", Self::set_netblock)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_string_value("countryOrRegion", self.country_or_region().as_deref())?;
        writer.write_string_value("hostingProvider", self.hosting_provider().as_deref())?;
        writer.write_string_value("netblock", self.netblock().as_deref())
    }
}

crate::impl_model!(IpAddress, base = base: Host);
