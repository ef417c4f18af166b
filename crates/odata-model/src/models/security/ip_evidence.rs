// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::AlertEvidence;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};

/// An IP address seen in an alert.
#[derive(Debug, Clone)]
pub struct IpEvidence {
    base: AlertEvidence,
}

impl IpEvidence {
    pub fn new() -> Self {
        let mut evidence = Self {
            base: AlertEvidence::new(),
        };
        evidence.set_odata_type(Some("#microsoft.graph.security.ipEvidence".into()));
        evidence
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        /// Two-letter country code, e.g. `"US"`.
        country_letter_code / set_country_letter_code: String = "countryLetterCode";
        ip_address / set_ip_address: String = "ipAddress";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(AlertEvidence::field_deserializers(), |m| &mut m.base)
            .scalar("countryLetterCode", Self::set_country_letter_code)
            .scalar("ipAddress", Self::set_ip_address)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_string_value("countryLetterCode", self.country_letter_code().as_deref())?;
        writer.write_string_value("ipAddress", self.ip_address().as_deref())
    }
}

crate::impl_model!(IpEvidence, base = base: AlertEvidence);
