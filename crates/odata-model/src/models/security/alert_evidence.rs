// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{DeviceEvidence, EvidenceRemediationStatus, EvidenceRole, EvidenceVerdict, IpEvidence};
use crate::error::WriteError;
use crate::model::{DiscriminatorMap, FieldDeserializers, Model, ODATA_TYPE_KEY};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;
use chrono::{DateTime, FixedOffset};
use std::sync::OnceLock;

/// Base of every evidence kind attached to an alert.
#[derive(Debug, Clone)]
pub struct AlertEvidence {
    store: Box<dyn BackingStore>,
}

impl AlertEvidence {
    pub fn new() -> Self {
        let mut evidence = Self {
            store: new_backing_store(),
        };
        evidence.set_additional_data(AdditionalData::new());
        evidence
    }

    pub fn discriminators() -> &'static DiscriminatorMap {
        static MAP: OnceLock<DiscriminatorMap> = OnceLock::new();
        MAP.get_or_init(|| {
            DiscriminatorMap::new::<AlertEvidence>()
                .subtype::<DeviceEvidence>("#microsoft.graph.security.deviceEvidence")
                .subtype::<IpEvidence>("#microsoft.graph.security.ipEvidence")
        })
    }

    pub fn create_from_discriminator_value(node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        Self::discriminators().resolve(node)
    }

    properties! {
        created_date_time / set_created_date_time: DateTime<FixedOffset> = "createdDateTime";
        /// Free-form role descriptions, beyond the `roles` enum.
        detailed_roles / set_detailed_roles: Vec<String> = "detailedRoles";
        remediation_status / set_remediation_status: EvidenceRemediationStatus = "remediationStatus";
        remediation_status_details / set_remediation_status_details: String = "remediationStatusDetails";
        roles / set_roles: Vec<EvidenceRole> = "roles";
        tags / set_tags: Vec<String> = "tags";
        verdict / set_verdict: EvidenceVerdict = "verdict";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .scalar("createdDateTime", Self::set_created_date_time)
            .primitives("detailedRoles", Self::set_detailed_roles)
            .scalar(ODATA_TYPE_KEY, Self::set_odata_type)
            .enumeration("remediationStatus", Self::set_remediation_status)
            .scalar("remediationStatusDetails", Self::set_remediation_status_details)
            .enumerations("roles", Self::set_roles)
            .primitives("tags", Self::set_tags)
            .enumeration("verdict", Self::set_verdict)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_date_time_value("createdDateTime", self.created_date_time())?;
        writer.write_collection_of_string_values("detailedRoles", self.detailed_roles().as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type().as_deref())?;
        writer.write_enum_value("remediationStatus", self.remediation_status())?;
        writer.write_string_value(
            "remediationStatusDetails",
            self.remediation_status_details().as_deref(),
        )?;
        writer.write_collection_of_enum_values("roles", self.roles().as_deref())?;
        writer.write_collection_of_string_values("tags", self.tags().as_deref())?;
        writer.write_enum_value("verdict", self.verdict())
    }
}

crate::impl_model!(AlertEvidence, store);
