// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::DirectoryObject;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// Grant of an app role to a user, group or service principal.
#[derive(Debug, Clone)]
pub struct AppRoleAssignment {
    base: DirectoryObject,
}

impl AppRoleAssignment {
    pub fn new() -> Self {
        let mut assignment = Self {
            base: DirectoryObject::new(),
        };
        assignment.set_odata_type(Some("#microsoft.graph.appRoleAssignment".into()));
        assignment
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        /// Role identifier on the resource service principal. The empty UUID
        /// stands for the default access role.
        app_role_id / set_app_role_id: Uuid = "appRoleId";
        created_date_time / set_created_date_time: DateTime<FixedOffset> = "createdDateTime";
        principal_display_name / set_principal_display_name: String = "principalDisplayName";
        principal_id / set_principal_id: Uuid = "principalId";
        /// `User`, `Group` or `ServicePrincipal`.
        principal_type / set_principal_type: String = "principalType";
        resource_display_name / set_resource_display_name: String = "resourceDisplayName";
        resource_id / set_resource_id: Uuid = "resourceId";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(DirectoryObject::field_deserializers(), |m| &mut m.base)
            .scalar("appRoleId", Self::set_app_role_id)
            .scalar("createdDateTime", Self::set_created_date_time)
            .scalar("principalDisplayName", Self::set_principal_display_name)
            .scalar("principalId", Self::set_principal_id)
            .scalar("principalType", Self::set_principal_type)
            .scalar("resourceDisplayName", Self::set_resource_display_name)
            .scalar("resourceId", Self::set_resource_id)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_uuid_value("appRoleId", self.app_role_id())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time())?;
        writer.write_string_value("principalDisplayName", self.principal_display_name().as_deref())?;
        writer.write_uuid_value("principalId", self.principal_id())?;
        writer.write_string_value("principalType", self.principal_type().as_deref())?;
        writer.write_string_value("resourceDisplayName", self.resource_display_name().as_deref())?;
        writer.write_uuid_value("resourceId", self.resource_id())
    }
}

crate::impl_model!(AppRoleAssignment, base = base: DirectoryObject);
