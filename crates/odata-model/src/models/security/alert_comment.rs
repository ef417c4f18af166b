// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model, ODATA_TYPE_KEY};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;
use chrono::{DateTime, FixedOffset};

/// Analyst comment attached to an alert.
#[derive(Debug, Clone)]
pub struct AlertComment {
    store: Box<dyn BackingStore>,
}

impl AlertComment {
    pub fn new() -> Self {
        let mut comment = Self {
            store: new_backing_store(),
        };
        comment.set_additional_data(AdditionalData::new());
        comment
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        comment / set_comment: String = "comment";
        created_by_display_name / set_created_by_display_name: String = "createdByDisplayName";
        created_date_time / set_created_date_time: DateTime<FixedOffset> = "createdDateTime";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .scalar("comment", Self::set_comment)
            .scalar("createdByDisplayName", Self::set_created_by_display_name)
            .scalar("createdDateTime", Self::set_created_date_time)
            .scalar(ODATA_TYPE_KEY, Self::set_odata_type)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_string_value("comment", self.comment().as_deref())?;
        writer.write_string_value("createdByDisplayName", self.created_by_display_name().as_deref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type().as_deref())
    }
}

crate::impl_model!(AlertComment, store);
