// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::Attachment;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};

/// Attachment carrying the file bytes inline (base64 on the wire).
#[derive(Debug, Clone)]
pub struct FileAttachment {
    base: Attachment,
}

impl FileAttachment {
    pub fn new() -> Self {
        let mut attachment = Self {
            base: Attachment::new(),
        };
        attachment.set_odata_type(Some("#microsoft.graph.fileAttachment".into()));
        attachment
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        content_bytes / set_content_bytes: Vec<u8> = "contentBytes";
        content_id / set_content_id: String = "contentId";
        /// Do not use; kept for wire compatibility.
        content_location / set_content_location: String = "contentLocation";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(Attachment::field_deserializers(), |m| &mut m.base)
            .scalar("contentBytes", Self::set_content_bytes)
            .scalar("contentId", Self::set_content_id)
            .scalar("contentLocation", Self::set_content_location)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_byte_array_value("contentBytes", self.content_bytes().as_deref())?;
        writer.write_string_value("contentId", self.content_id().as_deref())?;
        writer.write_string_value("contentLocation", self.content_location().as_deref())
    }
}

crate::impl_model!(FileAttachment, base = base: Attachment);
