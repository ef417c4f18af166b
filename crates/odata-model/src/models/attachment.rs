// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{Entity, FileAttachment};
use crate::error::WriteError;
use crate::model::{DiscriminatorMap, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};
use chrono::{DateTime, FixedOffset};
use std::sync::OnceLock;

/// File, item or reference attached to a message or event.
#[derive(Debug, Clone)]
pub struct Attachment {
    base: Entity,
}

impl Attachment {
    pub fn new() -> Self {
        let mut attachment = Self { base: Entity::new() };
        attachment.set_odata_type(Some("#microsoft.graph.attachment".into()));
        attachment
    }

    pub fn discriminators() -> &'static DiscriminatorMap {
        static MAP: OnceLock<DiscriminatorMap> = OnceLock::new();
        MAP.get_or_init(|| {
            DiscriminatorMap::new::<Attachment>()
                .subtype::<FileAttachment>("#microsoft.graph.fileAttachment")
        })
    }

    pub fn create_from_discriminator_value(node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        Self::discriminators().resolve(node)
    }

    properties! {
        /// MIME type.
        content_type / set_content_type: String = "contentType";
        is_inline / set_is_inline: bool = "isInline";
        last_modified_date_time / set_last_modified_date_time: DateTime<FixedOffset> = "lastModifiedDateTime";
        name / set_name: String = "name";
        /// Length in bytes.
        size / set_size: i32 = "size";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(Entity::field_deserializers(), |m| &mut m.base)
            .scalar("contentType", Self::set_content_type)
            .scalar("isInline", Self::set_is_inline)
            .scalar("lastModifiedDateTime", Self::set_last_modified_date_time)
            .scalar("name", Self::set_name)
            .scalar("size", Self::set_size)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_string_value("contentType", self.content_type().as_deref())?;
        writer.write_bool_value("isInline", self.is_inline())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time())?;
        writer.write_string_value("name", self.name().as_deref())?;
        writer.write_i32_value("size", self.size())
    }
}

crate::impl_model!(Attachment, base = base: Entity);
