// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::MailTipsType;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;

/// Body of the `getMailTips` action.
#[derive(Debug, Clone)]
pub struct GetMailTipsPostRequestBody {
    store: Box<dyn BackingStore>,
}

impl GetMailTipsPostRequestBody {
    pub fn new() -> Self {
        let mut body = Self {
            store: new_backing_store(),
        };
        body.set_additional_data(AdditionalData::new());
        body
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        email_addresses / set_email_addresses: Vec<String> = "EmailAddresses";
        /// Comma-joined on the wire, e.g. `"automaticReplies,mailboxFullStatus"`.
        mail_tips_options / set_mail_tips_options: MailTipsType = "MailTipsOptions";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .primitives("EmailAddresses", Self::set_email_addresses)
            .enumeration("MailTipsOptions", Self::set_mail_tips_options)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_collection_of_string_values("EmailAddresses", self.email_addresses().as_deref())?;
        writer.write_enum_value("MailTipsOptions", self.mail_tips_options())
    }
}

crate::impl_model!(GetMailTipsPostRequestBody, store);
