// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;

/// Paging envelope shared by every collection response.
#[derive(Debug, Clone)]
pub struct BaseCollectionPaginationCountResponse {
    store: Box<dyn BackingStore>,
}

impl BaseCollectionPaginationCountResponse {
    pub fn new() -> Self {
        let mut response = Self {
            store: new_backing_store(),
        };
        response.set_additional_data(AdditionalData::new());
        response
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        /// Total count when `$count=true` was requested.
        odata_count / set_odata_count: i64 = "@odata.count";
        /// Link to the next page; absent on the last one.
        odata_next_link / set_odata_next_link: String = "@odata.nextLink";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .scalar("@odata.count", Self::set_odata_count)
            .scalar("@odata.nextLink", Self::set_odata_next_link)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_i64_value("@odata.count", self.odata_count())?;
        writer.write_string_value("@odata.nextLink", self.odata_next_link().as_deref())
    }
}

crate::impl_model!(BaseCollectionPaginationCountResponse, store);
