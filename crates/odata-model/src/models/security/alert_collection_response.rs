// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::Alert;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::models::BaseCollectionPaginationCountResponse;
use crate::serialization::{ParseNode, SerializationWriter};

/// One page of `/security/alerts_v2`.
#[derive(Debug, Clone)]
pub struct AlertCollectionResponse {
    base: BaseCollectionPaginationCountResponse,
}

impl AlertCollectionResponse {
    pub fn new() -> Self {
        Self {
            base: BaseCollectionPaginationCountResponse::new(),
        }
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    pub fn value(&self) -> Option<Vec<&Alert>> {
        self.backing_store().objects("value")
    }

    pub fn set_value(&mut self, value: Option<Vec<Alert>>) {
        let boxed = value.map(|alerts| {
            alerts
                .into_iter()
                .map(|a| Box::new(a) as Box<dyn Model>)
                .collect::<Vec<_>>()
        });
        self.backing_store_mut().put("value", boxed);
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(
            BaseCollectionPaginationCountResponse::field_deserializers(),
            |m| &mut m.base,
        )
        .objects(
            "value",
            Alert::create_from_discriminator_value,
            |m, v| m.backing_store_mut().put("value", v),
        )
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_collection_of_object_values("value", self.backing_store().models("value"))
    }
}

crate::impl_model!(AlertCollectionResponse, base = base: BaseCollectionPaginationCountResponse);
