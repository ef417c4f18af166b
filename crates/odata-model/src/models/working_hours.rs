// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::DayOfWeek;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model, ODATA_TYPE_KEY};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;
use chrono::NaiveTime;

/// Days and hours a user works.
#[derive(Debug, Clone)]
pub struct WorkingHours {
    store: Box<dyn BackingStore>,
}

impl WorkingHours {
    pub fn new() -> Self {
        let mut hours = Self {
            store: new_backing_store(),
        };
        hours.set_additional_data(AdditionalData::new());
        hours
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        days_of_week / set_days_of_week: Vec<DayOfWeek> = "daysOfWeek";
        end_time / set_end_time: NaiveTime = "endTime";
        start_time / set_start_time: NaiveTime = "startTime";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .enumerations("daysOfWeek", Self::set_days_of_week)
            .scalar("endTime", Self::set_end_time)
            .scalar(ODATA_TYPE_KEY, Self::set_odata_type)
            .scalar("startTime", Self::set_start_time)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_collection_of_enum_values("daysOfWeek", self.days_of_week().as_deref())?;
        writer.write_time_only_value("endTime", self.end_time())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type().as_deref())?;
        writer.write_time_only_value("startTime", self.start_time())
    }
}

crate::impl_model!(WorkingHours, store);
