// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::RecurrenceRangeType;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model, ODATA_TYPE_KEY};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;
use chrono::NaiveDate;

/// Duration of a recurring series.
#[derive(Debug, Clone)]
pub struct RecurrenceRange {
    store: Box<dyn BackingStore>,
}

impl RecurrenceRange {
    pub fn new() -> Self {
        let mut range = Self {
            store: new_backing_store(),
        };
        range.set_additional_data(AdditionalData::new());
        range
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        /// Last day of the series; required when the range type is `endDate`.
        end_date / set_end_date: NaiveDate = "endDate";
        number_of_occurrences / set_number_of_occurrences: i32 = "numberOfOccurrences";
        recurrence_time_zone / set_recurrence_time_zone: String = "recurrenceTimeZone";
        start_date / set_start_date: NaiveDate = "startDate";
        range_type / set_range_type: RecurrenceRangeType = "type";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .scalar("endDate", Self::set_end_date)
            .scalar("numberOfOccurrences", Self::set_number_of_occurrences)
            .scalar(ODATA_TYPE_KEY, Self::set_odata_type)
            .scalar("recurrenceTimeZone", Self::set_recurrence_time_zone)
            .scalar("startDate", Self::set_start_date)
            .enumeration("type", Self::set_range_type)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_date_only_value("endDate", self.end_date())?;
        writer.write_i32_value("numberOfOccurrences", self.number_of_occurrences())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type().as_deref())?;
        writer.write_string_value("recurrenceTimeZone", self.recurrence_time_zone().as_deref())?;
        writer.write_date_only_value("startDate", self.start_date())?;
        writer.write_enum_value("type", self.range_type())
    }
}

crate::impl_model!(RecurrenceRange, store);
