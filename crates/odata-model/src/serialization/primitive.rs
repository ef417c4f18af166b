// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar kinds that can be read from a parse node on their own.

use super::ParseNode;
use crate::duration::IsoDuration;
use crate::error::ParseError;
use crate::value::{FromValue, IntoValue};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

/// A scalar type with a dedicated parse-node getter.
pub trait Primitive: FromValue + IntoValue + Clone + Send + Sync + 'static {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, ParseError>;
}

macro_rules! impl_primitive {
    ($ty:ty, $getter:ident) => {
        impl Primitive for $ty {
            fn read(node: &dyn ParseNode) -> Result<Option<Self>, ParseError> {
                node.$getter()
            }
        }
    };
}

impl_primitive!(String, string_value);
impl_primitive!(bool, bool_value);
impl_primitive!(u8, byte_value);
impl_primitive!(i8, sbyte_value);
impl_primitive!(i32, i32_value);
impl_primitive!(i64, i64_value);
impl_primitive!(f32, f32_value);
impl_primitive!(f64, f64_value);
impl_primitive!(Vec<u8>, byte_array_value);
impl_primitive!(DateTime<FixedOffset>, date_time_value);
impl_primitive!(NaiveDate, date_only_value);
impl_primitive!(NaiveTime, time_only_value);
impl_primitive!(IsoDuration, duration_value);
impl_primitive!(Uuid, uuid_value);
