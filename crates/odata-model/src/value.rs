// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Values held in a backing store.

use crate::duration::IsoDuration;
use crate::model::Model;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use indexmap::IndexMap;
use std::fmt;
use uuid::Uuid;

/// Open bag of properties that have no declared accessor.
///
/// Insertion order is kept so that passthrough data is written back in the
/// order it was read.
pub type AdditionalData = IndexMap<String, Value>;

/// An enum constant tagged with the enum it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// Module-qualified name of the enum
    /// (e.g. `"odata_model::models::security::enums::AlertSeverity"`).
    pub type_name: &'static str,
    /// Wire rendering (e.g. `"high"`, `"automaticReplies,mailboxFullStatus"`).
    pub wire: String,
}

impl EnumValue {
    /// Enum name without its module path.
    pub fn short_name(&self) -> &'static str {
        self.type_name.rsplit("::").next().unwrap_or(self.type_name)
    }
}

/// A value that can live in a backing store slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Primitives
    Bool(bool),
    U8(u8),
    I8(i8),
    I32(i32),
    I64(i64),
    /// Only produced for integers above `i64::MAX`.
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),

    // Temporal and identifiers
    DateTime(DateTime<FixedOffset>),
    Date(NaiveDate),
    Time(NaiveTime),
    Duration(IsoDuration),
    Uuid(Uuid),
    Enum(EnumValue),

    // Composites
    List(Vec<Value>),
    Map(AdditionalData),
    Object(Box<dyn Model>),
    Objects(Vec<Box<dyn Model>>),

    // Special
    Null,
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::U8(_) => "u8",
            Self::I8(_) => "i8",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::DateTime(_) => "date-time",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::Duration(_) => "duration",
            Self::Uuid(_) => "uuid",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
            Self::Objects(_) => "object collection",
            Self::Null => "null",
        }
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64, widening smaller integers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::U8(v) => Some(i64::from(*v)),
            Self::I8(v) => Some(i64::from(*v)),
            Self::I32(v) => Some(i64::from(*v)),
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as map.
    pub fn as_map(&self) -> Option<&AdditionalData> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as a nested model.
    pub fn as_model(&self) -> Option<&dyn Model> {
        match self {
            Self::Object(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    /// Try to get as a collection of nested models.
    pub fn as_models(&self) -> Option<&[Box<dyn Model>]> {
        match self {
            Self::Objects(v) => Some(v),
            _ => None,
        }
    }

    /// Visit every nested model directly held by this value.
    pub(crate) fn models_mut(&mut self) -> Vec<&mut Box<dyn Model>> {
        match self {
            Self::Object(m) => vec![m],
            Self::Objects(ms) => ms.iter_mut().collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{:?}", v),
            Self::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Self::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Date(v) => write!(f, "{}", v),
            Self::Time(v) => write!(f, "{}", v),
            Self::Duration(v) => write!(f, "{}", v),
            Self::Uuid(v) => write!(f, "{}", v),
            Self::Enum(v) => write!(f, "{}::{}", v.short_name(), v.wire),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
            Self::Object(m) => write!(f, "<{}>", m.type_name()),
            Self::Objects(ms) => {
                f.write_str("[")?;
                for (i, m) in ms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "<{}>", m.type_name())?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
        }
    }
}

// ----- Conversions -----

/// Trait for extracting typed values from a store slot.
pub trait FromValue: Sized {
    /// Name used in type-mismatch reports.
    const EXPECTED: &'static str;

    /// Convert, or `None` when the slot holds another kind of value.
    fn from_value(value: &Value) -> Option<Self>;
}

/// Trait for converting typed values into a store slot.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

macro_rules! impl_from_value {
    ($ty:ty, $variant:ident, $name:expr) => {
        impl FromValue for $ty {
            const EXPECTED: &'static str = $name;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }
    };
}

impl_from_value!(bool, Bool, "bool");
impl_from_value!(u8, U8, "u8");
impl_from_value!(i8, I8, "i8");
impl_from_value!(i32, I32, "i32");
impl_from_value!(i64, I64, "i64");
impl_from_value!(u64, U64, "u64");
impl_from_value!(f32, F32, "f32");
impl_from_value!(f64, F64, "f64");
impl_from_value!(String, String, "string");
impl_from_value!(Vec<u8>, Bytes, "bytes");
impl_from_value!(DateTime<FixedOffset>, DateTime, "date-time");
impl_from_value!(NaiveDate, Date, "date");
impl_from_value!(NaiveTime, Time, "time");
impl_from_value!(IsoDuration, Duration, "duration");
impl_from_value!(Uuid, Uuid, "uuid");
impl_from_value!(AdditionalData, Map, "map");

macro_rules! impl_into_value {
    ($ty:ty, $variant:ident) => {
        impl IntoValue for $ty {
            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }
    };
}

impl_into_value!(bool, Bool);
impl_into_value!(u8, U8);
impl_into_value!(i8, I8);
impl_into_value!(i32, I32);
impl_into_value!(i64, I64);
impl_into_value!(u64, U64);
impl_into_value!(f32, F32);
impl_into_value!(f64, F64);
impl_into_value!(String, String);
impl_into_value!(Vec<u8>, Bytes);
impl_into_value!(DateTime<FixedOffset>, DateTime);
impl_into_value!(NaiveDate, Date);
impl_into_value!(NaiveTime, Time);
impl_into_value!(IsoDuration, Duration);
impl_into_value!(Uuid, Uuid);
impl_into_value!(AdditionalData, Map);
impl_into_value!(Box<dyn Model>, Object);
impl_into_value!(Vec<Box<dyn Model>>, Objects);

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

/// Read a homogeneous list slot.
#[doc(hidden)]
pub fn list_from_value<T: FromValue>(value: &Value) -> Option<Vec<T>> {
    match value {
        Value::List(items) => items.iter().map(T::from_value).collect(),
        _ => None,
    }
}

/// Build a list slot.
#[doc(hidden)]
pub fn list_into_value<T: IntoValue>(items: Vec<T>) -> Value {
    Value::List(items.into_iter().map(IntoValue::into_value).collect())
}

macro_rules! impl_list {
    ($($ty:ty => $name:expr),* $(,)?) => {
        $(
            impl FromValue for Vec<$ty> {
                const EXPECTED: &'static str = $name;

                fn from_value(value: &Value) -> Option<Self> {
                    list_from_value(value)
                }
            }

            impl IntoValue for Vec<$ty> {
                fn into_value(self) -> Value {
                    list_into_value(self)
                }
            }
        )*
    };
}

impl_list!(
    bool => "list of bool",
    i32 => "list of i32",
    i64 => "list of i64",
    f32 => "list of f32",
    f64 => "list of f64",
    String => "list of string",
    DateTime<FixedOffset> => "list of date-time",
    NaiveDate => "list of date",
    NaiveTime => "list of time",
    IsoDuration => "list of duration",
    Uuid => "list of uuid",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_conversions() {
        assert_eq!(i32::from_value(&42i32.into_value()), Some(42));
        assert_eq!(
            String::from_value(&"tenant".into_value()),
            Some("tenant".to_string())
        );
        assert_eq!(f32::from_value(&0.25f32.into_value()), Some(0.25));
        assert_eq!(
            Vec::<u8>::from_value(&vec![1u8, 2, 3].into_value()),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn mismatched_kind_is_none() {
        assert_eq!(i64::from_value(&Value::I32(1)), None);
        assert_eq!(String::from_value(&Value::Bool(true)), None);
        assert_eq!(bool::from_value(&Value::Null), None);
    }

    #[test]
    fn list_conversions() {
        let value = vec!["a".to_string(), "b".to_string()].into_value();
        assert_eq!(value.kind(), "list");
        assert_eq!(
            Vec::<String>::from_value(&value),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        // Heterogeneous lists do not convert.
        let mixed = Value::List(vec![Value::String("a".into()), Value::I32(1)]);
        assert_eq!(Vec::<String>::from_value(&mixed), None);
        // An empty list is still a list.
        assert_eq!(Vec::<i32>::from_value(&Value::List(Vec::new())), Some(vec![]));
    }

    #[test]
    fn display_is_readable() {
        let mut map = AdditionalData::new();
        map.insert("n".into(), Value::I64(3));
        map.insert("tags".into(), Value::List(vec![Value::String("x".into())]));
        assert_eq!(Value::Map(map).to_string(), r#"{n: 3, tags: ["x"]}"#);
        assert_eq!(Value::Null.to_string(), "null");

        let severity = Value::Enum(EnumValue {
            type_name: "odata_model::models::security::enums::AlertSeverity",
            wire: "high".into(),
        });
        assert_eq!(severity.to_string(), "AlertSeverity::high");
    }

    #[test]
    fn widening_integer_accessor() {
        assert_eq!(Value::U8(7).as_i64(), Some(7));
        assert_eq!(Value::I32(-2).as_i64(), Some(-2));
        assert_eq!(Value::String("1".into()).as_i64(), None);
    }
}
