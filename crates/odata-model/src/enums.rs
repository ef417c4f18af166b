// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enum codecs.
//!
//! Single-valued enums are declared with [`model_enum!`](crate::model_enum)
//! and flag enums with [`flag_enum!`](crate::flag_enum). Both macros pair
//! each constant with its wire name in one place, so the rendering table and
//! the parser cannot drift apart.
//!
//! Parsing is fail-open: an unrecognised wire string is `None`, not an
//! error, so payloads from a newer service version still deserialize.

use crate::value::{EnumValue, Value};

/// An enum with a wire representation.
pub trait ModelEnum: Copy + Sized + 'static {
    /// Module-qualified name recorded alongside the value in a backing store.
    const TYPE_NAME: &'static str;

    /// Wire rendering.
    fn to_wire(&self) -> String;

    /// Parse a wire string; `None` when nothing matches.
    fn parse(wire: &str) -> Option<Self>;

    /// Read back a rendering produced by [`to_wire`](Self::to_wire).
    fn from_stored(wire: &str) -> Option<Self> {
        Self::parse(wire)
    }
}

/// A flag enum: a set of power-of-two constants.
pub trait FlagEnum: ModelEnum {
    /// Every flag with its wire name, in declaration order.
    fn flags() -> &'static [(Self, &'static str)];

    fn bits(&self) -> u32;
}

/// Store representation of an enum constant.
#[doc(hidden)]
pub fn enum_into_value<E: ModelEnum>(value: E) -> Value {
    Value::Enum(EnumValue {
        type_name: E::TYPE_NAME,
        wire: value.to_wire(),
    })
}

/// Read an enum constant back from its store representation.
#[doc(hidden)]
pub fn enum_from_value<E: ModelEnum>(value: &Value) -> Option<E> {
    match value {
        Value::Enum(v) if v.type_name == E::TYPE_NAME => E::from_stored(&v.wire),
        _ => None,
    }
}

/// Render the set flags of `value` in declaration order, comma-joined.
#[doc(hidden)]
pub fn render_flags<E: FlagEnum>(value: &E) -> String {
    let bits = value.bits();
    let mut out = String::new();
    for (flag, wire) in E::flags() {
        if flag.bits() != 0 && bits & flag.bits() == flag.bits() {
            if !out.is_empty() {
                out.push(',');
            }
            out.push_str(wire);
        }
    }
    out
}

/// Parse a comma-joined flag list; unknown tokens are ignored.
#[doc(hidden)]
pub fn parse_flags<E: FlagEnum>(wire: &str) -> Option<u32> {
    let mut bits = 0u32;
    let mut matched = false;
    for token in wire.split(',') {
        let token = token.trim();
        match E::flags().iter().find(|(_, name)| *name == token) {
            Some((flag, _)) => {
                bits |= flag.bits();
                matched = true;
            }
            None => log::debug!("ignoring unknown {} flag '{}'", E::TYPE_NAME, token),
        }
    }
    matched.then_some(bits)
}

/// Declare a single-valued enum with its wire names.
///
/// ```
/// odata_model::model_enum! {
///     /// Alert severity.
///     pub enum Severity {
///         Low => "low",
///         High => "high",
///     }
/// }
///
/// use odata_model::ModelEnum;
/// assert_eq!(Severity::parse("high"), Some(Severity::High));
/// assert_eq!(Severity::Low.to_string(), "low");
/// ```
#[macro_export]
macro_rules! model_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every constant, in declaration order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// Wire name of this constant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::enums::ModelEnum for $name {
            const TYPE_NAME: &'static str = concat!(module_path!(), "::", stringify!($name));

            fn to_wire(&self) -> String {
                self.as_str().to_string()
            }

            fn parse(wire: &str) -> Option<Self> {
                match wire {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        $crate::__enum_value_impls!($name);
    };
}

/// Declare a flag enum with its wire names.
///
/// ```
/// odata_model::flag_enum! {
///     pub struct TipActions {
///         const OVERRIDE = 1 => "override";
///         const REPORT_FALSE_POSITIVE = 2 => "reportFalsePositive";
///     }
/// }
///
/// use odata_model::ModelEnum;
/// let both = TipActions::OVERRIDE | TipActions::REPORT_FALSE_POSITIVE;
/// assert_eq!(both.to_wire(), "override,reportFalsePositive");
/// assert_eq!(TipActions::parse("reportFalsePositive,bogus"), Some(TipActions::REPORT_FALSE_POSITIVE));
/// ```
#[macro_export]
macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* const $flag:ident = $bits:literal => $wire:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name(u32);

        impl $name {
            $( $(#[$fmeta])* pub const $flag: $name = $name($bits); )+

            /// No flags set.
            pub const fn empty() -> Self {
                $name(0)
            }

            /// Every declared flag.
            pub const fn all() -> Self {
                $name(0 $( | $bits )+)
            }

            /// Create from raw bits; undeclared bits are dropped.
            pub const fn from_bits(bits: u32) -> Self {
                $name(bits & Self::all().0)
            }

            /// Get raw bits
            pub const fn bits(&self) -> u32 {
                self.0
            }

            /// Check if all flags of `other` are set.
            pub const fn contains(&self, other: $name) -> bool {
                (self.0 & other.0) == other.0
            }

            pub const fn is_empty(&self) -> bool {
                self.0 == 0
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                $name(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                $name(self.0 & rhs.0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::enums::render_flags(self))
            }
        }

        impl $crate::enums::ModelEnum for $name {
            const TYPE_NAME: &'static str = concat!(module_path!(), "::", stringify!($name));

            fn to_wire(&self) -> String {
                $crate::enums::render_flags(self)
            }

            fn parse(wire: &str) -> Option<Self> {
                $crate::enums::parse_flags::<$name>(wire).map($name)
            }

            // The empty set renders as "".
            fn from_stored(wire: &str) -> Option<Self> {
                if wire.is_empty() {
                    return Some($name::empty());
                }
                Self::parse(wire)
            }
        }

        impl $crate::enums::FlagEnum for $name {
            fn flags() -> &'static [(Self, &'static str)] {
                &[ $( ($name::$flag, $wire) ),+ ]
            }

            fn bits(&self) -> u32 {
                self.0
            }
        }

        $crate::__enum_value_impls!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __enum_value_impls {
    ($name:ident) => {
        impl $crate::value::FromValue for $name {
            const EXPECTED: &'static str = stringify!($name);

            fn from_value(value: &$crate::value::Value) -> Option<Self> {
                $crate::enums::enum_from_value(value)
            }
        }

        impl $crate::value::IntoValue for $name {
            fn into_value(self) -> $crate::value::Value {
                $crate::enums::enum_into_value(self)
            }
        }

        impl $crate::value::FromValue for Vec<$name> {
            const EXPECTED: &'static str = concat!("list of ", stringify!($name));

            fn from_value(value: &$crate::value::Value) -> Option<Self> {
                $crate::value::list_from_value(value)
            }
        }

        impl $crate::value::IntoValue for Vec<$name> {
            fn into_value(self) -> $crate::value::Value {
                $crate::value::list_into_value(self)
            }
        }
    };
}
