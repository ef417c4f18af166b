// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `impl_model!`: the per-type [`Model`](crate::model::Model) boilerplate.
//!
//! The type itself supplies `new()`, `field_deserializers()` and
//! `write_properties()`. The macro wires those into the trait, caches the
//! field map, and for derived types adds `Deref`/`DerefMut` to the base so
//! inherited accessors are callable directly.

/// Implement [`Model`](crate::model::Model) for a model struct.
///
/// * `impl_model!(Entity, store)` for a root type owning `store: Box<dyn BackingStore>`.
/// * `impl_model!(Alert, base = base: Entity)` for a type holding its base in `base`.
#[macro_export]
macro_rules! impl_model {
    ($ty:ident, store) => {
        impl $crate::model::Model for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn parent(&self) -> Option<&dyn $crate::model::Model> {
                None
            }

            fn parent_mut(&mut self) -> Option<&mut dyn $crate::model::Model> {
                None
            }

            fn backing_store(&self) -> &dyn $crate::store::BackingStore {
                self.store.as_ref()
            }

            fn backing_store_mut(&mut self) -> &mut dyn $crate::store::BackingStore {
                self.store.as_mut()
            }

            fn set_backing_store(&mut self, store: Box<dyn $crate::store::BackingStore>) {
                self.store = store;
            }

            $crate::__model_common!($ty);
        }

        $crate::__model_extras!($ty);
    };

    ($ty:ident, base = $field:ident : $base:ty) => {
        impl $crate::model::Model for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn parent(&self) -> Option<&dyn $crate::model::Model> {
                Some(&self.$field)
            }

            fn parent_mut(&mut self) -> Option<&mut dyn $crate::model::Model> {
                Some(&mut self.$field)
            }

            fn backing_store(&self) -> &dyn $crate::store::BackingStore {
                $crate::model::Model::backing_store(&self.$field)
            }

            fn backing_store_mut(&mut self) -> &mut dyn $crate::store::BackingStore {
                $crate::model::Model::backing_store_mut(&mut self.$field)
            }

            fn set_backing_store(&mut self, store: Box<dyn $crate::store::BackingStore>) {
                $crate::model::Model::set_backing_store(&mut self.$field, store);
            }

            $crate::__model_common!($ty);
        }

        impl ::std::ops::Deref for $ty {
            type Target = $base;

            fn deref(&self) -> &$base {
                &self.$field
            }
        }

        impl ::std::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut $base {
                &mut self.$field
            }
        }

        $crate::__model_extras!($ty);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_common {
    ($ty:ident) => {
        fn type_name(&self) -> &'static str {
            stringify!($ty)
        }

        fn field_names(&self) -> Vec<&'static str> {
            <$ty>::deserializers().names().collect()
        }

        fn deserialize_field(
            &mut self,
            name: &str,
            node: &dyn $crate::serialization::ParseNode,
        ) -> Option<Result<(), $crate::error::ParseError>> {
            <$ty>::deserializers().deserialize(self, name, node)
        }

        fn serialize_properties(
            &self,
            writer: &mut dyn $crate::serialization::SerializationWriter,
        ) -> Result<(), $crate::error::WriteError> {
            <$ty>::write_properties(self, writer)
        }

        fn clone_model(&self) -> Box<dyn $crate::model::Model> {
            Box::new(self.clone())
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_extras {
    ($ty:ident) => {
        impl $ty {
            /// Field deserializer map, built once per process.
            pub fn deserializers() -> &'static $crate::model::FieldDeserializers<$ty> {
                static FIELDS: ::std::sync::OnceLock<$crate::model::FieldDeserializers<$ty>> =
                    ::std::sync::OnceLock::new();
                FIELDS.get_or_init(<$ty>::field_deserializers)
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
