// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Backing stores.
//!
//! A backing store maps property names to [`Value`]s and is the only state a
//! root model owns. The typed helpers on `dyn BackingStore` are what
//! generated accessors call; they treat store faults and mistyped slots as
//! fatal.

mod in_memory;

pub use in_memory::{InMemoryBackingStore, InMemoryBackingStoreFactory};

use crate::error::StoreError;
use crate::model::Model;
use crate::value::{AdditionalData, FromValue, IntoValue, Value};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with `(key, previous, new)` whenever a slot changes.
pub type StoreSubscriber = Box<dyn Fn(&str, Option<&Value>, &Value) + Send + Sync>;

/// Key/value storage behind a model instance.
pub trait BackingStore: fmt::Debug + Send + Sync {
    /// Read a slot. An absent key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<&Value>, StoreError>;

    /// Mutable access to a slot; counts as a change.
    fn get_mut(&mut self, key: &str) -> Result<Option<&mut Value>, StoreError>;

    /// Replace a slot.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// All readable slots, in insertion order.
    fn enumerate(&self) -> Vec<(&str, &Value)>;

    /// Keys whose value was changed to null after initialization.
    fn enumerate_keys_for_values_changed_to_null(&self) -> Vec<&str>;

    /// Register a change callback; returns its id.
    fn subscribe(&mut self, callback: StoreSubscriber) -> String;

    /// Register a change callback under a caller-chosen id.
    fn subscribe_with_id(&mut self, id: &str, callback: StoreSubscriber);

    fn unsubscribe(&mut self, id: &str) -> Result<(), StoreError>;

    /// Drop every slot.
    fn clear(&mut self);

    fn initialization_completed(&self) -> bool;

    /// Setting this to `true` resets change tracking, nested models included.
    fn set_initialization_completed(&mut self, completed: bool);

    fn return_only_changed_values(&self) -> bool;

    fn set_return_only_changed_values(&mut self, only_changed: bool);

    /// Copy the slots into a fresh store. Subscriptions are not copied.
    fn clone_store(&self) -> Box<dyn BackingStore>;
}

impl Clone for Box<dyn BackingStore> {
    fn clone(&self) -> Self {
        self.clone_store()
    }
}

// ----- Typed access -----

pub(crate) fn fatal(key: &str, err: StoreError) -> ! {
    log::error!("backing store fault on '{}': {}", key, err);
    panic!("backing store fault on '{}': {}", key, err)
}

impl dyn BackingStore + '_ {
    /// Typed read of a slot.
    ///
    /// An absent slot or an explicit null yields `None`.
    ///
    /// # Panics
    ///
    /// On a store fault, or when the slot holds a different kind of value.
    pub fn value<T: FromValue>(&self, key: &str) -> Option<T> {
        let slot = self.get(key).unwrap_or_else(|err| fatal(key, err))?;
        if slot.is_null() {
            return None;
        }
        match T::from_value(slot) {
            Some(v) => Some(v),
            None => fatal(
                key,
                StoreError::TypeMismatch {
                    key: key.to_string(),
                    expected: T::EXPECTED,
                    found: slot.kind(),
                },
            ),
        }
    }

    /// Typed write of a slot; `None` stores an explicit null.
    ///
    /// # Panics
    ///
    /// On a store fault.
    pub fn put<T: IntoValue>(&mut self, key: &str, value: Option<T>) {
        let value = value.map_or(Value::Null, IntoValue::into_value);
        if let Err(err) = self.set(key, value) {
            fatal(key, err);
        }
    }

    /// Borrow a nested model slot.
    ///
    /// # Panics
    ///
    /// On a store fault, or when the slot is not an object.
    pub fn model(&self, key: &str) -> Option<&dyn Model> {
        let slot = self.get(key).unwrap_or_else(|err| fatal(key, err))?;
        match slot {
            Value::Null => None,
            Value::Object(m) => Some(m.as_ref()),
            other => fatal(key, mismatch(key, "object", other)),
        }
    }

    /// Borrow a nested model collection slot.
    ///
    /// # Panics
    ///
    /// On a store fault, or when the slot is not an object collection.
    pub fn models(&self, key: &str) -> Option<&[Box<dyn Model>]> {
        let slot = self.get(key).unwrap_or_else(|err| fatal(key, err))?;
        match slot {
            Value::Null => None,
            Value::Objects(ms) => Some(ms),
            other => fatal(key, mismatch(key, "object collection", other)),
        }
    }

    /// Borrow a map slot.
    ///
    /// # Panics
    ///
    /// On a store fault, or when the slot is not a map.
    pub fn map(&self, key: &str) -> Option<&AdditionalData> {
        let slot = self.get(key).unwrap_or_else(|err| fatal(key, err))?;
        match slot {
            Value::Null => None,
            Value::Map(map) => Some(map),
            other => fatal(key, mismatch(key, "map", other)),
        }
    }

    /// Borrow a nested model as a concrete type (or one of its subtypes).
    pub fn object<T: Model>(&self, key: &str) -> Option<&T> {
        self.model(key).and_then(crate::model::as_type::<T>)
    }

    /// Borrow each element of a model collection as a concrete type.
    ///
    /// Elements of an unrelated type are skipped.
    pub fn objects<T: Model>(&self, key: &str) -> Option<Vec<&T>> {
        self.models(key).map(|ms| {
            ms.iter()
                .filter_map(|m| crate::model::as_type::<T>(m.as_ref()))
                .collect()
        })
    }

    /// Mutable access to a slot, creating it with `init` when absent or null.
    ///
    /// # Panics
    ///
    /// On a store fault.
    pub fn slot_or_insert_with(&mut self, key: &str, init: impl FnOnce() -> Value) -> &mut Value {
        let missing = match self.get(key) {
            Ok(slot) => slot.map_or(true, Value::is_null),
            Err(err) => fatal(key, err),
        };
        if missing {
            if let Err(err) = self.set(key, init()) {
                fatal(key, err);
            }
        }
        match self.get_mut(key) {
            Ok(Some(slot)) => slot,
            Ok(None) => fatal(key, StoreError::EmptyKey),
            Err(err) => fatal(key, err),
        }
    }
}

fn mismatch(key: &str, expected: &'static str, found: &Value) -> StoreError {
    StoreError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}

// ----- Factory -----

/// Supplies a fresh store for every model construction.
pub trait BackingStoreFactory: Send + Sync {
    fn create_backing_store(&self) -> Box<dyn BackingStore>;
}

static FACTORY: RwLock<Option<Arc<dyn BackingStoreFactory>>> = parking_lot::const_rwlock(None);

/// Replace the process-wide backing store factory.
pub fn set_backing_store_factory(factory: Arc<dyn BackingStoreFactory>) {
    *FACTORY.write() = Some(factory);
}

/// The process-wide backing store factory (in-memory by default).
pub fn backing_store_factory() -> Arc<dyn BackingStoreFactory> {
    if let Some(factory) = FACTORY.read().as_ref() {
        return Arc::clone(factory);
    }
    Arc::new(InMemoryBackingStoreFactory)
}

/// Create a store from the process-wide factory.
pub fn new_backing_store() -> Box<dyn BackingStore> {
    match FACTORY.read().as_ref() {
        Some(factory) => factory.create_backing_store(),
        None => Box::new(InMemoryBackingStore::new()),
    }
}
