// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! In-memory backing store with change tracking.

use super::{BackingStore, BackingStoreFactory, StoreSubscriber};
use crate::error::StoreError;
use crate::model::Model;
use crate::value::Value;
use indexmap::IndexMap;
use std::fmt;
use uuid::Uuid;

#[derive(Clone)]
struct Slot {
    value: Value,
    /// Set when the value was written after initialization completed.
    changed: bool,
}

/// Default [`BackingStore`]: an insertion-ordered map plus change flags.
pub struct InMemoryBackingStore {
    slots: IndexMap<String, Slot>,
    subscribers: IndexMap<String, StoreSubscriber>,
    initialization_completed: bool,
    return_only_changed_values: bool,
}

impl InMemoryBackingStore {
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
            subscribers: IndexMap::new(),
            initialization_completed: true,
            return_only_changed_values: false,
        }
    }

    fn normalize(key: &str) -> Result<&str, StoreError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        Ok(key)
    }

    fn visible(&self, slot: &Slot) -> bool {
        !self.return_only_changed_values || slot.changed
    }
}

impl Default for InMemoryBackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryBackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBackingStore")
            .field("keys", &self.slots.keys().collect::<Vec<_>>())
            .field("subscribers", &self.subscribers.len())
            .field("initialization_completed", &self.initialization_completed)
            .field(
                "return_only_changed_values",
                &self.return_only_changed_values,
            )
            .finish()
    }
}

impl BackingStore for InMemoryBackingStore {
    fn get(&self, key: &str) -> Result<Option<&Value>, StoreError> {
        let key = Self::normalize(key)?;
        Ok(self
            .slots
            .get(key)
            .filter(|slot| self.visible(slot))
            .map(|slot| &slot.value))
    }

    fn get_mut(&mut self, key: &str) -> Result<Option<&mut Value>, StoreError> {
        let key = Self::normalize(key)?;
        let completed = self.initialization_completed;
        Ok(self.slots.get_mut(key).map(|slot| {
            if completed {
                slot.changed = true;
            }
            &mut slot.value
        }))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let key = Self::normalize(key)?;
        if let Some(current) = self.slots.get(key) {
            if current.value == value {
                return Ok(());
            }
        }

        let previous = self.slots.insert(
            key.to_string(),
            Slot {
                value,
                changed: self.initialization_completed,
            },
        );

        if !self.subscribers.is_empty() {
            if let Some(slot) = self.slots.get(key) {
                let old = previous.as_ref().map(|p| &p.value);
                for callback in self.subscribers.values() {
                    callback(key, old, &slot.value);
                }
            }
        }
        Ok(())
    }

    fn enumerate(&self) -> Vec<(&str, &Value)> {
        self.slots
            .iter()
            .filter(|(_, slot)| self.visible(slot))
            .map(|(key, slot)| (key.as_str(), &slot.value))
            .collect()
    }

    fn enumerate_keys_for_values_changed_to_null(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.changed && slot.value.is_null())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    fn subscribe(&mut self, callback: StoreSubscriber) -> String {
        let id = Uuid::new_v4().to_string();
        self.subscribers.insert(id.clone(), callback);
        id
    }

    fn subscribe_with_id(&mut self, id: &str, callback: StoreSubscriber) {
        self.subscribers.insert(id.to_string(), callback);
    }

    fn unsubscribe(&mut self, id: &str) -> Result<(), StoreError> {
        self.subscribers
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::UnknownSubscription(id.to_string()))
    }

    fn clear(&mut self) {
        self.slots.clear();
    }

    fn initialization_completed(&self) -> bool {
        self.initialization_completed
    }

    fn set_initialization_completed(&mut self, completed: bool) {
        self.initialization_completed = completed;
        for slot in self.slots.values_mut() {
            if completed {
                slot.changed = false;
            }
            for model in slot.value.models_mut() {
                model
                    .backing_store_mut()
                    .set_initialization_completed(completed);
            }
        }
    }

    fn return_only_changed_values(&self) -> bool {
        self.return_only_changed_values
    }

    fn set_return_only_changed_values(&mut self, only_changed: bool) {
        self.return_only_changed_values = only_changed;
        for slot in self.slots.values_mut() {
            for model in slot.value.models_mut() {
                model
                    .backing_store_mut()
                    .set_return_only_changed_values(only_changed);
            }
        }
    }

    fn clone_store(&self) -> Box<dyn BackingStore> {
        Box::new(Self {
            slots: self.slots.clone(),
            subscribers: IndexMap::new(),
            initialization_completed: self.initialization_completed,
            return_only_changed_values: self.return_only_changed_values,
        })
    }
}

/// Factory handing out [`InMemoryBackingStore`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryBackingStoreFactory;

impl BackingStoreFactory for InMemoryBackingStoreFactory {
    fn create_backing_store(&self) -> Box<dyn BackingStore> {
        Box::new(InMemoryBackingStore::new())
    }
}
