// SPDX-License-Identifier: MPL-2.0
//! Persistent key-value storage for visitor records.
//!
//! Views never touch the backing medium directly: they go through
//! [`Collections`], which is handed a [`KeyValueStore`] at startup. Tests
//! use [`MemoryStore`]; the application uses [`FileStore`], a single CBOR
//! file in the data directory.

mod collections;
mod file;

pub use collections::{Collections, StoreDump, BLOGS_KEY, CONTACTS_KEY, TESTIMONIALS_KEY};
pub use file::{FileStore, STORE_FILE};

use crate::error::Result;
use std::collections::BTreeMap;

/// Byte-oriented key-value repository.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be written.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All stored keys, sorted.
    fn keys(&self) -> Vec<String>;
}

/// Volatile store, used by tests and as a fallback when no data directory
/// is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}
