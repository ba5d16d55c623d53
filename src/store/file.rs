// SPDX-License-Identifier: MPL-2.0
//! File-backed store: one CBOR map, rewritten on every change.

use super::KeyValueStore;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Store file name within the data directory.
pub const STORE_FILE: &str = "store.cbor";

/// Extension appended to a store file that could not be loaded.
const CORRUPT_SUFFIX: &str = "corrupt";

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, Vec<u8>>,
    /// An unloadable file still sits at `path` and must be moved aside
    /// before anything is written there.
    quarantine_pending: bool,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store. An unreadable or corrupt file
    /// also yields an empty store, together with a warning i18n key; the
    /// file is renamed to `store.cbor.corrupt` so no write replaces it.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<String>) {
        let path = path.into();
        let mut store = Self {
            path,
            entries: BTreeMap::new(),
            quarantine_pending: false,
        };

        if !store.path.exists() {
            return (store, None);
        }

        let warning = match fs::File::open(&store.path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(entries) => {
                    store.entries = entries;
                    None
                }
                Err(error) => {
                    tracing::warn!(path = %store.path.display(), %error, "store file is corrupt");
                    Some("store-parse-error".to_string())
                }
            },
            Err(error) => {
                tracing::warn!(path = %store.path.display(), %error, "store file unreadable");
                Some("store-read-error".to_string())
            }
        };
        if warning.is_some() {
            store.quarantine_pending = true;
            if let Err(error) = store.quarantine() {
                tracing::warn!(%error, "store file not moved aside; retrying on first write");
            }
        }
        (store, warning)
    }

    /// Where an unloadable store file is kept.
    #[must_use]
    pub fn corrupt_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".");
        name.push(CORRUPT_SUFFIX);
        PathBuf::from(name)
    }

    fn quarantine(&mut self) -> Result<()> {
        if !self.quarantine_pending {
            return Ok(());
        }
        let target = self.corrupt_path();
        fs::rename(&self.path, &target)?;
        tracing::warn!(path = %target.display(), "unloadable store file moved aside");
        self.quarantine_pending = false;
        Ok(())
    }

    /// Opens `store.cbor` inside `dir`.
    #[must_use]
    pub fn open_in(dir: &Path) -> (Self, Option<String>) {
        Self::open(dir.join(STORE_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&mut self) -> Result<()> {
        self.quarantine()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(&self.entries, &mut writer)
            .map_err(|e| Error::Store(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

impl FileStore {
    fn restore(&mut self, key: &str, previous: Option<Vec<u8>>) {
        match previous {
            Some(value) => self.entries.insert(key.to_string(), value),
            None => self.entries.remove(key),
        };
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    /// Writes through; on a failed write the previous value is restored.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value);
        self.flush().inspect_err(|_| self.restore(key, previous))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        self.flush()
            .inspect_err(|_| self.restore(key, Some(previous)))
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
