//! File-backed settings store.
//!
//! Values are kept in a JSON object keyed by `<prefix><key>`, each with an
//! expiry timestamp. Reading an expired entry yields nothing, and expired
//! entries are dropped on the next write.

use chrono::{DateTime, Duration, Utc};
use pagesmith_blocks::Settings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keys accepted by the store, in [`Settings`] field order.
pub const SETTING_KEYS: [&str; 4] = ["app_id", "api_search_key", "index_name", "currency"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access settings store '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings store '{}' is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown setting '{0}' (expected one of: app_id, api_search_key, index_name, currency)")]
    UnknownKey(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredValue {
    value: String,
    expires: DateTime<Utc>,
}

type Entries = BTreeMap<String, StoredValue>;

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    prefix: String,
    expiry: Duration,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>, prefix: impl Into<String>, expiry_days: i64) -> Self {
        Self {
            path: path.into(),
            prefix: prefix.into(),
            expiry: Duration::days(expiry_days),
        }
    }

    pub fn from_config(storage: &crate::StorageConfig) -> Self {
        Self::new(&storage.path, &storage.prefix, storage.expiry_days)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.get_at(key, Utc::now())
    }

    /// Read `key` as of `now`.
    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Result<Option<String>, StoreError> {
        let name = self.entry_name(key)?;
        let entries = self.read_entries()?;
        Ok(entries
            .get(&name)
            .filter(|entry| entry.expires > now)
            .map(|entry| entry.value.clone()))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_at(key, value, Utc::now())
    }

    /// Store `value` under `key`, expiring one expiry period after `now`.
    pub fn set_at(&self, key: &str, value: &str, now: DateTime<Utc>) -> Result<(), StoreError> {
        let name = self.entry_name(key)?;
        let mut entries = self.read_entries()?;
        entries.retain(|_, entry| entry.expires > now);
        entries.insert(
            name,
            StoredValue {
                value: value.to_string(),
                expires: now + self.expiry,
            },
        );
        self.write_entries(&entries)
    }

    /// Returns whether a value was present.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let name = self.entry_name(key)?;
        let mut entries = self.read_entries()?;
        let removed = entries.remove(&name).is_some();
        if removed {
            self.write_entries(&entries)?;
        }
        Ok(removed)
    }

    /// Settings assembled from the stored values alone.
    pub fn load_settings(&self) -> Result<Option<Settings>, StoreError> {
        Ok(Settings::from_parts(
            self.get("app_id")?,
            self.get("api_search_key")?,
            self.get("index_name")?,
            self.get("currency")?,
        ))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        let now = Utc::now();
        self.set_at("app_id", &settings.app_id, now)?;
        self.set_at("api_search_key", &settings.api_search_key, now)?;
        self.set_at("index_name", &settings.index_name, now)?;
        self.set_at("currency", &settings.currency, now)
    }

    fn entry_name(&self, key: &str) -> Result<String, StoreError> {
        if !SETTING_KEYS.contains(&key) {
            return Err(StoreError::UnknownKey(key.to_string()));
        }
        Ok(format!("{}{key}", self.prefix))
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        let io_error = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("writing {} settings to {}", entries.len(), self.path.display());
        fs::write(&self.path, json).map_err(io_error)
    }
}
