//! Shared configuration loader for pagesmith.
//!
//! `defaults/pagesmith.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`PagesmithConfig`].
//!
//! The persisted search credentials live apart from the TOML files, in a
//! [`SettingsStore`]. [`resolve_settings`] merges the two.

pub mod store;

pub use store::{SettingsStore, StoreError};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pagesmith_blocks::{ExportMode, Settings};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/pagesmith.default.toml");

/// Top-level configuration consumed by pagesmith applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PagesmithConfig {
    pub settings: SettingsConfig,
    pub export: ExportConfig,
    pub storage: StorageConfig,
}

/// Fallback values for the four stored settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub api_search_key: String,
    #[serde(default)]
    pub index_name: String,
    #[serde(default)]
    pub currency: String,
}

impl SettingsConfig {
    /// The fallback for one of the [`store::SETTING_KEYS`].
    pub fn value(&self, key: &str) -> Option<&str> {
        let value = match key {
            "app_id" => &self.app_id,
            "api_search_key" => &self.api_search_key,
            "index_name" => &self.index_name,
            "currency" => &self.currency,
            _ => return None,
        };
        Some(value.as_str()).filter(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub mode: ExportMode,
}

/// Where and how the settings store persists values.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub prefix: String,
    pub expiry_days: i64,
    pub path: PathBuf,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (the CLI uses this for `--store`).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PagesmithConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PagesmithConfig, ConfigError> {
    Loader::new().build()
}

/// Read the effective settings: stored values first, then the `[settings]`
/// table. `None` when any of the three credentials is missing from both.
pub fn resolve_settings(
    config: &PagesmithConfig,
    store: &SettingsStore,
) -> Result<Option<Settings>, StoreError> {
    let lookup = |key: &str| -> Result<Option<String>, StoreError> {
        Ok(match store.get(key)? {
            Some(stored) => Some(stored),
            None => config.settings.value(key).map(str::to_string),
        })
    };
    Ok(Settings::from_parts(
        lookup("app_id")?,
        lookup("api_search_key")?,
        lookup("index_name")?,
        lookup("currency")?,
    ))
}
