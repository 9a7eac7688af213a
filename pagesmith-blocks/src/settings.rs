//! Search-service credentials and display currency.
//!
//! Settings are populated once per session by the host (see `pagesmith-config`)
//! and passed explicitly to anything that renders a products showroom or the
//! page bootstrap script.

use serde::{Deserialize, Serialize};

/// Currency used when the persisted settings carry none.
pub const DEFAULT_CURRENCY: &str = "EGP";

/// The four persisted values consumed by the showroom renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub app_id: String,
    pub api_search_key: String,
    pub index_name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Settings {
    pub fn new(
        app_id: impl Into<String>,
        api_search_key: impl Into<String>,
        index_name: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            api_search_key: api_search_key.into(),
            index_name: index_name.into(),
            currency: currency.into(),
        }
    }

    /// Assemble settings from optional stored values.
    ///
    /// Returns `None` unless all three credentials are present and non-empty.
    /// A missing currency falls back to [`DEFAULT_CURRENCY`].
    pub fn from_parts(
        app_id: Option<String>,
        api_search_key: Option<String>,
        index_name: Option<String>,
        currency: Option<String>,
    ) -> Option<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Some(Self {
            app_id: non_empty(app_id)?,
            api_search_key: non_empty(api_search_key)?,
            index_name: non_empty(index_name)?,
            currency: non_empty(currency).unwrap_or_else(default_currency),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_requires_all_credentials() {
        let settings = Settings::from_parts(
            Some("APP".into()),
            None,
            Some("prod_en".into()),
            Some("USD".into()),
        );
        assert!(settings.is_none());
    }

    #[test]
    fn from_parts_defaults_currency() {
        let settings = Settings::from_parts(
            Some("APP".into()),
            Some("KEY".into()),
            Some("prod_en".into()),
            Some("  ".into()),
        )
        .unwrap();
        assert_eq!(settings.currency, DEFAULT_CURRENCY);
    }
}
