//! Block template trait definition
//!
//! Every block type in the closed set has one [`BlockTemplate`]: a default
//! config, a pure `config → HTML` renderer and the matching `HTML → config`
//! extractor. The renderer and extractor of a type live side by side in its
//! module under `blocks/` because they must change together.

use crate::model::{BlockConfig, BlockKind};
use crate::settings::Settings;

/// Trait for block templates
///
/// # Examples
///
/// ```ignore
/// struct BannerBlock;
///
/// impl BlockTemplate for BannerBlock {
///     fn kind(&self) -> BlockKind {
///         BlockKind::Custom
///     }
///
///     fn default_config(&self) -> BlockConfig {
///         BlockConfig::Custom(CustomConfig::default())
///     }
///
///     fn render(&self, config: &BlockConfig, _settings: Option<&Settings>) -> String {
///         String::new()
///     }
///
///     fn extract(&self, html: &str) -> BlockConfig {
///         BlockConfig::Custom(CustomConfig { html: html.to_string() })
///     }
/// }
/// ```
pub trait BlockTemplate: Send + Sync {
    /// The block type this template renders.
    fn kind(&self) -> BlockKind;

    /// Canonical type name (e.g. "four-categories")
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    /// Human-facing label
    fn display_name(&self) -> &str {
        self.kind().display_name()
    }

    /// Config a freshly added block starts with.
    fn default_config(&self) -> BlockConfig;

    /// Render `config` to an HTML fragment.
    ///
    /// Never fails: problems are reported inline as an HTML comment.
    fn render(&self, config: &BlockConfig, settings: Option<&Settings>) -> String;

    /// Recover this type's config from a fragment.
    ///
    /// Fields that cannot be found fall back to their defaults.
    fn extract(&self, html: &str) -> BlockConfig;
}

/// Inline report for a config handed to the wrong template.
pub(crate) fn mismatched_config(template: BlockKind, config: &BlockConfig) -> String {
    log::warn!(
        "{} template received a {} config",
        template.as_str(),
        config.kind().as_str()
    );
    format!(
        "<!-- Error: {} config passed to {} template -->",
        config.kind(),
        template
    )
}
