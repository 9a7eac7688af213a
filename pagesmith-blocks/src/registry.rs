//! Block template registry
//!
//! This module provides the table of block templates the generator, the
//! extractor and the editing session consult. It is built once and passed
//! explicitly to every call site.

use crate::block::BlockTemplate;
use crate::error::BlockError;
use crate::model::{BlockConfig, BlockKind};
use crate::settings::Settings;
use std::collections::HashMap;

/// Registry of block templates
///
/// # Examples
///
/// ```ignore
/// let registry = TemplateRegistry::with_defaults();
/// let template = registry.get("four-categories")?;
/// let html = template.render(&template.default_config(), None);
/// ```
pub struct TemplateRegistry {
    templates: HashMap<BlockKind, Box<dyn BlockTemplate>>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TemplateRegistry {
            templates: HashMap::new(),
        }
    }

    /// Register a template
    ///
    /// If a template for the same type already exists, it will be replaced.
    pub fn register<T: BlockTemplate + 'static>(&mut self, template: T) {
        self.templates.insert(template.kind(), Box::new(template));
    }

    /// Get a template by type name
    pub fn get(&self, name: &str) -> Result<&dyn BlockTemplate, BlockError> {
        let kind: BlockKind = name
            .parse()
            .map_err(|_| BlockError::BlockNotFound(name.to_string()))?;
        self.get_kind(kind)
    }

    pub fn get_kind(&self, kind: BlockKind) -> Result<&dyn BlockTemplate, BlockError> {
        self.templates
            .get(&kind)
            .map(|t| t.as_ref())
            .ok_or_else(|| BlockError::BlockNotFound(kind.to_string()))
    }

    /// Check if a template exists for a type name
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// List all registered block types (in type order)
    pub fn list_blocks(&self) -> Vec<BlockKind> {
        let mut kinds: Vec<_> = self.templates.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Default config for a type name
    pub fn default_config(&self, name: &str) -> Result<BlockConfig, BlockError> {
        Ok(self.get(name)?.default_config())
    }

    /// Render a config with the template named `name`
    ///
    /// Unknown names render an inline comment instead of failing.
    pub fn render(&self, name: &str, config: &BlockConfig, settings: Option<&Settings>) -> String {
        match self.get(name) {
            Ok(template) => template.render(config, settings),
            Err(_) => {
                log::warn!("no template registered for '{name}'");
                format!("<!-- Unknown component type: {name} -->")
            }
        }
    }

    /// Render a config with the template of its own type
    pub fn render_config(&self, config: &BlockConfig, settings: Option<&Settings>) -> String {
        self.render(config.kind().as_str(), config, settings)
    }

    /// Extract a config of the given type from a fragment
    ///
    /// A type without a registered template yields the fragment as a custom block.
    pub fn extract(&self, kind: BlockKind, html: &str) -> BlockConfig {
        match self.get_kind(kind) {
            Ok(template) => template.extract(html),
            Err(_) => crate::blocks::custom::extract(html),
        }
    }

    /// Create a registry with the built-in block types
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::blocks::carousel::CarouselBlock);
        registry.register(crate::blocks::four_categories::FourCategoriesBlock);
        registry.register(crate::blocks::eight_icons::EightIconsBlock);
        registry.register(crate::blocks::showroom::ShowroomBlock);
        registry.register(crate::blocks::asset::StyleBlock);
        registry.register(crate::blocks::asset::ScriptBlock);
        registry.register(crate::blocks::custom::CustomBlock);

        registry
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
