//! Four category tiles under a title
//!
//! Always exactly four slots: configs are padded or truncated before rendering
//! and after extraction.

pub mod parser;
pub mod serializer;

use crate::block::{mismatched_config, BlockTemplate};
use crate::model::{BlockConfig, BlockKind, FourCategoriesConfig};
use crate::settings::Settings;

pub struct FourCategoriesBlock;

impl BlockTemplate for FourCategoriesBlock {
    fn kind(&self) -> BlockKind {
        BlockKind::FourCategories
    }

    fn default_config(&self) -> BlockConfig {
        BlockConfig::FourCategories(FourCategoriesConfig::default())
    }

    fn render(&self, config: &BlockConfig, _settings: Option<&Settings>) -> String {
        match config {
            BlockConfig::FourCategories(config) => serializer::render(config),
            other => mismatched_config(self.kind(), other),
        }
    }

    fn extract(&self, html: &str) -> BlockConfig {
        BlockConfig::FourCategories(parser::extract(html))
    }
}
