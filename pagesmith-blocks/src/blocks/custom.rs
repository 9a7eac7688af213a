//! Opaque custom fragments, kept verbatim

use crate::block::{mismatched_config, BlockTemplate};
use crate::model::{BlockConfig, BlockKind, CustomConfig};
use crate::settings::Settings;

pub struct CustomBlock;

pub fn extract(html: &str) -> BlockConfig {
    BlockConfig::Custom(CustomConfig {
        html: html.to_string(),
    })
}

impl BlockTemplate for CustomBlock {
    fn kind(&self) -> BlockKind {
        BlockKind::Custom
    }

    fn default_config(&self) -> BlockConfig {
        BlockConfig::Custom(CustomConfig::default())
    }

    fn render(&self, config: &BlockConfig, _settings: Option<&Settings>) -> String {
        match config {
            BlockConfig::Custom(config) => config.html.clone(),
            other => mismatched_config(self.kind(), other),
        }
    }

    fn extract(&self, html: &str) -> BlockConfig {
        extract(html)
    }
}
