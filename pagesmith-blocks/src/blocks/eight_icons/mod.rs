//! Eight linked icons with subtitles

pub mod parser;
pub mod serializer;

use crate::block::{mismatched_config, BlockTemplate};
use crate::model::{BlockConfig, BlockKind, EightIconsConfig};
use crate::settings::Settings;

pub struct EightIconsBlock;

impl BlockTemplate for EightIconsBlock {
    fn kind(&self) -> BlockKind {
        BlockKind::EightIcons
    }

    fn default_config(&self) -> BlockConfig {
        BlockConfig::EightIcons(EightIconsConfig::default())
    }

    fn render(&self, config: &BlockConfig, _settings: Option<&Settings>) -> String {
        match config {
            BlockConfig::EightIcons(config) => serializer::render(config),
            other => mismatched_config(self.kind(), other),
        }
    }

    fn extract(&self, html: &str) -> BlockConfig {
        BlockConfig::EightIcons(parser::extract(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IconSlot;

    fn icon(n: usize) -> IconSlot {
        IconSlot {
            link_url: format!("/sport/{n}"),
            image_url: format!("icon{n}.svg"),
            alt_text: format!("Sport {n}"),
            subtitle: format!("Sport & more {n}"),
        }
    }

    #[test]
    fn full_config_round_trip() {
        let config = EightIconsConfig {
            title: "Our sports".into(),
            icons: (1..=8).map(icon).collect(),
        };
        let html = serializer::render(&config);
        assert_eq!(html.matches(r#"class="icon-wrapper""#).count(), 8);
        assert_eq!(parser::extract(&html), config);
    }

    #[test]
    fn padded_title_and_subtitle_round_trip() {
        let mut icons: Vec<_> = (1..=8).map(icon).collect();
        icons[0].subtitle = "Run ".into();
        icons[1].subtitle = "  Swim".into();
        let config = EightIconsConfig {
            title: " Our sports".into(),
            icons,
        };
        assert_eq!(parser::extract(&serializer::render(&config)), config);
    }

    #[test]
    fn nine_icons_truncate_to_eight() {
        let config = EightIconsConfig {
            title: String::new(),
            icons: (1..=9).map(icon).collect(),
        };
        let extracted = parser::extract(&serializer::render(&config));
        assert_eq!(extracted.icons.len(), 8);
        assert_eq!(extracted.icons[7], icon(8));
    }

    #[test]
    fn default_config_round_trip() {
        let block = EightIconsBlock;
        let config = block.default_config();
        assert_eq!(block.extract(&block.render(&config, None)), config);
    }
}
