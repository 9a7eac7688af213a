//! Banner carousel
//!
//! A single slide renders as a plain linked picture; any other count (including
//! zero) renders the full swiper with navigation and pagination. Each slide is a
//! `swiper-slide` holding a `<picture>` with a desktop `<source>`
//! (`min-width`), a mobile `<source>` (`max-width`) and a fallback `<img>`.

pub mod parser;
pub mod serializer;

use crate::block::{mismatched_config, BlockTemplate};
use crate::model::{BlockConfig, BlockKind, CarouselConfig, Slide};
use crate::settings::Settings;

/// Slides in a freshly added carousel.
pub const DEFAULT_SLIDES: usize = 3;

pub struct CarouselBlock;

impl BlockTemplate for CarouselBlock {
    fn kind(&self) -> BlockKind {
        BlockKind::Carousel
    }

    fn default_config(&self) -> BlockConfig {
        BlockConfig::Carousel(CarouselConfig {
            slides: vec![Slide::default(); DEFAULT_SLIDES],
        })
    }

    fn render(&self, config: &BlockConfig, _settings: Option<&Settings>) -> String {
        match config {
            BlockConfig::Carousel(config) => serializer::render(config),
            other => mismatched_config(self.kind(), other),
        }
    }

    fn extract(&self, html: &str) -> BlockConfig {
        BlockConfig::Carousel(parser::extract(html))
    }
}
