//! Products showroom
//!
//! A heading (title mode) or a linked banner (image mode) above a horizontally
//! scrolling product track. Products are fetched in the browser by the query
//! call in the track's `x-init`; which call is chosen depends on the config:
//!
//! | categoryNumber | objectIds | sale | call                                              |
//! |----------------|-----------|------|---------------------------------------------------|
//! | set            | any       | no   | `getProductsFromCategory(10, N, [ids])`           |
//! | set            | any       | yes  | `getDiscountedProductsFromCategory(10, N, [ids])` |
//! | empty          | set       | any  | `getProductsManual([ids])`                        |
//! | empty          | empty     | any  | none, the fetching `<section>` is omitted         |
//!
//! Rendering needs the display currency from [`Settings`]; without it the block
//! renders an error comment. The raw `categoryNumber`, `objectIds` and direction
//! are also written as `data-*` attributes on the root so extraction is exact;
//! hand-written markup without them is read back from the query call.

pub mod parser;
pub mod serializer;

use crate::block::{mismatched_config, BlockTemplate};
use crate::model::{BlockConfig, BlockKind, ShowroomConfig};
use crate::settings::Settings;

/// Products requested by the category queries.
pub const PRODUCT_COUNT: u32 = 10;

pub struct ShowroomBlock;

impl BlockTemplate for ShowroomBlock {
    fn kind(&self) -> BlockKind {
        BlockKind::ProductsShowroom
    }

    fn default_config(&self) -> BlockConfig {
        BlockConfig::ProductsShowroom(ShowroomConfig::default())
    }

    fn render(&self, config: &BlockConfig, settings: Option<&Settings>) -> String {
        match config {
            BlockConfig::ProductsShowroom(config) => serializer::render(config, settings),
            other => mismatched_config(self.kind(), other),
        }
    }

    fn extract(&self, html: &str) -> BlockConfig {
        BlockConfig::ProductsShowroom(parser::extract(html))
    }
}
