//! Block type detection
//!
//! Classifies a fragment by the marker classes and ids its template writes.
//! Rules run in a fixed priority order and the first match wins:
//!
//! 1. carousel: an element classed `swiper` + `mySwiper`, or any `swiper-slide`
//! 2. four-categories: `four_categories_wrapper` or `four_categories_category_wrapper`
//! 3. eight-icons: `icons-wrapper` or `icon-wrapper`
//! 4. products-showroom: `showroom-component`, `showroom-container`,
//!    `showroom-banner-wrapper`, `#showroom-title`, or a `component-container`
//!    alongside an Alpine `x-data`
//! 5. style: the only top-level element is `<style>` or a stylesheet `<link>`
//! 6. script: the only top-level element is `<script>`
//! 7. custom
//!
//! Class matching is by token, so extra classes, reordering and whitespace do
//! not matter.

use crate::blocks::asset::is_stylesheet_link;
use crate::markup::{tags, Tag, TagKind};
use crate::model::BlockKind;

type Rule = (BlockKind, fn(&Tag<'_>) -> bool);

const RULES: &[Rule] = &[
    (BlockKind::Carousel, carousel_marker),
    (BlockKind::FourCategories, four_categories_marker),
    (BlockKind::EightIcons, eight_icons_marker),
    (BlockKind::ProductsShowroom, showroom_marker),
];

fn carousel_marker(tag: &Tag<'_>) -> bool {
    (tag.has_class("swiper") && tag.has_class("mySwiper")) || tag.has_class("swiper-slide")
}

fn four_categories_marker(tag: &Tag<'_>) -> bool {
    tag.has_class("four_categories_wrapper") || tag.has_class("four_categories_category_wrapper")
}

fn eight_icons_marker(tag: &Tag<'_>) -> bool {
    tag.has_class("icons-wrapper") || tag.has_class("icon-wrapper")
}

fn showroom_marker(tag: &Tag<'_>) -> bool {
    tag.has_class("showroom-component")
        || tag.has_class("showroom-container")
        || tag.has_class("showroom-banner-wrapper")
        || tag.attr("id").as_deref() == Some("showroom-title")
}

/// Classify a fragment. Never fails; unrecognized input is [`BlockKind::Custom`].
pub fn detect(html: &str) -> BlockKind {
    let start_tags: Vec<Tag<'_>> = tags(html)
        .filter(|tag| matches!(tag.kind, TagKind::Open | TagKind::SelfClosing))
        .collect();

    for (kind, marker) in RULES {
        if start_tags.iter().any(|tag| marker(tag)) {
            log::debug!("detected {kind} by marker class");
            return *kind;
        }
    }

    let alpine_container = start_tags.iter().any(|tag| tag.has_class("component-container"))
        && start_tags.iter().any(|tag| tag.attr("x-data").is_some());
    if alpine_container {
        log::debug!("detected products-showroom by alpine container");
        return BlockKind::ProductsShowroom;
    }

    match lone_top_level_tag(html) {
        Some(tag) if tag.name == "style" || is_stylesheet_link(&tag) => BlockKind::Style,
        Some(tag) if tag.name == "script" => BlockKind::Script,
        _ => BlockKind::Custom,
    }
}

/// The start tag of the fragment's only top-level element, if it has exactly one.
fn lone_top_level_tag(html: &str) -> Option<Tag<'_>> {
    let mut depth = 0usize;
    let mut top_level = Vec::new();

    for tag in tags(html) {
        match tag.kind {
            TagKind::Comment => {}
            TagKind::Close => depth = depth.saturating_sub(1),
            TagKind::Open | TagKind::SelfClosing => {
                if depth == 0 {
                    top_level.push(tag.clone());
                }
                if tag.opens() {
                    depth += 1;
                }
            }
        }
    }

    match top_level.len() {
        1 => top_level.pop(),
        _ => None,
    }
}
