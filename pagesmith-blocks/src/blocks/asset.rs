//! Style and script includes
//!
//! These blocks mostly come from segmentation, which detaches `<style>`,
//! stylesheet `<link>` and `<script>` tags from pasted markup. An external
//! include keeps its url; an inline one keeps its body text untouched, so
//! rendering from config rebuilds either form.

use crate::block::{mismatched_config, BlockTemplate};
use crate::markup::{escape_attr, find_element, find_tag, Tag};
use crate::model::{AssetConfig, BlockConfig, BlockKind};
use crate::settings::Settings;

pub struct StyleBlock;

pub struct ScriptBlock;

/// Whether a tag is `<link rel="stylesheet">`.
pub fn is_stylesheet_link(tag: &Tag<'_>) -> bool {
    tag.name == "link"
        && tag
            .attr("rel")
            .is_some_and(|rel| rel.split_whitespace().any(|r| r.eq_ignore_ascii_case("stylesheet")))
}

pub fn extract_style(html: &str) -> AssetConfig {
    match find_tag(html, |tag| tag.name == "style" || is_stylesheet_link(tag)) {
        Some(tag) if tag.name == "link" => match tag.attr("href") {
            Some(href) => AssetConfig::external(href),
            None => AssetConfig::default(),
        },
        _ => AssetConfig::inline(inline_body(html, "style")),
    }
}

pub fn extract_script(html: &str) -> AssetConfig {
    match find_tag(html, |tag| tag.name == "script").and_then(|tag| tag.attr("src")) {
        Some(src) => AssetConfig::external(src),
        None => AssetConfig::inline(inline_body(html, "script")),
    }
}

fn inline_body(html: &str, name: &str) -> String {
    find_element(html, |tag| tag.name == name)
        .map(|element| element.inner_html(html).to_string())
        .unwrap_or_default()
}

impl BlockTemplate for StyleBlock {
    fn kind(&self) -> BlockKind {
        BlockKind::Style
    }

    fn default_config(&self) -> BlockConfig {
        BlockConfig::Style(AssetConfig::inline(""))
    }

    fn render(&self, config: &BlockConfig, _settings: Option<&Settings>) -> String {
        match config {
            BlockConfig::Style(AssetConfig { url: Some(url), .. }) => {
                format!("<link rel=\"stylesheet\" href=\"{}\" />", escape_attr(url))
            }
            BlockConfig::Style(asset) => format!("<style>{}</style>", asset.content),
            other => mismatched_config(self.kind(), other),
        }
    }

    fn extract(&self, html: &str) -> BlockConfig {
        BlockConfig::Style(extract_style(html))
    }
}

impl BlockTemplate for ScriptBlock {
    fn kind(&self) -> BlockKind {
        BlockKind::Script
    }

    fn default_config(&self) -> BlockConfig {
        BlockConfig::Script(AssetConfig::inline(""))
    }

    fn render(&self, config: &BlockConfig, _settings: Option<&Settings>) -> String {
        match config {
            BlockConfig::Script(AssetConfig { url: Some(url), .. }) => {
                format!("<script src=\"{}\"></script>", escape_attr(url))
            }
            BlockConfig::Script(asset) => format!("<script>{}</script>", asset.content),
            other => mismatched_config(self.kind(), other),
        }
    }

    fn extract(&self, html: &str) -> BlockConfig {
        BlockConfig::Script(extract_script(html))
    }
}
