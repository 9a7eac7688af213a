//! Component segmentation
//!
//! Splits an HTML blob into top-level fragments in two phases:
//!
//! 1. Spans wrapped in boundary markers (either form the generator writes) are
//!    taken verbatim, keeping the marker id and, in the code form, its type.
//! 2. Everything outside marked spans is segmented structurally. Stylesheet
//!    `<link>`, `<style>` and `<script>` tags are detached first and become
//!    pseudo-components of their own, unless they are builder-provided (see
//!    [`crate::assets`]) or empty. The remaining markup is walked with a depth
//!    counter and every top-level element becomes one fragment.
//!
//! Detached assets of an unmarked run come before its structural fragments.
//! Runs of text or comments with no element are dropped, so empty or non-HTML
//! input yields no fragments at all.

use crate::assets::{is_builder_inline_script, is_builder_url};
use crate::blocks::asset::is_stylesheet_link;
use crate::markup::{tags, Tag, TagKind};
use crate::model::{batch_component_id, BlockKind, Component};
use crate::registry::TemplateRegistry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static START_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!--\s*COMPONENT_START(?::([^:\s]+):([^:\s]+?)|\s+([^:\s]+?))\s*-->")
        .expect("start marker pattern is valid")
});

static END_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!--\s*COMPONENT_END(?::|\s+)([^:\s]+?)\s*-->").expect("end marker pattern is valid")
});

/// One segmented piece of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    /// Id carried by the boundary marker, if the fragment was marked.
    pub id: Option<String>,
    /// Type known without detection: the marker's type or a detached asset's.
    pub kind: Option<BlockKind>,
}

impl Fragment {
    fn structural(html: &str) -> Self {
        Self {
            html: html.trim().to_string(),
            id: None,
            kind: None,
        }
    }

    fn asset(html: &str, kind: BlockKind) -> Self {
        Self {
            html: html.to_string(),
            id: None,
            kind: Some(kind),
        }
    }
}

struct MarkedSpan {
    outer: Range<usize>,
    inner: Range<usize>,
    id: String,
    kind: Option<BlockKind>,
}

/// Split `html` into fragments. Never fails.
pub fn segment(html: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut cursor = 0;

    for span in marked_spans(html) {
        fragments.extend(segment_unmarked(&html[cursor..span.outer.start]));
        fragments.push(Fragment {
            html: html[span.inner].trim().to_string(),
            id: Some(span.id),
            kind: span.kind,
        });
        cursor = span.outer.end;
    }
    fragments.extend(segment_unmarked(&html[cursor..]));

    log::debug!("segmented input into {} fragments", fragments.len());
    fragments
}

/// Segment, detect and extract: the component list for a pasted page.
///
/// Marked fragments keep their marker id; everything else gets a fresh batch id.
pub fn import(html: &str, registry: &TemplateRegistry) -> Vec<Component> {
    segment(html)
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| {
            let kind = fragment
                .kind
                .unwrap_or_else(|| crate::detect::detect(&fragment.html));
            let config = registry.extract(kind, &fragment.html);
            let id = fragment
                .id
                .unwrap_or_else(|| batch_component_id(kind, index));
            Component::with_id(id, config, fragment.html)
        })
        .collect()
}

/// Start/end marker pairs in source order. A start without a matching end is ignored.
fn marked_spans(html: &str) -> Vec<MarkedSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(start) = START_MARKER_RE.captures_at(html, pos) {
        let Some(whole) = start.get(0) else { break };
        let (id, kind) = match (start.get(1), start.get(2), start.get(3)) {
            (Some(id), Some(kind), _) => (id.as_str(), kind.as_str().parse().ok()),
            (_, _, Some(id)) => (id.as_str(), None),
            _ => break,
        };

        let end = END_MARKER_RE
            .captures_iter(&html[whole.end()..])
            .find(|caps| caps.get(1).is_some_and(|m| m.as_str() == id))
            .and_then(|caps| caps.get(0))
            .map(|m| (whole.end() + m.start())..(whole.end() + m.end()));

        match end {
            Some(end) => {
                spans.push(MarkedSpan {
                    outer: whole.start()..end.end,
                    inner: whole.end()..end.start,
                    id: id.to_string(),
                    kind,
                });
                pos = end.end;
            }
            None => {
                log::warn!("boundary marker for '{id}' has no end marker");
                pos = whole.end();
            }
        }
    }

    spans
}

fn segment_unmarked(html: &str) -> Vec<Fragment> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let (mut fragments, kept) = detach_assets(html);
    let remaining: String = kept.iter().map(|range| &html[range.clone()]).collect();
    fragments.extend(
        top_level_spans(&remaining)
            .into_iter()
            .map(|span| Fragment::structural(&remaining[span])),
    );
    fragments
}

/// Pull out `<link rel=stylesheet>`, `<style>` and `<script>` tags.
///
/// Returns the pseudo-components worth keeping and the byte ranges of `html`
/// left over once every such tag is removed.
fn detach_assets(html: &str) -> (Vec<Fragment>, Vec<Range<usize>>) {
    let all: Vec<Tag<'_>> = tags(html).collect();
    let mut assets = Vec::new();
    let mut kept = Vec::new();
    let mut cursor = 0;
    let mut index = 0;

    while index < all.len() {
        let tag = &all[index];
        index += 1;

        let span = if is_stylesheet_link(tag) && tag.kind != TagKind::Close {
            tag.span.clone()
        } else if (tag.name == "script" || tag.name == "style") && tag.kind == TagKind::Open {
            // Raw-text elements: the next token is always the matching end tag.
            match all.get(index) {
                Some(close) if close.kind == TagKind::Close && close.name == tag.name => {
                    index += 1;
                    tag.span.start..close.span.end
                }
                _ => tag.span.start..html.len(),
            }
        } else if (tag.name == "script" || tag.name == "style") && tag.kind == TagKind::SelfClosing {
            tag.span.clone()
        } else {
            continue;
        };

        kept.push(cursor..span.start);
        cursor = span.end;

        let element = &html[span.clone()];
        let body = &html[tag.span.end.min(span.end)..span.end];
        if let Some(fragment) = classify_asset(tag, element, body) {
            assets.push(fragment);
        }
    }
    kept.push(cursor..html.len());

    (assets, kept)
}

fn classify_asset(tag: &Tag<'_>, element: &str, body: &str) -> Option<Fragment> {
    let kind = if tag.name == "script" {
        BlockKind::Script
    } else {
        BlockKind::Style
    };

    let url = match tag.name.as_str() {
        "link" => tag.attr("href"),
        "script" => tag.attr("src"),
        _ => None,
    };

    if let Some(url) = url {
        if is_builder_url(&url) {
            log::debug!("dropping builder-provided include {url}");
            return None;
        }
        return Some(Fragment::asset(element, kind));
    }

    let content = strip_end_tag(body, &tag.name);
    if content.trim().is_empty() {
        return None;
    }
    if kind == BlockKind::Script && is_builder_inline_script(content) {
        log::debug!("dropping builder-provided inline script");
        return None;
    }
    Some(Fragment::asset(element, kind))
}

fn strip_end_tag<'a>(body: &'a str, name: &str) -> &'a str {
    match body.rfind("</") {
        Some(at) if body[at + 2..].to_ascii_lowercase().starts_with(name) => &body[..at],
        _ => body,
    }
}

/// Byte ranges of the top-level elements of `html`.
///
/// Stray end tags at depth 0 are ignored; an element still open at the end of
/// the input runs to the end.
fn top_level_spans(html: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for tag in tags(html) {
        match tag.kind {
            TagKind::Comment => {}
            TagKind::Close => {
                if depth == 0 {
                    log::debug!("ignoring stray </{}>", tag.name);
                    continue;
                }
                depth -= 1;
                if depth == 0 {
                    if let Some(from) = start.take() {
                        spans.push(from..tag.span.end);
                    }
                }
            }
            TagKind::Open | TagKind::SelfClosing => {
                if depth == 0 {
                    if tag.opens() {
                        start = Some(tag.span.start);
                    } else {
                        spans.push(tag.span.clone());
                    }
                }
                if tag.opens() {
                    depth += 1;
                }
            }
        }
    }

    if let Some(from) = start {
        spans.push(from..html.len());
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn htmls(input: &str) -> Vec<String> {
        segment(input).into_iter().map(|f| f.html).collect()
    }

    #[test]
    fn splits_top_level_elements() {
        assert_eq!(
            htmls("<div>A</div><div>B<span>c</span></div>"),
            vec!["<div>A</div>", "<div>B<span>c</span></div>"]
        );
    }

    #[test]
    fn void_and_self_closing_tags_do_not_nest() {
        assert_eq!(
            htmls(r#"<div><img src="a.png"><br><input/></div><hr><p>x</p>"#),
            vec![r#"<div><img src="a.png"><br><input/></div>"#, "<hr>", "<p>x</p>"]
        );
    }

    #[test]
    fn unclosed_trailing_element_is_kept() {
        assert_eq!(
            htmls("<p>a</p><section><div>open"),
            vec!["<p>a</p>", "<section><div>open"]
        );
    }

    #[test]
    fn stray_end_tags_are_ignored() {
        assert_eq!(htmls("</div><p>a</p>"), vec!["<p>a</p>"]);
    }

    #[test]
    fn comments_and_text_only_runs_are_dropped() {
        assert!(segment("").is_empty());
        assert!(segment("   \n").is_empty());
        assert!(segment("plain text, no markup").is_empty());
        assert!(segment("<!-- note -->").is_empty());
        assert_eq!(htmls("<!-- <div> --><p>a</p>"), vec!["<p>a</p>"]);
    }

    #[test]
    fn tags_inside_scripts_do_not_affect_depth() {
        let input = "<div>a<script>document.write('<div>')</script></div><p>b</p>";
        let fragments = segment(input);
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].kind, Some(BlockKind::Script));
        assert_eq!(fragments[1].html, "<div>a</div>");
        assert_eq!(fragments[2].html, "<p>b</p>");
    }

    #[test]
    fn assets_come_first_in_source_order() {
        let input = r#"<p>x</p><style>.a{}</style><script src="https://cdn.test/app.js"></script><link rel="stylesheet" href="/site.css">"#;
        let fragments = segment(input);
        let kinds: Vec<_> = fragments.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Some(BlockKind::Style),
                Some(BlockKind::Script),
                Some(BlockKind::Style),
                None
            ]
        );
        assert_eq!(fragments[3].html, "<p>x</p>");
    }

    #[test]
    fn empty_inline_assets_are_dropped() {
        assert!(segment("<style>  </style><script>\n</script>").is_empty());
    }

    #[test]
    fn builder_includes_are_dropped() {
        let input = r#"<script src="https://unpkg.com/swiper/swiper-bundle.min.js"></script>
<link rel="stylesheet" href="https://unpkg.com/swiper/swiper-bundle.min.css" />
<script src="https://cdn.test/tracker.js"></script>"#;
        let fragments = segment(input);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].kind, Some(BlockKind::Script));
        assert!(fragments[0].html.contains("tracker.js"));
    }

    #[test]
    fn both_marker_forms_are_recognized() {
        let input = "<!-- COMPONENT_START:carousel-1:carousel -->\n<div>one</div>\n<!-- COMPONENT_END:carousel-1 -->\n\
<p>loose</p>\n\
<!-- COMPONENT_START custom-2 -->\n<div>two</div>\n<!-- COMPONENT_END custom-2 -->";
        let fragments = segment(input);
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].id.as_deref(), Some("carousel-1"));
        assert_eq!(fragments[0].kind, Some(BlockKind::Carousel));
        assert_eq!(fragments[0].html, "<div>one</div>");
        assert_eq!(fragments[1].id, None);
        assert_eq!(fragments[1].html, "<p>loose</p>");
        assert_eq!(fragments[2].id.as_deref(), Some("custom-2"));
        assert_eq!(fragments[2].kind, None);
    }

    #[test]
    fn unknown_marker_type_leaves_kind_to_detection() {
        let registry = TemplateRegistry::default();
        let input = "<!-- COMPONENT_START:hero-1:hero-banner -->\n<p>hero</p>\n<!-- COMPONENT_END:hero-1 -->";
        let fragments = segment(input);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].id.as_deref(), Some("hero-1"));
        assert_eq!(fragments[0].kind, None);

        let components = import(input, &registry);
        assert_eq!(components[0].kind(), BlockKind::Custom);
        assert_eq!(components[0].html, "<p>hero</p>");
    }

    #[test]
    fn marked_spans_are_kept_verbatim() {
        let input = "<!-- COMPONENT_START custom-9 -->\n<div>a</div><style>.x{}</style>\n<!-- COMPONENT_END custom-9 -->";
        let fragments = segment(input);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].html, "<div>a</div><style>.x{}</style>");
    }

    #[test]
    fn unmatched_start_marker_falls_back_to_structure() {
        let fragments = segment("<!-- COMPONENT_START custom-1 --><div>a</div>");
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].id, None);
        assert_eq!(fragments[0].html, "<div>a</div>");
    }
}
