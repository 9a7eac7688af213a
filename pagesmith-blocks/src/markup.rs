//! Light tag walk over HTML text
//!
//! This is not an HTML parser. It finds start tags, end tags and comments with
//! their byte offsets so callers can slice the original text verbatim, which is
//! what both segmentation and config extraction need. Everything between tags is
//! left alone.
//!
//! Rules shared by every caller:
//! - Comments are opaque: `<!-- <div> -->` yields one comment token, no tags.
//! - `<script>` and `<style>` bodies are raw text; the walk jumps from the start
//!   tag straight to the matching end tag.
//! - Void elements and tags written `<x/>` never open a nesting level.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;

/// Elements that never have an end tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<!--[\s\S]*?-->|<(/?)([A-Za-z][A-Za-z0-9:-]*)((?:[^>"']|"[^"]*"|'[^']*')*?)(/?)>"#)
        .expect("tag pattern is valid")
});

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s=/>"']+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("attribute pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
    SelfClosing,
    Comment,
}

/// One tag (or comment) located in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub kind: TagKind,
    /// Lowercased element name, empty for comments.
    pub name: String,
    /// Byte range of the whole tag in the source.
    pub span: Range<usize>,
    attrs: &'a str,
}

impl<'a> Tag<'a> {
    /// Whether this tag opens a nesting level.
    pub fn opens(&self) -> bool {
        self.kind == TagKind::Open && !is_void(&self.name)
    }

    /// Whether this tag closes a nesting level.
    pub fn closes(&self) -> bool {
        self.kind == TagKind::Close
    }

    /// Decoded value of the first attribute called `name` (case-insensitive).
    ///
    /// A bare attribute (`defer`) yields an empty string.
    pub fn attr(&self, name: &str) -> Option<String> {
        ATTR_RE.captures_iter(self.attrs).find_map(|caps| {
            let key = caps.get(1)?.as_str();
            if !key.eq_ignore_ascii_case(name) {
                return None;
            }
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str())
                .unwrap_or("");
            Some(unescape(value).into_owned())
        })
    }

    /// Whether the `class` attribute contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_whitespace().any(|token| token == class))
            .unwrap_or(false)
    }
}

pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Iterator over the tags of an HTML string, in source order.
pub struct Tags<'a> {
    html: &'a str,
    lower: String,
    pos: usize,
}

pub fn tags(html: &str) -> Tags<'_> {
    Tags {
        html,
        lower: html.to_ascii_lowercase(),
        pos: 0,
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = TAG_RE.captures_at(self.html, self.pos)?;
        let whole = caps.get(0)?;
        self.pos = whole.end();

        let Some(name) = caps.get(2) else {
            return Some(Tag {
                kind: TagKind::Comment,
                name: String::new(),
                span: whole.range(),
                attrs: "",
            });
        };

        let name = name.as_str().to_ascii_lowercase();
        let is_close = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let self_closed = caps.get(4).is_some_and(|m| !m.as_str().is_empty());
        let kind = if is_close {
            TagKind::Close
        } else if self_closed {
            TagKind::SelfClosing
        } else {
            TagKind::Open
        };

        if kind == TagKind::Open && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            let needle = format!("</{name}");
            self.pos = self.lower[self.pos..]
                .find(&needle)
                .map(|offset| self.pos + offset)
                .unwrap_or(self.html.len());
        }

        Some(Tag {
            kind,
            name,
            span: whole.range(),
            attrs: caps.get(3).map(|m| m.as_str()).unwrap_or(""),
        })
    }
}

/// An element located by [`find_elements`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    pub open: Tag<'a>,
    /// From the start of the open tag to the end of the matching close tag.
    pub outer: Range<usize>,
    /// Between the open tag and the matching close tag.
    pub inner: Range<usize>,
}

impl<'a> Element<'a> {
    pub fn outer_html<'h>(&self, html: &'h str) -> &'h str {
        &html[self.outer.clone()]
    }

    pub fn inner_html<'h>(&self, html: &'h str) -> &'h str {
        &html[self.inner.clone()]
    }

    /// Entity-decoded inner content, without surrounding line-break layout.
    ///
    /// Spaces on the same line as the tags are content and are kept.
    pub fn text(&self, html: &str) -> String {
        unescape(strip_layout(self.inner_html(html))).into_owned()
    }
}

/// Drop a leading or trailing whitespace run if it contains a line break.
fn strip_layout(text: &str) -> &str {
    let body = text.trim_start();
    let text = if text[..text.len() - body.len()].contains('\n') {
        body
    } else {
        text
    };
    let body = text.trim_end();
    if text[body.len()..].contains('\n') {
        body
    } else {
        text
    }
}

/// Every element whose start tag satisfies `pred`, in source order.
///
/// The matching end tag is found by counting same-named tags; an element left
/// open runs to the end of the input.
pub fn find_elements<'a>(html: &'a str, pred: impl Fn(&Tag<'a>) -> bool) -> Vec<Element<'a>> {
    let all: Vec<Tag<'a>> = tags(html).collect();
    let mut found = Vec::new();

    for (index, tag) in all.iter().enumerate() {
        if tag.kind == TagKind::Comment || tag.kind == TagKind::Close || !pred(tag) {
            continue;
        }
        if !tag.opens() {
            found.push(Element {
                open: tag.clone(),
                outer: tag.span.clone(),
                inner: tag.span.end..tag.span.end,
            });
            continue;
        }

        let mut depth = 1usize;
        let mut close = None;
        for later in &all[index + 1..] {
            if later.name != tag.name {
                continue;
            }
            if later.opens() {
                depth += 1;
            } else if later.closes() {
                depth -= 1;
                if depth == 0 {
                    close = Some(later.span.clone());
                    break;
                }
            }
        }

        let (inner_end, outer_end) = match close {
            Some(span) => (span.start, span.end),
            None => (html.len(), html.len()),
        };
        found.push(Element {
            open: tag.clone(),
            outer: tag.span.start..outer_end,
            inner: tag.span.end..inner_end,
        });
    }

    found
}

/// First element whose start tag satisfies `pred`.
pub fn find_element<'a>(html: &'a str, pred: impl Fn(&Tag<'a>) -> bool) -> Option<Element<'a>> {
    find_elements(html, pred).into_iter().next()
}

/// First start tag satisfying `pred`, without locating its end.
pub fn find_tag<'a>(html: &'a str, pred: impl Fn(&Tag<'a>) -> bool) -> Option<Tag<'a>> {
    tags(html).find(|tag| tag.kind != TagKind::Close && tag.kind != TagKind::Comment && pred(tag))
}

/// Escape a value for a double-quoted attribute.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Escape a value for element text content.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

pub fn unescape(value: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(value)
}

/// Collapse whitespace runs to one space, drop newlines and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
