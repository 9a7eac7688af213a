//! Four-categories config extraction

use crate::markup::{find_element, find_elements, find_tag};
use crate::model::{fit_slots, CategorySlot, FourCategoriesConfig};
use once_cell::sync::Lazy;
use regex::Regex;

static BACKGROUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)background-color\s*:\s*([^;]*)").expect("background pattern is valid")
});

pub fn extract(html: &str) -> FourCategoriesConfig {
    let background_color = find_tag(html, |tag| tag.has_class("four_categories_wrapper"))
        .and_then(|tag| tag.attr("style"))
        .and_then(|style| {
            BACKGROUND_RE
                .captures(&style)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .unwrap_or_default();

    let title = find_element(html, |tag| tag.has_class("four_categories_title"))
        .map(|element| element.text(html))
        .unwrap_or_default();

    let categories = find_elements(html, |tag| {
        tag.has_class("four_categories_category_wrapper")
    })
    .iter()
    .map(|wrapper| {
        let inner = wrapper.inner_html(html);
        let img = find_tag(inner, |tag| tag.name == "img");
        CategorySlot {
            link_url: find_tag(inner, |tag| tag.name == "a")
                .and_then(|tag| tag.attr("href"))
                .unwrap_or_default(),
            image_url: img
                .as_ref()
                .and_then(|tag| tag.attr("src"))
                .unwrap_or_default(),
            alt_text: img
                .as_ref()
                .and_then(|tag| tag.attr("alt"))
                .unwrap_or_default(),
        }
    })
    .collect();

    FourCategoriesConfig {
        title,
        background_color,
        categories: fit_slots(categories, FourCategoriesConfig::SLOTS),
    }
}
