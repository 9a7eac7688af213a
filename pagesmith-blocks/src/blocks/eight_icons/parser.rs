//! Eight-icons config extraction

use crate::markup::{find_element, find_elements, find_tag};
use crate::model::{fit_slots, EightIconsConfig, IconSlot};

pub fn extract(html: &str) -> EightIconsConfig {
    let title = find_element(html, |tag| tag.has_class("icons-title"))
        .map(|element| element.text(html))
        .unwrap_or_default();

    let icons = find_elements(html, |tag| tag.has_class("icon-wrapper"))
        .iter()
        .map(|wrapper| {
            let inner = wrapper.inner_html(html);
            let img = find_tag(inner, |tag| tag.name == "img");
            let subtitle = find_element(inner, |tag| tag.has_class("icon-subtitle"))
                .map(|element| {
                    let subtitle_html = element.inner_html(inner);
                    find_element(subtitle_html, |tag| tag.name == "span")
                        .map(|span| span.text(subtitle_html))
                        .unwrap_or_else(|| element.text(inner))
                })
                .unwrap_or_default();

            IconSlot {
                link_url: wrapper.open.attr("href").unwrap_or_default(),
                image_url: img
                    .as_ref()
                    .and_then(|tag| tag.attr("src"))
                    .unwrap_or_default(),
                alt_text: img
                    .as_ref()
                    .and_then(|tag| tag.attr("alt"))
                    .unwrap_or_default(),
                subtitle,
            }
        })
        .collect();

    EightIconsConfig {
        title,
        icons: fit_slots(icons, EightIconsConfig::SLOTS),
    }
}
