//! Carousel config extraction

use crate::markup::{find_elements, find_tag, Element};
use crate::model::{CarouselConfig, Slide};

/// One slide per `swiper-slide` element, in source order.
pub fn extract(html: &str) -> CarouselConfig {
    let slides = find_elements(html, |tag| tag.has_class("swiper-slide"))
        .iter()
        .map(|slide| extract_slide(html, slide))
        .collect();
    CarouselConfig { slides }
}

fn extract_slide(html: &str, slide: &Element<'_>) -> Slide {
    let inner = slide.inner_html(html);

    let media_source = |query: &str| {
        find_tag(inner, |tag| {
            tag.name == "source"
                && tag
                    .attr("media")
                    .is_some_and(|media| media.contains(query))
        })
        .and_then(|tag| tag.attr("srcset"))
    };
    let img = find_tag(inner, |tag| tag.name == "img");

    let desktop_image = media_source("min-width")
        .or_else(|| img.as_ref().and_then(|tag| tag.attr("src")))
        .unwrap_or_default();

    Slide {
        link_url: find_tag(inner, |tag| tag.name == "a")
            .and_then(|tag| tag.attr("href"))
            .unwrap_or_default(),
        mobile_image: media_source("max-width").unwrap_or_default(),
        alt_text: img
            .as_ref()
            .and_then(|tag| tag.attr("alt"))
            .unwrap_or_default(),
        desktop_image,
    }
}
