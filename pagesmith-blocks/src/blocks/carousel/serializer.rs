//! Carousel HTML rendering

use crate::markup::escape_attr;
use crate::model::{CarouselConfig, Slide};

pub fn render(config: &CarouselConfig) -> String {
    match config.slides.as_slice() {
        [only] => render_single(only),
        slides => render_swiper(slides),
    }
}

fn picture(slide: &Slide, indent: &str) -> String {
    let desktop = escape_attr(&slide.desktop_image);
    let mobile = escape_attr(&slide.mobile_image);
    let alt = escape_attr(&slide.alt_text);
    format!(
        r#"{indent}<picture>
{indent}  <source media="(min-width: 768px)" srcset="{desktop}" />
{indent}  <!-- Mobile image -->
{indent}  <source media="(max-width: 767px)" srcset="{mobile}" />
{indent}  <!-- Fallback for older browsers -->
{indent}  <img src="{desktop}" class="slider-picture" alt="{alt}" loading="lazy" />
{indent}</picture>"#
    )
}

fn render_single(slide: &Slide) -> String {
    let link = escape_attr(&slide.link_url);
    format!(
        r#"<div>
  <a href="{link}"></a>
  <div class="swiper-slide">
    <a href="{link}">
{}</a>
  </div>
</div>"#,
        picture(slide, "      ")
    )
}

fn render_swiper(slides: &[Slide]) -> String {
    let slides_html: String = slides
        .iter()
        .map(|slide| {
            format!(
                "\n    <div class=\"swiper-slide\"><a href=\"{}\">\n{}</a>\n    </div>",
                escape_attr(&slide.link_url),
                picture(slide, "      ")
            )
        })
        .collect();

    format!(
        r#"<!-- Swiper -->
<div class="swiper mySwiper">
  <div class="swiper-wrapper">{slides_html}
  </div>
  <div class="swiper-button-next"></div>
  <div class="swiper-button-prev"></div>
  <div class="swiper-pagination"></div>
</div>"#
    )
}
