use pagesmith_blocks::{detect, BlockKind};

#[test]
fn hand_edited_markup_is_still_recognized() {
    let carousel = r#"<div    id="hero"
      class="mySwiper swiper  hero-slider">
  <div class="swiper-wrapper"></div>
</div>"#;
    assert_eq!(detect(carousel), BlockKind::Carousel);

    let icons = r#"<div id="page-content"><div data-k="1" class="icons-wrapper grid"></div></div>"#;
    assert_eq!(detect(icons), BlockKind::EightIcons);

    let showroom = r#"<div><h2 class="x" id="showroom-title">Deals</h2></div>"#;
    assert_eq!(detect(showroom), BlockKind::ProductsShowroom);
}

#[test]
fn marker_strings_outside_class_attributes_are_ignored() {
    assert_eq!(
        detect(r#"<p title="swiper-slide">swiper mySwiper</p>"#),
        BlockKind::Custom
    );
}

#[test]
fn pseudo_component_types() {
    assert_eq!(detect("<style>body{}</style>"), BlockKind::Style);
    assert_eq!(
        detect(r#"<script src="https://analytics.example.com/tag.js"></script>"#),
        BlockKind::Script
    );
}
