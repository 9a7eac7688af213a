//! Render → extract for every structured type.
//!
//! Each template's markup and its extractor change together; these tests are the
//! tripwire when one moves without the other.

use crate::common::{self, registry, settings};
use pagesmith_blocks::model::{
    BlockConfig, CarouselConfig, CategorySlot, FourCategoriesConfig, Slide,
};
use pagesmith_blocks::{detect, extract, BlockKind};

#[test]
fn every_structured_type_round_trips() {
    let registry = registry();
    for config in common::structured_configs() {
        let kind = config.kind();
        let html = registry.render(kind.as_str(), &config, Some(&settings()));
        assert_eq!(detect(&html), kind, "detect after render for {kind}");
        assert_eq!(extract(&html, kind, &registry), config, "extract for {kind}");
    }
}

#[test]
fn default_configs_round_trip() {
    let registry = registry();
    for kind in BlockKind::ALL.into_iter().filter(|k| k.is_structured()) {
        let config = registry.default_config(kind.as_str()).unwrap();
        let html = registry.render_config(&config, Some(&settings()));
        assert_eq!(extract(&html, kind, &registry), config, "{kind}");
    }
}

#[test]
fn carousel_threshold_is_one_slide() {
    let registry = registry();
    let one = BlockConfig::Carousel(CarouselConfig {
        slides: vec![Slide {
            link_url: "https://a".into(),
            ..Default::default()
        }],
    });
    let two = BlockConfig::Carousel(common::carousel());

    let single = registry.render_config(&one, None);
    let swiper = registry.render_config(&two, None);

    assert!(!single.contains("swiper-button-next"));
    assert!(swiper.contains("swiper-button-next"));
    assert!(swiper.contains("swiper-button-prev"));
    assert!(swiper.contains("swiper-pagination"));
    assert_eq!(detect(&single), BlockKind::Carousel);
    assert_eq!(detect(&swiper), BlockKind::Carousel);
}

#[test]
fn two_category_fragment_pads_to_four() {
    let html = r#"<div class="four_categories_wrapper" style="background-color:white;">
  <h2 class="four_categories_title">Pick one</h2>
  <div class="four_categories_category_wrapper"><a href="/a"><img src="a.png" alt="A"></a></div>
  <div class="four_categories_category_wrapper"><a href="/b"><img src="b.png" alt="B"></a></div>
</div>"#;
    let config = extract(html, BlockKind::FourCategories, &registry());
    let BlockConfig::FourCategories(FourCategoriesConfig { categories, .. }) = config else {
        panic!("expected four-categories config");
    };
    assert_eq!(
        categories,
        vec![
            CategorySlot {
                link_url: "/a".into(),
                image_url: "a.png".into(),
                alt_text: "A".into(),
            },
            CategorySlot {
                link_url: "/b".into(),
                image_url: "b.png".into(),
                alt_text: "B".into(),
            },
            CategorySlot::default(),
            CategorySlot::default(),
        ]
    );
}

#[test]
fn extraction_never_fails_on_foreign_markup() {
    let registry = registry();
    for kind in BlockKind::ALL {
        for html in ["", "plain", "<div", "</p></p>", "<!-- only a comment -->"] {
            let config = extract(html, kind, &registry);
            assert_eq!(config.kind(), kind);
        }
    }
}

#[test]
fn unknown_type_renders_placeholder() {
    let config = BlockConfig::Carousel(common::carousel());
    let html = registry().render("hero-banner", &config, None);
    insta::assert_snapshot!(html, @"<!-- Unknown component type: hero-banner -->");
}
