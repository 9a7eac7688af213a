use crate::common::{self, registry, rendered, settings};
use pagesmith_blocks::model::{AssetConfig, BlockConfig};
use pagesmith_blocks::{generate, import, BlockKind, ExportMode, Session};

const PASTED: &str = include_str!("fixtures/pasted.html");

#[test]
fn pasted_page_imports_typed_components() {
    let components = import(PASTED, &registry());
    let kinds: Vec<_> = components.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Style,
            BlockKind::Style,
            BlockKind::Script,
            BlockKind::Script,
            BlockKind::Carousel,
            BlockKind::Custom,
            BlockKind::FourCategories,
        ]
    );

    assert_eq!(
        components[0].config,
        BlockConfig::Style(AssetConfig::external(
            "https://fonts.example.com/css?family=Roboto"
        ))
    );
    assert_eq!(
        components[3].config,
        BlockConfig::Script(AssetConfig::inline(
            "\n  window.dataLayer = window.dataLayer || [];\n"
        ))
    );
    assert_eq!(
        registry().render_config(&components[3].config, None),
        components[3].html
    );

    let BlockConfig::Carousel(carousel) = &components[4].config else {
        panic!("expected a carousel");
    };
    assert_eq!(carousel.slides.len(), 2);
    assert_eq!(carousel.slides[1].mobile_image, "https://cdn.example.com/hike-m.jpg");

    let BlockConfig::FourCategories(categories) = &components[6].config else {
        panic!("expected four categories");
    };
    assert_eq!(categories.title, "Shop by sport");
    assert_eq!(categories.categories.len(), 4);
    assert_eq!(categories.categories[1].alt_text, "Tennis");
    assert_eq!(categories.categories[2].link_url, "");
}

#[test]
fn imported_ids_are_unique() {
    let components = import(PASTED, &registry());
    let mut ids: Vec<_> = components.iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), components.len());
}

#[test]
fn exported_page_reimports_with_same_configs() {
    let registry = registry();
    let components: Vec<_> = common::structured_configs()
        .into_iter()
        .enumerate()
        .map(|(n, config)| rendered(&format!("{}-{n}", config.kind()), config))
        .collect();

    let page = generate(&components, ExportMode::Preview, Some(&settings()), &registry);
    let reimported = import(&page, &registry);
    assert_eq!(reimported, components);
}

#[test]
fn session_import_appends() {
    let registry = registry();
    let mut session = Session::new();
    session
        .add_block("eight-icons", &registry, Some(&settings()))
        .unwrap();
    let added = session.import(PASTED, &registry);
    assert_eq!(added, 7);
    assert_eq!(session.len(), 8);
    assert_eq!(session.components()[0].kind(), BlockKind::EightIcons);
}

#[test]
fn empty_input_imports_nothing() {
    assert!(import("", &registry()).is_empty());
    assert!(import("not html at all", &registry()).is_empty());
}
