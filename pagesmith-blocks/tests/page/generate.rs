use crate::common::{self, registry, rendered, settings};
use pagesmith_blocks::generator::MISSING_SETTINGS;
use pagesmith_blocks::model::{BlockConfig, CustomConfig};
use pagesmith_blocks::{generate, segment, Component, ExportMode};

fn three_components() -> Vec<Component> {
    vec![
        rendered("carousel-1700000000000", BlockConfig::Carousel(common::carousel())),
        Component::with_id(
            "custom-1700000000001",
            BlockConfig::Custom(CustomConfig {
                html: "<section class=\"hero\"><h1>Hi</h1></section>".into(),
            }),
            "<section class=\"hero\"><h1>Hi</h1></section>",
        ),
        rendered(
            "products-showroom-1700000000002",
            BlockConfig::ProductsShowroom(common::showroom()),
        ),
    ]
}

#[test]
fn marker_round_trip_in_both_modes() {
    let components = three_components();
    for mode in [ExportMode::Code, ExportMode::Preview] {
        let page = generate(&components, mode, Some(&settings()), &registry());
        let fragments = segment(&page);
        assert_eq!(fragments.len(), 3, "{mode}");
        for (fragment, component) in fragments.iter().zip(&components) {
            assert_eq!(fragment.id.as_deref(), Some(component.id.as_str()));
            assert_eq!(fragment.html, component.html);
        }
        if mode == ExportMode::Code {
            let kinds: Vec<_> = fragments.iter().map(|f| f.kind).collect();
            let expected: Vec<_> = components.iter().map(|c| Some(c.kind())).collect();
            assert_eq!(kinds, expected);
        }
    }
}

#[test]
fn generation_is_idempotent() {
    let components = three_components();
    let registry = registry();
    let first = generate(&components, ExportMode::Code, Some(&settings()), &registry);
    let second = generate(&components, ExportMode::Code, Some(&settings()), &registry);
    assert_eq!(first, second);
}

#[test]
fn fragments_are_separated_by_blank_lines() {
    let components = three_components();
    let page = generate(&components, ExportMode::Preview, Some(&settings()), &registry());
    assert!(page.contains(
        "<!-- COMPONENT_END carousel-1700000000000 -->\n\n<!-- COMPONENT_START custom-1700000000001 -->"
    ));
}

#[test]
fn no_settings_no_page() {
    let page = generate(&three_components(), ExportMode::Code, None, &registry());
    assert_eq!(page, MISSING_SETTINGS);
}

#[test]
fn empty_list_still_gets_assets() {
    let page = generate(&[], ExportMode::Code, Some(&settings()), &registry());
    assert!(page.starts_with("<!-- Base Assets -->"));
    assert!(segment(&page).is_empty());
}
