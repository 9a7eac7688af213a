use pagesmith_blocks::{segment, BlockKind};
use proptest::prelude::*;

const PASTED: &str = include_str!("fixtures/pasted.html");

#[test]
fn boundary_example() {
    let htmls: Vec<_> = segment("<div>A</div><div>B<span>c</span></div>")
        .into_iter()
        .map(|f| f.html)
        .collect();
    assert_eq!(htmls, vec!["<div>A</div>", "<div>B<span>c</span></div>"]);
}

#[test]
fn pasted_page_splits_into_assets_then_blocks() {
    let fragments = segment(PASTED);
    let kinds: Vec<String> = fragments
        .iter()
        .map(|f| match f.kind {
            Some(kind) => kind.to_string(),
            None => "?".to_string(),
        })
        .collect();
    insta::assert_snapshot!(kinds.join(", "), @"style, style, script, script, ?, ?, ?");

    assert!(fragments[0].html.contains("fonts.example.com"));
    assert!(fragments[1].html.starts_with("<style>"));
    assert!(fragments[2].html.contains("analytics.example.com"));
    assert!(fragments[3].html.contains("dataLayer"));
    assert!(fragments[4].html.starts_with(r#"<div class="swiper mySwiper">"#));
    assert!(fragments[5].html.starts_with(r#"<div class="promo-strip">"#));
    assert!(fragments[6].html.starts_with(r#"<div class="four_categories_wrapper""#));
    assert!(fragments[6].html.ends_with("</div>"));
}

#[test]
fn recognized_swiper_bundle_is_dropped() {
    let fragments = segment(
        r#"<script src="https://unpkg.com/swiper/swiper-bundle.min.js"></script><div>x</div>"#,
    );
    assert!(fragments.iter().all(|f| f.kind != Some(BlockKind::Script)));
}

#[test]
fn unrecognized_script_is_kept_once() {
    let fragments =
        segment(r#"<div>x</div><script src="https://cdn.example.com/widget.js"></script>"#);
    let scripts: Vec<_> = fragments
        .iter()
        .filter(|f| f.kind == Some(BlockKind::Script))
        .collect();
    assert_eq!(scripts.len(), 1);
    assert_eq!(
        scripts[0].html,
        r#"<script src="https://cdn.example.com/widget.js"></script>"#
    );
}

#[test]
fn wrapped_bootstrap_snippet_is_recognized() {
    let script = format!(
        "<script>\n  // page init\n  (function() {{\n{}\n  }})();\n</script>",
        pagesmith_blocks::assets::track_init_script()
    );
    assert!(segment(&script).is_empty());
}

fn element() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z ]{0,8}",
        Just("<br>".to_string()),
        Just(r#"<img src="x.png" />"#.to_string()),
        Just("<!-- note <div> -->".to_string()),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        (
            prop::sample::select(vec!["div", "section", "span", "ul"]),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, children)| format!("<{name}>{}</{name}>", children.concat()))
    })
}

fn top_level_element() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["div", "section", "p"]),
        prop::collection::vec(element(), 0..4),
    )
        .prop_map(|(name, children)| format!("<{name} class=\"block\">{}</{name}>", children.concat()))
}

proptest! {
    #[test]
    fn every_top_level_element_is_one_fragment(
        blocks in prop::collection::vec(top_level_element(), 0..6),
        separator in prop::sample::select(vec!["", "\n", "\n\n  ", "<!-- gap -->"]),
    ) {
        let html = blocks.join(separator);
        let htmls: Vec<String> = segment(&html).into_iter().map(|f| f.html).collect();
        prop_assert_eq!(htmls, blocks);
    }
}
