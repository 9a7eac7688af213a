//! Products showroom config extraction

use crate::markup::{find_element, find_elements, find_tag};
use crate::model::{BannerConfig, Direction, Sale, ShowroomConfig, ShowroomMode};
use once_cell::sync::Lazy;
use regex::Regex;

static CATEGORY_CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(getDiscountedProductsFromCategory|getProductsFromCategory)\(\s*\d+\s*,\s*([^,)]*?)\s*(?:,\s*\[([^\]]*)\])?\s*\)",
    )
    .expect("category call pattern is valid")
});

static MANUAL_CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"getProductsManual\(\s*\[([^\]]*)\]").expect("manual call pattern is valid")
});

static QUOTED_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)""#).expect("quoted id pattern is valid")
});

static JS_ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(.)").expect("escape pattern is valid"));

/// What the `x-init` query expression says about the config.
#[derive(Debug, Default, PartialEq, Eq)]
struct Query {
    category_number: String,
    object_ids: String,
    discounted: bool,
}

pub fn extract(html: &str) -> ShowroomConfig {
    let root = find_tag(html, |tag| tag.has_class("showroom-component"));
    let query = find_tag(html, |tag| tag.attr("x-init").is_some())
        .and_then(|tag| tag.attr("x-init"))
        .map(|init| parse_query(&init))
        .unwrap_or_default();

    let banner_wrapper = find_tag(html, |tag| tag.has_class("showroom-banner-wrapper"));
    let mode = if banner_wrapper.is_some() {
        ShowroomMode::Image
    } else {
        ShowroomMode::Title
    };

    let title = match mode {
        ShowroomMode::Title => find_element(html, |tag| {
            tag.attr("id").as_deref() == Some("showroom-title")
                || tag.has_class("showroom-title")
        })
        .map(|element| element.text(html))
        .unwrap_or_default(),
        ShowroomMode::Image => String::new(),
    };

    let banner_config = match mode {
        ShowroomMode::Image => extract_banner(html),
        ShowroomMode::Title => BannerConfig::default(),
    };

    let direction = match root.as_ref().and_then(|tag| tag.attr("data-direction")) {
        Some(value) if value.eq_ignore_ascii_case("rtl") => Direction::Rtl,
        Some(_) => Direction::Ltr,
        None if find_tag(html, |tag| tag.has_class("showroom-container-rtl")).is_some() => {
            Direction::Rtl
        }
        None => Direction::Ltr,
    };

    let has_old_price = find_tag(html, |tag| tag.has_class("old-price")).is_some();
    let sale = if has_old_price || query.discounted {
        Sale::Yes
    } else {
        Sale::No
    };

    ShowroomConfig {
        mode,
        title,
        banner_config,
        category_number: root
            .as_ref()
            .and_then(|tag| tag.attr("data-category-number"))
            .unwrap_or(query.category_number),
        object_ids: root
            .as_ref()
            .and_then(|tag| tag.attr("data-object-ids"))
            .unwrap_or(query.object_ids),
        sale,
        direction,
    }
}

fn extract_banner(html: &str) -> BannerConfig {
    let link_url = find_elements(html, |tag| tag.name == "a")
        .into_iter()
        .find(|anchor| {
            find_tag(anchor.inner_html(html), |tag| {
                tag.has_class("showroom-banner-wrapper")
            })
            .is_some()
        })
        .and_then(|anchor| anchor.open.attr("href"))
        .unwrap_or_default();

    let banner_image = |slot: &str| {
        find_element(html, |tag| tag.has_class(slot)).and_then(|element| {
            find_tag(element.inner_html(html), |tag| {
                tag.name == "img" && tag.has_class("showroom-banner-image")
            })
            .map(|img| (img.attr("src"), img.attr("alt")))
        })
    };

    let (desktop_image, desktop_alt) = banner_image("showroom-desktop-banner").unwrap_or_default();
    let (mobile_image, mobile_alt) = banner_image("showroom-mobile-banner").unwrap_or_default();

    BannerConfig {
        desktop_image: desktop_image.unwrap_or_default(),
        mobile_image: mobile_image.unwrap_or_default(),
        alt_text: desktop_alt.or(mobile_alt).unwrap_or_default(),
        link_url,
    }
}

fn parse_query(init: &str) -> Query {
    if let Some(caps) = CATEGORY_CALL_RE.captures(init) {
        return Query {
            category_number: caps
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            object_ids: caps.get(3).map(|m| parse_ids(m.as_str())).unwrap_or_default(),
            discounted: caps
                .get(1)
                .is_some_and(|m| m.as_str() == "getDiscountedProductsFromCategory"),
        };
    }
    if let Some(caps) = MANUAL_CALL_RE.captures(init) {
        return Query {
            object_ids: caps.get(1).map(|m| parse_ids(m.as_str())).unwrap_or_default(),
            ..Query::default()
        };
    }
    Query::default()
}

/// `'a', 'b'` to `a,b`.
fn parse_ids(list: &str) -> String {
    QUOTED_ID_RE
        .captures_iter(list)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| JS_ESCAPE_RE.replace_all(m.as_str(), "$1").into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
