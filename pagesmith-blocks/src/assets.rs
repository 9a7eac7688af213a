//! Builder-provided assets
//!
//! The single table of stylesheet and script includes the generator appends to
//! every exported page, and the inline scripts it emits alongside them. The
//! segmenter consults the same table to drop includes that a pasted page already
//! carries, so the two sides cannot drift apart: every signature here is derived
//! from the exact text the generator writes.

use crate::markup::normalize_whitespace;
use crate::settings::Settings;
use once_cell::sync::Lazy;

/// Cookie namespace the exported page reads credentials from.
pub const COOKIE_PREFIX: &str = "showroom_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

/// One include provided by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderAsset {
    pub id: &'static str,
    pub kind: AssetKind,
    pub url: &'static str,
    /// Emit with `defer` (scripts only).
    pub defer: bool,
}

/// Base URL of the builder's hosted per-block stylesheets and scripts.
macro_rules! hosted_base {
    () => {
        "https://decathlon-egypt.github.io/Decathlon-Egypt/CMS%20Scripts%20&%20Styles"
    };
}

macro_rules! hosted {
    ($file:literal) => {
        concat!(hosted_base!(), "/", $file)
    };
}

const fn css(id: &'static str, url: &'static str) -> BuilderAsset {
    BuilderAsset {
        id,
        kind: AssetKind::Stylesheet,
        url,
        defer: false,
    }
}

const fn js(id: &'static str, url: &'static str, defer: bool) -> BuilderAsset {
    BuilderAsset {
        id,
        kind: AssetKind::Script,
        url,
        defer,
    }
}

/// Every include the generator emits, in emission order.
pub const BUILDER_ASSETS: &[BuilderAsset] = &[
    css("vtmn-button-css", "https://unpkg.com/@vtmn/css-button"),
    css("swiper-css", "https://unpkg.com/swiper/swiper-bundle.min.css"),
    css("banner-carousel-css", hosted!("Banner%20carousel.css")),
    css("four-blocks-css", hosted!("4%20blocks.css")),
    css("eight-icons-css", hosted!("8%20icons.css")),
    css("showroom-css", hosted!("Showroom.css")),
    css("page-stretch-css", hosted!("Page%20stretch.css")),
    css("dual-section-css", hosted!("dual%20section.css")),
    css("hero-banner-css", hosted!("hero%20banner.css")),
    css("info-grid-section-css", hosted!("info%20grid%20section.css")),
    css("faqs-section-css", hosted!("faqs%20section.css")),
    js(
        "algolia-search-js",
        "https://cdn.jsdelivr.net/npm/algoliasearch@4.5.1/dist/algoliasearch-lite.umd.js",
        false,
    ),
    js(
        "alpine-intersect-js",
        "https://unpkg.com/@alpinejs/intersect@3.8.1/dist/cdn.min.js",
        false,
    ),
    js("alpine-js", "https://unpkg.com/alpinejs@3.8.1/dist/cdn.min.js", true),
    js("swiper-js", "https://unpkg.com/swiper/swiper-bundle.min.js", false),
    js("banner-carousel-js", hosted!("Banner%20carousel.js"), false),
];

/// Whether `url` is one of the builder's own includes (exact match).
pub fn is_builder_url(url: &str) -> bool {
    let url = url.trim();
    BUILDER_ASSETS.iter().any(|asset| asset.url == url)
}

// ---------------------------------------------------------------------------
// Inline scripts
// ---------------------------------------------------------------------------

const TRACK_INIT_HEAD: &str = r#"document.addEventListener("DOMContentLoaded", function() {
  const tracks = document.querySelectorAll(".showroom-products-track");
  const leftShowroomArrows = document.querySelectorAll(".left_showroom_arrow");
  const rightShowroomArrows = document.querySelectorAll(".right_showroom_arrow");
  const trackTranslations = Array(tracks.length).fill(0);"#;

const TRACK_INIT_BODY: &str = r#"
  const noImageTracks = document.querySelectorAll(".no-image-track");
  const leftNoImageArrows = document.querySelectorAll(".left_no_image_arrow");
  const rightNoImageArrows = document.querySelectorAll(".right_no_image_arrow");
  const noImageTrackTranslations = Array(noImageTracks.length).fill(0);

  function wire(trackList, lefts, rights, translations) {
    trackList.forEach((track, i) => {
      const step = () => (track.firstElementChild ? track.firstElementChild.offsetWidth : 0) * 2;
      const limit = () => Math.max(0, track.scrollWidth - track.clientWidth);
      const apply = () => { track.style.transform = "translateX(" + -translations[i] + "px)"; };
      if (rights[i]) rights[i].addEventListener("click", () => {
        translations[i] = Math.min(limit(), translations[i] + step());
        apply();
      });
      if (lefts[i]) lefts[i].addEventListener("click", () => {
        translations[i] = Math.max(0, translations[i] - step());
        apply();
      });
    });
  }

  wire(tracks, leftShowroomArrows, rightShowroomArrows, trackTranslations);
  wire(noImageTracks, leftNoImageArrows, rightNoImageArrows, noImageTrackTranslations);
});"#;

const COOKIE_HELPER: &str = r#"const getCookie = (name) => {
  const value = "; " + document.cookie;
  const parts = value.split("; " + name + "=");
  if (parts.length === 2) return parts.pop().split(";").shift();
  return null;
};"#;

const CREDENTIALS_OPEN: &str = "const algoliaDetails = {";

const SEARCH_LOADERS: &str = r#"
function searchIndex() {
  const client = algoliasearch(algoliaDetails.app_id, algoliaDetails.api_search_key);
  return client.initIndex(algoliaDetails.index_name);
}

function idFilters(ids) {
  return ids.map((id) => "objectID:" + id).join(" OR ");
}

function loadFromCategory(prodCount, categoryFilter, priorityObjectIDs) {
  const index = searchIndex();
  const priority = idFilters(priorityObjectIDs);
  return index
    .search("", { filters: priority.length ? priority : categoryFilter, analytics: false })
    .then(({ hits: priorityHits }) => {
      if (!priorityObjectIDs.length) {
        return priorityHits.sort((a, b) => b.popularity - a.popularity).slice(0, prodCount);
      }
      return index
        .search("", { filters: categoryFilter, analytics: false })
        .then(({ hits: categoryHits }) => {
          const rest = categoryHits.filter((hit) => !priorityObjectIDs.includes(hit.objectID));
          return [...priorityHits, ...rest].slice(0, prodCount);
        });
    })
    .catch(() => []);
}

window.getProductsFromCategory = function(prodCount, categoryNumber, priorityObjectIDs = []) {
  return loadFromCategory(prodCount, "category = " + categoryNumber, priorityObjectIDs);
};

window.getDiscountedProductsFromCategory = function(prodCount, categoryNumber, priorityObjectIDs = []) {
  return loadFromCategory(prodCount, "category = " + categoryNumber + " AND percentoff > 0", priorityObjectIDs);
};

window.getProductsManual = function(productsArr) {
  return searchIndex()
    .search("", { filters: idFilters(productsArr), analytics: false })
    .then(({ hits }) => productsArr.map((id) => hits.find((hit) => hit.objectID === id)).filter(Boolean))
    .catch(() => []);
};"#;

const PAGE_HELPERS: &str = r#"
function handleLoadingSliders() {
  [...document.getElementsByClassName("loading-products")].forEach((e) => e.remove());
}

function updateImageUrl(url) {
  if (!url) return '';
  const newParams = "format=auto&quality=40&f=400x0";
  if (url.indexOf("?") > -1) {
    return url + "&" + newParams;
  }
  return url + "?" + newParams;
}"#;

static TRACK_INIT_SIGNATURE: Lazy<String> = Lazy::new(|| normalize_whitespace(TRACK_INIT_HEAD));

static BOOTSTRAP_SIGNATURE: Lazy<String> =
    Lazy::new(|| normalize_whitespace(&format!("{COOKIE_HELPER}\n{CREDENTIALS_OPEN}")));

/// The normalized inline-script signatures recognized as builder-provided.
pub fn inline_signatures() -> [&'static str; 2] {
    [TRACK_INIT_SIGNATURE.as_str(), BOOTSTRAP_SIGNATURE.as_str()]
}

/// Whether an inline script body contains one of the builder's own snippets.
///
/// Both sides are whitespace-normalized; the candidate may wrap the snippet in
/// extra code.
pub fn is_builder_inline_script(body: &str) -> bool {
    let normalized = normalize_whitespace(body);
    inline_signatures()
        .iter()
        .any(|signature| normalized.contains(signature))
}

/// Quote a value as a JavaScript string literal safe inside `<script>`.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

/// Cookie helper plus the credential object, falling back to `settings`.
pub fn credentials_snippet(settings: &Settings) -> String {
    format!(
        "{COOKIE_HELPER}\n{CREDENTIALS_OPEN}\n  app_id: getCookie(\"{p}app_id\") || {app},\n  api_search_key: getCookie(\"{p}api_search_key\") || {key},\n  index_name: getCookie(\"{p}index_name\") || {index},\n}};",
        p = COOKIE_PREFIX,
        app = js_string(&settings.app_id),
        key = js_string(&settings.api_search_key),
        index = js_string(&settings.index_name),
    )
}

/// Self-contained loader for one showroom block.
///
/// Scoped in a function so several showrooms (and the page bootstrap) can share
/// a page without redeclaring `getCookie`.
pub fn showroom_loader_script(settings: &Settings) -> String {
    format!(
        "<script>\n(function() {{\n{}\n{SEARCH_LOADERS}\n\nwindow.updateImageUrl = window.updateImageUrl || function(url) {{\n  return url || '';\n}};\n}})();\n</script>",
        credentials_snippet(settings)
    )
}

/// The page-level bootstrap script (without the `<script>` wrapper).
pub fn bootstrap_script(settings: &Settings) -> String {
    format!(
        "{}\n{PAGE_HELPERS}\n{SEARCH_LOADERS}",
        credentials_snippet(settings)
    )
}

/// The product-track arrow wiring script (without the `<script>` wrapper).
pub fn track_init_script() -> String {
    format!("{TRACK_INIT_HEAD}{TRACK_INIT_BODY}")
}

/// `<link>`/`<script>` tags for every entry of [`BUILDER_ASSETS`].
pub fn include_tags() -> String {
    BUILDER_ASSETS
        .iter()
        .map(|asset| match asset.kind {
            AssetKind::Stylesheet => format!("<link rel=\"stylesheet\" href=\"{}\" />", asset.url),
            AssetKind::Script if asset.defer => {
                format!("<script src=\"{}\" defer></script>", asset.url)
            }
            AssetKind::Script => format!("<script src=\"{}\"></script>", asset.url),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
