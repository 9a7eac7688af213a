//! Component data model
//!
//! A [`Component`] is the unit of editing and rendering: an opaque id, a typed
//! [`BlockConfig`] and the last rendered or imported HTML fragment. The block type
//! is carried by the config variant, so a component can never hold a config that
//! disagrees with its type.
//!
//! Every config struct deserializes with `#[serde(default)]`, which means a config
//! loaded from JSON always has every field present. Fixed-size lists (four
//! categories, eight icons) are brought to their exact length with
//! [`fit_slots`] before rendering and after extraction.

use crate::error::BlockError;
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of block types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    #[serde(alias = "swiper")]
    Carousel,
    FourCategories,
    EightIcons,
    ProductsShowroom,
    Style,
    Script,
    #[serde(alias = "Custom")]
    Custom,
}

impl BlockKind {
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Carousel,
        BlockKind::FourCategories,
        BlockKind::EightIcons,
        BlockKind::ProductsShowroom,
        BlockKind::Style,
        BlockKind::Script,
        BlockKind::Custom,
    ];

    /// Canonical type name, as written in boundary markers and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Carousel => "carousel",
            BlockKind::FourCategories => "four-categories",
            BlockKind::EightIcons => "eight-icons",
            BlockKind::ProductsShowroom => "products-showroom",
            BlockKind::Style => "style",
            BlockKind::Script => "script",
            BlockKind::Custom => "custom",
        }
    }

    /// Human-facing label used in listings.
    pub fn display_name(self) -> &'static str {
        match self {
            BlockKind::Carousel => "Banner Carousel",
            BlockKind::FourCategories => "Four Blocks",
            BlockKind::EightIcons => "Eight Icons",
            BlockKind::ProductsShowroom => "Products Showroom",
            BlockKind::Style => "Style",
            BlockKind::Script => "Script",
            BlockKind::Custom => "Custom",
        }
    }

    /// Whether this type has a structured config that extraction can recover.
    pub fn is_structured(self) -> bool {
        matches!(
            self,
            BlockKind::Carousel
                | BlockKind::FourCategories
                | BlockKind::EightIcons
                | BlockKind::ProductsShowroom
        )
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = BlockError;

    /// Case-insensitive; accepts the legacy `swiper` alias for carousels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carousel" | "swiper" => Ok(BlockKind::Carousel),
            "four-categories" => Ok(BlockKind::FourCategories),
            "eight-icons" => Ok(BlockKind::EightIcons),
            "products-showroom" => Ok(BlockKind::ProductsShowroom),
            "style" => Ok(BlockKind::Style),
            "script" => Ok(BlockKind::Script),
            "custom" => Ok(BlockKind::Custom),
            _ => Err(BlockError::UnknownType(s.to_string())),
        }
    }
}

/// Pad with defaults or truncate (keeping the first `n`) to exactly `n` items.
pub fn fit_slots<T: Default>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.truncate(n);
    items.resize_with(n, T::default);
    items
}

// ---------------------------------------------------------------------------
// Per-type configs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Slide {
    pub link_url: String,
    pub desktop_image: String,
    pub mobile_image: String,
    pub alt_text: String,
}

/// Banner carousel. Zero slides is a valid empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategorySlot {
    pub link_url: String,
    pub image_url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FourCategoriesConfig {
    pub title: String,
    pub background_color: String,
    pub categories: Vec<CategorySlot>,
}

impl FourCategoriesConfig {
    pub const SLOTS: usize = 4;

    /// Copy of this config with exactly [`Self::SLOTS`] categories.
    pub fn normalized(&self) -> Self {
        Self {
            categories: fit_slots(self.categories.clone(), Self::SLOTS),
            ..self.clone()
        }
    }
}

impl Default for FourCategoriesConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            background_color: String::new(),
            categories: fit_slots(Vec::new(), Self::SLOTS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconSlot {
    pub link_url: String,
    pub image_url: String,
    pub alt_text: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EightIconsConfig {
    pub title: String,
    pub icons: Vec<IconSlot>,
}

impl EightIconsConfig {
    pub const SLOTS: usize = 8;

    pub fn normalized(&self) -> Self {
        Self {
            icons: fit_slots(self.icons.clone(), Self::SLOTS),
            ..self.clone()
        }
    }
}

impl Default for EightIconsConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            icons: fit_slots(Vec::new(), Self::SLOTS),
        }
    }
}

/// Header shape of a products showroom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowroomMode {
    #[default]
    Title,
    Image,
}

/// Whether prices render as a discount (struck-through regular price).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sale {
    #[serde(alias = "Yes", alias = "YES")]
    Yes,
    #[default]
    #[serde(alias = "No", alias = "NO")]
    No,
}

impl Sale {
    pub fn is_yes(self) -> bool {
        self == Sale::Yes
    }
}

/// Layout direction. Deserializes from `"ltr"`/`"rtl"` or the `isRTL` boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Name(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flag(true) => Direction::Rtl,
            Repr::Flag(false) => Direction::Ltr,
            Repr::Name(name) if name.trim().eq_ignore_ascii_case("rtl") => Direction::Rtl,
            Repr::Name(_) => Direction::Ltr,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannerConfig {
    pub desktop_image: String,
    pub mobile_image: String,
    pub alt_text: String,
    pub link_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowroomConfig {
    pub mode: ShowroomMode,
    pub title: String,
    pub banner_config: BannerConfig,
    /// Numeric category id, may be empty.
    pub category_number: String,
    /// Comma-separated product ids, may be empty.
    pub object_ids: String,
    pub sale: Sale,
    #[serde(alias = "isRTL")]
    pub direction: Direction,
}

impl ShowroomConfig {
    /// Product ids in source order, trimmed, blanks dropped.
    pub fn object_id_list(&self) -> Vec<String> {
        self.object_ids
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// External (`url`) or embedded (`inline` with its `content`) style or script include.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
    /// Body of an inline `<style>` or `<script>`, verbatim.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl AssetConfig {
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            inline: false,
            content: String::new(),
        }
    }

    pub fn inline(content: impl Into<String>) -> Self {
        Self {
            url: None,
            inline: true,
            content: content.into(),
        }
    }
}

/// Opaque fragment kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomConfig {
    pub html: String,
}

/// One config variant per block type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockConfig {
    #[serde(alias = "swiper")]
    Carousel(CarouselConfig),
    FourCategories(FourCategoriesConfig),
    EightIcons(EightIconsConfig),
    ProductsShowroom(ShowroomConfig),
    Style(AssetConfig),
    Script(AssetConfig),
    #[serde(alias = "Custom")]
    Custom(CustomConfig),
}

impl BlockConfig {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockConfig::Carousel(_) => BlockKind::Carousel,
            BlockConfig::FourCategories(_) => BlockKind::FourCategories,
            BlockConfig::EightIcons(_) => BlockKind::EightIcons,
            BlockConfig::ProductsShowroom(_) => BlockKind::ProductsShowroom,
            BlockConfig::Style(_) => BlockKind::Style,
            BlockConfig::Script(_) => BlockKind::Script,
            BlockConfig::Custom(_) => BlockKind::Custom,
        }
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// One editable unit of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub config: BlockConfig,
    #[serde(default)]
    pub html: String,
}

impl Component {
    pub fn with_id(id: impl Into<String>, config: BlockConfig, html: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config,
            html: html.into(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.config.kind()
    }
}

/// `<type>-<unix millis>`.
pub fn new_component_id(kind: BlockKind) -> String {
    format!("{kind}-{}", Utc::now().timestamp_millis())
}

/// `<type>-<unix millis>-<index>-<random>`, for components created in one batch.
pub fn batch_component_id(kind: BlockKind, index: usize) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!(
        "{kind}-{}-{index}-{}",
        Utc::now().timestamp_millis(),
        &token[..8]
    )
}
