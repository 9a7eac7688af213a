//! Round-trip HTML component model for the pagesmith page builder
//!
//!     A page is an ordered list of components. Each component is one block of a closed set of
//!     types (banner carousel, four categories, eight icons, products showroom, style, script,
//!     custom) carrying a typed config and the HTML fragment that represents it. This crate turns
//!     configs into fragments, fragments back into configs, and whole pages into components.
//!
//!     This is a pure lib: it powers pagesmith-cli but never touches the filesystem, the
//!     environment or stdout. Settings and the template registry are built by the caller and
//!     passed in explicitly.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs
//!     ├── model.rs                # Component, BlockKind, per-type configs
//!     ├── settings.rs             # Search credentials and currency
//!     ├── block.rs                # BlockTemplate trait
//!     ├── registry.rs             # TemplateRegistry
//!     ├── blocks
//!     │   ├── <block>
//!     │   │   ├── serializer.rs   # config → HTML
//!     │   │   ├── parser.rs       # HTML → config
//!     │   │   └── mod.rs
//!     │   ├── asset.rs            # style / script
//!     │   └── custom.rs
//!     ├── markup.rs               # Tag walk shared by extraction and segmentation
//!     ├── assets.rs               # Builder-provided includes and inline scripts
//!     ├── detect.rs               # Block type detection
//!     ├── segment.rs              # HTML blob → fragments
//!     ├── generator.rs            # Components → page
//!     └── session.rs              # Editing session
//!
//! Core Algorithms
//!
//!     The two directions must agree: `extract(render(config)) == config` for every structured
//!     type, up to the fixed slot counts. Each block's serializer and parser sit next to each
//!     other and are tested together for that reason.
//!
//!     Segmentation first honours boundary markers written by the generator, then falls back to a
//!     depth walk over top-level elements. Assets the builder already provides are recognized by
//!     the same table the generator writes them from.
//!
//!     None of detect, extract, segment or generate can fail. Problems surface as inert HTML
//!     comments or as empty defaults; only registry lookups and session edits return errors.

pub mod assets;
pub mod block;
pub mod blocks;
pub mod detect;
pub mod error;
pub mod generator;
pub mod markup;
pub mod model;
pub mod registry;
pub mod segment;
pub mod session;
pub mod settings;

pub use block::BlockTemplate;
pub use error::BlockError;
pub use generator::{generate, ExportMode};
pub use model::{
    AssetConfig, BannerConfig, BlockConfig, BlockKind, CarouselConfig, CategorySlot, Component,
    CustomConfig, Direction, EightIconsConfig, FourCategoriesConfig, IconSlot, Sale,
    ShowroomConfig, ShowroomMode, Slide,
};
pub use registry::TemplateRegistry;
pub use segment::{import, segment, Fragment};
pub use session::Session;
pub use settings::Settings;

/// Classify a fragment into a block type.
pub fn detect(html: &str) -> BlockKind {
    detect::detect(html)
}

/// Recover the config of a fragment already known to be of type `kind`.
pub fn extract(html: &str, kind: BlockKind, registry: &TemplateRegistry) -> BlockConfig {
    registry.extract(kind, html)
}
