//! Block implementations
//!
//! One module per block type. Structured types split into `serializer`
//! (config → HTML) and `parser` (HTML → config); the parser reads exactly the
//! markers its serializer writes, so a change to one must be mirrored in the
//! other. The round-trip tests in each module pin that coupling.

pub mod asset;
pub mod carousel;
pub mod custom;
pub mod eight_icons;
pub mod four_categories;
pub mod showroom;

pub use asset::{ScriptBlock, StyleBlock};
pub use carousel::CarouselBlock;
pub use custom::CustomBlock;
pub use eight_icons::EightIconsBlock;
pub use four_categories::FourCategoriesBlock;
pub use showroom::ShowroomBlock;
