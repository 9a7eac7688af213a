//! Shared fixtures for the integration tests.

use pagesmith_blocks::model::{
    BannerConfig, BlockConfig, CarouselConfig, CategorySlot, Direction, EightIconsConfig,
    FourCategoriesConfig, IconSlot, Sale, ShowroomConfig, ShowroomMode, Slide,
};
use pagesmith_blocks::{Component, Settings, TemplateRegistry};

pub fn settings() -> Settings {
    Settings::new("TESTAPP", "testkey", "prod_en", "EGP")
}

pub fn registry() -> TemplateRegistry {
    TemplateRegistry::with_defaults()
}

pub fn carousel() -> CarouselConfig {
    CarouselConfig {
        slides: vec![
            Slide {
                link_url: "https://a".into(),
                desktop_image: "d1.jpg".into(),
                mobile_image: "m1.jpg".into(),
                alt_text: "A".into(),
            },
            Slide {
                link_url: "https://b".into(),
                desktop_image: "d2.jpg".into(),
                mobile_image: "m2.jpg".into(),
                alt_text: "B".into(),
            },
        ],
    }
}

pub fn four_categories() -> FourCategoriesConfig {
    FourCategoriesConfig {
        title: "Shop by sport".into(),
        background_color: "#f5f4f5".into(),
        categories: ["football", "tennis", "running", "cycling"]
            .iter()
            .map(|sport| CategorySlot {
                link_url: format!("/c/{sport}"),
                image_url: format!("https://cdn.example.com/{sport}.png"),
                alt_text: sport.to_uppercase(),
            })
            .collect(),
    }
}

pub fn eight_icons() -> EightIconsConfig {
    EightIconsConfig {
        title: "All sports".into(),
        icons: (0..8)
            .map(|n| IconSlot {
                link_url: format!("/s/{n}"),
                image_url: format!("https://cdn.example.com/icon-{n}.svg"),
                alt_text: format!("Sport {n}"),
                subtitle: format!("Sport {n}"),
            })
            .collect(),
    }
}

pub fn showroom() -> ShowroomConfig {
    ShowroomConfig {
        mode: ShowroomMode::Image,
        title: String::new(),
        banner_config: BannerConfig {
            desktop_image: "https://cdn.example.com/banner-d.jpg".into(),
            mobile_image: "https://cdn.example.com/banner-m.jpg".into(),
            alt_text: "Winter sale".into(),
            link_url: "https://shop.example.com/winter".into(),
        },
        category_number: "4060".into(),
        object_ids: "8582,8583".into(),
        sale: Sale::Yes,
        direction: Direction::Rtl,
    }
}

/// One structured config per type.
pub fn structured_configs() -> Vec<BlockConfig> {
    vec![
        BlockConfig::Carousel(carousel()),
        BlockConfig::FourCategories(four_categories()),
        BlockConfig::EightIcons(eight_icons()),
        BlockConfig::ProductsShowroom(showroom()),
    ]
}

/// A component rendered from `config`, with a fixed id.
pub fn rendered(id: &str, config: BlockConfig) -> Component {
    let html = registry().render_config(&config, Some(&settings()));
    Component::with_id(id, config, html)
}
