//! Editing session
//!
//! The ordered component list behind the editor, with the edits the page
//! builder offers: add a block, import pasted markup, save a block from its
//! form or from its code, remove, and drag-and-drop reorder. The session owns
//! its components outright; the registry and settings are borrowed per call.

use crate::detect::detect;
use crate::error::BlockError;
use crate::generator::{self, ExportMode};
use crate::model::{new_component_id, BlockConfig, Component};
use crate::registry::TemplateRegistry;
use crate::segment;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    components: Vec<Component>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    fn position(&self, id: &str) -> Result<usize, BlockError> {
        self.components
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| BlockError::ComponentNotFound(id.to_string()))
    }

    /// `base`, or `base-2`, `base-3`, ... when an earlier component holds it.
    fn unique_id(&self, base: String) -> String {
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// Append a block of type `name` with its default config, rendered.
    pub fn add_block(
        &mut self,
        name: &str,
        registry: &TemplateRegistry,
        settings: Option<&Settings>,
    ) -> Result<&Component, BlockError> {
        let template = registry.get(name)?;
        let config = template.default_config();
        let html = template.render(&config, settings);
        let id = self.unique_id(new_component_id(config.kind()));
        self.components.push(Component::with_id(id, config, html));
        log::debug!("added {} block", template.name());
        Ok(&self.components[self.components.len() - 1])
    }

    /// Append every component found in `html`; returns how many were added.
    pub fn import(&mut self, html: &str, registry: &TemplateRegistry) -> usize {
        let imported = segment::import(html, registry);
        let count = imported.len();
        for mut component in imported {
            component.id = self.unique_id(component.id);
            self.components.push(component);
        }
        count
    }

    /// Replace a component's config and re-render its HTML.
    ///
    /// The component takes the config's type.
    pub fn save_from_form(
        &mut self,
        id: &str,
        config: BlockConfig,
        registry: &TemplateRegistry,
        settings: Option<&Settings>,
    ) -> Result<&Component, BlockError> {
        let index = self.position(id)?;
        let html = registry.render_config(&config, settings);
        let component = &mut self.components[index];
        component.config = config;
        component.html = html;
        Ok(&*component)
    }

    /// Replace a component's HTML with hand-edited code.
    ///
    /// The component takes the detected type and the config extracted from the
    /// code, so custom components carry the code itself. The one exception is a
    /// structured component whose code no longer looks structured: its config
    /// is kept and the code stands as is.
    pub fn save_from_code(
        &mut self,
        id: &str,
        html: &str,
        registry: &TemplateRegistry,
    ) -> Result<&Component, BlockError> {
        if html.trim().is_empty() {
            return Err(BlockError::EmptyFragment);
        }
        let index = self.position(id)?;
        let component = &mut self.components[index];
        let detected = detect(html);

        if detected.is_structured() || !component.kind().is_structured() {
            component.config = registry.extract(detected, html);
        } else {
            log::debug!(
                "code for {} no longer matches a {} block, keeping config",
                component.id,
                component.kind()
            );
        }

        component.html = html.to_string();
        Ok(&*component)
    }

    pub fn remove(&mut self, id: &str) -> Result<Component, BlockError> {
        let index = self.position(id)?;
        Ok(self.components.remove(index))
    }

    /// Move the component at `from` so it ends up at `to`.
    pub fn move_component(&mut self, from: usize, to: usize) -> Result<(), BlockError> {
        let len = self.components.len();
        for index in [from, to] {
            if index >= len {
                return Err(BlockError::IndexOutOfRange { index, len });
            }
        }
        let component = self.components.remove(from);
        self.components.insert(to, component);
        Ok(())
    }

    pub fn generate(
        &self,
        mode: ExportMode,
        settings: Option<&Settings>,
        registry: &TemplateRegistry,
    ) -> String {
        generator::generate(&self.components, mode, settings, registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, CarouselConfig, CustomConfig, FourCategoriesConfig, Slide};

    fn settings() -> Settings {
        Settings::new("APP", "KEY", "prod_en", "EGP")
    }

    #[test]
    fn add_block_renders_default_config() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        let component = session
            .add_block("four-categories", &registry, Some(&settings()))
            .unwrap();
        assert_eq!(component.kind(), BlockKind::FourCategories);
        assert!(component.id.starts_with("four-categories-"));
        assert_eq!(
            component.html,
            registry.render_config(&component.config, Some(&settings()))
        );
    }

    #[test]
    fn adding_twice_gives_distinct_ids() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        let first = session.add_block("custom", &registry, None).unwrap().id.clone();
        let second = session.add_block("custom", &registry, None).unwrap().id.clone();
        assert_ne!(first, second);

        let config = BlockConfig::Custom(CustomConfig {
            html: "<p>second</p>".into(),
        });
        session
            .save_from_form(&second, config.clone(), &registry, None)
            .unwrap();
        assert_eq!(session.components()[1].config, config);
        assert_ne!(session.components()[0].config, config);

        session.remove(&second).unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.components()[0].id, first);
    }

    #[test]
    fn reimporting_a_marked_page_keeps_ids_unique() {
        let registry = TemplateRegistry::default();
        let page = "<!-- COMPONENT_START:custom-7:custom -->\n<p>x</p>\n<!-- COMPONENT_END:custom-7 -->";
        let mut session = Session::new();
        assert_eq!(session.import(page, &registry), 1);
        assert_eq!(session.import(page, &registry), 1);
        assert_eq!(session.components()[0].id, "custom-7");
        assert_eq!(session.components()[1].id, "custom-7-2");
    }

    #[test]
    fn add_unknown_block_fails() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        assert_eq!(
            session.add_block("hero", &registry, None).err(),
            Some(BlockError::BlockNotFound("hero".into()))
        );
        assert!(session.is_empty());
    }

    #[test]
    fn save_from_form_rerenders() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        let id = session
            .add_block("carousel", &registry, None)
            .unwrap()
            .id
            .clone();

        let config = BlockConfig::Carousel(CarouselConfig {
            slides: vec![Slide {
                link_url: "/one".into(),
                ..Default::default()
            }],
        });
        let saved = session
            .save_from_form(&id, config.clone(), &registry, None)
            .unwrap();
        assert_eq!(saved.config, config);
        assert_eq!(saved.html, registry.render_config(&config, None));
        assert!(!saved.html.contains("mySwiper"));
    }

    #[test]
    fn form_save_keeps_inline_asset_body() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        assert_eq!(session.import("<style>.hero{color:red}</style>", &registry), 1);
        let imported = session.components()[0].clone();
        assert_eq!(imported.kind(), BlockKind::Style);

        let saved = session
            .save_from_form(&imported.id, imported.config.clone(), &registry, None)
            .unwrap();
        assert_eq!(saved.html, "<style>.hero{color:red}</style>");
    }

    #[test]
    fn save_from_code_extracts_structured_blocks() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        let id = session
            .add_block("custom", &registry, None)
            .unwrap()
            .id
            .clone();

        let edited = FourCategoriesConfig {
            title: "Pasted".into(),
            ..Default::default()
        };
        let html = registry.render_config(&BlockConfig::FourCategories(edited.clone()), None);
        let saved = session.save_from_code(&id, &html, &registry).unwrap();
        assert_eq!(saved.config, BlockConfig::FourCategories(edited));
        assert_eq!(saved.html, html);
    }

    #[test]
    fn unrecognizable_code_keeps_structured_config() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        let original = session
            .add_block("eight-icons", &registry, None)
            .unwrap()
            .clone();

        let saved = session
            .save_from_code(&original.id, "<div>broken</div>", &registry)
            .unwrap();
        assert_eq!(saved.config, original.config);
        assert_eq!(saved.html, "<div>broken</div>");
    }

    #[test]
    fn custom_code_becomes_config() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        let id = session
            .add_block("custom", &registry, None)
            .unwrap()
            .id
            .clone();
        let saved = session.save_from_code(&id, "<p>hi</p>", &registry).unwrap();
        assert_eq!(
            saved.config,
            BlockConfig::Custom(CustomConfig {
                html: "<p>hi</p>".into()
            })
        );
    }

    #[test]
    fn empty_code_is_rejected() {
        let registry = TemplateRegistry::default();
        let mut session = Session::new();
        let original = session
            .add_block("custom", &registry, None)
            .unwrap()
            .clone();
        assert_eq!(
            session.save_from_code(&original.id, " \n ", &registry).err(),
            Some(BlockError::EmptyFragment)
        );
        assert_eq!(session.get(&original.id), Some(&original));
    }

    #[test]
    fn remove_and_reorder() {
        let mut session = Session::from_components(vec![
            Component::with_id("a", BlockConfig::Custom(CustomConfig::default()), "<p>a</p>"),
            Component::with_id("b", BlockConfig::Custom(CustomConfig::default()), "<p>b</p>"),
            Component::with_id("c", BlockConfig::Custom(CustomConfig::default()), "<p>c</p>"),
        ]);

        session.move_component(0, 2).unwrap();
        let ids: Vec<_> = session.components().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        assert_eq!(
            session.move_component(1, 3),
            Err(BlockError::IndexOutOfRange { index: 3, len: 3 })
        );

        let removed = session.remove("c").unwrap();
        assert_eq!(removed.html, "<p>c</p>");
        assert_eq!(
            session.remove("c").err(),
            Some(BlockError::ComponentNotFound("c".into()))
        );
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn session_serializes_as_a_plain_list() {
        let session = Session::from_components(vec![Component::with_id(
            "custom-1",
            BlockConfig::Custom(CustomConfig {
                html: "<p>x</p>".into(),
            }),
            "<p>x</p>",
        )]);
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["config"]["type"], "custom");
        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }
}
