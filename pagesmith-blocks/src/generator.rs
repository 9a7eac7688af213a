//! Page generation
//!
//! Wraps every component's fragment in boundary markers and appends the fixed
//! asset and bootstrap block. Output depends only on the component list and the
//! settings passed in, so generating twice yields identical text.

use crate::assets;
use crate::model::Component;
use crate::registry::TemplateRegistry;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emitted instead of a page when no settings are available.
pub const MISSING_SETTINGS: &str = "<!-- Error: No settings found -->";

/// Boundary marker flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// `<!-- COMPONENT_START:<id>:<type> -->`, for pasting into the host CMS.
    #[default]
    Code,
    /// `<!-- COMPONENT_START <id> -->`, for the live preview.
    Preview,
}

impl ExportMode {
    pub fn start_marker(self, component: &Component) -> String {
        match self {
            ExportMode::Code => format!(
                "<!-- COMPONENT_START:{}:{} -->",
                component.id,
                component.kind()
            ),
            ExportMode::Preview => format!("<!-- COMPONENT_START {} -->", component.id),
        }
    }

    pub fn end_marker(self, component: &Component) -> String {
        match self {
            ExportMode::Code => format!("<!-- COMPONENT_END:{} -->", component.id),
            ExportMode::Preview => format!("<!-- COMPONENT_END {} -->", component.id),
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportMode::Code => "code",
            ExportMode::Preview => "preview",
        })
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(ExportMode::Code),
            "preview" => Ok(ExportMode::Preview),
            other => Err(format!("unknown export mode '{other}'")),
        }
    }
}

/// The fragment exported for a component: its stored HTML, or a fresh render
/// when nothing is stored.
pub fn component_fragment(
    component: &Component,
    settings: Option<&Settings>,
    registry: &TemplateRegistry,
) -> String {
    if component.html.trim().is_empty() {
        registry.render_config(&component.config, settings)
    } else {
        component.html.clone()
    }
}

/// Generate the full page for `components`.
pub fn generate(
    components: &[Component],
    mode: ExportMode,
    settings: Option<&Settings>,
    registry: &TemplateRegistry,
) -> String {
    let Some(settings) = settings else {
        log::warn!("generation requested without settings");
        return MISSING_SETTINGS.to_string();
    };

    let body = components
        .iter()
        .map(|component| {
            format!(
                "{}\n{}\n{}",
                mode.start_marker(component),
                component_fragment(component, Some(settings), registry),
                mode.end_marker(component)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let base = base_assets(settings);
    if body.is_empty() {
        base
    } else {
        format!("{body}\n\n{base}")
    }
}

/// The fixed asset block appended to every page.
pub fn base_assets(settings: &Settings) -> String {
    format!(
        "<!-- Base Assets -->\n{}\n\n<script>\n{}\n</script>\n\n<script>\n{}\n</script>\n<!-- End Base Assets -->",
        assets::include_tags(),
        assets::track_init_script(),
        assets::bootstrap_script(settings),
    )
}
