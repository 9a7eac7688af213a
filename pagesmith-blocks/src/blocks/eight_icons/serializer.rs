//! Eight-icons HTML rendering

use crate::markup::{escape_attr, escape_text};
use crate::model::EightIconsConfig;

pub fn render(config: &EightIconsConfig) -> String {
    let config = config.normalized();

    let icons_html: String = config
        .icons
        .iter()
        .map(|icon| {
            format!(
                r#"
      <a href="{}" class="icon-wrapper">
        <div class="icon-container">
          <div class="picture-container">
            <picture aria-hidden="true" style="padding-top: 109.773%">
              <img deca-image="true" alt="{}" src="{}" loading="lazy" />
            </picture>
          </div>
          <div class="icon-subtitle">
            <span>{}</span>
          </div>
        </div>
      </a>"#,
                escape_attr(&icon.link_url),
                escape_attr(&icon.alt_text),
                escape_attr(&icon.image_url),
                escape_text(&icon.subtitle),
            )
        })
        .collect();

    format!(
        r#"<div id="page-content">
  <h2 class="icons-title">{}</h2>
  <div class="icons-container">
    <div class="icons-wrapper">{icons_html}
    </div>
  </div>
</div>"#,
        escape_text(&config.title)
    )
}
