//! Four-categories HTML rendering

use crate::markup::{escape_attr, escape_text};
use crate::model::FourCategoriesConfig;

pub fn render(config: &FourCategoriesConfig) -> String {
    let config = config.normalized();

    let categories_html: String = config
        .categories
        .iter()
        .map(|category| {
            format!(
                r#"
      <div class="four_categories_category_wrapper">
        <div style="max-width: 100%;">
          <a href="{}">
            <div class="four_categories_image_wrapper">
              <img src="{}" alt="{}" loading="lazy" width="432" height="467" />
            </div>
          </a>
        </div>
      </div>"#,
                escape_attr(&category.link_url),
                escape_attr(&category.image_url),
                escape_attr(&category.alt_text),
            )
        })
        .collect();

    format!(
        r#"<div class="four_categories_wrapper" style="background-color:{};">
  <div class="four_categories_title_wrapper">
    <div class="four_categories_title_container">
      <h2 class="four_categories_title">{}</h2>
    </div>
  </div>
  <div class="four_categories_container">
    <div class="four_categories_box">{categories_html}
    </div>
  </div>
</div>"#,
        escape_attr(&config.background_color),
        escape_text(&config.title),
    )
}
