//! Products showroom HTML rendering

use super::PRODUCT_COUNT;
use crate::assets;
use crate::markup::{escape_attr, escape_text};
use crate::model::{ShowroomConfig, ShowroomMode};
use crate::settings::Settings;

const MISSING_CURRENCY: &str = "<!-- Error: No currency settings found -->";

const SEARCH_ICON: &str = r#"<svg style="width: 20px; height: 20px; flex: 0 0 auto;" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" width="24" height="24" stroke-width="1.5" aria-hidden="true">
                            <path d="M15.9999 15.7666C17.4821 15.7666 18.6865 14.5622 18.6865 13.0801C18.6865 11.598 17.4821 10.3936 15.9999 10.3936C14.5178 10.3936 13.3134 11.598 13.3134 13.0801C13.3134 14.5622 14.5178 15.7666 15.9999 15.7666Z" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round"></path>
                            <path d="M21.708 21.7079L17.8747 17.8746C18.9836 16.5674 19.6865 14.8329 19.6865 13.0801C19.6865 8.99472 16.0118 5.32007 11.9264 5.32007C7.84103 5.32007 4.16638 8.99472 4.16638 13.0801C4.16638 17.1655 7.84103 20.84 11.9264 20.84C13.6804 20.84 15.3587 20.2371 16.6977 19.1949L20.5309 23.0281C20.7301 23.2273 20.9919 23.3264 21.2537 23.3264C21.5155 23.3264 21.7774 23.2273 21.9766 23.0281C22.3749 22.6299 22.3749 21.9963 21.9771 21.5985L21.708 21.7079Z" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round"></path>
                          </svg>"#;

const BANNER_SPACER: &str = "data:image/svg+xml,%3csvg%20xmlns=%27http://www.w3.org/2000/svg%27%20version=%271.1%27%20width=%27268%27%20height=%27477%27/%3e";

pub fn render(config: &ShowroomConfig, settings: Option<&Settings>) -> String {
    let Some(settings) = settings.filter(|s| !s.currency.trim().is_empty()) else {
        log::warn!("products showroom rendered without a currency");
        return MISSING_CURRENCY.to_string();
    };

    let products = products_wrapper(config, &settings.currency);
    let body = match config.mode {
        ShowroomMode::Title => format!(
            r#"  <div class="showroom-heading">
    <h2 id="showroom-title">{}</h2>
  </div>
  <div class="component-container" style="margin-left: 10px;">
    <div class="showroom-container">
{products}
    </div>
  </div>"#,
            escape_text(&config.title)
        ),
        ShowroomMode::Image => {
            let banner = &config.banner_config;
            let container_class = if config.direction.is_rtl() {
                "showroom-container showroom-container-rtl"
            } else {
                "showroom-container"
            };
            let alt = escape_attr(&banner.alt_text);
            format!(
                r#"  <div class="component-container">
    <div class="{container_class}">
      <a style="text-decoration: none; display: block; position: relative" href="{link}">
        <div class="showroom-banner-wrapper">
          <span class="showroom-desktop-banner">
            <span>
              <img alt="" aria-hidden="true" src="{BANNER_SPACER}">
            </span>
            <img alt="{alt}" src="{desktop}" class="showroom-banner-image" />
          </span>
          <div style="box-sizing: border-box; margin: 0px; min-width: 0px; height: 100%; width: 100%; position: relative;">
            <span class="showroom-mobile-banner">
              <img alt="{alt}" src="{mobile}" class="showroom-banner-image" />
            </span>
          </div>
        </div>
      </a>
{products}
    </div>
  </div>"#,
                link = escape_attr(&banner.link_url),
                desktop = escape_attr(&banner.desktop_image),
                mobile = escape_attr(&banner.mobile_image),
            )
        }
    };

    format!(
        r#"{loader}
<div class="showroom-component" data-direction="{direction}" data-category-number="{category}" data-object-ids="{ids}">
{body}
</div>"#,
        loader = assets::showroom_loader_script(settings),
        direction = if config.direction.is_rtl() { "rtl" } else { "ltr" },
        category = escape_attr(&config.category_number),
        ids = escape_attr(&config.object_ids),
    )
}

/// The `x-init` query expression, or `None` when there is nothing to fetch.
pub fn query_call(config: &ShowroomConfig) -> Option<String> {
    let ids = config
        .object_id_list()
        .iter()
        .map(|id| format!("'{}'", js_single_quoted(id)))
        .collect::<Vec<_>>()
        .join(", ");
    let category = config.category_number.trim();

    if !category.is_empty() {
        let function = if config.sale.is_yes() {
            "getDiscountedProductsFromCategory"
        } else {
            "getProductsFromCategory"
        };
        Some(format!("{function}({PRODUCT_COUNT}, {category}, [{ids}])"))
    } else if !ids.is_empty() {
        Some(format!("getProductsManual([{ids}])"))
    } else {
        None
    }
}

fn js_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn products_wrapper(config: &ShowroomConfig, currency: &str) -> String {
    let call = query_call(config);
    let currency = escape_attr(&js_single_quoted(currency)).into_owned();
    let sale = config.sale.is_yes();

    let mut html = String::from(
        r#"      <div class="showroom-products-wrapper">
        <div class="swiper-button-prev left_no_image_arrow showroom_arrow"></div>
        <div class="swiper-button-next right_no_image_arrow showroom_arrow"></div>
        <div class="showroom-products-container">"#,
    );

    if let Some(call) = &call {
        html.push_str(&format!(
            "\n          <section x-data=\"{{ products: [] }}\" x-init=\"products = await {}\">",
            escape_attr(call)
        ));
    }

    html.push_str(
        r#"
          <div class="showroom-products-container no-image-track" style="display: flex;">
            <template x-for="product in products">
              <div class="product--card">
                <a :href="product.url" style="text-decoration: none; color: black;">
                  <div class="product-picture-wrapper">
                    <span>
                      <img class="product-picture" :alt="product.product_name" :src="updateImageUrl(product.image_url)" loading="lazy" />
                    </span>
                  </div>
                  <div class="product-details-wrapper">
                    <div>"#,
    );

    if sale {
        html.push_str(&format!(
            "\n                      <span class=\"old-price\" style=\"padding:5px; color:#616161; text-decoration:line-through;\" x-text=\"product.regular.toFixed(2) + ' {currency}'\"></span>"
        ));
    }

    html.push_str(
        r#"
                      <div class="product-price-wrapper">
                        <div class="product-price-container">
                          <div class="vp-price">"#,
    );

    if sale {
        html.push_str(&format!(
            "\n                            <span class=\"product-price\" style=\"padding:5px; background-color:#e3262f; color:white;\" x-text=\"product.prix.toFixed(2) + ' {currency}'\"></span>"
        ));
    } else {
        html.push_str(&format!(
            "\n                            <span class=\"product-price\" x-text=\"product.prix.toFixed(2) + ' {currency}'\"></span>"
        ));
    }

    html.push_str(&format!(
        r#"
                          </div>
                        </div>
                      </div>
                      <div class="product-brand-wrapper">
                        <span class="product-brand" x-text="product.brand"></span>
                      </div>
                      <div class="product-name" x-text="product.product_name"></div>
                    </div>
                  </div>
                  <div style="box-sizing: border-box; margin: auto 0px 0px; min-width: 0px;">
                    <button class="vp-button">
                      <span class="vp-button__label">
                        <div style="align-items: center; display: flex; justify-content: center;">
                          {SEARCH_ICON}
                          View Product
                        </div>
                      </span>
                    </button>
                  </div>
                </a>
              </div>
            </template>
          </div>"#
    ));

    if call.is_some() {
        html.push_str("\n          </section>");
    }

    html.push_str(
        r#"
        </div>
      </div>"#,
    );
    html
}
