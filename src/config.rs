use crate::constants::DATA_ATTR_PREFIX;
use holobox_core::constants::CONFIG_KEYS;
use holobox_core::HoloboxConfig;
use web_sys as web;

/// Defaults overlaid with any `data-holobox-*` attributes on `el`.
pub fn read_overrides(el: &web::Element) -> HoloboxConfig {
    let attrs: Vec<(&str, String)> = CONFIG_KEYS
        .iter()
        .filter_map(|&key| {
            el.get_attribute(&format!("{}{}", DATA_ATTR_PREFIX, key))
                .map(|raw| (key, raw))
        })
        .collect();
    HoloboxConfig::with_overrides(attrs.iter().map(|(k, v)| (*k, v.as_str())))
}
