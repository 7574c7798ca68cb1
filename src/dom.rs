use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

/// Inner viewport size in CSS pixels, zero when unavailable.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}
