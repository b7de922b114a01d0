use crate::constants::{COARSE_POINTER_QUERY, MOBILE_BREAKPOINT_PX};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order. A bad selector
/// yields an empty list.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("query_selector_all({}) failed: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// First descendant of `parent` matching `selector`.
pub fn query_in(parent: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Touch-first or narrow viewport: the custom cursor stays off.
pub fn is_mobile(window: &web::Window) -> bool {
    let coarse = window
        .match_media(COARSE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    let narrow = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w < MOBILE_BREAKPOINT_PX)
        .unwrap_or(false);
    coarse || narrow
}

/// Set a style property on an element that may already be gone; a detached
/// element is skipped silently.
#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    if !el.is_connected() {
        return;
    }
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_text(el: &web::HtmlElement, text: &str) {
    if el.is_connected() {
        el.set_text_content(Some(text));
    }
}

/// Drop inline properties the render sink wrote, handing the element back to
/// its stylesheet.
pub fn clear_style(el: &web::HtmlElement, names: &[&str]) {
    let style = el.style();
    for name in names {
        _ = style.remove_property(name);
    }
}
