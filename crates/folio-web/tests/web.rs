//! In-browser checks for the DOM write helpers.
//!
//! Run with: wasm-pack test --headless --chrome crates/folio-web

#![cfg(target_arch = "wasm32")]

use folio_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}

fn div() -> web::HtmlElement {
    document().create_element("div").unwrap().dyn_into().unwrap()
}

fn width(el: &web::HtmlElement) -> String {
    el.style().get_property_value("width").unwrap()
}

#[wasm_bindgen_test]
fn detached_element_is_left_alone() {
    let el = div();
    dom::set_style(&el, "width", "10px");
    dom::set_text(&el, "42");
    assert_eq!(width(&el), "");
    assert_eq!(el.text_content().unwrap_or_default(), "");
}

#[wasm_bindgen_test]
fn writes_stop_once_element_is_removed() {
    let el = div();
    document().body().unwrap().append_child(&el).unwrap();
    dom::set_style(&el, "width", "10px");
    dom::set_text(&el, "42");
    assert_eq!(width(&el), "10px");
    assert_eq!(el.text_content().unwrap_or_default(), "42");

    // a route change removed the node; a late frame must not touch it
    el.remove();
    dom::set_style(&el, "width", "20px");
    dom::set_text(&el, "99");
    assert_eq!(width(&el), "10px");
    assert_eq!(el.text_content().unwrap_or_default(), "42");
}

#[wasm_bindgen_test]
fn clear_style_drops_inline_properties() {
    let el = div();
    document().body().unwrap().append_child(&el).unwrap();
    dom::set_style(&el, "width", "10px");
    dom::set_style(&el, "opacity", "0.5");
    dom::clear_style(&el, &["width", "opacity"]);
    assert_eq!(width(&el), "");
    assert_eq!(el.style().get_property_value("opacity").unwrap(), "");
    el.remove();
}

#[wasm_bindgen_test]
fn query_in_finds_descendant() {
    let parent = div();
    let child = div();
    child.set_attribute("data-magnetic-bg", "").unwrap();
    parent.append_child(&child).unwrap();
    let found = dom::query_in(&parent, "[data-magnetic-bg]");
    assert!(found.is_some_and(|f| f == child));
    assert!(dom::query_in(&parent, ".missing").is_none());
}
