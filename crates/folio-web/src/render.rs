//! Render sink: writes one frame of computed motion to the DOM. Called only
//! after every component has ticked, so position and size land together.

use crate::dom::{clear_style, set_style, set_text};
use crate::style;
use folio_core::{CursorFrame, FillFrame, LoaderFrame, MagneticFrame, RotationState};
use web_sys as web;

pub struct CursorSink {
    pub dot: web::HtmlElement,
    pub ring: web::HtmlElement,
}

impl CursorSink {
    pub fn apply(&self, f: &CursorFrame) {
        let opacity = if f.visible { "1" } else { "0" };
        set_style(&self.dot, "opacity", opacity);
        set_style(&self.ring, "opacity", opacity);

        let dot_size = style::px(f.dot_size);
        set_style(&self.dot, "width", &dot_size);
        set_style(&self.dot, "height", &dot_size);
        set_style(
            &self.dot,
            "transform",
            &style::centered_translate(f.dot, f.dot_size),
        );

        let ring_size = style::px(f.ring_size);
        set_style(&self.ring, "width", &ring_size);
        set_style(&self.ring, "height", &ring_size);
        set_style(
            &self.ring,
            "transform",
            &style::centered_translate(f.ring, f.ring_size),
        );
    }

    pub fn hide(&self) {
        set_style(&self.dot, "display", "none");
        set_style(&self.ring, "display", "none");
    }

    pub fn clear(&self) {
        for el in [&self.dot, &self.ring] {
            clear_style(el, &["opacity", "width", "height", "transform"]);
        }
    }
}

#[inline]
pub fn apply_rotation(el: &web::HtmlElement, r: &RotationState) {
    set_style(el, "transform", &style::rotate_xyz(r.rx, r.ry, r.rz));
}

#[inline]
pub fn apply_magnetic(el: &web::HtmlElement, f: &MagneticFrame) {
    set_style(
        el,
        "transform",
        &style::magnetic_transform(f.offset, f.rotation_deg),
    );
}

pub fn apply_fill(bg: &web::HtmlElement, f: &FillFrame) {
    set_style(bg, "left", &style::pct(f.offset_pct.x));
    set_style(bg, "top", &style::pct(f.offset_pct.y));
    set_style(bg, "opacity", &style::unit(f.opacity));
    set_style(bg, "transform", &style::scale(f.scale));
    set_style(bg, "transform-origin", &style::origin(f.origin_pct));
}

/// Hand a transformed element back to its stylesheet.
#[inline]
pub fn clear_transform(el: &web::HtmlElement) {
    clear_style(el, &["transform"]);
}

pub fn clear_fill(bg: &web::HtmlElement) {
    clear_style(bg, &["left", "top", "opacity", "transform", "transform-origin"]);
}

pub struct LoaderSink {
    pub screen: web::HtmlElement,
    pub percent: Option<web::HtmlElement>,
    pub bar: Option<web::HtmlElement>,
}

impl LoaderSink {
    pub fn apply(&self, f: &LoaderFrame) {
        if let Some(el) = &self.percent {
            set_text(el, &f.percent.to_string());
        }
        if let Some(el) = &self.bar {
            set_style(el, "width", &style::percent(f.percent));
        }
    }

    pub fn finish(&self, done_class: &str) {
        if self.screen.is_connected() {
            _ = self.screen.class_list().add_1(done_class);
        }
    }
}
