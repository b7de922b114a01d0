// CSS value builders for the render sink. Kept free of web-sys so the
// formatting can be checked on the host.
use crate::constants::{DEG_DECIMALS, PX_DECIMALS, RAD_DECIMALS, UNIT_DECIMALS};
use glam::Vec2;

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.*}px", PX_DECIMALS, v)
}

/// Translate a box of `size` so that its center lands on `center`.
pub fn centered_translate(center: Vec2, size: f32) -> String {
    let half = size * 0.5;
    format!(
        "translate3d({:.*}px, {:.*}px, 0)",
        PX_DECIMALS,
        center.x - half,
        PX_DECIMALS,
        center.y - half
    )
}

pub fn rotate_xyz(rx: f32, ry: f32, rz: f32) -> String {
    format!(
        "rotateX({:.*}rad) rotateY({:.*}rad) rotateZ({:.*}rad)",
        RAD_DECIMALS, rx, RAD_DECIMALS, ry, RAD_DECIMALS, rz
    )
}

pub fn magnetic_transform(offset: Vec2, rotation_deg: f32) -> String {
    format!(
        "translate3d({:.*}px, {:.*}px, 0) rotate({:.*}deg)",
        PX_DECIMALS, offset.x, PX_DECIMALS, offset.y, DEG_DECIMALS, rotation_deg
    )
}

#[inline]
pub fn percent(p: u8) -> String {
    format!("{}%", p.min(100))
}

/// Fractional percentage, for positions and transform origins.
#[inline]
pub fn pct(v: f32) -> String {
    format!("{:.*}%", PX_DECIMALS, v)
}

pub fn origin(o: Vec2) -> String {
    format!("{} {}", pct(o.x), pct(o.y))
}

#[inline]
pub fn unit(v: f32) -> String {
    format!("{:.*}", UNIT_DECIMALS, v)
}

#[inline]
pub fn scale(s: f32) -> String {
    format!("scale({})", unit(s))
}
