//! Domain logic for the wedding site.
//!
//! Everything in this crate root is target independent: no DOM, no fetch.
//! The Yew application in `main.rs` renders what these modules compute, which
//! keeps the interpolation, projection and validation code testable natively.

pub mod countdown;
pub mod events;
pub mod geo;
pub mod i18n;
pub mod journey;
pub mod land;
pub mod rsvp;
pub mod travel;

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp a progress value into `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_unit(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Scroll progress of a pinned section.
///
/// Progress starts when the section's top reaches the top of the viewport and
/// ends when its bottom reaches the bottom of the viewport.
///
/// # Arguments
/// * `top` - Section top relative to the viewport (`getBoundingClientRect().top`)
/// * `height` - Full section height in pixels
/// * `viewport_height` - Window inner height in pixels
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let scrollable = height - viewport_height;
    if scrollable <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    clamp_unit(-top / scrollable)
}
