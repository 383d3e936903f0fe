//! Scroll-linked backdrop for the contact section.
//!
//! Progress runs from 0.0 when the section's top reaches the bottom of the
//! viewport to 1.0 when its bottom leaves through the top; the backdrop hue
//! follows it.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const HUE_START: f64 = 200.0;
pub const HUE_END: f64 = 260.0;
/// Offset between the two gradient stops.
pub const HUE_SPREAD: f64 = 40.0;

/// Scroll progress of a section through the viewport, in `0.0..=1.0`.
///
/// `top` and `height` come from the section's bounding rect.
#[must_use]
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

#[must_use]
pub fn hue_for_progress(progress: f64) -> f64 {
    HUE_START + (HUE_END - HUE_START) * progress.clamp(0.0, 1.0)
}

/// CSS background for the contact backdrop at `hue`.
#[must_use]
pub fn contact_gradient(hue: f64) -> String {
    format!(
        "linear-gradient(135deg, hsl({:.1}, 100%, 97%), hsl({:.1}, 100%, 95%))",
        hue,
        hue + HUE_SPREAD
    )
}
