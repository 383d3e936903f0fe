//! Axis-aligned rectangles and intersection ratios.
//!
//! Mirrors the geometry the browser uses for `IntersectionObserver` entries so
//! margin handling and threshold crossings can be exercised without a DOM.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Rectangle in CSS pixels, origin at the top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`, or `None` when the two do not touch.
    ///
    /// Edge-adjacent rectangles produce a zero-area overlap, matching how the
    /// browser reports an entry that is touching but not yet inside.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Same rectangle shifted vertically; used to express scrolling.
    #[must_use]
    pub fn offset_y(&self, dy: f64) -> Rect {
        Rect::new(self.x, self.y + dy, self.width, self.height)
    }
}

/// Fraction of `target` that lies inside `root`, in `0.0..=1.0`.
///
/// A zero-area target reports `1.0` when it sits inside `root` and `0.0`
/// otherwise.
#[must_use]
pub fn intersection_ratio(target: &Rect, root: &Rect) -> f64 {
    let Some(overlap) = target.intersection(root) else {
        return 0.0;
    };
    let target_area = target.area();
    if target_area <= 0.0 {
        return 1.0;
    }
    (overlap.area() / target_area).clamp(0.0, 1.0)
}
