//! Root margin parsing.
//!
//! A root margin grows or shrinks the viewport box used for intersection
//! tests. Syntax follows the CSS `margin` shorthand restricted to `px` and
//! `%` lengths, which is what `IntersectionObserver` accepts.

#[cfg(test)]
#[path = "margin_test.rs"]
mod margin_test;

use std::fmt;
use std::str::FromStr;

use super::geometry::Rect;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarginError {
    #[error("root margin is empty")]
    Empty,
    #[error("root margin takes at most 4 values, got {0}")]
    TooManyValues(usize),
    #[error("invalid root margin length '{0}' (expected px or %)")]
    InvalidLength(String),
}

/// One margin component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    /// Percent of the root's height (top/bottom) or width (left/right).
    Percent(f64),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    #[must_use]
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => basis * pct / 100.0,
        }
    }

    fn parse(token: &str) -> Result<Self, MarginError> {
        let invalid = || MarginError::InvalidLength(token.to_owned());
        let (number, make): (&str, fn(f64) -> Length) = if let Some(n) = token.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = token.strip_suffix('%') {
            (n, Length::Percent)
        } else if token == "0" {
            return Ok(Length::ZERO);
        } else {
            return Err(invalid());
        };
        let value = number.parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(make(value))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Margin applied around the viewport before intersecting.
///
/// Negative lengths shrink the viewport, so a region has to travel further
/// on-screen before it counts as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin::symmetric(Length::ZERO, Length::ZERO);

    /// `vertical` on top and bottom, `horizontal` on left and right.
    #[must_use]
    pub const fn symmetric(vertical: Length, horizontal: Length) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Parse a CSS-style shorthand such as `"-10% 0px"`.
    ///
    /// # Errors
    ///
    /// Returns [`MarginError`] for empty input, more than four values, or a
    /// length that is not `px`, `%`, or a bare `0`.
    pub fn parse(input: &str) -> Result<Self, MarginError> {
        let values = input
            .split_whitespace()
            .map(Length::parse)
            .collect::<Result<Vec<_>, _>>()?;
        match values.as_slice() {
            [] => Err(MarginError::Empty),
            [all] => Ok(Self::symmetric(*all, *all)),
            [v, h] => Ok(Self::symmetric(*v, *h)),
            [top, h, bottom] => Ok(Self { top: *top, right: *h, bottom: *bottom, left: *h }),
            [top, right, bottom, left] => Ok(Self { top: *top, right: *right, bottom: *bottom, left: *left }),
            more => Err(MarginError::TooManyValues(more.len())),
        }
    }

    /// Four-value form handed to `IntersectionObserverInit.rootMargin`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }

    /// Grow (or shrink, for negative lengths) `root` by this margin.
    #[must_use]
    pub fn apply(&self, root: Rect) -> Rect {
        let top = self.top.resolve(root.height);
        let bottom = self.bottom.resolve(root.height);
        let left = self.left.resolve(root.width);
        let right = self.right.resolve(root.width);
        Rect::new(
            root.x - left,
            root.y - top,
            (root.width + left + right).max(0.0),
            (root.height + top + bottom).max(0.0),
        )
    }
}

impl FromStr for RootMargin {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
