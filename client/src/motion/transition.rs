//! Entrance transitions between a hidden and a shown pose.
//!
//! The reveal boolean picks the target pose; the browser interpolates with a
//! CSS transition built from the [`Transition`] parameters.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self { duration_s: 0.3, delay_s: 0.0, easing: Easing::EaseOut }
    }
}

impl Transition {
    #[must_use]
    pub fn new(duration_s: f64) -> Self {
        Self { duration_s: duration_s.max(0.0), ..Self::default() }
    }

    #[must_use]
    pub fn delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s.max(0.0);
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// One entry of a CSS `transition` list for `property`.
    #[must_use]
    pub fn css_for(&self, property: &str) -> String {
        format!("{property} {:.3}s {} {:.3}s", self.duration_s, self.easing.css(), self.delay_s)
    }
}

/// Visual state of an animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Right inset of a `clip-path` wipe, in percent. `None` leaves clip-path unset.
    pub clip_right_pct: Option<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, clip_right_pct: None }
    }
}

impl Pose {
    #[must_use]
    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity:{};transform:translate3d({}px,{}px,0) scale({});",
            self.opacity, self.x, self.y, self.scale
        );
        if let Some(right) = self.clip_right_pct {
            css.push_str(&format!("clip-path:inset(0 {right}% 0 0);"));
        }
        css
    }
}

/// Hidden/shown pose pair plus the transition between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
    pub hidden: Pose,
    pub shown: Pose,
    pub transition: Transition,
}

impl RevealMotion {
    /// Fade in while rising `offset` pixels.
    #[must_use]
    pub fn fade_up(offset: f64) -> Self {
        Self {
            hidden: Pose { opacity: 0.0, y: offset, ..Pose::default() },
            shown: Pose::default(),
            transition: Transition::default(),
        }
    }

    /// Left-to-right `clip-path` wipe.
    #[must_use]
    pub fn wipe_in() -> Self {
        Self {
            hidden: Pose { clip_right_pct: Some(100.0), ..Pose::default() },
            shown: Pose { clip_right_pct: Some(0.0), ..Pose::default() },
            transition: Transition::new(0.9).easing(Easing::EaseInOut),
        }
    }

    /// Zoom settling from `from` to 1.
    #[must_use]
    pub fn settle_zoom(from: f64) -> Self {
        Self {
            hidden: Pose { scale: from, ..Pose::default() },
            shown: Pose::default(),
            transition: Transition::new(1.2),
        }
    }

    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    #[must_use]
    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed { self.shown } else { self.hidden }
    }

    /// Inline style for the current target pose.
    #[must_use]
    pub fn style(&self, revealed: bool) -> String {
        let mut out = self.pose(revealed).css();
        let mut properties = vec![self.transition.css_for("opacity"), self.transition.css_for("transform")];
        if self.hidden.clip_right_pct.is_some() || self.shown.clip_right_pct.is_some() {
            properties.push(self.transition.css_for("clip-path"));
        }
        out.push_str("transition:");
        out.push_str(&properties.join(","));
        out.push(';');
        out
    }
}

/// Delay for the `index`-th item of a staggered list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger(index: usize, step_s: f64) -> f64 {
    index as f64 * step_s
}
