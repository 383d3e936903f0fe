//! Decorative loops that run for as long as the page is mounted.
//!
//! These carry no state: each loop is a fixed keyframe track rendered to a
//! CSS `@keyframes` rule, and the browser drives it.

#[cfg(test)]
#[path = "ambient_test.rs"]
mod ambient_test;

use super::transition::Easing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl Keyframe {
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self { x, y, opacity: 1.0 }
    }

    #[must_use]
    pub const fn faded(opacity: f64) -> Self {
        Self { x: 0.0, y: 0.0, opacity }
    }

    #[must_use]
    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    /// Plays once and holds the last frame.
    Once,
}

/// Named keyframe track, evenly spaced over `duration_s`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLoop {
    pub name: &'static str,
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    pub frames: &'static [Keyframe],
}

impl AmbientLoop {
    /// `@keyframes` rule for this track.
    #[must_use]
    pub fn keyframes_css(&self) -> String {
        let last = self.frames.len().saturating_sub(1).max(1);
        let stops = self
            .frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                #[allow(clippy::cast_precision_loss)]
                let pct = i as f64 * 100.0 / last as f64;
                format!(
                    "{}%{{transform:translate({}px,{}px);opacity:{}}}",
                    trim_pct(pct),
                    frame.x,
                    frame.y,
                    frame.opacity
                )
            })
            .collect::<String>();
        format!("@keyframes {}{{{stops}}}", self.name)
    }

    /// Value for an element's `animation` property.
    #[must_use]
    pub fn animation_css(&self) -> String {
        let (count, fill) = match self.repeat {
            Repeat::Forever => ("infinite", "none"),
            Repeat::Once => ("1", "both"),
        };
        format!(
            "{} {:.3}s {} {:.3}s {count} {fill}",
            self.name,
            self.duration_s,
            self.easing.css(),
            self.delay_s
        )
    }

    /// Inline `style` attribute value.
    #[must_use]
    pub fn style(&self) -> String {
        format!("animation:{};", self.animation_css())
    }
}

fn trim_pct(pct: f64) -> String {
    let rounded = format!("{pct:.3}");
    rounded.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Blue accent blob, top-left of the hero.
pub const HERO_BLOB_BLUE: AmbientLoop = AmbientLoop {
    name: "float-blob-blue",
    duration_s: 12.0,
    delay_s: 0.0,
    easing: Easing::EaseInOut,
    repeat: Repeat::Forever,
    frames: &[Keyframe::at(0.0, 0.0), Keyframe::at(10.0, 24.0), Keyframe::at(-8.0, -12.0), Keyframe::at(0.0, 0.0)],
};

/// Rose accent blob, bottom-right of the hero.
pub const HERO_BLOB_ROSE: AmbientLoop = AmbientLoop {
    name: "float-blob-rose",
    duration_s: 14.0,
    delay_s: 0.0,
    easing: Easing::EaseInOut,
    repeat: Repeat::Forever,
    frames: &[Keyframe::at(0.0, 0.0), Keyframe::at(-12.0, -20.0), Keyframe::at(8.0, 10.0), Keyframe::at(0.0, 0.0)],
};

/// Bobbing bar under the "SCROLL" cue.
pub const SCROLL_CUE_BOB: AmbientLoop = AmbientLoop {
    name: "scroll-cue-bob",
    duration_s: 1.2,
    delay_s: 0.0,
    easing: Easing::EaseInOut,
    repeat: Repeat::Forever,
    frames: &[Keyframe::at(0.0, 0.0), Keyframe::at(0.0, 6.0), Keyframe::at(0.0, 0.0)],
};

/// One-shot drop-in for the scroll cue once the hero has settled.
pub const SCROLL_CUE_ENTER: AmbientLoop = AmbientLoop {
    name: "scroll-cue-enter",
    duration_s: 0.3,
    delay_s: 1.2,
    easing: Easing::EaseOut,
    repeat: Repeat::Once,
    frames: &[Keyframe::at(0.0, -6.0).with_opacity(0.0), Keyframe::at(0.0, 0.0)],
};

/// Badge floating above each testimonial card.
pub const TESTIMONIAL_BADGE_BOB: AmbientLoop = AmbientLoop {
    name: "testimonial-badge-bob",
    duration_s: 3.0,
    delay_s: 0.0,
    easing: Easing::EaseInOut,
    repeat: Repeat::Forever,
    frames: &[Keyframe::at(0.0, 0.0), Keyframe::at(0.0, -4.0), Keyframe::at(0.0, 0.0)],
};

/// Status dot in the hero badge.
pub const PULSE_DOT: AmbientLoop = AmbientLoop {
    name: "pulse-dot",
    duration_s: 2.0,
    delay_s: 0.0,
    easing: Easing::EaseInOut,
    repeat: Repeat::Forever,
    frames: &[Keyframe::faded(1.0), Keyframe::faded(0.5), Keyframe::faded(1.0)],
};

pub const ALL_LOOPS: [AmbientLoop; 6] =
    [HERO_BLOB_BLUE, HERO_BLOB_ROSE, SCROLL_CUE_BOB, SCROLL_CUE_ENTER, TESTIMONIAL_BADGE_BOB, PULSE_DOT];

/// Every `@keyframes` rule the page uses.
#[must_use]
pub fn ambient_stylesheet() -> String {
    ALL_LOOPS.iter().map(AmbientLoop::keyframes_css).collect::<Vec<_>>().join("\n")
}
