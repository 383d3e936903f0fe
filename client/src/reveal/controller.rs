//! One-shot reveal state machine.
//!
//! DESIGN
//! ======
//! The controller is platform-free: it owns the region's [`RevealState`], the
//! observation [`Subscription`], and the rules for when samples count. The
//! browser binding in `browser.rs` feeds it `IntersectionObserver` ratios; the
//! tests feed it simulated ones.
//!
//! Lifecycle: `Pending` -> `Observing` -> `Settled` | `Released`. Samples are
//! only processed while `Observing`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::margin::RootMargin;

/// Extra threshold registered next to `0.0` when any positive overlap counts.
///
/// A lone `0.0` threshold only re-notifies when the region stops touching the
/// viewport, so an edge-adjacent first entry (ratio 0) would never be followed
/// by a positive one while the region scrolls in.
pub const EDGE_THRESHOLD: f64 = 0.01;

/// Per-region visibility record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    /// Set on the first crossing and never cleared.
    pub has_been_visible: bool,
    /// Latest sample result. Only drives output when `once` is off.
    pub in_view: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub margin: RootMargin,
    /// Stop observing after the first positive detection.
    pub once: bool,
    /// Threshold ratio. `0.0` means any positive intersection.
    pub amount: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { margin: RootMargin::ZERO, once: true, amount: 0.0 }
    }
}

impl RevealOptions {
    /// Preset for section copy: fires slightly before the region is on-screen
    /// by trimming 10% off the top and bottom of the viewport.
    #[must_use]
    pub fn section() -> Self {
        use super::margin::Length;
        Self { margin: RootMargin::symmetric(Length::Percent(-10.0), Length::ZERO), ..Self::default() }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: RootMargin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount.clamp(0.0, 1.0);
        self
    }

    /// Whether a sample with `ratio` counts as visible.
    #[must_use]
    pub fn crosses(&self, ratio: f64) -> bool {
        if self.amount <= 0.0 { ratio > 0.0 } else { ratio >= self.amount }
    }

    /// Observer thresholds. With `amount == 0` a region that first touched the
    /// viewport edge is re-notified by the time [`EDGE_THRESHOLD`] of it shows.
    #[must_use]
    pub fn thresholds(&self) -> Vec<f64> {
        if self.amount <= 0.0 { vec![0.0, EDGE_THRESHOLD] } else { vec![self.amount] }
    }
}

/// Controller lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Created, region not mounted yet.
    #[default]
    Pending,
    /// Subscription attached; samples are processed.
    Observing,
    /// Revealed for good. Subscription detached (or never attached).
    Settled,
    /// Region unmounted.
    Released,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserveError {
    #[error("visibility observation is not supported in this environment")]
    Unsupported,
    #[error("visibility observer rejected the region: {0}")]
    Rejected(String),
}

/// Handle to a live visibility observation.
pub trait Subscription {
    /// Stop delivering samples. Must be idempotent.
    fn unsubscribe(&mut self);
}

pub struct RevealController<S: Subscription> {
    options: RevealOptions,
    state: RevealState,
    phase: Phase,
    subscription: Option<S>,
    samples: usize,
}

impl<S: Subscription> RevealController<S> {
    #[must_use]
    pub fn new(options: RevealOptions) -> Self {
        Self { options, state: RevealState::default(), phase: Phase::Pending, subscription: None, samples: 0 }
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of samples handled while observing.
    #[must_use]
    pub fn samples_processed(&self) -> usize {
        self.samples
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.phase == Phase::Observing && self.subscription.is_some()
    }

    /// The boolean exposed to the region's animation.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        if self.options.once { self.state.has_been_visible } else { self.state.in_view }
    }

    /// Start observing. Only the first call in `Pending` has any effect.
    ///
    /// If `subscribe` fails the region is treated as visible, so content is
    /// never left hidden in environments without visibility observation.
    pub fn attach(&mut self, subscribe: impl FnOnce() -> Result<S, ObserveError>) {
        if self.phase != Phase::Pending {
            return;
        }
        match subscribe() {
            Ok(subscription) => {
                self.subscription = Some(subscription);
                self.phase = Phase::Observing;
            }
            Err(e) => {
                leptos::logging::warn!("reveal falling back to visible: {e}");
                self.state = RevealState { has_been_visible: true, in_view: true };
                self.phase = Phase::Settled;
            }
        }
    }

    /// Process one intersection sample.
    ///
    /// Returns the new output value when it changed, `None` otherwise
    /// (including every sample delivered outside `Observing`).
    pub fn observe(&mut self, ratio: f64) -> Option<bool> {
        if self.phase != Phase::Observing {
            return None;
        }
        self.samples += 1;

        let before = self.is_revealed();
        let visible = self.options.crosses(ratio);
        self.state.in_view = visible;
        if visible {
            self.state.has_been_visible = true;
            if self.options.once {
                self.detach();
                self.phase = Phase::Settled;
            }
        }

        let after = self.is_revealed();
        (after != before).then_some(after)
    }

    /// Tear down on unmount. Safe in any phase and safe to repeat.
    pub fn release(&mut self) {
        self.detach();
        self.subscription = None;
        self.phase = Phase::Released;
    }

    /// Unsubscribe but keep the handle; the browser callback may still be on
    /// the stack when this runs.
    fn detach(&mut self) {
        if let Some(subscription) = self.subscription.as_mut() {
            subscription.unsubscribe();
        }
    }
}
