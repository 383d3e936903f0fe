//! Reveal-on-visibility.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every entrance animation on the page is gated by a boolean that flips to
//! `true` the first time its region enters the (margin-adjusted) viewport and
//! then stays there. `controller` holds that state machine, `geometry` and
//! `margin` describe the viewport math, and `use_reveal` binds it all to a
//! Leptos node.

#[cfg(feature = "hydrate")]
mod browser;
pub mod controller;
pub mod geometry;
pub mod margin;


use leptos::html;
use leptos::prelude::*;

pub use controller::{EDGE_THRESHOLD, ObserveError, Phase, RevealController, RevealOptions, RevealState, Subscription};
pub use geometry::{Rect, intersection_ratio};
pub use margin::{Length, MarginError, RootMargin};

/// Track whether `target` has been on-screen, per `options`.
///
/// Server renders (and native tests) always see `false`; the browser build
/// attaches an `IntersectionObserver` when the node mounts and releases it
/// with the owning scope.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn use_reveal(target: NodeRef<html::Div>, options: RevealOptions) -> Signal<bool> {
    let revealed = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    browser::bind(target, options, revealed);
    revealed.into()
}
