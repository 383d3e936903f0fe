//! Wrappers that bind a reveal controller to an entrance motion.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::html;
use leptos::prelude::*;

use crate::motion::{RevealMotion, Transition};
use crate::reveal::{RevealOptions, use_reveal};

/// Section copy entrance: fade up `y` pixels over 0.7s after `delay` seconds,
/// triggered slightly before the block is fully on-screen.
#[component]
pub fn Reveal(
    #[prop(optional)] delay: f64,
    #[prop(default = 16.0)] y: f64,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let motion = RevealMotion::fade_up(y).with_transition(Transition::new(0.7).delay(delay));
    view! {
        <RevealItem motion=motion options=RevealOptions::section() class=class>
            {children()}
        </RevealItem>
    }
}

/// Generic one-shot entrance for any child content.
#[component]
pub fn RevealItem(
    motion: RevealMotion,
    #[prop(optional)] options: RevealOptions,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref, options);
    let style = move || motion.style(revealed.get());

    view! {
        <div node_ref=node_ref class=class style=style>
            {children()}
        </div>
    }
}
