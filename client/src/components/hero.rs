//! Landing section: embedded 3D scene, floating accents, staggered intro copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scene itself belongs to the external `<spline-viewer>` element. This
//! section only sizes its container and hands over the scene URL untouched;
//! a viewer that fails to load leaves the gradient veil and copy in place.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{HERO_SCENE_URL, OWNER_NAME, SectionAnchor, copy};
use crate::motion::ambient::{HERO_BLOB_BLUE, HERO_BLOB_ROSE, PULSE_DOT, SCROLL_CUE_BOB, SCROLL_CUE_ENTER};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionAnchor::Home.id() class="hero">
            <div class="hero-scene">
                <spline-viewer url=HERO_SCENE_URL></spline-viewer>
            </div>
            <div class="hero-veil"></div>

            <div aria-hidden="true" class="blob blob-blue" style=HERO_BLOB_BLUE.style()></div>
            <div aria-hidden="true" class="blob blob-rose" style=HERO_BLOB_ROSE.style()></div>

            <div class="hero-body">
                <div class="container">
                    <Reveal>
                        <div class="hero-badge">
                            <span class="pulse-dot" style=PULSE_DOT.style()></span>
                            {copy::HERO_BADGE}
                        </div>
                    </Reveal>

                    <Reveal delay=0.1>
                        <h1 class="hero-title">
                            {copy::HERO_LEAD}
                            " "
                            <span class="gradient-text">{OWNER_NAME}</span>
                            " "
                            {copy::HERO_TAIL}
                        </h1>
                    </Reveal>

                    <Reveal delay=0.2>
                        <p class="hero-subtitle">{copy::HERO_SUBTITLE}</p>
                    </Reveal>

                    <Reveal delay=0.35>
                        <div class="hero-actions">
                            <a href=SectionAnchor::Work.href() class="button button-dark">
                                <span class="button-glow"></span>
                                <span>{copy::HERO_CTA}</span>
                                <span class="button-arrow">"\u{2192}"</span>
                            </a>
                        </div>
                    </Reveal>
                </div>
            </div>

            <div class="scroll-cue">
                <div class="scroll-cue-inner" style=SCROLL_CUE_ENTER.style()>
                    <span class="scroll-cue-label">{copy::SCROLL_CUE}</span>
                    <span class="scroll-cue-bar" style=SCROLL_CUE_BOB.style()></span>
                </div>
            </div>
        </section>
    }
}
