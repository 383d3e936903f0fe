//! About blurb with the portrait wipe.

use leptos::html;
use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{PORTRAIT_URL, SectionAnchor, copy};
use crate::motion::RevealMotion;
use crate::reveal::{RevealOptions, use_reveal};

#[component]
pub fn About() -> impl IntoView {
    // One region drives both the frame wipe and the image zoom.
    let media_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(media_ref, RevealOptions::section());
    let wipe = RevealMotion::wipe_in();
    let zoom = RevealMotion::settle_zoom(1.12);

    view! {
        <section id=SectionAnchor::About.id() class="about">
            <div class="container about-grid">
                <div class="about-copy">
                    <Reveal>
                        <h2 class="section-heading">{copy::ABOUT_HEADING}</h2>
                    </Reveal>
                    <Reveal delay=0.1>
                        <p class="section-body">{copy::ABOUT_BODY}</p>
                    </Reveal>
                </div>
                <div node_ref=media_ref class="about-media">
                    <div class="about-frame" style=move || wipe.style(revealed.get())>
                        <img
                            src=PORTRAIT_URL
                            alt="Portrait"
                            class="about-portrait"
                            style=move || zoom.style(revealed.get())
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
