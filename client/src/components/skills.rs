//! Tool grid.

use leptos::prelude::*;

use crate::components::reveal::{Reveal, RevealItem};
use crate::content::{SectionAnchor, TOOLS, copy};
use crate::motion::{RevealMotion, Transition, stagger};

#[component]
pub fn Skills() -> impl IntoView {
    let tiles = TOOLS
        .into_iter()
        .enumerate()
        .map(|(i, tool)| {
            let motion = RevealMotion::fade_up(12.0).with_transition(Transition::new(0.5).delay(stagger(i, 0.05)));
            view! {
                <RevealItem motion=motion>
                    <div class="tool-tile">
                        <div class="tool-icon">{tool.icon}</div>
                        <div class="tool-name">{tool.name}</div>
                    </div>
                </RevealItem>
            }
        })
        .collect_view();

    view! {
        <section id=SectionAnchor::Skills.id() class="skills">
            <div class="container">
                <Reveal>
                    <h2 class="section-heading">{copy::SKILLS_HEADING}</h2>
                </Reveal>
                <div class="tool-grid">{tiles}</div>
            </div>
        </section>
    }
}
