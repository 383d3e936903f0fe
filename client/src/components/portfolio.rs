//! Project gallery.

use leptos::prelude::*;

use crate::components::reveal::{Reveal, RevealItem};
use crate::content::{PROJECTS, Project, SectionAnchor, copy};
use crate::motion::{RevealMotion, Transition, stagger};
use crate::reveal::RevealOptions;

#[component]
pub fn Portfolio() -> impl IntoView {
    let cards = PROJECTS
        .into_iter()
        .enumerate()
        .map(|(i, project)| view! { <ProjectCard project=project index=i/> })
        .collect_view();

    view! {
        <section id=SectionAnchor::Work.id() class="portfolio">
            <div class="container">
                <Reveal>
                    <p class="eyebrow">{copy::WORK_EYEBROW}</p>
                </Reveal>
                <Reveal delay=0.05>
                    <h2 class="section-heading">{copy::WORK_HEADING}</h2>
                </Reveal>
                <div class="project-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let motion = RevealMotion::fade_up(16.0).with_transition(Transition::new(0.6).delay(stagger(index, 0.04)));

    view! {
        <RevealItem motion=motion options=RevealOptions::section()>
            <a href="#" class="project-card">
                <div class="project-media">
                    <img src=project.image_url alt=project.title class="project-image"/>
                    <div class="project-shade"></div>
                </div>
                <div class="project-caption">
                    <span class="project-category">{project.category}</span>
                    <h3 class="project-title">{project.title}</h3>
                </div>
            </a>
        </RevealItem>
    }
}
