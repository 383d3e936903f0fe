//! Client quotes.

use leptos::prelude::*;

use crate::components::reveal::{Reveal, RevealItem};
use crate::content::{SectionAnchor, TESTIMONIALS, copy};
use crate::motion::ambient::TESTIMONIAL_BADGE_BOB;
use crate::motion::{RevealMotion, Transition, stagger};

#[component]
pub fn Testimonials() -> impl IntoView {
    let cards = TESTIMONIALS
        .into_iter()
        .enumerate()
        .map(|(i, testimonial)| {
            let motion = RevealMotion::fade_up(14.0).with_transition(Transition::new(0.6).delay(stagger(i, 0.1)));
            view! {
                <RevealItem motion=motion>
                    <figure class="quote-card">
                        <div aria-hidden="true" class="quote-badge" style=TESTIMONIAL_BADGE_BOB.style()></div>
                        <blockquote class="quote-text">
                            "\u{201c}"{testimonial.quote}"\u{201d}"
                        </blockquote>
                        <figcaption class="quote-author">{testimonial.author}</figcaption>
                    </figure>
                </RevealItem>
            }
        })
        .collect_view();

    view! {
        <section id=SectionAnchor::Testimonials.id() class="testimonials">
            <div class="container">
                <Reveal>
                    <h2 class="section-heading">{copy::TESTIMONIALS_HEADING}</h2>
                </Reveal>
                <div class="quote-grid">{cards}</div>
            </div>
        </section>
    }
}
