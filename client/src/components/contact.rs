//! Contact section: scroll-tinted backdrop, social links, and the enquiry form.
//!
//! The form is presentational. Inputs keep their text in local signals and the
//! action button has no submit target.

use leptos::html;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::reveal::{Reveal, RevealItem};
use crate::content::{CONTACT_FIELDS, ContactField, FieldKind, SOCIAL_LINKS, SectionAnchor, copy};
use crate::motion::scroll::{contact_gradient, hue_for_progress};
use crate::motion::{RevealMotion, Transition, stagger};

#[cfg(feature = "hydrate")]
fn track_scroll_progress(section: NodeRef<html::Section>, progress: RwSignal<f64>) {
    use crate::motion::scroll::scroll_progress;

    let measure = move || {
        let Some(element) = section.get_untracked() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport_height = window
            .inner_height()
            .map_or(0.0, |h| h.as_f64().unwrap_or_default());
        let rect = element.get_bounding_client_rect();
        progress.set(scroll_progress(rect.top(), rect.height(), viewport_height));
    };

    let handle = window_event_listener(leptos::ev::scroll, move |_| measure());
    Effect::new(move || {
        if section.get().is_some() {
            measure();
        }
    });
    on_cleanup(move || handle.remove());
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let progress = RwSignal::new(0.0_f64);
    #[cfg(feature = "hydrate")]
    track_scroll_progress(section_ref, progress);

    let backdrop = move || format!("background:{};", contact_gradient(hue_for_progress(progress.get())));

    let socials = SOCIAL_LINKS
        .into_iter()
        .enumerate()
        .map(|(i, social)| {
            let motion = RevealMotion::fade_up(10.0).with_transition(Transition::default().delay(stagger(i, 0.06)));
            view! {
                <RevealItem motion=motion class="social-slot">
                    <a href=social.href class="social-link">
                        {social.name}
                    </a>
                </RevealItem>
            }
        })
        .collect_view();

    let fields = CONTACT_FIELDS
        .into_iter()
        .map(|field| view! { <ContactInput field=field/> })
        .collect_view();
    let form_motion = RevealMotion::fade_up(16.0).with_transition(Transition::new(0.7));

    view! {
        <section id=SectionAnchor::Contact.id() node_ref=section_ref class="contact">
            <div class="contact-backdrop" style=backdrop></div>
            <div class="container contact-body">
                <Reveal>
                    <h2 class="section-heading">{copy::CONTACT_HEADING}</h2>
                </Reveal>
                <Reveal delay=0.1>
                    <p class="section-body">{copy::CONTACT_BODY}</p>
                </Reveal>

                <div class="social-row">{socials}</div>

                <RevealItem motion=form_motion>
                    <form class="contact-form">
                        {fields}
                        <div class="field field-wide field-actions">
                            <button type="button" class="button button-dark">
                                <span class="button-glow"></span>
                                <span>{copy::HIRE_ME}</span>
                                <span class="button-arrow">"\u{2192}"</span>
                            </button>
                        </div>
                    </form>
                </RevealItem>
            </div>
        </section>
    }
}

#[component]
fn ContactInput(field: ContactField) -> impl IntoView {
    let value = RwSignal::new(String::new());
    let id = format!("contact-{}", field.name);

    let control = match field.kind {
        FieldKind::Text => view! {
            <input
                id=id.clone()
                name=field.name
                type="text"
                placeholder=field.placeholder
                class="field-control"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Email => view! {
            <input
                id=id.clone()
                name=field.name
                type="email"
                placeholder=field.placeholder
                class="field-control"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=id.clone()
                name=field.name
                rows=rows.to_string()
                placeholder=field.placeholder
                class="field-control"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
    };
    let class = if matches!(field.kind, FieldKind::TextArea { .. }) { "field field-wide" } else { "field" };

    view! {
        <div class=class>
            <label for=id class="field-label">
                {field.label}
            </label>
            {control}
        </div>
    }
}
