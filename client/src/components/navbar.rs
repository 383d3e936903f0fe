//! Fixed top bar with in-page anchor links.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, OWNER_INITIALS, SectionAnchor, copy};

#[component]
pub fn Navbar() -> impl IntoView {
    let links = NAV_LINKS
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.anchor.href() class="navbar-link">
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <a href=SectionAnchor::Home.href() class="navbar-brand">
                    {OWNER_INITIALS}
                </a>
                <nav class="navbar-links">{links}</nav>
                <a href=SectionAnchor::Contact.href() class="navbar-cta">
                    {copy::HIRE_ME}
                </a>
            </div>
        </header>
    }
}
