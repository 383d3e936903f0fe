//! The one-page portfolio.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::portfolio::Portfolio;
use crate::components::skills::Skills;
use crate::components::testimonials::Testimonials;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Portfolio/>
                <Skills/>
                <Testimonials/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
