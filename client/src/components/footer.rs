//! Page footer.

use leptos::prelude::*;

use crate::content::{copyright_line, current_year};

#[component]
pub fn Footer() -> impl IntoView {
    view! { <footer class="footer">{copyright_line(current_year())}</footer> }
}
