//! Fixed top navigation bar.
//!
//! Switches to its `scrolled` style once the page scroll state reports the
//! page has moved past the threshold.

use leptos::prelude::*;

use crate::content::{BRAND, NAV_LINKS};
use crate::state::scroll::ScrollState;

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let nav_class = move || scroll.get().navbar_class();

    view! {
        <nav class=nav_class>
            <div class="nav-content">
                <BrandMark class_name="logo"/>
                <ul class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| view! { <li><a href=link.href()>{link.label}</a></li> })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Two-tone brand word mark shared by the navbar and footer.
#[component]
pub fn BrandMark(class_name: &'static str) -> impl IntoView {
    let (first, second) = BRAND;
    view! { <div class=class_name>{first}<span>{second}</span></div> }
}
