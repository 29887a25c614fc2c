//! Landing hero with name, tagline, and call to action.

use leptos::prelude::*;

use crate::components::icons::ChevronDownIcon;
use crate::content::{HERO_CTA, HERO_GREETING, HERO_NAME, HERO_TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    // Entrance fade/scale runs from CSS on first paint.
    view! {
        <section id="home" class="hero">
            <div class="hero-text hero-enter">
                <h2 class="hero-greeting">{HERO_GREETING}</h2>
                <h1>{HERO_NAME}</h1>
                <p>{HERO_TAGLINE}</p>
                <a href="#portfolio" class="cta-btn">{HERO_CTA}</a>
            </div>
            <div class="scroll-indicator">
                <ChevronDownIcon size=32/>
            </div>
        </section>
    }
}
