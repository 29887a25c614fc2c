//! The portfolio page: every section in document order.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navbar::Navbar, portfolio::Portfolio,
    skills::Skills,
};
use crate::state::scroll::ScrollState;
use crate::util::viewport::use_scroll_tracker;

#[component]
pub fn HomePage() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    // Listener lives exactly as long as the page.
    use_scroll_tracker(scroll);

    view! {
        <div class="portfolio-container">
            <Navbar/>
            <Hero/>
            <About/>
            <Portfolio/>
            <Skills/>
            <Contact/>
            <Footer/>
        </div>
    }
}
