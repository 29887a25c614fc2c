//! Root application component and SSR document shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::state::scroll::ScrollState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-session scroll state and mounts the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let scroll = RwSignal::new(ScrollState::default());
    provide_context(scroll);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Ifeka Mary | TV Producer & Content Creator"/>
        <Meta name="description" content="Portfolio of Ifeka Mary: TV production, content creation and creative management."/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
