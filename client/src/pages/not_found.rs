//! Fallback for any path other than `/`.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found."</h1>
            <a href="/">"Back to the portfolio"</a>
        </div>
    }
}
