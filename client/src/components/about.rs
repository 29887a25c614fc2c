//! About section; fades up the first time it enters the viewport.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::{ABOUT_EMPHASIS, ABOUT_PARAGRAPHS};
use crate::state::reveal::RevealOptions;
use crate::util::viewport::use_reveal;

/// Split `text` around the first occurrence of `emphasis`.
///
/// Returns `None` when `emphasis` does not occur.
#[must_use]
pub fn split_emphasis<'a>(text: &'a str, emphasis: &str) -> Option<(&'a str, &'a str, &'a str)> {
    if emphasis.is_empty() {
        return None;
    }
    let start = text.find(emphasis)?;
    let end = start + emphasis.len();
    Some((&text[..start], &text[start..end], &text[end..]))
}

#[component]
pub fn About() -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node_ref, RevealOptions::default(), || {});
    let block_class = move || if revealed.get() { "fade-in-up visible" } else { "fade-in-up" };

    let paragraphs = ABOUT_PARAGRAPHS
        .into_iter()
        .map(|text| match split_emphasis(text, ABOUT_EMPHASIS) {
            Some((before, strong, after)) => view! { <p>{before}<strong>{strong}</strong>{after}</p> }.into_any(),
            None => view! { <p>{text}</p> }.into_any(),
        })
        .collect_view();

    view! {
        <section id="about" class="about">
            <div class="container">
                <div class=block_class node_ref=node_ref>
                    <h2 class="section-title">"About Me"</h2>
                    <div class="about-content">{paragraphs}</div>
                </div>
            </div>
        </section>
    }
}
