//! Selected projects grid.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icons::{ACCENT, ExternalLinkIcon, VideoIcon};
use crate::content::{PROJECTS, ProjectCard, ProjectLinkLabel, ProjectMedia};

/// Class list for a project card root.
#[must_use]
pub fn card_class(card: &ProjectCard) -> String {
    match card.accent_class {
        Some(accent) => format!("project-card {accent}"),
        None => "project-card".to_owned(),
    }
}

/// Class list for the media container above the caption.
#[must_use]
pub fn media_class(media: &ProjectMedia) -> &'static str {
    match media {
        ProjectMedia::Images { .. } => "card-image-container",
        ProjectMedia::VideoGlyph => "card-image-container tiktok-bg",
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <h2 class="section-title">"Selected Projects"</h2>
                <div class="project-grid">
                    {PROJECTS.into_iter().map(|card| view! { <ProjectCardView card=card/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let media = match card.media {
        ProjectMedia::Images { thumb, thumb_alt, logo, logo_alt } => view! {
            <img src=thumb alt=thumb_alt class="main-thumb" loading="lazy"/>
            <img src=logo alt=logo_alt class="overlay-logo" loading="lazy"/>
        }
        .into_any(),
        ProjectMedia::VideoGlyph => view! { <VideoIcon size=60 color=ACCENT/> }.into_any(),
    };
    let link_body = match card.link_label {
        ProjectLinkLabel::Icon => view! { <ExternalLinkIcon size=40 color="white"/> }.into_any(),
        ProjectLinkLabel::Text(text) => view! { <span class="btn-text">{text}</span> }.into_any(),
    };

    view! {
        <div class=card_class(&card)>
            <div class=media_class(&card.media)>
                {media}
                <div class="image-overlay">
                    <a href=card.url target="_blank" rel="noreferrer" aria-label=card.title>
                        {link_body}
                    </a>
                </div>
            </div>
            <div class="card-info">
                <h3>{card.title}</h3>
                <p>{card.blurb}</p>
            </div>
        </div>
    }
}
