//! Page footer with brand, copyright, and social glyphs.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icons::{InstagramIcon, TwitterIcon};
use crate::components::navbar::BrandMark;
use crate::content::{SOCIAL_ICONS, SocialIcon, copyright_line};
use crate::util::year::use_current_year;

#[component]
pub fn Footer() -> impl IntoView {
    // Read per render so a long-lived server never serves a stale year; the
    // browser then swaps in its local year.
    let year = use_current_year();
    let copyright = move || copyright_line(year.get());

    view! {
        <footer class="footer">
            <div class="container">
                <BrandMark class_name="footer-logo"/>
                <p>{copyright}</p>
                <div class="social-icons">
                    {SOCIAL_ICONS
                        .into_iter()
                        .map(|icon| match icon {
                            SocialIcon::Instagram => view! { <InstagramIcon size=20/> }.into_any(),
                            SocialIcon::Twitter => view! { <TwitterIcon size=20/> }.into_any(),
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
