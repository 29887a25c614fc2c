//! Contact details and the (unwired) contact form.
//!
//! TRADE-OFFS
//! ==========
//! No form backend exists yet. Submitting validates through the browser's
//! `required` checks and is then swallowed so the page does not reload.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::icons::{ACCENT, MailIcon, PhoneIcon};
use crate::content::{CONTACT, CONTACT_FIELDS, CONTACT_SUBMIT_LABEL, ContactField, FieldKind};

/// HTML `type` attribute for single-line fields; `None` for text areas.
#[must_use]
pub fn input_type(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Text => Some("text"),
        FieldKind::Email => Some("email"),
        FieldKind::Multiline(_) => None,
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        log::debug!("contact form submitted; no backend configured");
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <div class="contact-wrapper">
                    <div class="contact-info">
                        <div class="info-item">
                            <MailIcon color=ACCENT/>
                            <p>{CONTACT.email}</p>
                        </div>
                        <div class="info-item">
                            <PhoneIcon color=ACCENT/>
                            <p>{CONTACT.phone}</p>
                        </div>
                    </div>
                    <form class="contact-form" on:submit=on_submit>
                        {CONTACT_FIELDS.into_iter().map(field_view).collect_view()}
                        <button type="submit" class="submit-btn">{CONTACT_SUBMIT_LABEL}</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

fn field_view(field: ContactField) -> AnyView {
    match field.kind {
        FieldKind::Multiline(rows) => view! {
            <textarea name=field.name placeholder=field.placeholder rows=rows.to_string() required=field.required></textarea>
        }
        .into_any(),
        kind => view! {
            <input type=input_type(kind).unwrap_or("text") name=field.name placeholder=field.placeholder required=field.required/>
        }
        .into_any(),
    }
}
