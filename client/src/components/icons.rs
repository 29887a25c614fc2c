//! Inline SVG line icons (24x24 grid, stroked with `currentColor`).

use leptos::prelude::*;

/// Brand accent used for contact and card glyphs.
pub const ACCENT: &str = "#6C2BD9";

#[component]
fn IconFrame(size: u32, #[prop(optional)] color: Option<&'static str>, children: Children) -> impl IntoView {
    view! {
        <svg
            class="icon"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke=color.unwrap_or("currentColor")
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn MailIcon(#[prop(default = 24)] size: u32, #[prop(optional)] color: Option<&'static str>) -> impl IntoView {
    view! {
        <IconFrame size=size color=color.unwrap_or("currentColor")>
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>
        </IconFrame>
    }
}

#[component]
pub fn PhoneIcon(#[prop(default = 24)] size: u32, #[prop(optional)] color: Option<&'static str>) -> impl IntoView {
    view! {
        <IconFrame size=size color=color.unwrap_or("currentColor")>
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>
        </IconFrame>
    }
}

#[component]
pub fn ExternalLinkIcon(#[prop(default = 24)] size: u32, #[prop(optional)] color: Option<&'static str>) -> impl IntoView {
    view! {
        <IconFrame size=size color=color.unwrap_or("currentColor")>
            <path d="M15 3h6v6"/>
            <path d="M10 14 21 3"/>
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
        </IconFrame>
    }
}

#[component]
pub fn VideoIcon(#[prop(default = 24)] size: u32, #[prop(optional)] color: Option<&'static str>) -> impl IntoView {
    view! {
        <IconFrame size=size color=color.unwrap_or("currentColor")>
            <path d="m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5"/>
            <rect x="2" y="6" width="14" height="12" rx="2"/>
        </IconFrame>
    }
}

#[component]
pub fn ChevronDownIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <IconFrame size=size>
            <path d="m6 9 6 6 6-6"/>
        </IconFrame>
    }
}

#[component]
pub fn InstagramIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <IconFrame size=size>
            <rect x="2" y="2" width="20" height="20" rx="5" ry="5"/>
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>
            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>
        </IconFrame>
    }
}

#[component]
pub fn TwitterIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <IconFrame size=size>
            <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>
        </IconFrame>
    }
}
