//! # client
//!
//! Leptos frontend for the Ifeka Mary portfolio page.
//!
//! The page is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). Everything that touches the DOM lives behind the `hydrate`
//! feature; the state machines it drives (`state::reveal`, `state::scroll`)
//! and the tween math (`util::easing`) are plain Rust and tested natively.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
