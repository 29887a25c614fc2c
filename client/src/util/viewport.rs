//! Browser glue for scroll tracking, one-shot visibility reveals, and the
//! frame-driven fill animation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these hooks unconditionally. Under `hydrate` they attach
//! real `window` listeners, `IntersectionObserver`s, and
//! `requestAnimationFrame` loops; during SSR and native tests they are inert
//! so server markup always renders the hidden, zero-width state.
//!
//! Every registration is paired with an `on_cleanup` release so an unmounted
//! component never receives another callback.
//!
//! TRADE-OFFS
//! ==========
//! Anything the host cannot provide (no `window`, no `IntersectionObserver`,
//! a failed frame request) fails open: content is revealed and bars jump to
//! their target rather than staying hidden.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::{cell::RefCell, rc::Rc};

use leptos::prelude::*;

use crate::state::reveal::{RevealOptions, RevealTrigger};
use crate::state::scroll::ScrollState;
use crate::util::easing::WidthTween;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::state::reveal::RevealOutcome;

/// Shared handle to a widget's trigger; the host feeds it visibility changes.
pub type SharedTrigger = Rc<RefCell<RevealTrigger>>;

/// Keep `scroll` in sync with `window.scrollY` for the lifetime of the
/// calling component.
pub fn use_scroll_tracker(scroll: RwSignal<ScrollState>) {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
                return;
            };
            if apply_scroll_offset(scroll, offset) {
                log::debug!("navbar scrolled={} at offset {offset}", scroll.get_untracked().scrolled);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scroll;
    }
}

/// Record one scroll offset. Subscribers are notified only when `scrolled`
/// flips; returns whether it did.
pub fn apply_scroll_offset(scroll: RwSignal<ScrollState>, offset: f64) -> bool {
    let mut next = scroll.get_untracked();
    if next.apply(offset) {
        scroll.set(next);
        true
    } else {
        scroll.update_untracked(|s| s.last_offset = offset);
        false
    }
}

/// Attach a reveal to the element behind `node_ref`.
///
/// The returned signal turns `true` the first time the element intersects
/// the viewport and stays `true`. `on_reveal` runs exactly once at that
/// moment, or never if the component unmounts first.
pub fn use_reveal(
    node_ref: NodeRef<leptos::html::Div>,
    options: RevealOptions,
    on_reveal: impl FnMut() + 'static,
) -> ReadSignal<bool> {
    let (revealed, trigger) = wire_reveal(options, on_reveal);

    #[cfg(feature = "hydrate")]
    {
        let trigger = StoredValue::new_local(trigger);
        let observer = StoredValue::new_local(None::<VisibilityObserver>);

        Effect::new(move |_| {
            let Some(el) = node_ref.get() else {
                return;
            };
            if observer.with_value(Option::is_some) {
                return;
            }
            let trigger = trigger.get_value();
            match VisibilityObserver::observe(&el, Rc::clone(&trigger)) {
                Ok(obs) => observer.set_value(Some(obs)),
                Err(reason) => {
                    log::warn!("reveal failing open: {reason}");
                    if trigger.borrow_mut().fail_open() == RevealOutcome::Revealed {
                        log::debug!("revealed without observer");
                    }
                }
            }
        });

        // Dropping the observer disconnects it.
        on_cleanup(move || {
            observer.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node_ref, trigger);
    }

    revealed
}

/// Host-independent half of [`use_reveal`]: the revealed signal, the
/// trigger that sets it, and the owner cleanup that releases the trigger.
pub fn wire_reveal(
    options: RevealOptions,
    on_reveal: impl FnMut() + 'static,
) -> (ReadSignal<bool>, SharedTrigger) {
    let (revealed, set_revealed) = signal(false);
    let mut on_reveal = on_reveal;
    let trigger = Rc::new(RefCell::new(RevealTrigger::with_options(options, move || {
        set_revealed.set(true);
        on_reveal();
    })));

    let stored = StoredValue::new_local(Rc::clone(&trigger));
    on_cleanup(move || {
        stored.try_with_value(|t| t.borrow_mut().release());
    });

    (revealed, trigger)
}

/// Drive `width` from 0 to the tween target, one animation frame at a time.
///
/// Stops on its own once the tween settles or `width` has been disposed.
pub fn animate_width(width: RwSignal<f64>, tween: WidthTween) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            width.set(tween.target_percent);
            return;
        };
        let started_ms = js_sys::Date::now();
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let window_for_cb = window.clone();

        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
            let disposed = width.try_set(tween.width_at(elapsed_ms)).is_some();
            if disposed || tween.is_finished(elapsed_ms) || !request_frame(&window_for_cb, &holder_for_cb) {
                if !disposed {
                    width.set(tween.target_percent);
                }
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);
        *holder.borrow_mut() = Some(cb);

        if !request_frame(&window, &holder) {
            holder.borrow_mut().take();
            width.set(tween.target_percent);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        width.set(tween.target_percent);
    }
}

#[cfg(feature = "hydrate")]
fn request_frame(window: &web_sys::Window, holder: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) -> bool {
    holder
        .borrow()
        .as_ref()
        .is_some_and(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
}

#[cfg(feature = "hydrate")]
type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Owned `IntersectionObserver` registration; disconnects on drop.
#[cfg(feature = "hydrate")]
struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: IntersectionCallback,
}

#[cfg(feature = "hydrate")]
impl VisibilityObserver {
    fn observe(target: &web_sys::Element, trigger: SharedTrigger) -> Result<Self, &'static str> {
        let window = web_sys::window().ok_or("no window")?;
        if !js_sys::Reflect::has(&window, &"IntersectionObserver".into()).unwrap_or(false) {
            return Err("IntersectionObserver unsupported");
        }

        let callback: IntersectionCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let mut trigger = trigger.borrow_mut();
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    trigger.notify(entry.is_intersecting());
                }
                if !trigger.is_attached() {
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let observer = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|_| "IntersectionObserver construction failed")?;
        observer.observe(target);
        Ok(Self { observer, _callback: callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
