#![cfg(not(feature = "hydrate"))]

use super::*;
use leptos::reactive::owner::Owner;
use crate::state::reveal::{RevealOutcome, TriggerPhase};
use std::cell::Cell;

fn counting_callback() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let calls = Rc::new(Cell::new(0));
    let calls_cb = Rc::clone(&calls);
    (calls, move || calls_cb.set(calls_cb.get() + 1))
}

// =============================================================
// wire_reveal
// =============================================================

#[test]
fn owner_cleanup_before_visibility_releases_trigger() {
    let owner = Owner::new();
    let (calls, on_reveal) = counting_callback();
    let (revealed, trigger) = owner.with(|| wire_reveal(RevealOptions::default(), on_reveal));
    assert!(!revealed.get_untracked());

    owner.cleanup();

    assert_eq!(trigger.borrow().phase(), TriggerPhase::Released);
    assert_eq!(trigger.borrow_mut().notify(true), RevealOutcome::Ignored);
    assert!(!trigger.borrow().is_revealed());
    assert_ne!(revealed.try_get_untracked(), Some(true));
    assert_eq!(calls.get(), 0);
}

#[test]
fn first_visibility_flips_signal_exactly_once() {
    let owner = Owner::new();
    let (calls, on_reveal) = counting_callback();
    let (revealed, trigger) = owner.with(|| wire_reveal(RevealOptions::default(), on_reveal));

    owner.with(|| {
        assert_eq!(trigger.borrow_mut().notify(false), RevealOutcome::StillHidden);
        assert!(!revealed.get_untracked());
        assert_eq!(trigger.borrow_mut().notify(true), RevealOutcome::Revealed);
        assert_eq!(trigger.borrow_mut().notify(false), RevealOutcome::Ignored);
        assert_eq!(trigger.borrow_mut().notify(true), RevealOutcome::Ignored);
    });
    assert!(revealed.get_untracked());
    assert!(!trigger.borrow().is_attached());
    assert_eq!(calls.get(), 1);

    owner.cleanup();
    assert_eq!(trigger.borrow().phase(), TriggerPhase::Fired);
    assert_eq!(calls.get(), 1);
}

#[test]
fn reveal_drives_bar_width_to_skill_level() {
    let owner = Owner::new();
    let (width, trigger) = owner.with(|| {
        let width = RwSignal::new(0.0_f64);
        let (_revealed, trigger) =
            wire_reveal(RevealOptions::default(), move || animate_width(width, WidthTween::new(80.0)));
        (width, trigger)
    });
    assert_eq!(width.get_untracked(), 0.0);

    owner.with(|| {
        trigger.borrow_mut().notify(true);
    });
    assert_eq!(width.get_untracked(), 80.0);

    owner.with(|| {
        trigger.borrow_mut().notify(false);
        trigger.borrow_mut().notify(true);
    });
    assert_eq!(width.get_untracked(), 80.0);
}

#[test]
fn fail_open_reveals_through_wired_signal() {
    let owner = Owner::new();
    let (calls, on_reveal) = counting_callback();
    let (revealed, trigger) = owner.with(|| wire_reveal(RevealOptions::default(), on_reveal));
    owner.with(|| {
        trigger.borrow_mut().fail_open();
    });
    assert!(revealed.get_untracked());
    assert_eq!(calls.get(), 1);
}

// =============================================================
// apply_scroll_offset
// =============================================================

#[test]
fn scroll_offsets_update_shared_signal() {
    let owner = Owner::new();
    let scroll = owner.with(|| RwSignal::new(ScrollState::default()));

    let mut flips = Vec::new();
    let mut seen = Vec::new();
    for offset in [0.0, 20.0, 60.0, 40.0] {
        flips.push(apply_scroll_offset(scroll, offset));
        seen.push(scroll.get_untracked().scrolled);
    }
    assert_eq!(seen, [false, false, true, false]);
    assert_eq!(flips, [false, false, true, true]);
    assert_eq!(scroll.get_untracked().last_offset, 40.0);
}

#[test]
fn scroll_boundary_holds_through_signal() {
    let owner = Owner::new();
    let scroll = owner.with(|| RwSignal::new(ScrollState::default()));
    assert!(!apply_scroll_offset(scroll, 50.0));
    assert!(!scroll.get_untracked().scrolled);
    assert!(apply_scroll_offset(scroll, 51.0));
    assert!(scroll.get_untracked().scrolled);
}
