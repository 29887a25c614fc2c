use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn counting_trigger() -> (RevealTrigger, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let calls_cb = Rc::clone(&calls);
    let trigger = RevealTrigger::new(move || calls_cb.set(calls_cb.get() + 1));
    (trigger, calls)
}

// =============================================================
// RevealLatch
// =============================================================

#[test]
fn latch_starts_hidden() {
    assert!(!RevealLatch::default().is_revealed());
}

#[test]
fn latch_trip_reports_only_first_flip() {
    let mut latch = RevealLatch::default();
    assert!(latch.trip());
    assert!(!latch.trip());
    assert!(latch.is_revealed());
}

// =============================================================
// RevealTrigger
// =============================================================

#[test]
fn trigger_stays_hidden_while_not_visible() {
    let (mut trigger, calls) = counting_trigger();
    assert_eq!(trigger.notify(false), RevealOutcome::StillHidden);
    assert_eq!(trigger.notify(false), RevealOutcome::StillHidden);
    assert!(!trigger.is_revealed());
    assert!(trigger.is_attached());
    assert_eq!(calls.get(), 0);
}

#[test]
fn trigger_fires_once_on_first_visibility_and_detaches() {
    let (mut trigger, calls) = counting_trigger();
    assert_eq!(trigger.notify(true), RevealOutcome::Revealed);
    assert!(trigger.is_revealed());
    assert_eq!(trigger.phase(), TriggerPhase::Fired);
    assert!(!trigger.is_attached());
    assert_eq!(calls.get(), 1);
}

#[test]
fn visibility_toggling_reveals_only_on_first_true() {
    let (mut trigger, calls) = counting_trigger();
    let outcomes = [true, false, true].map(|visible| trigger.notify(visible));
    assert_eq!(outcomes, [RevealOutcome::Revealed, RevealOutcome::Ignored, RevealOutcome::Ignored]);
    assert!(trigger.is_revealed());
    assert_eq!(calls.get(), 1);
}

#[test]
fn revealed_never_regresses_after_scrolling_away() {
    let (mut trigger, _calls) = counting_trigger();
    trigger.notify(false);
    trigger.notify(true);
    for visible in [false, false, true, false] {
        trigger.notify(visible);
        assert!(trigger.is_revealed());
    }
}

#[test]
fn release_before_visibility_never_runs_callback() {
    let (mut trigger, calls) = counting_trigger();
    trigger.notify(false);
    trigger.release();
    assert_eq!(trigger.phase(), TriggerPhase::Released);
    assert_eq!(trigger.notify(true), RevealOutcome::Ignored);
    assert_eq!(trigger.fail_open(), RevealOutcome::Ignored);
    assert!(!trigger.is_revealed());
    assert_eq!(calls.get(), 0);
}

#[test]
fn release_after_fire_keeps_revealed_state() {
    let (mut trigger, calls) = counting_trigger();
    trigger.notify(true);
    trigger.release();
    assert_eq!(trigger.phase(), TriggerPhase::Fired);
    assert!(trigger.is_revealed());
    assert_eq!(calls.get(), 1);
}

#[test]
fn fail_open_reveals_without_visibility_event() {
    let (mut trigger, calls) = counting_trigger();
    assert_eq!(trigger.fail_open(), RevealOutcome::Revealed);
    assert!(trigger.is_revealed());
    assert_eq!(trigger.notify(true), RevealOutcome::Ignored);
    assert_eq!(calls.get(), 1);
}

#[test]
fn dropping_unfired_trigger_does_not_run_callback() {
    let (trigger, calls) = counting_trigger();
    drop(trigger);
    assert_eq!(calls.get(), 0);
}

// =============================================================
// RevealOptions
// =============================================================

#[test]
fn options_default_to_trigger_once() {
    assert!(RevealOptions::default().trigger_once);
    let (trigger, _calls) = counting_trigger();
    assert_eq!(trigger.options(), RevealOptions { trigger_once: true });
}

#[test]
fn repeating_trigger_stays_attached_but_fires_once() {
    let calls = Rc::new(Cell::new(0));
    let calls_cb = Rc::clone(&calls);
    let mut trigger =
        RevealTrigger::with_options(RevealOptions { trigger_once: false }, move || calls_cb.set(calls_cb.get() + 1));

    assert_eq!(trigger.notify(true), RevealOutcome::Revealed);
    assert!(trigger.is_attached());
    assert_eq!(trigger.notify(false), RevealOutcome::Ignored);
    assert_eq!(trigger.notify(true), RevealOutcome::Ignored);
    assert!(trigger.is_revealed());
    assert_eq!(calls.get(), 1);

    trigger.release();
    assert!(!trigger.is_attached());
    assert!(trigger.is_revealed());
}
