use super::*;
use crate::state::reveal::{RevealOutcome, RevealTrigger};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn resting_width_is_zero_until_revealed() {
    for level in [0, 1, 50, 80, 100] {
        let skill = SkillEntry::new("Skill", level);
        assert_eq!(resting_width(&skill, false), 0.0);
        assert_eq!(resting_width(&skill, true), f64::from(level));
    }
}

#[test]
fn script_writing_bar_fills_to_eighty_after_first_visibility() {
    let skill = SkillEntry::new("Script Writing", 80);
    let started = Rc::new(Cell::new(false));
    let started_cb = Rc::clone(&started);
    let mut trigger = RevealTrigger::new(move || started_cb.set(true));

    assert_eq!(trigger.notify(false), RevealOutcome::StillHidden);
    assert_eq!(resting_width(&skill, trigger.is_revealed()), 0.0);
    assert!(!started.get());

    assert_eq!(trigger.notify(true), RevealOutcome::Revealed);
    assert!(started.get());

    let tween = WidthTween::new(resting_width(&skill, trigger.is_revealed()));
    let midway = tween.width_at(750.0);
    assert!(midway > 0.0 && midway < 80.0);
    assert_eq!(tween.width_at(1500.0), 80.0);
    assert_eq!(width_style(tween.width_at(1500.0)), "80.00%");
}

#[test]
fn bar_width_does_not_regress_when_scrolled_out_and_back() {
    let skill = SkillEntry::new("Video Editing", 85);
    let mut trigger = RevealTrigger::new(|| {});
    for visible in [true, false, true, false] {
        trigger.notify(visible);
        assert_eq!(resting_width(&skill, trigger.is_revealed()), 85.0);
    }
}
