//! Labelled skill progress bar with a one-shot entrance fill.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each bar owns its own reveal trigger. Until the bar first scrolls into
//! view its fill is `0%`; on first visibility it tweens to `level%` and then
//! stays there for the rest of the page session, even if scrolled away.

#[cfg(test)]
#[path = "skill_bar_test.rs"]
mod skill_bar_test;

use leptos::prelude::*;

use crate::content::SkillEntry;
use crate::state::reveal::RevealOptions;
use crate::util::easing::{WidthTween, width_style};
use crate::util::viewport::{animate_width, use_reveal};

/// Settled fill width in percent for a bar in the given reveal state.
#[must_use]
pub fn resting_width(skill: &SkillEntry, revealed: bool) -> f64 {
    if revealed { f64::from(skill.level()) } else { 0.0 }
}

#[component]
pub fn SkillBar(skill: SkillEntry) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let width = RwSignal::new(resting_width(&skill, false));
    let tween = WidthTween::new(resting_width(&skill, true));
    let revealed = use_reveal(node_ref, RevealOptions::default(), move || {
        animate_width(width, tween);
    });

    view! {
        <div class="skill-item" node_ref=node_ref data-revealed=move || revealed.get().to_string()>
            <div class="skill-info">
                <span>{skill.name}</span>
                <span>{skill.level_label()}</span>
            </div>
            <div
                class="progress-bg"
                role="progressbar"
                aria-label=skill.name
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=skill.level().to_string()
            >
                <div class="progress-fill" style:width=move || width_style(width.get())></div>
            </div>
        </div>
    }
}
