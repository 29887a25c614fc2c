//! Expertise section: one `SkillBar` per seeded skill.

use leptos::prelude::*;

use crate::components::skill_bar::SkillBar;
use crate::content::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title">"Expertise"</h2>
                <div class="skills-grid">
                    {SKILLS.into_iter().map(|skill| view! { <SkillBar skill=skill/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
