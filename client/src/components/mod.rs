//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections are mostly static markup over `crate::content`. `Navbar` reads
//! the shared scroll state; `About` and `SkillBar` own one-shot reveals.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod portfolio;
pub mod skill_bar;
pub mod skills;
