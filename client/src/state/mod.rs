//! Client-side state models.
//!
//! DESIGN
//! ======
//! Both models are plain structs so they can be tested without a browser.
//! Components wrap them in signals (`scroll`) or own them per instance
//! (`reveal`).

pub mod reveal;
pub mod scroll;
