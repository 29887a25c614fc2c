//! Page scroll state consumed by the navbar.
//!
//! `scrolled` is true once the page is strictly more than
//! [`SCROLL_THRESHOLD`] pixels from the top. The browser listener that feeds
//! this lives in `util::viewport::use_scroll_tracker`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const SCROLL_THRESHOLD: f64 = 50.0;

#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scrolled: bool,
    pub last_offset: f64,
}

impl ScrollState {
    /// Record a scroll event. Returns `true` when `scrolled` flipped.
    pub fn apply(&mut self, offset: f64) -> bool {
        self.last_offset = offset;
        let next = is_scrolled(offset);
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }

    /// Class list for the `<nav>` element.
    #[must_use]
    pub fn navbar_class(&self) -> &'static str {
        if self.scrolled { "navbar scrolled" } else { "navbar" }
    }
}
