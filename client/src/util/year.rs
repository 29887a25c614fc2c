//! Current calendar year for the footer.
//!
//! Read at render time on both sides: the server uses UTC wall-clock time,
//! the browser uses the local `Date`. Around New Year the two can disagree,
//! so the footer re-reads the year in the browser once it has hydrated and
//! shows the visitor's local year.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

use leptos::prelude::*;

#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // Full years fit in i32 for any realistic clock.
        #[allow(clippy::cast_possible_wrap)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Year signal seeded at render time and refreshed from the browser clock
/// after hydration.
pub fn use_current_year() -> ReadSignal<i32> {
    let (year, set_year) = signal(current_year());
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| set_year.set(current_year()));
    #[cfg(not(feature = "hydrate"))]
    let _ = set_year;
    year
}
