//! Elapsed-time tween math for the skill bar fill.
//!
//! The fill grows from 0 to the skill level over [`FILL_DURATION_MS`] using
//! a circular ease-out. The curve is monotonic on `[0, 1]` and never exceeds
//! 1, so the bar decelerates into its target without overshoot or bounce.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

pub const FILL_DURATION_MS: f64 = 1500.0;

/// Circular ease-out: `sqrt(1 - (t - 1)^2)`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn circ_out(t: f64) -> f64 {
    if t.is_nan() {
        return 0.0;
    }
    let t = t.clamp(0.0, 1.0);
    let u = t - 1.0;
    (1.0 - u * u).sqrt()
}

/// Width interpolation from zero to `target_percent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthTween {
    pub target_percent: f64,
    pub duration_ms: f64,
}

impl WidthTween {
    #[must_use]
    pub fn new(target_percent: f64) -> Self {
        Self { target_percent: target_percent.clamp(0.0, 100.0), duration_ms: FILL_DURATION_MS }
    }

    /// Width in percent after `elapsed_ms` of animation.
    #[must_use]
    pub fn width_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.target_percent;
        }
        self.target_percent * circ_out(elapsed_ms / self.duration_ms)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }
}

/// CSS `width` value for a percentage.
#[must_use]
pub fn width_style(percent: f64) -> String {
    format!("{percent:.2}%")
}
