//! One-shot viewport reveal.
//!
//! DESIGN
//! ======
//! `RevealLatch` is the flag: it can go from hidden to revealed once and
//! never back. `RevealTrigger` wraps a latch together with the callback the
//! host runs on reveal and tracks whether the trigger is still attached to
//! the host's visibility notifications.
//!
//! Lifecycle:
//! `Observing` --visible--> `Fired` (callback runs once, then dropped)
//! `Observing` --release--> `Released` (callback dropped unrun)
//! `Fired` / `Released` ignore every later notification.
//!
//! `RevealOptions::trigger_once` (the default) detaches the trigger as soon
//! as it fires. With `trigger_once: false` the host keeps the observer
//! attached after the reveal; the latch still never reverts and the callback
//! still runs once.
//!
//! The host side (`util::viewport`) forwards `IntersectionObserver` entries
//! into `notify` and disconnects as soon as `is_attached` turns false.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Boolean that can only transition from `false` to `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Set the latch. Returns `true` only for the call that flipped it.
    pub fn trip(&mut self) -> bool {
        let flipped = !self.revealed;
        self.revealed = true;
        flipped
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerPhase {
    #[default]
    Observing,
    Fired,
    Released,
}

/// Result of feeding one visibility notification to a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Element reported out of view while still observing.
    StillHidden,
    /// This notification revealed the element; the callback ran.
    Revealed,
    /// The trigger already fired or was released.
    Ignored,
}

/// Observation policy for a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealOptions {
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { trigger_once: true }
    }
}

type RevealCallback = Box<dyn FnMut()>;

/// Visibility trigger for a single widget instance; runs its callback at most once.
pub struct RevealTrigger {
    latch: RevealLatch,
    phase: TriggerPhase,
    options: RevealOptions,
    released: bool,
    on_reveal: Option<RevealCallback>,
}

impl RevealTrigger {
    pub fn new(on_reveal: impl FnMut() + 'static) -> Self {
        Self::with_options(RevealOptions::default(), on_reveal)
    }

    pub fn with_options(options: RevealOptions, on_reveal: impl FnMut() + 'static) -> Self {
        Self {
            latch: RevealLatch::default(),
            phase: TriggerPhase::Observing,
            options,
            released: false,
            on_reveal: Some(Box::new(on_reveal)),
        }
    }

    #[must_use]
    pub fn options(&self) -> RevealOptions {
        self.options
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    #[must_use]
    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    /// Whether the host should keep delivering visibility notifications.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        match self.phase {
            TriggerPhase::Observing => true,
            TriggerPhase::Fired => !self.options.trigger_once && !self.released,
            TriggerPhase::Released => false,
        }
    }

    /// Feed one intersection-state change from the host.
    pub fn notify(&mut self, visible: bool) -> RevealOutcome {
        if self.phase != TriggerPhase::Observing {
            return RevealOutcome::Ignored;
        }
        if !visible {
            return RevealOutcome::StillHidden;
        }
        self.fire()
    }

    /// Host cannot observe visibility: reveal immediately.
    pub fn fail_open(&mut self) -> RevealOutcome {
        if self.phase != TriggerPhase::Observing {
            return RevealOutcome::Ignored;
        }
        self.fire()
    }

    /// Widget unmounted. Drops the callback without running it.
    pub fn release(&mut self) {
        if self.phase == TriggerPhase::Observing {
            self.phase = TriggerPhase::Released;
        }
        self.released = true;
        self.on_reveal = None;
    }

    fn fire(&mut self) -> RevealOutcome {
        if !self.latch.trip() {
            return RevealOutcome::Ignored;
        }
        self.phase = TriggerPhase::Fired;
        if let Some(mut on_reveal) = self.on_reveal.take() {
            on_reveal();
        }
        RevealOutcome::Revealed
    }
}

impl std::fmt::Debug for RevealTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealTrigger")
            .field("latch", &self.latch)
            .field("phase", &self.phase)
            .field("options", &self.options)
            .field("has_callback", &self.on_reveal.is_some())
            .finish()
    }
}
