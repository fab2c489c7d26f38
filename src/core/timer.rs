//! Core domain: reusable countdown primitive.
//!
//! Used by sinking platforms, boss phases, dash cooldowns and death
//! sequencing. The counter clamps at zero and keeps reporting expiry on
//! every poll until it is restarted or reset.

/// A one-shot countdown.
///
/// A fresh (or `reset`) countdown is inert: not running, not expired.
/// `start` arms it; once the remaining time reaches zero, `expired` returns
/// true on every call until `reset` or `start`.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    duration: f32,
    remaining: f32,
    running: bool,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: 0.0,
            running: false,
        }
    }

    /// Arm the countdown with a fresh duration.
    ///
    /// A duration ≤ 0 is legal and expires on the first poll.
    pub fn start(&mut self, duration: f32) {
        self.duration = duration;
        self.remaining = duration.max(0.0);
        self.running = true;
    }

    /// Re-arm with the most recently configured duration.
    pub fn restart(&mut self) {
        self.start(self.duration);
    }

    /// Advance by `dt` seconds and return the remaining time (never
    /// negative). Ticking an inert countdown is a no-op.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if self.running {
            self.remaining = (self.remaining - dt).max(0.0);
        }
        self.remaining
    }

    pub fn expired(&self) -> bool {
        self.running && self.remaining <= 0.0
    }

    /// Armed and still counting down.
    pub fn active(&self) -> bool {
        self.running && self.remaining > 0.0
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Disarm the countdown. Clears any pending expiry.
    pub fn reset(&mut self) {
        self.remaining = 0.0;
        self.running = false;
    }
}
