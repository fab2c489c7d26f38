//! Platforms domain: the sink timer state machine.
//!
//! A sinking platform waits in `Idle` until armed, counts down in `Armed`,
//! and drops into the terminal `Sunk` phase when the timer runs out. What
//! happens when the player steps off mid-countdown depends on the config
//! flags: reset discards remaining time, stop freezes it, neither lets the
//! timer keep running unattended.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkPhase {
    #[default]
    Idle,
    Armed,
    /// Terminal: once sunk, never anything else.
    Sunk,
}

/// Author-time sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Arm the timer on player contact. When false the platform arms
    /// itself once at scene start instead.
    pub sink_on_hit: bool,
    /// Freeze the timer when the player leaves, preserving remaining time.
    pub stop_timer_when_gone: bool,
    /// Discard remaining time when the player leaves; the next arm starts
    /// from the full duration again.
    pub reset_timer_when_gone: bool,
    /// Countdown duration. Zero sinks on the first tick after arming.
    pub time: f32,
    /// Camera shake on first contact; disabled unless both are > 0.
    pub shake_time: f32,
    pub shake_amount: f32,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            sink_on_hit: true,
            stop_timer_when_gone: false,
            reset_timer_when_gone: false,
            time: 1.0,
            shake_time: 1.0,
            shake_amount: 0.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SinkState {
    pub config: SinkConfig,
    phase: SinkPhase,
    remaining: f32,
    has_been_stopped: bool,
    shaken: bool,
}

impl SinkState {
    pub fn new(config: SinkConfig) -> Self {
        Self {
            config,
            phase: SinkPhase::Idle,
            remaining: 0.0,
            has_been_stopped: false,
            shaken: false,
        }
    }

    pub fn phase(&self) -> SinkPhase {
        self.phase
    }

    pub fn is_sunk(&self) -> bool {
        self.phase == SinkPhase::Sunk
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Arm the sink timer (player stepped on). No-op when already armed or
    /// sunk. The countdown restarts from the full duration on the first
    /// arm ever, or after an exit with `reset_timer_when_gone`; otherwise
    /// it resumes from the frozen remainder.
    pub fn start_sink_timer(&mut self) {
        if self.phase != SinkPhase::Idle {
            return;
        }
        if !self.has_been_stopped || self.config.reset_timer_when_gone {
            self.remaining = self.config.time;
        }
        self.phase = SinkPhase::Armed;
    }

    /// Player left the platform. Only stops the countdown when one of the
    /// stop/reset flags is configured; otherwise the timer keeps running
    /// unattended.
    pub fn reset_sink_timer(&mut self) {
        if self.phase == SinkPhase::Sunk {
            return;
        }
        if self.config.stop_timer_when_gone || self.config.reset_timer_when_gone {
            self.has_been_stopped = true;
            self.phase = SinkPhase::Idle;
        }
    }

    /// Advance the countdown. Returns true on the tick the platform sinks,
    /// so the caller can release the body exactly once.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.phase {
            SinkPhase::Sunk => false,
            SinkPhase::Idle => {
                // Timer-driven platforms arm themselves without contact.
                if !self.config.sink_on_hit {
                    self.start_sink_timer();
                }
                false
            }
            SinkPhase::Armed => {
                self.remaining -= dt;
                if self.remaining <= 0.0 {
                    self.remaining = 0.0;
                    self.phase = SinkPhase::Sunk;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// One-shot camera shake request, raised on player contact. Returns the
    /// (amount, time) pair on the first call when configured, `None` ever
    /// after or when disabled.
    pub fn take_shake(&mut self) -> Option<(f32, f32)> {
        if self.shaken || self.config.shake_amount <= 0.0 || self.config.shake_time <= 0.0 {
            return None;
        }
        self.shaken = true;
        Some((self.config.shake_amount, self.config.shake_time))
    }
}
