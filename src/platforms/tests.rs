//! Platforms domain: unit tests for the sink state machine.

use super::sink::{SinkConfig, SinkPhase, SinkState};

fn config(sink_on_hit: bool, stop: bool, reset: bool, time: f32) -> SinkConfig {
    SinkConfig {
        sink_on_hit,
        stop_timer_when_gone: stop,
        reset_timer_when_gone: reset,
        time,
        shake_time: 0.0,
        shake_amount: 0.0,
    }
}

#[test]
fn test_sinks_after_duration() {
    let mut state = SinkState::new(config(true, false, false, 2.0));
    state.start_sink_timer();
    assert_eq!(state.phase(), SinkPhase::Armed);
    assert!(state.tick(2.1));
    assert_eq!(state.phase(), SinkPhase::Sunk);
}

#[test]
fn test_sunk_is_absorbing() {
    let mut state = SinkState::new(config(true, true, true, 0.5));
    state.start_sink_timer();
    state.tick(1.0);
    assert!(state.is_sunk());

    // Every transition is a no-op after sinking.
    state.start_sink_timer();
    assert!(state.is_sunk());
    state.reset_sink_timer();
    assert!(state.is_sunk());
    assert!(!state.tick(1.0));
    assert_eq!(state.phase(), SinkPhase::Sunk);
}

#[test]
fn test_double_arm_does_not_reset_remaining() {
    let mut state = SinkState::new(config(true, false, false, 2.0));
    state.start_sink_timer();
    state.tick(1.5);
    state.start_sink_timer();
    assert!((state.remaining() - 0.5).abs() < 1e-6);
}

#[test]
fn test_stop_when_gone_preserves_remaining() {
    let mut state = SinkState::new(config(true, true, false, 2.0));
    state.start_sink_timer();
    state.tick(1.5);

    state.reset_sink_timer();
    assert_eq!(state.phase(), SinkPhase::Idle);

    // Frozen timer: no countdown while idle.
    assert!(!state.tick(10.0));
    assert_eq!(state.phase(), SinkPhase::Idle);

    // Re-arm resumes from the frozen remainder.
    state.start_sink_timer();
    assert!((state.remaining() - 0.5).abs() < 1e-6);
    assert!(state.tick(0.6));
    assert!(state.is_sunk());
}

#[test]
fn test_reset_when_gone_discards_remaining() {
    let mut state = SinkState::new(config(true, false, true, 2.0));
    state.start_sink_timer();
    state.tick(1.5);

    state.reset_sink_timer();
    state.start_sink_timer();
    assert!((state.remaining() - 2.0).abs() < 1e-6);
}

#[test]
fn test_no_flags_keeps_timer_running_unattended() {
    let mut state = SinkState::new(config(true, false, false, 2.0));
    state.start_sink_timer();
    state.reset_sink_timer();
    // Player is gone but the countdown keeps going.
    assert_eq!(state.phase(), SinkPhase::Armed);
    assert!(state.tick(2.5));
    assert!(state.is_sunk());
}

#[test]
fn test_auto_arms_without_contact_when_configured() {
    let mut state = SinkState::new(config(false, false, false, 1.0));
    assert_eq!(state.phase(), SinkPhase::Idle);
    assert!(!state.tick(0.1));
    assert_eq!(state.phase(), SinkPhase::Armed);
    assert!(state.tick(1.0));
    assert!(state.is_sunk());
}

#[test]
fn test_zero_duration_sinks_on_first_armed_tick() {
    let mut state = SinkState::new(config(true, false, false, 0.0));
    state.start_sink_timer();
    assert!(state.tick(0.016));
    assert!(state.is_sunk());
}

#[test]
fn test_shake_fires_at_most_once_and_only_when_configured() {
    let mut config = config(true, false, false, 1.0);
    config.shake_amount = 0.2;
    config.shake_time = 0.8;
    let mut state = SinkState::new(config);

    assert_eq!(state.take_shake(), Some((0.2, 0.8)));
    assert_eq!(state.take_shake(), None);

    let mut silent = SinkState::new(super::sink::SinkConfig {
        shake_amount: 0.0,
        shake_time: 1.0,
        ..Default::default()
    });
    assert_eq!(silent.take_shake(), None);
}
