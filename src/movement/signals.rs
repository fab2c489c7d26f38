//! Movement domain: animation-facing state projection.
//!
//! The animation layer never reads the locomotion core directly. Each tick
//! a `StateSnapshot` is taken, projected into the parameter set the
//! animator consumes, and compared against the previous tick's snapshot to
//! raise edge-triggered events. Each edge event fires exactly once per
//! crossing, never on steady state.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::locomotion::LocomotionCore;

/// Frozen per-tick view of the locomotion state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateSnapshot {
    pub grounded: bool,
    pub walking: bool,
    pub crouching: bool,
    pub sliding: bool,
    pub dashing: bool,
    pub falling: bool,
    pub stuck_to_wall: bool,
    pub on_ladder: bool,
    pub wall_running: bool,
    pub wall_sliding: bool,
    pub wall_jumping: bool,
    pub horizontal_intent: f32,
    pub x_speed: f32,
    pub y_speed: f32,
}

impl StateSnapshot {
    pub fn capture(core: &LocomotionCore, horizontal_intent: f32, velocity: Vec2) -> Self {
        let (wall_running, wall_sliding, wall_jumping) = core.wall_flags();
        Self {
            grounded: core.grounded,
            walking: core.walking,
            crouching: core.crouching,
            sliding: core.sliding,
            dashing: core.dashing,
            falling: core.falling,
            stuck_to_wall: core.stuck_to_wall,
            on_ladder: core.on_ladder,
            wall_running,
            wall_sliding,
            wall_jumping,
            horizontal_intent,
            x_speed: velocity.x,
            y_speed: velocity.y,
        }
    }

    fn any_wall_state(&self) -> bool {
        self.wall_running || self.wall_sliding || self.wall_jumping
    }
}

/// Named parameters handed to the animation collaborator every tick.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimParams {
    pub grounded: bool,
    pub walking: bool,
    pub crouching: bool,
    pub sliding: bool,
    pub dashing: bool,
    pub falling: bool,
    pub wall: bool,
    pub on_ladder: bool,
    pub wall_running: bool,
    pub wall_sliding: bool,
    pub wall_jumping: bool,
    pub horizontal: f32,
    pub x_speed: f32,
    pub y_speed: f32,
}

/// One-shot animation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimTrigger {
    StateComplete,
    StartDash,
    StartWallRun,
    StartSlide,
    TriggerLadder,
    StartFalling,
}

#[derive(Debug)]
pub struct AnimTriggerEvent {
    pub trigger: AnimTrigger,
}

impl Message for AnimTriggerEvent {}

/// Previous tick's snapshot, kept for edge detection.
#[derive(Component, Debug, Default)]
pub struct PreviousSnapshot(pub StateSnapshot);

/// Pure projection from a snapshot to the animator parameter set.
pub fn derive_params(cur: &StateSnapshot) -> AnimParams {
    AnimParams {
        grounded: cur.grounded,
        walking: cur.walking,
        crouching: cur.crouching,
        sliding: cur.sliding,
        dashing: cur.dashing,
        falling: cur.falling,
        wall: cur.stuck_to_wall,
        on_ladder: cur.on_ladder,
        wall_running: cur.wall_running,
        wall_sliding: cur.wall_sliding,
        wall_jumping: cur.wall_jumping,
        horizontal: cur.horizontal_intent.abs(),
        x_speed: cur.x_speed.abs(),
        y_speed: cur.y_speed,
    }
}

/// Derive the edge-triggered events for this tick.
///
/// `StateComplete` fires when a dash ends, when the last active wall
/// interaction ends, or on ground contact while previously falling.
pub fn derive_triggers(prev: &StateSnapshot, cur: &StateSnapshot) -> Vec<AnimTrigger> {
    let mut triggers = Vec::new();

    if !prev.dashing && cur.dashing {
        triggers.push(AnimTrigger::StartDash);
    }
    if prev.dashing && !cur.dashing {
        triggers.push(AnimTrigger::StateComplete);
    }
    if prev.any_wall_state() && !cur.any_wall_state() {
        triggers.push(AnimTrigger::StateComplete);
    }
    if prev.falling && !cur.falling && cur.grounded {
        triggers.push(AnimTrigger::StateComplete);
    }
    if !prev.wall_running && cur.wall_running {
        triggers.push(AnimTrigger::StartWallRun);
    }
    if !prev.sliding && cur.sliding {
        triggers.push(AnimTrigger::StartSlide);
    }
    if !prev.on_ladder && cur.on_ladder {
        triggers.push(AnimTrigger::TriggerLadder);
    }
    if !prev.falling && cur.falling {
        triggers.push(AnimTrigger::StartFalling);
    }

    triggers
}
