//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Author-time movement configuration.
///
/// The `jump`, `wall`, `dash` and `crouch` blocks are optional sub-policies:
/// a `None` block disables that policy and every query against it degrades
/// to a documented default (factor 1.0, jump no-ops) instead of failing.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct MovementTuning {
    pub run_speed: f32,
    pub walk_speed: f32,
    pub accel: f32,
    pub decel: f32,
    /// Radius of the ground check circle at the player's feet
    pub ground_radius: f32,
    /// Side ray length beyond the collider for wall detection
    pub wall_ray_distance: f32,
    pub ladder_climb_speed: f32,
    pub jump: Option<JumpTuning>,
    pub wall: Option<WallTuning>,
    pub dash: Option<DashTuning>,
    pub crouch: Option<CrouchTuning>,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 320.0,
            walk_speed: 180.0,
            accel: 3000.0,
            decel: 2600.0,
            ground_radius: 6.0,
            wall_ray_distance: 4.0,
            ladder_climb_speed: 140.0,
            jump: Some(JumpTuning::default()),
            wall: Some(WallTuning::default()),
            dash: Some(DashTuning::default()),
            crouch: Some(CrouchTuning::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpTuning {
    pub jump_speed: f32,
    /// Total jumps from the ground (2 = double jump)
    pub total_jumps: u32,
    pub air: AirMovement,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_speed: 680.0,
            total_jumps: 2,
            air: AirMovement::default(),
        }
    }
}

/// How much control the player keeps while airborne
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirMovement {
    /// Allow switching between walking and running mid-air
    pub walk_and_run: bool,
    /// Horizontal speed multiplier while airborne
    pub speed_factor: f32,
    /// Movement force multiplier while airborne (1.0 = full control)
    pub change_factor: f32,
    /// Restore full air movement after a wall interaction
    pub reset_on_wall: bool,
}

impl Default for AirMovement {
    fn default() -> Self {
        Self {
            walk_and_run: false,
            speed_factor: 0.9,
            change_factor: 0.75,
            reset_on_wall: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallTuning {
    /// Enable jumping off walls
    pub wall_jump: bool,
    pub jump_speed_x: f32,
    pub jump_speed_y: f32,
    /// Horizontal speed factor while recovering from a boomerang jump
    pub boomerang_factor_x: f32,
    /// Vertical jump factor for a boomerang jump
    pub boomerang_factor_y: f32,
    /// Maximum descent speed while wall sliding
    pub slide_speed: f32,
    /// Ascent speed while wall running
    pub run_speed: f32,
    /// How long a wall run lasts
    pub run_time: f32,
    /// Horizontal control lockout after a wall jump
    pub jump_lock_time: f32,
}

impl Default for WallTuning {
    fn default() -> Self {
        Self {
            wall_jump: true,
            jump_speed_x: 400.0,
            jump_speed_y: 600.0,
            boomerang_factor_x: 1.4,
            boomerang_factor_y: 1.2,
            slide_speed: 100.0,
            run_speed: 260.0,
            run_time: 0.35,
            jump_lock_time: 0.15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashTuning {
    pub speed: f32,
    pub time: f32,
    pub cooldown: f32,
    /// Dashes allowed per airtime before touching the ground again
    pub air_dash_limit: u32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            speed: 900.0,
            time: 0.16,
            cooldown: 0.35,
            air_dash_limit: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrouchTuning {
    pub crouch_speed: f32,
    pub slide_speed: f32,
    pub slide_time: f32,
    /// Minimum horizontal speed to turn a crouch into a slide
    pub slide_min_speed: f32,
}

impl Default for CrouchTuning {
    fn default() -> Self {
        Self {
            crouch_speed: 120.0,
            slide_speed: 420.0,
            slide_time: 0.4,
            slide_min_speed: 250.0,
        }
    }
}

/// Per-tick intent vector, written once by the input system and read-only
/// everywhere else.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
    /// Held to walk instead of run
    pub walk_held: bool,
}
