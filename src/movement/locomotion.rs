//! Movement domain: the player locomotion core.
//!
//! `LocomotionCore` owns the player's flag bundle (facing, grounded,
//! falling, walking, crouching, sliding, dashing, wall and ladder state) and
//! the pure policies that combine them: facing flips with their deferral
//! window, the airborne walk/run gate, moving-platform and air speed
//! composition, movement force scaling and the jump lifecycle. The
//! surrounding systems feed it contact state and intent each tick and apply
//! the resulting velocities; everything in here is plain state-machine logic
//! with no ECS access, so the invariants are unit-testable.

use bevy::prelude::*;

use crate::movement::components::{Facing, WallInteraction};
use crate::movement::resources::{JumpTuning, WallTuning};

/// Horizontal input below this magnitude counts as neutral.
pub const AXIS_DEAD_ZONE: f32 = 0.1;

/// The player's mutable state bundle.
///
/// Invariants, enforced by the mutators:
/// - `dashing` and `sliding` are never both true
/// - `crouching` and `dashing` are mutually exclusive while grounded
/// - `falling` implies `!grounded`
#[derive(Component, Debug, Clone, Default)]
pub struct LocomotionCore {
    pub facing: Facing,
    pub grounded: bool,
    pub falling: bool,
    pub walking: bool,
    pub crouching: bool,
    pub sliding: bool,
    pub dashing: bool,
    pub stuck_to_wall: bool,
    pub on_ladder: bool,
    /// Remaining jumps; refilled from the jump policy on landing
    pub jumps_left: u32,
    /// Mid wall jump, cleared when horizontal control resumes
    pub wall_jumping: bool,
    /// Recovering from a boomerang wall jump, cleared on landing
    pub boomerang_jump: bool,
    // Wall sub-flags remembered for the animation projection.
    wall_running: bool,
    wall_sliding: bool,
    wall_jump_anim: bool,
    // A flip requested mid wall-transition lands on the following tick.
    flip_again: bool,
    // Whether the player was walking at the moment of leaving the ground.
    walking_on_jump: bool,
}

impl LocomotionCore {
    // ---------------------------------------------------------------------
    // Facing
    // ---------------------------------------------------------------------

    /// Flip facing when the horizontal intent sign disagrees with the
    /// current facing, or when a deferred flip is pending.
    pub fn update_facing(&mut self, hor: f32) {
        let disagrees = (hor > AXIS_DEAD_ZONE && self.facing == Facing::Left)
            || (hor < -AXIS_DEAD_ZONE && self.facing == Facing::Right);
        if disagrees || self.flip_again {
            self.flip();
        }
    }

    /// Toggle facing. Ignored while dashing or sliding. During a transition
    /// between wall-interaction animations the flip is deferred one tick to
    /// avoid a visual pop; `update_facing` picks it up on the next call.
    pub fn flip(&mut self) {
        if self.dashing || self.sliding {
            return;
        }
        self.flip_again = false;

        let mid_wall_transition = (self.stuck_to_wall && (self.wall_running || self.wall_sliding))
            || (!self.stuck_to_wall && self.wall_jump_anim);
        if mid_wall_transition {
            self.flip_again = true;
        } else {
            self.facing = self.facing.flipped();
        }
    }

    /// A flip was requested but deferred to the next tick.
    pub fn flip_pending(&self) -> bool {
        self.flip_again
    }

    // ---------------------------------------------------------------------
    // Walking / running gate
    // ---------------------------------------------------------------------

    /// Set the walk/run toggle. While airborne the change is suppressed
    /// unless the air movement config allows switching mid-air, restores
    /// movement after wall contact, or the player was already walking when
    /// leaving the ground. No jump policy means no restriction.
    pub fn set_walking(&mut self, walk: bool, jump: Option<&JumpTuning>) {
        if !self.grounded {
            let allowed = match jump {
                None => true,
                Some(j) => j.air.reset_on_wall || j.air.walk_and_run || self.walking_on_jump,
            };
            if !allowed {
                return;
            }
        }
        self.walking = walk;
    }

    // ---------------------------------------------------------------------
    // Speed composition
    // ---------------------------------------------------------------------

    /// Combine the player's speed with a moving platform's horizontal
    /// velocity. Matching directions sum, opposing directions take the
    /// absolute difference, and neutral intent (within the dead zone, same
    /// threshold as the direction pick) matches the platform speed exactly
    /// (0 on a stationary platform, by design).
    pub fn speed_on_moving_platform(&self, speed: f32, hor: f32, platform_vx: f32) -> f32 {
        if (hor < -AXIS_DEAD_ZONE && platform_vx < 0.0)
            || (hor > AXIS_DEAD_ZONE && platform_vx > 0.0)
        {
            platform_vx.abs() + speed
        } else if (hor > AXIS_DEAD_ZONE && platform_vx < 0.0)
            || (hor < -AXIS_DEAD_ZONE && platform_vx > 0.0)
        {
            (platform_vx.abs() - speed).abs()
        } else if hor.abs() <= AXIS_DEAD_ZONE {
            platform_vx.abs()
        } else {
            speed
        }
    }

    /// Scale speed while airborne: the boomerang X factor when recovering
    /// from a boomerang wall jump, otherwise the air speed factor.
    pub fn speed_in_air(
        &self,
        speed: f32,
        jump: Option<&JumpTuning>,
        wall: Option<&WallTuning>,
    ) -> f32 {
        if self.grounded {
            return speed;
        }
        if self.boomerang_jump {
            if let Some(w) = wall {
                return speed * w.boomerang_factor_x;
            }
        }
        speed * jump.map_or(1.0, |j| j.air.speed_factor)
    }

    /// Scale the movement force by the configured air-control factor while
    /// airborne and not wall jumping.
    pub fn movement_force(
        &self,
        force: f32,
        jump: Option<&JumpTuning>,
        wall: Option<&WallTuning>,
    ) -> f32 {
        let wall_jump_active = wall.map(|w| w.wall_jump).unwrap_or(false) && self.wall_jumping;
        match jump {
            Some(j) if !self.grounded && j.air.change_factor != 1.0 && !wall_jump_active => {
                force * j.air.change_factor
            }
            _ => force,
        }
    }

    /// Vertical jump factor: the boomerang Y factor when boomerang jumping,
    /// otherwise 1.0.
    pub fn jump_factor(&self, wall: Option<&WallTuning>) -> f32 {
        if self.boomerang_jump {
            if let Some(w) = wall {
                return w.boomerang_factor_y;
            }
        }
        1.0
    }

    /// Horizontal velocity was just set while airborne; the wall jump no
    /// longer drives movement.
    pub fn on_x_velocity_set(&mut self) {
        if !self.grounded && self.wall_jumping {
            self.wall_jumping = false;
        }
    }

    // ---------------------------------------------------------------------
    // Jump lifecycle
    // ---------------------------------------------------------------------

    /// Consume one jump. Returns false (a no-op) when no jump policy is
    /// configured or no jumps remain.
    pub fn try_consume_jump(&mut self, jump: Option<&JumpTuning>) -> bool {
        if jump.is_none() || self.jumps_left == 0 {
            return false;
        }
        self.jumps_left -= 1;
        self.walking_on_jump = self.walking;
        true
    }

    /// Restore the configured maximum jump count (used on re-grounding).
    pub fn reset_jumps(&mut self, jump: Option<&JumpTuning>) {
        self.jumps_left = jump.map_or(0, |j| j.total_jumps);
    }

    /// Enter the falling state: no jumps remain and the fall animation
    /// starts (the signal layer raises `StartFalling` on this edge).
    pub fn fall(&mut self) {
        self.jumps_left = 0;
        self.falling = true;
        self.grounded = false;
    }

    // ---------------------------------------------------------------------
    // Ground contact
    // ---------------------------------------------------------------------

    /// Ground (or platform) contact gained. Returns true when this ended a
    /// fall, which is the only direction that completes a state. A crouch
    /// held through an air dash is dropped here, keeping crouching and
    /// dashing exclusive on the ground.
    pub fn land(&mut self) -> bool {
        let was_falling = self.falling;
        self.grounded = true;
        self.falling = false;
        if self.dashing {
            self.crouching = false;
        }
        self.boomerang_jump = false;
        self.wall_jumping = false;
        self.wall_jump_anim = false;
        was_falling
    }

    /// All ground contact lost. Deliberately does not raise a fall
    /// transition; only the reverse (landing while falling) signals.
    pub fn leave_ground(&mut self) {
        self.grounded = false;
    }

    // ---------------------------------------------------------------------
    // Mutual exclusion
    // ---------------------------------------------------------------------

    /// Set the dashing flag. Starting a dash is refused while sliding.
    pub fn set_dashing(&mut self, dash: bool) -> bool {
        if dash && self.sliding {
            return false;
        }
        self.dashing = dash;
        true
    }

    /// Set the sliding flag. Starting a slide is refused while dashing.
    pub fn set_sliding(&mut self, slide: bool) -> bool {
        if slide && self.dashing {
            return false;
        }
        self.sliding = slide;
        true
    }

    /// Set the crouching flag. Crouching never forces a slide; starting a
    /// crouch is refused while dashing on the ground.
    pub fn set_crouching(&mut self, crouch: bool) -> bool {
        if crouch && self.grounded && self.dashing {
            return false;
        }
        self.crouching = crouch;
        true
    }

    // ---------------------------------------------------------------------
    // Wall state
    // ---------------------------------------------------------------------

    pub fn stick_to_wall(&mut self, stuck: bool) {
        self.stuck_to_wall = stuck;
    }

    /// Remember which wall interaction is active, for the animation
    /// projection. At most one should be set; priority is resolved by
    /// `wall_interaction`.
    pub fn set_wall_state(&mut self, running: bool, sliding: bool, jumping: bool) {
        self.wall_running = running;
        self.wall_sliding = sliding;
        self.wall_jump_anim = jumping;
    }

    pub fn wall_interaction(&self) -> WallInteraction {
        if self.wall_jump_anim {
            WallInteraction::Jumping
        } else if self.wall_running {
            WallInteraction::Running
        } else if self.wall_sliding {
            WallInteraction::Sliding
        } else {
            WallInteraction::None
        }
    }

    pub fn wall_flags(&self) -> (bool, bool, bool) {
        (self.wall_running, self.wall_sliding, self.wall_jump_anim)
    }

    // ---------------------------------------------------------------------
    // Ladder
    // ---------------------------------------------------------------------

    pub fn enter_ladder(&mut self) {
        self.on_ladder = true;
        self.falling = false;
    }

    pub fn leave_ladder(&mut self) {
        self.on_ladder = false;
    }
}
