//! Boss domain: the phase state machine.
//!
//! The boss cycles Idle → AttackBall → Idle. Each phase carries its own
//! countdown/counter state; `update` advances the active phase by one tick
//! and reports whether a projectile should spawn. The state machine is a
//! plain struct so the cycle is testable without the ECS.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct BossTuning {
    pub idle_duration: f32,
    pub ball_attacks_max: u32,
    pub ball_cooldown: f32,
    pub beam_duration: f32,
    pub bullet_speed: f32,
    pub bullet_lifetime: f32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            idle_duration: 3.0,
            ball_attacks_max: 3,
            ball_cooldown: 0.5,
            beam_duration: 2.0,
            bullet_speed: 300.0,
            bullet_lifetime: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossPhase {
    Idle { elapsed: f32 },
    AttackBall { count: u32, cooldown_remaining: f32 },
    AttackBeam { elapsed: f32 },
}

impl Default for BossPhase {
    fn default() -> Self {
        BossPhase::Idle { elapsed: 0.0 }
    }
}

#[derive(Component, Debug, Default)]
pub struct BossPhaseController {
    pub phase: BossPhase,
}

impl BossPhaseController {
    /// Advance the active phase by `dt`. Returns true when a ball should
    /// spawn this tick.
    ///
    /// Within AttackBall the ordering is spawn-then-reset: the cooldown
    /// starts at zero, so the first spawn is immediate, and a zero
    /// cooldown legally spawns every tick. At most one spawn per tick.
    pub fn update(&mut self, dt: f32, tuning: &BossTuning) -> bool {
        match &mut self.phase {
            BossPhase::Idle { elapsed } => {
                if *elapsed >= tuning.idle_duration {
                    self.phase = BossPhase::AttackBall {
                        count: 0,
                        cooldown_remaining: 0.0,
                    };
                    return false;
                }
                *elapsed += dt;
                false
            }
            BossPhase::AttackBall {
                count,
                cooldown_remaining,
            } => {
                if *count >= tuning.ball_attacks_max {
                    self.phase = BossPhase::Idle { elapsed: 0.0 };
                    return false;
                }

                let mut spawned = false;
                if *cooldown_remaining <= 0.0 {
                    spawned = true;
                    *count += 1;
                    *cooldown_remaining = tuning.ball_cooldown;
                }
                *cooldown_remaining -= dt;
                spawned
            }
            BossPhase::AttackBeam { elapsed } => {
                if *elapsed >= tuning.beam_duration {
                    self.phase = BossPhase::Idle { elapsed: 0.0 };
                    return false;
                }
                *elapsed += dt;
                false
            }
        }
    }
}

/// Rotation that makes `looker` face away from `target`, matching the
/// launcher's sprite orientation; projectiles travel along the negative of
/// this heading.
pub fn aim_rotation(looker: Vec2, target: Vec2) -> f32 {
    (looker.y - target.y).atan2(looker.x - target.x)
}
