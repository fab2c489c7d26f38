//! Boss domain: boss and projectile components.

use bevy::prelude::*;

use crate::core::Countdown;

#[derive(Component, Debug)]
pub struct Boss;

/// Aim heading tracked every tick, independent of phase.
#[derive(Component, Debug, Default)]
pub struct Launcher {
    /// Ball spawn offset from the boss origin
    pub spawn_offset: Vec2,
    pub rotation: f32,
}

/// A spawned ball projectile. Velocity is fixed at spawn from the launcher
/// heading; bullets are non-stateful after that.
#[derive(Component, Debug)]
pub struct BossBullet {
    pub velocity: Vec2,
}

/// Despawn countdown for projectiles
#[derive(Component, Debug)]
pub struct BulletLifetime(pub Countdown);

/// Free-standing emitter that launches a bullet every `interval` seconds.
#[derive(Component, Debug)]
pub struct BulletSpawner {
    pub interval: f32,
    pub timer: Countdown,
}

impl BulletSpawner {
    pub fn new(interval: f32) -> Self {
        let mut timer = Countdown::default();
        timer.start(interval);
        Self { interval, timer }
    }
}
