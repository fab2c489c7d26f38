//! Boss domain: phase state machine, projectiles and plugin wiring.

mod components;
mod phase;
mod systems;


pub use components::{Boss, BossBullet, BulletLifetime, BulletSpawner, Launcher};
pub use phase::{BossPhase, BossPhaseController, BossTuning, aim_rotation};

use bevy::prelude::*;

use crate::boss::systems::{
    aim_launcher, despawn_expired_bullets, move_bullets, tick_bullet_spawners, update_boss_phase,
};

pub struct BossPlugin;

impl Plugin for BossPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BossTuning>().add_systems(
            Update,
            (
                aim_launcher,
                update_boss_phase,
                tick_bullet_spawners,
                move_bullets,
                despawn_expired_bullets,
            )
                .chain(),
        );
    }
}
