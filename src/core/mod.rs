//! Core domain: camera, timers, spawn point, death and respawn.

mod death;
mod resources;
mod shake;
mod timer;

pub use death::{DeathSequence, DeathZone, PlayerDiedEvent, PlayerRespawnedEvent};
pub use resources::RespawnPoint;
pub use shake::{CameraShakeEvent, MainCamera};
pub use timer::Countdown;

use bevy::prelude::*;

use crate::core::death::{detect_death_zone, tick_death_sequence};
use crate::core::shake::{CameraShake, apply_camera_shake, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnPoint>()
            .init_resource::<CameraShake>()
            .init_resource::<DeathSequence>()
            .add_message::<CameraShakeEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<PlayerRespawnedEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (detect_death_zone, tick_death_sequence, apply_camera_shake).chain(),
            );
    }
}
