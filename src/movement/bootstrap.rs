//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::RespawnPoint;
use crate::movement::components::{
    GameLayer, HitboxShape, LadderProximity, MovementTimers, Player, PlatformRider, SurfaceContact,
    WallSensor,
};
use crate::movement::locomotion::LocomotionCore;
use crate::movement::resources::MovementTuning;
use crate::movement::signals::{AnimParams, PreviousSnapshot};

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    respawn: Res<RespawnPoint>,
) {
    let size = HitboxShape::Default.size();
    let mut core = LocomotionCore::default();
    core.reset_jumps(tuning.jump.as_ref());
    core.grounded = true;

    info!("Spawning player at {:?}", respawn.position);

    commands.spawn((
        // Identity & state
        (
            Player,
            core,
            SurfaceContact::default(),
            PlatformRider::default(),
            WallSensor::default(),
            LadderProximity::default(),
            MovementTimers::default(),
            HitboxShape::Default,
        ),
        // Animation projection
        (AnimParams::default(), PreviousSnapshot::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(respawn.position.x, respawn.position.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Platform,
                    GameLayer::Enemy,
                    GameLayer::Sensor,
                ],
            ),
        ),
    ));
}
