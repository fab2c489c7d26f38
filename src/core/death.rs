//! Core domain: death zones and respawn sequencing.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::resources::RespawnPoint;
use crate::core::timer::Countdown;
use crate::movement::{LocomotionCore, Player, PlatformRider};

/// Sensor zone that kills the player on contact
#[derive(Component, Debug)]
pub struct DeathZone;

#[derive(Debug)]
pub struct PlayerDiedEvent;

impl Message for PlayerDiedEvent {}

#[derive(Debug)]
pub struct PlayerRespawnedEvent;

impl Message for PlayerRespawnedEvent {}

/// Delay between dying and respawning
#[derive(Resource, Debug, Default)]
pub struct DeathSequence {
    pub timer: Countdown,
    pub active: bool,
}

const RESPAWN_DELAY: f32 = 1.0;

/// Start the death sequence when the player touches a death zone. The core
/// switches to falling so the fall animation plays out during the delay.
pub(crate) fn detect_death_zone(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
    mut sequence: ResMut<DeathSequence>,
    zone_query: Query<(), With<DeathZone>>,
    mut player_query: Query<&mut LocomotionCore, With<Player>>,
) {
    for event in collision_start_events.read() {
        let involved = zone_query.get(event.collider1).is_ok()
            || zone_query.get(event.collider2).is_ok();
        if !involved || sequence.active {
            continue;
        }
        for other in [event.collider1, event.collider2] {
            if let Ok(mut core) = player_query.get_mut(other) {
                core.fall();
                sequence.active = true;
                sequence.timer.start(RESPAWN_DELAY);
                died_events.write(PlayerDiedEvent);
                info!("Player died, respawning in {RESPAWN_DELAY}s");
            }
        }
    }
}

/// Run the respawn delay and put the player back at the spawn point.
pub(crate) fn tick_death_sequence(
    time: Res<Time>,
    respawn: Res<RespawnPoint>,
    mut sequence: ResMut<DeathSequence>,
    mut respawned_events: MessageWriter<PlayerRespawnedEvent>,
    mut player_query: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut LocomotionCore,
            &mut PlatformRider,
        ),
        With<Player>,
    >,
) {
    if !sequence.active {
        return;
    }
    sequence.timer.tick(time.delta_secs());
    if !sequence.timer.expired() {
        return;
    }

    for (mut transform, mut velocity, mut core, mut rider) in &mut player_query {
        transform.translation.x = respawn.position.x;
        transform.translation.y = respawn.position.y;
        transform.rotation = Quat::IDENTITY;
        velocity.x = 0.0;
        velocity.y = 0.0;
        *core = LocomotionCore::default();
        rider.platform = None;
    }

    sequence.active = false;
    sequence.timer.reset();
    respawned_events.write(PlayerRespawnedEvent);
    info!("Player respawned at {:?}", respawn.position);
}
