//! Platforms domain: attachment tracking, sink ticking and patrol motion.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::CameraShakeEvent;
use crate::movement::{Player, PlatformRider};
use crate::platforms::components::{MovingPlatform, Platform, Sinking};

/// Attach and detach the player from platforms via collision events.
///
/// Attachment is a single-owner relation: the rider holds at most one
/// platform, and both sides of the relation change in the same tick. A
/// contact only counts as "standing on" when the player is above the
/// platform's surface.
pub(crate) fn track_platform_attachment(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut shake_events: MessageWriter<CameraShakeEvent>,
    mut player_query: Query<(Entity, &Transform, &mut PlatformRider), With<Player>>,
    mut platform_query: Query<
        (&Transform, &mut Platform, Option<&mut Sinking>),
        Without<Player>,
    >,
) {
    let Ok((player_entity, player_transform, mut rider)) = player_query.single_mut() else {
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let platform_entity = match (event.collider1, event.collider2) {
            (a, b) if a == player_entity => b,
            (a, b) if b == player_entity => a,
            _ => continue,
        };
        let Ok((platform_transform, mut platform, sinking)) =
            platform_query.get_mut(platform_entity)
        else {
            continue;
        };

        // Side or underside contact is not standing on the platform.
        if player_transform.translation.y <= platform_transform.translation.y {
            continue;
        }

        rider.platform = Some(platform_entity);
        platform.player_on_platform = true;
        debug!("Attached to platform {:?} ({:?})", platform_entity, platform.kind);

        if let Some(mut sinking) = sinking {
            sinking.0.start_sink_timer();
            if let Some((amount, time)) = sinking.0.take_shake() {
                shake_events.write(CameraShakeEvent { amount, time });
            }
        }
    }

    for event in collision_end_events.read() {
        let platform_entity = match (event.collider1, event.collider2) {
            (a, b) if a == player_entity => b,
            (a, b) if b == player_entity => a,
            _ => continue,
        };
        if rider.platform != Some(platform_entity) {
            continue;
        }
        let Ok((_, mut platform, sinking)) = platform_query.get_mut(platform_entity) else {
            continue;
        };

        rider.platform = None;
        platform.player_on_platform = false;
        debug!("Detached from platform {:?}", platform_entity);

        if let Some(mut sinking) = sinking {
            sinking.0.reset_sink_timer();
        }
    }
}

/// Advance every sink timer; on expiry, release the platform body so it
/// falls freely.
pub(crate) fn tick_sinking_platforms(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Sinking)>,
) {
    let dt = time.delta_secs();

    for (entity, mut sinking) in &mut query {
        if sinking.0.tick(dt) {
            info!("Platform {:?} sinking", entity);
            commands.entity(entity).insert(RigidBody::Dynamic);
        }
    }
}

/// Patrol moving platforms between their two endpoints.
pub(crate) fn move_platforms(
    mut query: Query<(&Transform, &mut MovingPlatform, &mut LinearVelocity)>,
) {
    for (transform, mut mover, mut velocity) in &mut query {
        let position = transform.translation.truncate();
        let along = mover.extent.normalize_or_zero();
        let progress = (position - mover.origin).dot(along);

        if progress >= mover.extent.length() {
            mover.direction = -1.0;
        } else if progress <= 0.0 {
            mover.direction = 1.0;
        }

        let v = along * mover.speed * mover.direction;
        velocity.x = v.x;
        velocity.y = v.y;
    }
}
