//! Movement domain: ground, platform and wall contact tracking.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::components::{
    GameLayer, MovementTimers, Player, PlatformRider, SurfaceContact, SurfaceKind, WallContact,
    WallSensor,
};
use crate::movement::locomotion::LocomotionCore;
use crate::movement::resources::MovementTuning;
use crate::platforms::Platform;

/// Resolve ground/platform contact for the player.
///
/// While attached to a platform the attachment is authoritative and the
/// ground overlap query is skipped entirely, so a platform is never double
/// detected through both paths. On ground contact the player is rotated to
/// the surface's orientation (slopes); on loss of all contact the rotation
/// resets to upright.
pub(crate) fn track_surface_contact(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &Collider,
            &mut LocomotionCore,
            &mut SurfaceContact,
            &mut MovementTimers,
            &PlatformRider,
        ),
        With<Player>,
    >,
    surface_transforms: Query<&Transform, Without<Player>>,
    platform_query: Query<(), With<Platform>>,
) {
    for (entity, mut transform, collider, mut core, mut contact, mut timers, rider) in &mut query {
        let was_grounded = core.grounded;

        if let Some(platform) = rider.platform {
            // Platform attachment is authoritative.
            contact.surface = Some(SurfaceKind::Platform);
            if let Ok(platform_transform) = surface_transforms.get(platform) {
                transform.rotation = platform_transform.rotation;
            }
            core.land();
        } else {
            let half_height = match collider.shape_scaled().as_cuboid() {
                Some(c) => c.half_extents.y,
                None => 24.0,
            };
            let feet = transform.translation.truncate() - Vec2::new(0.0, half_height);

            let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Platform])
                .with_excluded_entities([entity]);
            let hits = spatial_query.shape_intersections(
                &Collider::circle(tuning.ground_radius),
                feet,
                0.0,
                &filter,
            );

            match hits.first() {
                Some(&hit) => {
                    contact.surface = Some(if platform_query.get(hit).is_ok() {
                        SurfaceKind::Platform
                    } else {
                        SurfaceKind::Ground
                    });
                    // Align to the surface so slopes carry the player's
                    // rotation.
                    if let Ok(surface_transform) = surface_transforms.get(hit) {
                        transform.rotation = surface_transform.rotation;
                    }
                    core.land();
                }
                None => {
                    contact.surface = None;
                    transform.rotation = Quat::IDENTITY;
                    core.leave_ground();
                }
            }
        }

        // Landing refills jumps and the air dash allowance. Leaving the
        // ground raises nothing; only landing completes a state.
        if core.grounded && !was_grounded {
            core.reset_jumps(tuning.jump.as_ref());
            timers.air_dashes_used = 0;
            debug!(
                "Landed on {:?}, jumps refilled to {}",
                contact.surface, core.jumps_left
            );
        }
    }
}

/// Resolve wall contact from short side ray casts.
pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut WallSensor), With<Player>>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut sensor) in &mut query {
        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let origin = transform.translation.truncate();
        let reach = half_width + tuning.wall_ray_distance;

        let left_hit = spatial_query.cast_ray(origin, Dir2::NEG_X, reach, true, &wall_filter);
        let right_hit = spatial_query.cast_ray(origin, Dir2::X, reach, true, &wall_filter);

        sensor.contact = match (left_hit.is_some(), right_hit.is_some()) {
            (true, false) => WallContact::Left,
            (false, true) => WallContact::Right,
            _ => WallContact::None,
        };
    }
}
