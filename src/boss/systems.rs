//! Boss domain: phase updates, aim tracking and projectile systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::boss::components::{Boss, BossBullet, BulletLifetime, BulletSpawner, Launcher};
use crate::boss::phase::{BossPhaseController, BossTuning, aim_rotation};
use crate::core::Countdown;
use crate::movement::{GameLayer, Player};

/// Track the player with the launcher every tick, whatever the phase.
pub(crate) fn aim_launcher(
    player_query: Query<&Transform, With<Player>>,
    mut boss_query: Query<(&Transform, &mut Launcher), (With<Boss>, Without<Player>)>,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut launcher) in &mut boss_query {
        launcher.rotation = aim_rotation(transform.translation.truncate(), player_pos);
    }
}

/// Advance the phase machine and spawn a ball on request.
pub(crate) fn update_boss_phase(
    time: Res<Time>,
    tuning: Res<BossTuning>,
    mut commands: Commands,
    mut boss_query: Query<(&Transform, &Launcher, &mut BossPhaseController), With<Boss>>,
) {
    let dt = time.delta_secs();

    for (transform, launcher, mut controller) in &mut boss_query {
        if controller.update(dt, &tuning) {
            // The launcher heading points away from the target; balls fly
            // along its negative.
            let direction = -Vec2::new(launcher.rotation.cos(), launcher.rotation.sin());
            let spawn_pos = transform.translation.truncate() + launcher.spawn_offset;
            spawn_bullet(&mut commands, spawn_pos, direction * tuning.bullet_speed, &tuning);
            debug!("Boss spawned ball, phase now {:?}", controller.phase);
        }
    }
}

/// Emit bullets from free-standing interval spawners.
pub(crate) fn tick_bullet_spawners(
    time: Res<Time>,
    tuning: Res<BossTuning>,
    mut commands: Commands,
    mut query: Query<(&Transform, &mut BulletSpawner)>,
) {
    let dt = time.delta_secs();

    for (transform, mut spawner) in &mut query {
        spawner.timer.tick(dt);
        if spawner.timer.expired() {
            let interval = spawner.interval;
            spawner.timer.start(interval);
            spawn_bullet(
                &mut commands,
                transform.translation.truncate(),
                Vec2::NEG_X * tuning.bullet_speed,
                &tuning,
            );
        }
    }
}

pub(crate) fn move_bullets(
    time: Res<Time>,
    mut query: Query<(&BossBullet, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (bullet, mut transform) in &mut query {
        transform.translation.x += bullet.velocity.x * dt;
        transform.translation.y += bullet.velocity.y * dt;
    }
}

pub(crate) fn despawn_expired_bullets(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut BulletLifetime), With<BossBullet>>,
) {
    let dt = time.delta_secs();

    for (entity, mut lifetime) in &mut query {
        lifetime.0.tick(dt);
        if lifetime.0.expired() {
            commands.entity(entity).despawn();
        }
    }
}

fn spawn_bullet(commands: &mut Commands, position: Vec2, velocity: Vec2, tuning: &BossTuning) {
    let mut lifetime = Countdown::default();
    lifetime.start(tuning.bullet_lifetime);

    commands.spawn((
        BossBullet { velocity },
        BulletLifetime(lifetime),
        Sprite {
            color: Color::srgb(1.0, 0.4, 0.2),
            custom_size: Some(Vec2::splat(10.0)),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        Collider::circle(5.0),
        Sensor,
        CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
    ));
}
