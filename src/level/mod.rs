//! Level domain: static test level layout.
//!
//! One hand-built scene exercising every mechanic: ground, walls for wall
//! jumps, the three platform kinds, a ladder, a death pit and the boss.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::boss::{Boss, BossPhaseController, BulletSpawner, Launcher};
use crate::core::{DeathZone, RespawnPoint};
use crate::movement::{GameLayer, Ground, LadderZone, Wall};
use crate::platforms::{MovingPlatform, Platform, PlatformKind, SinkConfig, SinkState, Sinking};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_level);
    }
}

fn setup_level(mut commands: Commands, mut respawn: ResMut<RespawnPoint>) {
    respawn.position = Vec2::new(-200.0, -100.0);

    let ground_color = Color::srgb(0.35, 0.3, 0.25);
    let wall_color = Color::srgb(0.3, 0.3, 0.35);
    let platform_color = Color::srgb(0.5, 0.45, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let platform_layers = CollisionLayers::new(GameLayer::Platform, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    // Main floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(900.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(-150.0, -160.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(900.0, 40.0),
        ground_layers,
    ));

    // Far floor across the pit
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(400.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(600.0, -160.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(400.0, 40.0),
        ground_layers,
    ));

    // Left boundary wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 600.0)),
            ..default()
        },
        Transform::from_xyz(-620.0, 120.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 600.0),
        wall_layers,
    ));

    // Mid wall for wall runs and boomerang jumps
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 300.0)),
            ..default()
        },
        Transform::from_xyz(120.0, 10.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 300.0),
        wall_layers,
    ));

    // Static platform
    commands.spawn((
        Platform::new(PlatformKind::Normal),
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(120.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(-420.0, -60.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(120.0, 16.0),
        platform_layers,
        CollisionEventsEnabled,
    ));

    // Horizontal patrol platform
    let patrol_origin = Vec2::new(-260.0, 20.0);
    commands.spawn((
        Platform::new(PlatformKind::Moving),
        MovingPlatform::new(patrol_origin, Vec2::new(220.0, 0.0), 60.0),
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(120.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(patrol_origin.x, patrol_origin.y, 0.0),
        RigidBody::Kinematic,
        Collider::rectangle(120.0, 16.0),
        LinearVelocity::default(),
        platform_layers,
        CollisionEventsEnabled,
    ));

    // Sinking platform over the pit
    commands.spawn((
        Platform::new(PlatformKind::Sinking),
        Sinking(SinkState::new(SinkConfig {
            time: 1.5,
            stop_timer_when_gone: true,
            ..SinkConfig::default()
        })),
        Sprite {
            color: Color::srgb(0.55, 0.35, 0.3),
            custom_size: Some(Vec2::new(100.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(370.0, -100.0, 0.0),
        RigidBody::Kinematic,
        Collider::rectangle(100.0, 16.0),
        LinearVelocity::default(),
        platform_layers,
        CollisionEventsEnabled,
    ));

    // Ladder against the mid wall
    commands.spawn((
        LadderZone,
        Sprite {
            color: Color::srgba(0.6, 0.6, 0.2, 0.5),
            custom_size: Some(Vec2::new(24.0, 240.0)),
            ..default()
        },
        Transform::from_xyz(88.0, -20.0, -0.1),
        Collider::rectangle(24.0, 240.0),
        Sensor,
        sensor_layers,
        CollisionEventsEnabled,
    ));

    // Death pit between the two floors
    commands.spawn((
        DeathZone,
        Transform::from_xyz(370.0, -320.0, 0.0),
        Collider::rectangle(1200.0, 40.0),
        Sensor,
        sensor_layers,
        CollisionEventsEnabled,
    ));

    // Boss on the far floor
    commands.spawn((
        Boss,
        Launcher {
            spawn_offset: Vec2::new(0.0, 20.0),
            ..Launcher::default()
        },
        BossPhaseController::default(),
        Sprite {
            color: Color::srgb(0.7, 0.2, 0.2),
            custom_size: Some(Vec2::new(60.0, 80.0)),
            ..default()
        },
        Transform::from_xyz(650.0, -100.0, 0.0),
    ));

    // Fixed-interval emitter above the mid wall
    commands.spawn((
        BulletSpawner::new(2.5),
        Transform::from_xyz(120.0, 180.0, 0.0),
    ));

    info!("Level spawned, respawn at {:?}", respawn.position);
}
