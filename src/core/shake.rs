//! Core domain: camera setup and shake.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use rand::Rng;

use crate::core::timer::Countdown;

/// Marker for the main gameplay camera
#[derive(Component, Debug)]
pub struct MainCamera;

/// Request a camera shake of `amount` world units for `time` seconds.
#[derive(Debug, Clone, Copy)]
pub struct CameraShakeEvent {
    pub amount: f32,
    pub time: f32,
}

impl Message for CameraShakeEvent {}

#[derive(Resource, Debug, Default)]
pub struct CameraShake {
    timer: Countdown,
    amount: f32,
    offset: Vec2,
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Jitter the camera while a shake is running. The previous frame's offset
/// is removed first so jitter never accumulates into drift.
pub(crate) fn apply_camera_shake(
    time: Res<Time>,
    mut shake_events: MessageReader<CameraShakeEvent>,
    mut shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    for event in shake_events.read() {
        shake.amount = event.amount;
        shake.timer.start(event.time);
        debug!("Camera shake: amount {} for {}s", event.amount, event.time);
    }

    shake.timer.tick(time.delta_secs());

    let jitter = if shake.timer.active() {
        let mut rng = rand::rng();
        Vec2::new(
            rng.random_range(-1.0..=1.0) * shake.amount,
            rng.random_range(-1.0..=1.0) * shake.amount,
        )
    } else {
        Vec2::ZERO
    };

    for mut transform in &mut camera_query {
        transform.translation.x += jitter.x - shake.offset.x;
        transform.translation.y += jitter.y - shake.offset.y;
    }
    shake.offset = jitter;
}
