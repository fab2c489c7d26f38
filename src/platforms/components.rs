//! Platforms domain: platform components.

use bevy::prelude::*;

use crate::platforms::sink::SinkState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformKind {
    #[default]
    Normal,
    Moving,
    Sinking,
}

/// A surface the player can stand on and attach to.
#[derive(Component, Debug)]
pub struct Platform {
    pub kind: PlatformKind,
    pub player_on_platform: bool,
}

impl Platform {
    pub fn new(kind: PlatformKind) -> Self {
        Self {
            kind,
            player_on_platform: false,
        }
    }
}

/// Sink state machine, only on platforms with `PlatformKind::Sinking`.
#[derive(Component, Debug)]
pub struct Sinking(pub SinkState);

/// Kinematic patrol between two endpoints at constant speed.
#[derive(Component, Debug)]
pub struct MovingPlatform {
    pub origin: Vec2,
    /// Offset from origin to the far endpoint
    pub extent: Vec2,
    pub speed: f32,
    /// +1 toward the far endpoint, -1 back toward origin
    pub direction: f32,
}

impl MovingPlatform {
    pub fn new(origin: Vec2, extent: Vec2, speed: f32) -> Self {
        Self {
            origin,
            extent,
            speed,
            direction: 1.0,
        }
    }
}
