//! Platforms domain: platform kinds, sink state machine and plugin wiring.

mod components;
mod sink;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{MovingPlatform, Platform, PlatformKind, Sinking};
pub use sink::{SinkConfig, SinkPhase, SinkState};

use bevy::prelude::*;

use crate::platforms::systems::{move_platforms, tick_sinking_platforms, track_platform_attachment};

pub struct PlatformsPlugin;

impl Plugin for PlatformsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (track_platform_attachment, tick_sinking_platforms, move_platforms).chain(),
        );
    }
}
