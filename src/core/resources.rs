//! Core domain: shared resources.

use bevy::prelude::*;

/// Where the player (re)spawns. Set by level setup, read on respawn.
#[derive(Resource, Debug)]
pub struct RespawnPoint {
    pub position: Vec2,
}

impl Default for RespawnPoint {
    fn default() -> Self {
        Self {
            position: Vec2::new(0.0, 40.0),
        }
    }
}
