//! Movement domain: the player locomotion core and its plugin wiring.

mod bootstrap;
mod components;
mod locomotion;
mod resources;
mod signals;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    Facing, GameLayer, Ground, HitboxShape, LadderProximity, LadderZone, MovementTimers, Player,
    PlatformRider, SurfaceContact, SurfaceKind, Wall, WallContact, WallInteraction, WallSensor,
};
pub use locomotion::{AXIS_DEAD_ZONE, LocomotionCore};
pub use resources::{
    AirMovement, CrouchTuning, DashTuning, JumpTuning, MovementInput, MovementTuning, WallTuning,
};
pub use signals::{
    AnimParams, AnimTrigger, AnimTriggerEvent, PreviousSnapshot, StateSnapshot, derive_params,
    derive_triggers,
};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_crouch_slide, apply_dash, apply_gravity_scale, apply_horizontal_movement, apply_jump,
    apply_ladder, apply_wall_interaction, detect_walls, publish_signals, read_input,
    track_ladder_zone, track_surface_contact, update_facing, update_hitbox, update_timers,
    update_walk_toggle,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<AnimTriggerEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    // Intent and contact state first, then the policies,
                    // then the projection the animation layer reads.
                    read_input,
                    update_timers,
                    track_surface_contact,
                    detect_walls,
                    track_ladder_zone,
                    update_walk_toggle,
                    apply_wall_interaction,
                    apply_jump,
                    apply_dash,
                    apply_crouch_slide,
                    apply_ladder,
                    apply_horizontal_movement,
                    apply_gravity_scale,
                    update_hitbox,
                    update_facing,
                    publish_signals,
                )
                    .chain(),
            );
    }
}
