//! Movement domain: system modules for locomotion updates.

pub(crate) mod contact;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use contact::{detect_walls, track_surface_contact};
pub(crate) use input::read_input;
pub(crate) use locomotion::{
    apply_crouch_slide, apply_dash, apply_gravity_scale, apply_horizontal_movement, apply_jump,
    apply_ladder, apply_wall_interaction, publish_signals, track_ladder_zone, update_facing,
    update_hitbox, update_timers, update_walk_toggle,
};
