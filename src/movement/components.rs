//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::Countdown;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, slopes)
    Ground,
    /// Wall surfaces
    Wall,
    /// Platforms (normal, moving, sinking)
    Platform,
    /// Player character
    Player,
    /// Enemy characters and their projectiles
    Enemy,
    /// Sensors (ladders, death zones) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Horizontal sign of this facing (-1.0 or 1.0).
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Wall interaction, derived from the core's wall sub-flags with priority
/// Jumping > Running > Sliding > None.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallInteraction {
    #[default]
    None,
    Sliding,
    Running,
    Jumping,
}

/// Which side of the player a wall was detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

/// What kind of surface the player is currently standing on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Ground,
    Platform,
}

/// Current ground/platform contact, resolved once per tick by the surface
/// contact tracker. `surface` is `None` while airborne.
#[derive(Component, Debug, Default)]
pub struct SurfaceContact {
    pub surface: Option<SurfaceKind>,
}

/// Single-owner platform attachment. Attach/detach happen atomically within
/// a tick; while attached, the platform is authoritative for ground contact.
#[derive(Component, Debug, Default)]
pub struct PlatformRider {
    pub platform: Option<Entity>,
}

/// Wall contact resolved from side ray casts each tick
#[derive(Component, Debug, Default)]
pub struct WallSensor {
    pub contact: WallContact,
}

/// Whether the player currently overlaps a ladder zone
#[derive(Component, Debug, Default)]
pub struct LadderProximity {
    pub in_zone: bool,
}

/// Countdown timers owned by the locomotion systems
#[derive(Component, Debug, Default)]
pub struct MovementTimers {
    pub dash: Countdown,
    pub dash_cooldown: Countdown,
    pub slide: Countdown,
    pub wall_run: Countdown,
    pub wall_jump_lock: Countdown,
    pub air_dashes_used: u32,
    pub dash_direction: f32,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Sensor zone the player can climb while overlapping
#[derive(Component, Debug)]
pub struct LadderZone;

/// Collider shapes swapped from the grounded/crouching/dashing flags
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitboxShape {
    Default,
    Crouch,
    Jump,
}

impl HitboxShape {
    /// Collider size as full (width, height) for this shape.
    pub fn size(self) -> Vec2 {
        match self {
            HitboxShape::Default => Vec2::new(24.0, 48.0),
            HitboxShape::Crouch => Vec2::new(24.0, 26.0),
            HitboxShape::Jump => Vec2::new(24.0, 42.0),
        }
    }
}
