//! Movement domain: per-tick locomotion policy systems.
//!
//! Each policy (run, jump, wall, dash, crouch/slide, ladder) is its own
//! system; they all funnel their decisions through the `LocomotionCore`
//! mutators so the mutual-exclusion invariants hold no matter which order
//! the policies fire in within the chained update.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::components::{
    Facing, HitboxShape, LadderProximity, LadderZone, MovementTimers, Player, PlatformRider,
    WallContact, WallSensor,
};
use crate::movement::locomotion::{AXIS_DEAD_ZONE, LocomotionCore};
use crate::movement::resources::{MovementInput, MovementTuning};
use crate::movement::signals::{
    AnimParams, AnimTriggerEvent, PreviousSnapshot, StateSnapshot, derive_params, derive_triggers,
};
use crate::platforms::Platform;

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<&mut MovementTimers, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut timers in &mut query {
        timers.dash.tick(dt);
        timers.dash_cooldown.tick(dt);
        timers.slide.tick(dt);
        timers.wall_run.tick(dt);
        timers.wall_jump_lock.tick(dt);
    }
}

pub(crate) fn update_walk_toggle(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LocomotionCore, With<Player>>,
) {
    for mut core in &mut query {
        core.set_walking(input.walk_held, tuning.jump.as_ref());
    }
}

/// Wall running and wall sliding. Wall jumps are handled by `apply_jump`;
/// this system owns sticking to the wall and the run/slide sub-states.
pub(crate) fn apply_wall_interaction(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut LocomotionCore,
            &WallSensor,
            &mut MovementTimers,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (mut core, sensor, mut timers, mut velocity) in &mut query {
        let Some(wall) = &tuning.wall else {
            if core.stuck_to_wall {
                core.stick_to_wall(false);
                core.set_wall_state(false, false, false);
            }
            continue;
        };

        if core.grounded {
            // Touching down ends every wall interaction at once; the signal
            // layer turns that into a single stateComplete.
            core.stick_to_wall(false);
            core.set_wall_state(false, false, false);
            timers.wall_run.reset();
            continue;
        }

        let holding_toward_wall = match sensor.contact {
            WallContact::Left => input.axis.x < -AXIS_DEAD_ZONE,
            WallContact::Right => input.axis.x > AXIS_DEAD_ZONE,
            WallContact::None => false,
        };

        if holding_toward_wall && !core.dashing {
            let wants_run = input.axis.y > AXIS_DEAD_ZONE;
            let (was_running, _, _) = core.wall_flags();

            if wants_run && !was_running && !timers.wall_run.running() {
                timers.wall_run.start(wall.run_time);
                debug!("Wall run started");
            }

            if wants_run && timers.wall_run.active() {
                core.stick_to_wall(true);
                core.set_wall_state(true, false, false);
                velocity.y = wall.run_speed;
            } else {
                // Out of run time (or never running): slide down the wall.
                core.stick_to_wall(true);
                core.set_wall_state(false, true, false);
                velocity.y = -wall.slide_speed;
            }
        } else {
            // Left the wall without jumping. The wall-jump animation state
            // survives until landing so the flip deferral window stays
            // correct.
            if core.stuck_to_wall {
                core.stick_to_wall(false);
            }
            let (_, _, jump_anim) = core.wall_flags();
            core.set_wall_state(false, false, jump_anim);
            timers.wall_run.reset();
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut LocomotionCore,
            &WallSensor,
            &mut MovementTimers,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    // Without a jump policy every jump input is a graceful no-op.
    let Some(jump) = &tuning.jump else {
        return;
    };

    for (mut core, sensor, mut timers, mut velocity) in &mut query {
        if !input.jump_just_pressed {
            // Variable jump height: releasing jump cuts the ascent.
            if !input.jump_held && velocity.y > 0.0 && !core.grounded && !core.on_ladder {
                velocity.y *= 0.5;
            }
            continue;
        }

        if core.dashing {
            continue;
        }

        if core.on_ladder {
            core.leave_ladder();
            velocity.y = jump.jump_speed * 0.6;
            debug!("Hopped off ladder");
            continue;
        }

        let wall_policy = tuning.wall.as_ref().filter(|w| w.wall_jump);
        if let (true, Some(wall)) = (core.stuck_to_wall, wall_policy) {
            let away = match sensor.contact {
                WallContact::Left => 1.0,
                WallContact::Right => -1.0,
                WallContact::None => -core.facing.sign(),
            };

            // Holding into the wall at jump time makes this a boomerang
            // jump: the distinct X/Y factors send the player up and back.
            core.boomerang_jump = match sensor.contact {
                WallContact::Left => input.axis.x < -AXIS_DEAD_ZONE,
                WallContact::Right => input.axis.x > AXIS_DEAD_ZONE,
                WallContact::None => false,
            };

            core.wall_jumping = true;
            core.stick_to_wall(false);
            core.set_wall_state(false, false, true);
            velocity.x = away * wall.jump_speed_x;
            velocity.y = wall.jump_speed_y * core.jump_factor(Some(wall));
            timers.wall_jump_lock.start(wall.jump_lock_time);
            debug!(
                "Wall jump: away={}, boomerang={}",
                away, core.boomerang_jump
            );
            continue;
        }

        if core.try_consume_jump(Some(jump)) {
            velocity.y = jump.jump_speed * core.jump_factor(tuning.wall.as_ref());
            debug!("Jump: jumps_left={}", core.jumps_left);
        }
    }
}

pub(crate) fn apply_dash(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LocomotionCore, &mut MovementTimers, &mut LinearVelocity), With<Player>>,
) {
    let Some(dash) = &tuning.dash else {
        return;
    };

    for (mut core, mut timers, mut velocity) in &mut query {
        let air_dash_spent = !core.grounded && timers.air_dashes_used >= dash.air_dash_limit;
        let crouched_on_ground = core.grounded && core.crouching;

        if input.dash_just_pressed
            && !core.dashing
            && !timers.dash_cooldown.active()
            && !air_dash_spent
            && !crouched_on_ground
            && core.set_dashing(true)
        {
            timers.dash.start(dash.time);
            timers.dash_cooldown.start(dash.cooldown);
            if !core.grounded {
                timers.air_dashes_used += 1;
            }
            timers.dash_direction = if input.axis.x.abs() > AXIS_DEAD_ZONE {
                input.axis.x.signum()
            } else {
                core.facing.sign()
            };
            debug!("Dash started, direction={}", timers.dash_direction);
        }

        if core.dashing {
            velocity.x = timers.dash_direction * dash.speed;
            // Vertical movement locked during dash.
            velocity.y = 0.0;
            if timers.dash.expired() {
                core.set_dashing(false);
            }
        }
    }
}

pub(crate) fn apply_crouch_slide(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LocomotionCore, &mut MovementTimers, &mut LinearVelocity), With<Player>>,
) {
    let Some(crouch) = &tuning.crouch else {
        return;
    };

    for (mut core, mut timers, mut velocity) in &mut query {
        let down_held = input.axis.y < -0.5;

        if !core.grounded || core.on_ladder {
            core.set_crouching(false);
            core.set_sliding(false);
            continue;
        }

        if down_held {
            if !core.crouching
                && !core.sliding
                && !core.dashing
                && velocity.x.abs() >= crouch.slide_min_speed
                && core.set_sliding(true)
            {
                timers.slide.start(crouch.slide_time);
            }
            core.set_crouching(true);
        } else if !core.sliding {
            core.set_crouching(false);
        }

        if core.sliding {
            velocity.x = core.facing.sign() * crouch.slide_speed;
            if timers.slide.expired() || !down_held {
                core.set_sliding(false);
                core.set_crouching(down_held);
            }
        }
    }
}

/// Track ladder zone overlaps from collision events.
pub(crate) fn track_ladder_zone(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    ladder_query: Query<(), With<LadderZone>>,
    mut player_query: Query<&mut LadderProximity, With<Player>>,
) {
    for event in collision_start_events.read() {
        let involved = ladder_query.get(event.collider1).is_ok()
            || ladder_query.get(event.collider2).is_ok();
        if !involved {
            continue;
        }
        for other in [event.collider1, event.collider2] {
            if let Ok(mut proximity) = player_query.get_mut(other) {
                proximity.in_zone = true;
            }
        }
    }

    for event in collision_end_events.read() {
        let involved = ladder_query.get(event.collider1).is_ok()
            || ladder_query.get(event.collider2).is_ok();
        if !involved {
            continue;
        }
        for other in [event.collider1, event.collider2] {
            if let Ok(mut proximity) = player_query.get_mut(other) {
                proximity.in_zone = false;
            }
        }
    }
}

pub(crate) fn apply_ladder(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LocomotionCore, &LadderProximity, &mut LinearVelocity), With<Player>>,
) {
    for (mut core, proximity, mut velocity) in &mut query {
        if proximity.in_zone
            && !core.on_ladder
            && !core.dashing
            && input.axis.y.abs() > 0.5
        {
            core.enter_ladder();
            debug!("Mounted ladder");
        }

        if core.on_ladder {
            if !proximity.in_zone {
                core.leave_ladder();
                continue;
            }
            velocity.y = input.axis.y * tuning.ladder_climb_speed;
            velocity.x = input.axis.x * tuning.ladder_climb_speed * 0.5;
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    platform_velocities: Query<&LinearVelocity, (With<Platform>, Without<Player>)>,
    mut query: Query<
        (
            &mut LocomotionCore,
            &PlatformRider,
            &MovementTimers,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut core, rider, timers, mut velocity) in &mut query {
        // These states own the velocity outright.
        if core.dashing
            || core.sliding
            || core.on_ladder
            || core.stuck_to_wall
            || timers.wall_jump_lock.active()
        {
            continue;
        }

        let hor = input.axis.x;

        let mut speed = if core.crouching {
            tuning
                .crouch
                .as_ref()
                .map(|c| c.crouch_speed)
                .unwrap_or(tuning.walk_speed)
        } else if core.walking {
            tuning.walk_speed
        } else {
            tuning.run_speed
        };
        speed = core.speed_in_air(speed, tuning.jump.as_ref(), tuning.wall.as_ref());

        let platform_vx = rider
            .platform
            .and_then(|platform| platform_velocities.get(platform).ok())
            .map(|v| v.x);
        if let Some(vx) = platform_vx {
            speed = core.speed_on_moving_platform(speed, hor, vx);
        }

        // Direction: intent wins; neutral intent on a platform tracks the
        // platform's motion.
        let dir = if hor.abs() > AXIS_DEAD_ZONE {
            hor.signum()
        } else {
            match platform_vx {
                Some(vx) if vx != 0.0 => vx.signum(),
                _ => 0.0,
            }
        };
        let target_vx = dir * speed;

        let step = if hor.abs() > AXIS_DEAD_ZONE {
            core.movement_force(tuning.accel, tuning.jump.as_ref(), tuning.wall.as_ref())
        } else {
            core.movement_force(tuning.decel, tuning.jump.as_ref(), tuning.wall.as_ref())
        } * dt;

        if velocity.x < target_vx {
            velocity.x = (velocity.x + step).min(target_vx);
        } else {
            velocity.x = (velocity.x - step).max(target_vx);
        }

        if !core.grounded {
            core.on_x_velocity_set();
        }
    }
}

/// Gravity is suppressed while stuck to a wall or on a ladder.
pub(crate) fn apply_gravity_scale(
    mut query: Query<(&LocomotionCore, &mut GravityScale), With<Player>>,
) {
    for (core, mut gravity) in &mut query {
        gravity.0 = if core.stuck_to_wall || core.on_ladder {
            0.0
        } else {
            1.0
        };
    }
}

/// Swap the collider between default/crouch/jump shapes.
pub(crate) fn update_hitbox(
    mut query: Query<(&LocomotionCore, &mut HitboxShape, &mut Collider, &mut Sprite), With<Player>>,
) {
    for (core, mut shape, mut collider, mut sprite) in &mut query {
        let desired = if core.grounded && !core.dashing {
            if core.crouching {
                HitboxShape::Crouch
            } else {
                HitboxShape::Default
            }
        } else {
            HitboxShape::Jump
        };

        if *shape != desired {
            *shape = desired;
            let size = desired.size();
            *collider = Collider::rectangle(size.x, size.y);
            sprite.custom_size = Some(size);
        }
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<(&mut LocomotionCore, &mut Sprite), With<Player>>,
) {
    for (mut core, mut sprite) in &mut query {
        core.update_facing(input.axis.x);
        sprite.flip_x = core.facing == Facing::Left;
    }
}

/// Project the tick's final state into animator parameters and raise the
/// edge-triggered events.
pub(crate) fn publish_signals(
    input: Res<MovementInput>,
    mut triggers: MessageWriter<AnimTriggerEvent>,
    mut query: Query<
        (
            &LocomotionCore,
            &LinearVelocity,
            &mut AnimParams,
            &mut PreviousSnapshot,
        ),
        With<Player>,
    >,
) {
    for (core, velocity, mut params, mut previous) in &mut query {
        let snapshot = StateSnapshot::capture(core, input.axis.x, Vec2::new(velocity.x, velocity.y));

        *params = derive_params(&snapshot);
        for trigger in derive_triggers(&previous.0, &snapshot) {
            trace!("Anim trigger: {:?}", trigger);
            triggers.write(AnimTriggerEvent { trigger });
        }

        previous.0 = snapshot;
    }
}
