//! Movement domain: unit tests for the locomotion core and the animation
//! projection.

use bevy::prelude::*;

use super::locomotion::LocomotionCore;
use super::resources::{AirMovement, JumpTuning, WallTuning};
use super::signals::{AnimTrigger, StateSnapshot, derive_params, derive_triggers};
use super::{Facing, WallInteraction};

fn jump_tuning(walk_and_run: bool, speed_factor: f32, change_factor: f32) -> JumpTuning {
    JumpTuning {
        jump_speed: 680.0,
        total_jumps: 2,
        air: AirMovement {
            walk_and_run,
            speed_factor,
            change_factor,
            reset_on_wall: false,
        },
    }
}

// -----------------------------------------------------------------------------
// Facing / flip
// -----------------------------------------------------------------------------

#[test]
fn test_flip_follows_intent_sign() {
    let mut core = LocomotionCore::default();
    assert_eq!(core.facing, Facing::Right);

    core.update_facing(-1.0);
    assert_eq!(core.facing, Facing::Left);
    core.update_facing(1.0);
    assert_eq!(core.facing, Facing::Right);

    // Neutral intent never flips.
    core.update_facing(0.0);
    assert_eq!(core.facing, Facing::Right);
}

#[test]
fn test_double_flip_is_identity() {
    let mut core = LocomotionCore::default();
    let before = core.facing;
    core.flip();
    core.flip();
    assert_eq!(core.facing, before);
}

#[test]
fn test_facing_locked_during_dash_and_slide() {
    let mut core = LocomotionCore::default();
    core.set_dashing(true);
    core.update_facing(-1.0);
    assert_eq!(core.facing, Facing::Right);
    core.set_dashing(false);

    core.set_sliding(true);
    core.update_facing(-1.0);
    assert_eq!(core.facing, Facing::Right);
}

#[test]
fn test_flip_deferred_during_wall_transition() {
    let mut core = LocomotionCore::default();
    core.stick_to_wall(true);
    core.set_wall_state(false, true, false);

    // Mid wall slide the flip is deferred, not applied.
    core.update_facing(-1.0);
    assert_eq!(core.facing, Facing::Right);
    assert!(core.flip_pending());

    // Next tick, out of the transition window, the pending flip resolves
    // to a single net flip.
    core.stick_to_wall(false);
    core.set_wall_state(false, false, false);
    core.update_facing(0.0);
    assert_eq!(core.facing, Facing::Left);
    assert!(!core.flip_pending());
}

// -----------------------------------------------------------------------------
// Walk/run gate
// -----------------------------------------------------------------------------

#[test]
fn test_walk_toggle_free_on_ground() {
    let mut core = LocomotionCore::default();
    core.grounded = true;
    core.set_walking(true, Some(&jump_tuning(false, 1.0, 1.0)));
    assert!(core.walking);
}

#[test]
fn test_walk_toggle_suppressed_in_air() {
    let tuning = jump_tuning(false, 1.0, 1.0);
    let mut core = LocomotionCore::default();
    core.grounded = false;
    core.set_walking(true, Some(&tuning));
    assert!(!core.walking);
}

#[test]
fn test_walk_toggle_allowed_in_air_when_configured() {
    let tuning = jump_tuning(true, 1.0, 1.0);
    let mut core = LocomotionCore::default();
    core.grounded = false;
    core.set_walking(true, Some(&tuning));
    assert!(core.walking);
}

#[test]
fn test_walk_toggle_allowed_in_air_when_walking_on_jump() {
    let tuning = jump_tuning(false, 1.0, 1.0);
    let mut core = LocomotionCore::default();
    core.grounded = true;
    core.set_walking(true, Some(&tuning));
    core.try_consume_jump(Some(&tuning));
    core.leave_ground();

    core.set_walking(false, Some(&tuning));
    assert!(!core.walking);
}

#[test]
fn test_walk_toggle_unrestricted_without_jump_policy() {
    let mut core = LocomotionCore::default();
    core.grounded = false;
    core.set_walking(true, None);
    assert!(core.walking);
}

// -----------------------------------------------------------------------------
// Speed composition
// -----------------------------------------------------------------------------

#[test]
fn test_platform_speed_same_direction_sums() {
    let core = LocomotionCore::default();
    assert_eq!(core.speed_on_moving_platform(100.0, 1.0, 50.0), 150.0);
    assert_eq!(core.speed_on_moving_platform(100.0, -1.0, -50.0), 150.0);
}

#[test]
fn test_platform_speed_opposite_direction_takes_absolute_difference() {
    let core = LocomotionCore::default();
    assert_eq!(core.speed_on_moving_platform(100.0, 1.0, -30.0), 70.0);
    assert_eq!(core.speed_on_moving_platform(20.0, -1.0, 60.0), 40.0);
}

#[test]
fn test_platform_speed_neutral_intent_matches_platform() {
    let core = LocomotionCore::default();
    assert_eq!(core.speed_on_moving_platform(100.0, 0.0, -75.0), 75.0);
    // Stationary platform with neutral intent gives 0 - documented
    // behavior, not a bug.
    assert_eq!(core.speed_on_moving_platform(100.0, 0.0, 0.0), 0.0);
}

#[test]
fn test_platform_speed_dead_zone_counts_as_neutral() {
    let core = LocomotionCore::default();
    // Sub-dead-zone intent matches the platform speed instead of summing,
    // the same threshold the direction pick uses.
    assert_eq!(core.speed_on_moving_platform(100.0, 0.05, 50.0), 50.0);
    assert_eq!(core.speed_on_moving_platform(100.0, -0.05, -50.0), 50.0);
    // Just past the dead zone the directional rules apply again.
    assert_eq!(core.speed_on_moving_platform(100.0, 0.2, 50.0), 150.0);
    assert_eq!(core.speed_on_moving_platform(100.0, 0.2, 0.0), 100.0);
}

#[test]
fn test_air_speed_factor_applies_only_airborne() {
    let tuning = jump_tuning(false, 0.5, 1.0);
    let mut core = LocomotionCore::default();
    core.grounded = true;
    assert_eq!(core.speed_in_air(200.0, Some(&tuning), None), 200.0);
    core.grounded = false;
    assert_eq!(core.speed_in_air(200.0, Some(&tuning), None), 100.0);
}

#[test]
fn test_boomerang_factor_overrides_air_speed() {
    let jump = jump_tuning(false, 0.5, 1.0);
    let wall = WallTuning {
        boomerang_factor_x: 2.0,
        ..WallTuning::default()
    };
    let mut core = LocomotionCore::default();
    core.grounded = false;
    core.boomerang_jump = true;
    assert_eq!(core.speed_in_air(200.0, Some(&jump), Some(&wall)), 400.0);
}

#[test]
fn test_missing_policies_default_to_unit_factors() {
    let mut core = LocomotionCore::default();
    core.grounded = false;
    assert_eq!(core.speed_in_air(200.0, None, None), 200.0);
    assert_eq!(core.movement_force(300.0, None, None), 300.0);
    assert_eq!(core.jump_factor(None), 1.0);
}

#[test]
fn test_movement_force_scaled_by_air_control() {
    let tuning = jump_tuning(false, 1.0, 0.5);
    let mut core = LocomotionCore::default();
    core.grounded = false;
    assert_eq!(core.movement_force(300.0, Some(&tuning), None), 150.0);

    core.grounded = true;
    assert_eq!(core.movement_force(300.0, Some(&tuning), None), 300.0);
}

#[test]
fn test_movement_force_unscaled_while_wall_jumping() {
    let jump = jump_tuning(false, 1.0, 0.5);
    let wall = WallTuning::default();
    let mut core = LocomotionCore::default();
    core.grounded = false;
    core.wall_jumping = true;
    assert_eq!(core.movement_force(300.0, Some(&jump), Some(&wall)), 300.0);

    // Setting horizontal velocity while airborne ends the wall jump.
    core.on_x_velocity_set();
    assert!(!core.wall_jumping);
    assert_eq!(core.movement_force(300.0, Some(&jump), Some(&wall)), 150.0);
}

// -----------------------------------------------------------------------------
// Jump lifecycle
// -----------------------------------------------------------------------------

#[test]
fn test_jump_lifecycle() {
    let tuning = jump_tuning(false, 1.0, 1.0);
    let mut core = LocomotionCore::default();
    core.reset_jumps(Some(&tuning));
    assert_eq!(core.jumps_left, 2);

    assert!(core.try_consume_jump(Some(&tuning)));
    assert!(core.try_consume_jump(Some(&tuning)));
    assert!(!core.try_consume_jump(Some(&tuning)));

    core.reset_jumps(Some(&tuning));
    assert_eq!(core.jumps_left, 2);
}

#[test]
fn test_jump_is_noop_without_policy() {
    let mut core = LocomotionCore::default();
    core.jumps_left = 3;
    assert!(!core.try_consume_jump(None));
    core.reset_jumps(None);
    assert_eq!(core.jumps_left, 0);
}

#[test]
fn test_fall_zeroes_jumps_and_sets_falling() {
    let tuning = jump_tuning(false, 1.0, 1.0);
    let mut core = LocomotionCore::default();
    core.grounded = true;
    core.reset_jumps(Some(&tuning));

    core.fall();
    assert_eq!(core.jumps_left, 0);
    assert!(core.falling);
    assert!(!core.grounded);
}

#[test]
fn test_landing_ends_fall_exactly_once() {
    let mut core = LocomotionCore::default();
    core.fall();
    assert!(core.land());
    // Already grounded and not falling: nothing more to complete.
    assert!(!core.land());
}

// -----------------------------------------------------------------------------
// Mutual exclusion
// -----------------------------------------------------------------------------

#[test]
fn test_dash_and_slide_never_both() {
    let mut core = LocomotionCore::default();

    assert!(core.set_sliding(true));
    assert!(!core.set_dashing(true));
    assert!(!(core.dashing && core.sliding));

    assert!(core.set_sliding(false));
    assert!(core.set_dashing(true));
    assert!(!core.set_sliding(true));
    assert!(!(core.dashing && core.sliding));
}

#[test]
fn test_dash_slide_exclusion_holds_under_call_sequences() {
    let mut core = LocomotionCore::default();
    let calls: [(bool, bool); 8] = [
        (true, false),
        (false, true),
        (true, true),
        (false, false),
        (true, false),
        (true, true),
        (false, true),
        (true, false),
    ];
    for (dash, slide) in calls {
        core.set_dashing(dash);
        core.set_sliding(slide);
        assert!(!(core.dashing && core.sliding));
    }
}

#[test]
fn test_crouch_refused_while_dashing_on_ground() {
    let mut core = LocomotionCore::default();
    core.grounded = true;
    core.set_dashing(true);
    assert!(!core.set_crouching(true));
    assert!(!core.crouching);

    // Airborne the flags are orthogonal.
    core.grounded = false;
    assert!(core.set_crouching(true));
}

#[test]
fn test_landing_mid_air_dash_drops_crouch() {
    let mut core = LocomotionCore::default();
    core.leave_ground();

    // Airborne the flags are orthogonal, so both can be set.
    assert!(core.set_crouching(true));
    assert!(core.set_dashing(true));

    // Touching down while still dashing must not leave both grounded flags
    // up; the crouch gives way.
    core.land();
    assert!(core.grounded);
    assert!(core.dashing);
    assert!(!core.crouching);
}

#[test]
fn test_crouch_never_forces_slide() {
    let mut core = LocomotionCore::default();
    core.grounded = true;
    core.set_crouching(true);
    assert!(!core.sliding);
}

// -----------------------------------------------------------------------------
// Wall interaction priority
// -----------------------------------------------------------------------------

#[test]
fn test_wall_interaction_priority() {
    let mut core = LocomotionCore::default();
    assert_eq!(core.wall_interaction(), WallInteraction::None);

    core.set_wall_state(false, true, false);
    assert_eq!(core.wall_interaction(), WallInteraction::Sliding);
    core.set_wall_state(true, true, false);
    assert_eq!(core.wall_interaction(), WallInteraction::Running);
    core.set_wall_state(true, true, true);
    assert_eq!(core.wall_interaction(), WallInteraction::Jumping);
}

// -----------------------------------------------------------------------------
// Signal projection
// -----------------------------------------------------------------------------

fn snap(core: &LocomotionCore) -> StateSnapshot {
    StateSnapshot::capture(core, 0.0, Vec2::ZERO)
}

#[test]
fn test_state_complete_fires_once_per_dash() {
    let mut core = LocomotionCore::default();
    let idle = snap(&core);

    core.set_dashing(true);
    let dashing = snap(&core);
    assert_eq!(
        derive_triggers(&idle, &dashing),
        vec![AnimTrigger::StartDash]
    );

    // Steady dashing raises nothing.
    assert!(derive_triggers(&dashing, &dashing).is_empty());

    core.set_dashing(false);
    let done = snap(&core);
    assert_eq!(
        derive_triggers(&dashing, &done),
        vec![AnimTrigger::StateComplete]
    );
    assert!(derive_triggers(&done, &done).is_empty());
}

#[test]
fn test_state_complete_on_leaving_all_wall_states() {
    let mut core = LocomotionCore::default();
    core.set_wall_state(true, false, false);
    let on_wall = snap(&core);

    // Swapping between wall sub-states is not a completion.
    core.set_wall_state(false, true, false);
    let still_on_wall = snap(&core);
    assert!(
        !derive_triggers(&on_wall, &still_on_wall).contains(&AnimTrigger::StateComplete)
    );

    core.set_wall_state(false, false, false);
    let off_wall = snap(&core);
    assert_eq!(
        derive_triggers(&still_on_wall, &off_wall),
        vec![AnimTrigger::StateComplete]
    );
}

#[test]
fn test_landing_while_falling_completes_state() {
    let mut core = LocomotionCore::default();
    core.fall();
    let falling = snap(&core);

    core.land();
    let landed = snap(&core);
    assert_eq!(
        derive_triggers(&falling, &landed),
        vec![AnimTrigger::StateComplete]
    );
}

#[test]
fn test_leaving_ground_raises_nothing() {
    let mut core = LocomotionCore::default();
    core.grounded = true;
    let grounded = snap(&core);

    core.leave_ground();
    let airborne = snap(&core);
    assert!(derive_triggers(&grounded, &airborne).is_empty());
}

#[test]
fn test_start_falling_fires_on_fall_edge() {
    let mut core = LocomotionCore::default();
    let before = snap(&core);
    core.fall();
    let after = snap(&core);
    assert_eq!(
        derive_triggers(&before, &after),
        vec![AnimTrigger::StartFalling]
    );
    // Level-triggered once; steady falling is silent.
    assert!(derive_triggers(&after, &after).is_empty());
}

#[test]
fn test_edge_events_for_wall_run_slide_and_ladder() {
    let mut core = LocomotionCore::default();
    let idle = snap(&core);

    core.set_wall_state(true, false, false);
    assert_eq!(
        derive_triggers(&idle, &snap(&core)),
        vec![AnimTrigger::StartWallRun]
    );

    let mut core = LocomotionCore::default();
    core.set_sliding(true);
    assert_eq!(
        derive_triggers(&idle, &snap(&core)),
        vec![AnimTrigger::StartSlide]
    );

    let mut core = LocomotionCore::default();
    core.enter_ladder();
    assert_eq!(
        derive_triggers(&idle, &snap(&core)),
        vec![AnimTrigger::TriggerLadder]
    );
}

#[test]
fn test_params_projection_mirrors_snapshot() {
    let mut core = LocomotionCore::default();
    core.grounded = true;
    core.walking = true;
    core.stick_to_wall(true);
    let snapshot = StateSnapshot::capture(&core, -0.7, Vec2::new(-120.0, 30.0));

    let params = derive_params(&snapshot);
    assert!(params.grounded);
    assert!(params.walking);
    assert!(params.wall);
    // Horizontal magnitudes are absolute, vertical speed is signed.
    assert_eq!(params.horizontal, 0.7);
    assert_eq!(params.x_speed, 120.0);
    assert_eq!(params.y_speed, 30.0);
}
