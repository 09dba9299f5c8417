//! Fixed-tick movement: smooth-damped horizontal velocity, facing flips,
//! blowing cover, and jumping.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{MovementController, Player, PlayerAssets, PlayerInput, animation::FlipAnimation};
use crate::{
    audio::sound_effect,
    game::{
        configs::PlayerConfig,
        contacts::ContactEvents,
        hiding::{Hideout, Hiding},
        level::Ground,
    },
};

/// A newly entered ground contact restores the jump. A side or ceiling touch
/// must not; "below us" stands in for a proper contact-normal check.
pub(super) fn update_grounded(
    grounds: Query<&GlobalTransform, With<Ground>>,
    mut players: Query<(&ContactEvents, &GlobalTransform, &mut MovementController), With<Player>>,
) {
    for (contacts, player_transform, mut controller) in &mut players {
        let player_y = player_transform.translation().y;
        for &entity in &contacts.entered {
            if let Ok(ground) = grounds.get(entity) {
                if ground.translation().y < player_y {
                    controller.is_grounded = true;
                }
            }
        }
    }
}

pub(super) fn apply_movement(
    config: Res<PlayerConfig>,
    input: Res<PlayerInput>,
    player_assets: Res<PlayerAssets>,
    time: Res<Time>,
    mut commands: Commands,
    mut hideouts: Query<&mut Hideout>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &mut LinearVelocity,
            &mut MovementController,
            &mut Hiding,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    for (entity, transform, mut velocity, mut controller, mut hiding) in &mut players {
        // Ease toward the target horizontal speed instead of snapping, so
        // direction changes don't jitter. Vertical velocity is the body's
        // business (gravity, jumps).
        let target = input.move_axis.x * config.move_speed;
        velocity.x = smooth_damp(
            velocity.x,
            target,
            &mut controller.velocity_damp,
            config.smooth_time,
            dt,
        );

        // Turn around when the input points the other way. Inserting a fresh
        // FlipAnimation replaces (= cancels) one still in flight.
        if let Some(facing_right) = flip_decision(input.move_axis.x, controller.is_facing_right) {
            controller.is_facing_right = facing_right;
            commands.entity(entity).insert(FlipAnimation::new(
                transform.scale.x,
                if facing_right { 1.0 } else { -1.0 },
                config.flip_duration,
            ));
        }

        // Moving hard enough blows your cover.
        if hiding.in_active && input.move_axis.length_squared() > config.unhide_deadzone {
            hiding.in_active = false;
            if let Some(target) = hiding.active_target {
                if let Ok(mut hideout) = hideouts.get_mut(target) {
                    hideout.occupied = false;
                }
            }
            info!("burst out of the hideout");
        }

        if should_jump(
            controller.is_grounded,
            input.move_axis.y,
            config.jump_threshold,
        ) {
            controller.is_grounded = false;
            velocity.y = config.jump_impulse;
            commands.spawn(sound_effect(player_assets.jump.clone()));
        }
    }
}

/// Critically damped approach of `current` toward `target`; `velocity` is the
/// caller-owned accumulator carried between ticks. Clamps at the target
/// instead of overshooting.
pub(crate) fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }
    output
}

/// Some(new facing) when the horizontal input disagrees with the current
/// facing. Zero input never flips.
pub(crate) fn flip_decision(move_x: f32, facing_right: bool) -> Option<bool> {
    if move_x > 0.0 && !facing_right {
        Some(true)
    } else if move_x < 0.0 && facing_right {
        Some(false)
    } else {
        None
    }
}

pub(crate) fn should_jump(grounded: bool, move_y: f32, threshold: f32) -> bool {
    grounded && move_y >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_damp_converges_without_overshoot() {
        let mut velocity = 0.0;
        let mut current = 0.0;
        let target = 140.0;
        for _ in 0..200 {
            current = smooth_damp(current, target, &mut velocity, 0.05, 1.0 / 64.0);
            assert!(current <= target);
        }
        assert!((current - target).abs() < 0.5);
    }

    #[test]
    fn smooth_damp_is_not_a_snap() {
        let mut velocity = 0.0;
        let first = smooth_damp(0.0, 140.0, &mut velocity, 0.05, 1.0 / 64.0);
        assert!(first > 0.0);
        assert!(first < 140.0);
    }

    #[test]
    fn smooth_damp_holds_position_at_zero_dt() {
        let mut velocity = 3.0;
        assert_eq!(smooth_damp(10.0, 140.0, &mut velocity, 0.05, 0.0), 10.0);
        assert_eq!(velocity, 3.0);
    }

    #[test]
    fn flips_exactly_on_sign_disagreement() {
        // Facing right, pushing left.
        assert_eq!(flip_decision(-1.0, true), Some(false));
        // Facing left, pushing right.
        assert_eq!(flip_decision(0.4, false), Some(true));

        // Agreement or no input: no flip.
        assert_eq!(flip_decision(1.0, true), None);
        assert_eq!(flip_decision(-0.4, false), None);
        assert_eq!(flip_decision(0.0, true), None);
        assert_eq!(flip_decision(0.0, false), None);
    }

    #[test]
    fn jump_requires_ground_and_upward_input() {
        assert!(should_jump(true, 0.5, 0.5));
        assert!(should_jump(true, 1.0, 0.5));

        // Airborne: never, regardless of input.
        assert!(!should_jump(false, 1.0, 0.5));
        // Grounded but input below the threshold.
        assert!(!should_jump(true, 0.49, 0.5));
        assert!(!should_jump(true, 0.0, 0.5));
    }
}
