//! Movement input, control rotation, and actor orientation.
//!
//! Axis handlers gate on an active controller and a non-zero value, interrupt
//! standing attack montages, and feed yaw-projected world directions into the
//! movement integrator. Orientation chases planar velocity at a fixed turn
//! rate so the character faces where it moves.

use crate::components::{Controlled, Facing, Montages};
use crate::constants::*;
use crate::engine::{Animator, MovementIntegrator};
use glam::Vec3;
use hecs::{Entity, World};

/// Move along the controller's horizontal forward direction.
///
/// Starting to move cancels any standing attack in progress; the moving
/// variants keep playing.
pub fn move_forward(
    world: &mut World,
    entity: Entity,
    value: f32,
    animator: &mut impl Animator,
    mover: &mut impl MovementIntegrator,
) {
    let Some(yaw) = control_yaw(world, entity, value) else {
        return;
    };
    interrupt_standing_actions(world, entity, animator);
    mover.add_movement_input(yaw_forward(yaw), value);
}

/// Move along the controller's horizontal right direction. Same gating and
/// interruption as `move_forward`.
pub fn move_right(
    world: &mut World,
    entity: Entity,
    value: f32,
    animator: &mut impl Animator,
    mover: &mut impl MovementIntegrator,
) {
    let Some(yaw) = control_yaw(world, entity, value) else {
        return;
    };
    interrupt_standing_actions(world, entity, animator);
    mover.add_movement_input(yaw_right(yaw), value);
}

/// Analog turn input: `rate` is a normalized [-1, 1] deflection scaled by the
/// controller's base turn rate and the frame time.
pub fn turn_at_rate(world: &mut World, entity: Entity, rate: f32, dt: f32) {
    let Ok(mut controlled) = world.get::<&mut Controlled>(entity) else {
        return;
    };
    let delta = rate * controlled.base_turn_rate * dt;
    controlled.yaw = wrap_degrees(controlled.yaw + delta);
}

/// Analog look-up input, scaled like `turn_at_rate` and clamped to the pitch
/// limits.
pub fn look_up_at_rate(world: &mut World, entity: Entity, rate: f32, dt: f32) {
    let Ok(mut controlled) = world.get::<&mut Controlled>(entity) else {
        return;
    };
    let delta = rate * controlled.base_look_up_rate * dt;
    controlled.pitch = (controlled.pitch + delta).clamp(PITCH_MIN, PITCH_MAX);
}

/// Direct yaw input (mouse delta), already in degrees
pub fn add_yaw_input(world: &mut World, entity: Entity, delta: f32) {
    if let Ok(mut controlled) = world.get::<&mut Controlled>(entity) {
        controlled.yaw = wrap_degrees(controlled.yaw + delta);
    }
}

/// Direct pitch input (mouse delta), already in degrees
pub fn add_pitch_input(world: &mut World, entity: Entity, delta: f32) {
    if let Ok(mut controlled) = world.get::<&mut Controlled>(entity) {
        controlled.pitch = (controlled.pitch + delta).clamp(PITCH_MIN, PITCH_MAX);
    }
}

/// Rotate `Facing` toward the direction of planar velocity, limited to the
/// character turn rate. Standing still leaves the facing untouched.
pub fn orient_to_movement(world: &mut World, entity: Entity, mover: &impl MovementIntegrator, dt: f32) {
    let velocity = mover.velocity();
    let planar = Vec3::new(velocity.x, velocity.y, 0.0);
    if planar.length_squared() <= VELOCITY_EPSILON * VELOCITY_EPSILON {
        return;
    }
    let Ok(mut facing) = world.get::<&mut Facing>(entity) else {
        return;
    };

    let target = planar.y.atan2(planar.x).to_degrees();
    let diff = shortest_angle(target - facing.yaw);
    let max_step = ROTATION_RATE * dt;
    let step = diff.clamp(-max_step, max_step);
    facing.yaw = wrap_degrees(facing.yaw + step);
}

/// Controller yaw if this axis should act: requires an active controller and
/// a non-zero value.
fn control_yaw(world: &World, entity: Entity, value: f32) -> Option<f32> {
    if value == 0.0 {
        return None;
    }
    world.get::<&Controlled>(entity).ok().map(|c| c.yaw)
}

/// Stop the standing cast and melee montages if either is in flight. The
/// moving variants are untouched.
fn interrupt_standing_actions(world: &World, entity: Entity, animator: &mut impl Animator) {
    let Ok(montages) = world.get::<&Montages>(entity) else {
        return;
    };
    for montage in [montages.standing_cast, montages.standing_melee].into_iter().flatten() {
        if animator.is_playing(montage) {
            animator.stop(montage);
        }
    }
}

/// Horizontal forward for a yaw in degrees
pub fn yaw_forward(yaw: f32) -> Vec3 {
    let rad = yaw.to_radians();
    Vec3::new(rad.cos(), rad.sin(), 0.0)
}

/// Horizontal right for a yaw in degrees
pub fn yaw_right(yaw: f32) -> Vec3 {
    let rad = yaw.to_radians();
    Vec3::new(-rad.sin(), rad.cos(), 0.0)
}

/// Wrap an angle into [0, 360)
fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Map an angle difference into [-180, 180]
fn shortest_angle(diff: f32) -> f32 {
    (diff + 180.0).rem_euclid(360.0) - 180.0
}
