//! Attack montage arbitration: standing versus moving variants.

use crate::components::Montages;
use crate::constants::*;
use crate::engine::{Animator, MovementIntegrator};
use hecs::{Entity, World};

/// Start a spell-attack montage. Requires both cast variants to be
/// configured; picks the moving variant at 1.2x when the character is
/// moving, else the standing variant at 1.5x.
///
/// There is deliberately no re-entrancy guard here: triggering again simply
/// restarts the montage.
pub fn trigger_spell_attack(
    world: &World,
    entity: Entity,
    animator: &mut impl Animator,
    mover: &impl MovementIntegrator,
) {
    let Ok(montages) = world.get::<&Montages>(entity) else {
        return;
    };
    let (Some(standing), Some(moving)) = (montages.standing_cast, montages.moving_cast) else {
        return;
    };
    play_variant(animator, mover, standing, moving);
}

/// Start a melee-attack montage; same arbitration as `trigger_spell_attack`
/// over the melee variants.
pub fn trigger_melee_attack(
    world: &World,
    entity: Entity,
    animator: &mut impl Animator,
    mover: &impl MovementIntegrator,
) {
    let Ok(montages) = world.get::<&Montages>(entity) else {
        return;
    };
    let (Some(standing), Some(moving)) = (montages.standing_melee, montages.moving_melee) else {
        return;
    };
    play_variant(animator, mover, standing, moving);
}

fn play_variant(
    animator: &mut impl Animator,
    mover: &impl MovementIntegrator,
    standing: crate::engine::MontageId,
    moving: crate::engine::MontageId,
) {
    if is_moving(mover) {
        animator.play(moving, MOVING_ATTACK_RATE);
    } else {
        animator.play(standing, STANDING_ATTACK_RATE);
    }
}

/// Whether the character's velocity magnitude is non-negligible
pub fn is_moving(mover: &impl MovementIntegrator) -> bool {
    mover.velocity().length_squared() > VELOCITY_EPSILON * VELOCITY_EPSILON
}
