//! Damage application and the death transition.

use crate::components::{Dead, Health, Montages};
use crate::constants::*;
use crate::engine::Animator;
use crate::events::{EventQueue, GameEvent};
use hecs::{Entity, World};

/// Apply `amount` of damage to `entity`, returning whether it is dead after
/// the call.
///
/// Damage is dropped while the get-hit reaction is still playing - a
/// non-reentrancy guard, not a queue - and once dead the character ignores
/// damage entirely. Negative amounts heal; the pool clamps either way.
/// Exactly one reaction montage (death or get-hit) is triggered per
/// successful call.
pub fn apply_damage(
    world: &mut World,
    entity: Entity,
    amount: f32,
    animator: &mut impl Animator,
    events: &mut EventQueue,
) -> bool {
    puffin::profile_function!();

    if world.get::<&Dead>(entity).is_ok() {
        return true;
    }
    if hit_reaction_active(world, entity, animator) {
        return false;
    }

    let montages = world
        .get::<&Montages>(entity)
        .map(|m| *m)
        .unwrap_or_default();

    let (remaining, depleted) = {
        let mut health = match world.get::<&mut Health>(entity) {
            Ok(health) => health,
            Err(_) => return false,
        };
        health.damage(amount);
        (health.current, health.is_depleted())
    };

    if depleted {
        if let Some(death) = montages.death {
            animator.play(death, REACTION_RATE);
        }
        let _ = world.insert_one(entity, Dead);
        log::info!("character {entity:?} died");
        events.push(GameEvent::Died { entity });
        true
    } else {
        if let Some(get_hit) = montages.get_hit {
            animator.play(get_hit, REACTION_RATE);
        }
        events.push(GameEvent::DamageTaken {
            entity,
            amount,
            remaining,
        });
        false
    }
}

/// True while the get-hit reaction montage is playing. An unset handle means
/// the guard is never active.
pub fn hit_reaction_active(world: &World, entity: Entity, animator: &impl Animator) -> bool {
    let Ok(montages) = world.get::<&Montages>(entity) else {
        return false;
    };
    montages
        .get_hit
        .map(|montage| animator.is_playing(montage))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Mana, Player};
    use crate::engine::MontageId;
    use crate::headless::HeadlessAnimator;

    const GET_HIT: MontageId = MontageId(10);
    const DEATH: MontageId = MontageId(11);

    fn spawn_character(world: &mut World, health: f32) -> Entity {
        world.spawn((
            Player,
            Health {
                current: health,
                max: 200.0,
            },
            Mana::new(100.0),
            Montages {
                get_hit: Some(GET_HIT),
                death: Some(DEATH),
                ..Default::default()
            },
        ))
    }

    #[test]
    fn test_damage_reduces_health_and_plays_hit_reaction() {
        let mut world = World::new();
        let entity = spawn_character(&mut world, 200.0);
        let mut animator = HeadlessAnimator::new();
        let mut events = EventQueue::new();

        let dead = apply_damage(&mut world, entity, 35.0, &mut animator, &mut events);

        assert!(!dead);
        assert_eq!(world.get::<&Health>(entity).unwrap().current, 165.0);
        assert!(animator.is_playing(GET_HIT));
        assert!(!animator.is_playing(DEATH));
        assert!(world.get::<&Dead>(entity).is_err());
    }

    #[test]
    fn test_lethal_damage_clamps_to_zero_and_kills() {
        let mut world = World::new();
        let entity = spawn_character(&mut world, 30.0);
        let mut animator = HeadlessAnimator::new();
        let mut events = EventQueue::new();

        let dead = apply_damage(&mut world, entity, 500.0, &mut animator, &mut events);

        assert!(dead);
        assert_eq!(world.get::<&Health>(entity).unwrap().current, 0.0);
        assert!(world.get::<&Dead>(entity).is_ok());
        // Only the death reaction fires, never both
        assert!(animator.is_playing(DEATH));
        assert!(!animator.is_playing(GET_HIT));
        let drained: Vec<_> = events.drain().collect();
        assert_eq!(drained.len(), 1);
        assert!(matches!(drained[0], GameEvent::Died { .. }));
    }

    #[test]
    fn test_damage_dropped_while_hit_reaction_plays() {
        let mut world = World::new();
        let entity = spawn_character(&mut world, 200.0);
        let mut animator = HeadlessAnimator::new();
        let mut events = EventQueue::new();

        apply_damage(&mut world, entity, 40.0, &mut animator, &mut events);
        assert!(animator.is_playing(GET_HIT));

        // Second hit lands while the reaction is in flight: dropped
        let dead = apply_damage(&mut world, entity, 40.0, &mut animator, &mut events);
        assert!(!dead);
        assert_eq!(world.get::<&Health>(entity).unwrap().current, 160.0);

        // Reaction finished: damage applies again
        animator.advance(2.0);
        apply_damage(&mut world, entity, 40.0, &mut animator, &mut events);
        assert_eq!(world.get::<&Health>(entity).unwrap().current, 120.0);
    }

    #[test]
    fn test_dead_characters_ignore_damage() {
        let mut world = World::new();
        let entity = spawn_character(&mut world, 10.0);
        let mut animator = HeadlessAnimator::new();
        let mut events = EventQueue::new();

        assert!(apply_damage(&mut world, entity, 50.0, &mut animator, &mut events));
        animator.advance(10.0);

        for _ in 0..3 {
            assert!(apply_damage(&mut world, entity, 50.0, &mut animator, &mut events));
        }
        assert_eq!(world.get::<&Health>(entity).unwrap().current, 0.0);
        assert!(world.get::<&Dead>(entity).is_ok());
    }

    #[test]
    fn test_negative_damage_heals_clamped_at_max() {
        let mut world = World::new();
        let entity = spawn_character(&mut world, 150.0);
        let mut animator = HeadlessAnimator::new();
        let mut events = EventQueue::new();

        apply_damage(&mut world, entity, -500.0, &mut animator, &mut events);
        assert_eq!(world.get::<&Health>(entity).unwrap().current, 200.0);
    }

    #[test]
    fn test_unset_get_hit_montage_disables_guard() {
        let mut world = World::new();
        let entity = world.spawn((
            Health::new(200.0),
            Montages {
                death: Some(DEATH),
                ..Default::default()
            },
        ));
        let mut animator = HeadlessAnimator::new();
        let mut events = EventQueue::new();

        // Back-to-back hits both land because no reaction montage exists
        apply_damage(&mut world, entity, 30.0, &mut animator, &mut events);
        apply_damage(&mut world, entity, 30.0, &mut animator, &mut events);
        assert_eq!(world.get::<&Health>(entity).unwrap().current, 140.0);
    }
}
