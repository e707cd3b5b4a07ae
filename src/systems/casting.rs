//! Spell casting: spawn the configured effect from a hand socket and pay the
//! mana cost.

use crate::components::{Facing, Mana, SpellAbility};
use crate::engine::{Animator, EffectSpawner, HandSocket};
use crate::events::{EventQueue, GameEvent};
use hecs::{Entity, World};

/// Spawn one spell effect from the left or right hand socket, oriented along
/// the character's facing, owned by the caster.
///
/// Silently skipped unless a prototype is configured and any mana remains.
/// The cost is deducted clamped, so a partial pool still pays what it has -
/// there is no cooldown and no regeneration here.
pub fn cast_spell(
    world: &mut World,
    entity: Entity,
    use_right_hand: bool,
    animator: &impl Animator,
    spawner: &mut impl EffectSpawner,
    events: &mut EventQueue,
) {
    puffin::profile_function!();

    let Ok(ability) = world.get::<&SpellAbility>(entity) else {
        return;
    };
    let Some(prototype) = ability.prototype else {
        return;
    };
    let Ok(mut mana) = world.get::<&mut Mana>(entity) else {
        return;
    };
    if mana.is_empty() {
        return;
    }

    let hand = if use_right_hand {
        HandSocket::Right
    } else {
        HandSocket::Left
    };
    let location = animator.socket_location(hand);
    let yaw = world.get::<&Facing>(entity).map(|f| f.yaw).unwrap_or(0.0);

    spawner.spawn(prototype, location, yaw, entity);
    mana.spend(ability.cost);

    events.push(GameEvent::SpellCast {
        entity,
        hand,
        mana_remaining: mana.current,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EffectPrototype;
    use crate::headless::{HeadlessAnimator, RecordingSpawner};
    use glam::Vec3;

    const FIREBOLT: EffectPrototype = EffectPrototype(7);

    fn spawn_caster(world: &mut World, mana: f32) -> Entity {
        world.spawn((
            Mana {
                current: mana,
                max: 100.0,
            },
            Facing { yaw: 90.0 },
            SpellAbility {
                prototype: Some(FIREBOLT),
                cost: 10.0,
            },
        ))
    }

    #[test]
    fn test_cast_spawns_effect_at_hand_and_deducts_cost() {
        let mut world = World::new();
        let entity = spawn_caster(&mut world, 100.0);
        let mut animator = HeadlessAnimator::new();
        animator.set_hand_sockets(Vec3::new(-30.0, 0.0, 140.0), Vec3::new(30.0, 0.0, 140.0));
        let mut spawner = RecordingSpawner::new();
        let mut events = EventQueue::new();

        cast_spell(&mut world, entity, true, &animator, &mut spawner, &mut events);

        assert_eq!(spawner.spawned.len(), 1);
        let effect = spawner.spawned[0];
        assert_eq!(effect.prototype, FIREBOLT);
        assert_eq!(effect.location, Vec3::new(30.0, 0.0, 140.0));
        assert_eq!(effect.yaw, 90.0);
        assert_eq!(effect.owner, entity);
        assert_eq!(world.get::<&Mana>(entity).unwrap().current, 90.0);
    }

    #[test]
    fn test_left_hand_uses_left_socket() {
        let mut world = World::new();
        let entity = spawn_caster(&mut world, 100.0);
        let mut animator = HeadlessAnimator::new();
        animator.set_hand_sockets(Vec3::new(-30.0, 0.0, 140.0), Vec3::new(30.0, 0.0, 140.0));
        let mut spawner = RecordingSpawner::new();
        let mut events = EventQueue::new();

        cast_spell(&mut world, entity, false, &animator, &mut spawner, &mut events);

        assert_eq!(spawner.spawned[0].location, Vec3::new(-30.0, 0.0, 140.0));
    }

    #[test]
    fn test_partial_mana_pays_what_it_has() {
        let mut world = World::new();
        let entity = spawn_caster(&mut world, 5.0);
        let animator = HeadlessAnimator::new();
        let mut spawner = RecordingSpawner::new();
        let mut events = EventQueue::new();

        cast_spell(&mut world, entity, true, &animator, &mut spawner, &mut events);

        // 5 mana covers a 10-cost cast; the pool clamps at zero
        assert_eq!(spawner.spawned.len(), 1);
        assert_eq!(world.get::<&Mana>(entity).unwrap().current, 0.0);
    }

    #[test]
    fn test_empty_mana_skips_cast() {
        let mut world = World::new();
        let entity = spawn_caster(&mut world, 0.0);
        let animator = HeadlessAnimator::new();
        let mut spawner = RecordingSpawner::new();
        let mut events = EventQueue::new();

        cast_spell(&mut world, entity, true, &animator, &mut spawner, &mut events);

        assert!(spawner.spawned.is_empty());
        assert_eq!(world.get::<&Mana>(entity).unwrap().current, 0.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_no_prototype_skips_cast() {
        let mut world = World::new();
        let entity = world.spawn((
            Mana::new(100.0),
            SpellAbility {
                prototype: None,
                cost: 10.0,
            },
        ));
        let animator = HeadlessAnimator::new();
        let mut spawner = RecordingSpawner::new();
        let mut events = EventQueue::new();

        cast_spell(&mut world, entity, true, &animator, &mut spawner, &mut events);

        assert!(spawner.spawned.is_empty());
        assert_eq!(world.get::<&Mana>(entity).unwrap().current, 100.0);
    }
}
