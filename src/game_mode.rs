//! Session setup: which character definition the player spawns with.

use crate::components::{Controlled, Facing, Health, Mana, Player, SpellAbility};
use crate::config::CharacterConfig;
use hecs::{Entity, World};

/// Owns the default pawn definition and spawns the player from it.
pub struct GameMode {
    default_pawn: CharacterConfig,
}

impl GameMode {
    pub fn new(default_pawn: CharacterConfig) -> Self {
        Self { default_pawn }
    }

    /// Spawn the player character with full pools, an active controller, and
    /// the configured montages and spell ability.
    pub fn spawn_player(&self, world: &mut World) -> Entity {
        let cfg = &self.default_pawn;
        let entity = world.spawn((
            Player,
            Health::new(cfg.max_health),
            Mana::new(cfg.max_mana),
            Controlled::new(cfg.base_turn_rate, cfg.base_look_up_rate),
            Facing::default(),
            cfg.montages,
            SpellAbility {
                prototype: cfg.spell_effect,
                cost: cfg.spell_cost,
            },
        ));
        log::info!(
            "spawned player {entity:?} (health {}, mana {})",
            cfg.max_health,
            cfg.max_mana
        );
        entity
    }
}
