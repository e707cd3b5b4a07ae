use crate::engine::{EffectPrototype, MontageId};
use serde::{Deserialize, Serialize};

/// Player-controlled character marker
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Health pool, clamped to [0, max]
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount` (negative amounts heal), clamped to the pool bounds
    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount).clamp(0.0, self.max);
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

/// Mana pool, clamped to [0, max]
#[derive(Debug, Clone, Copy)]
pub struct Mana {
    pub current: f32,
    pub max: f32,
}

impl Mana {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Deduct `cost`, clamped to the pool bounds. The caller checks whether
    /// any mana is available; a partial pool still pays what it can.
    pub fn spend(&mut self, cost: f32) {
        self.current = (self.current - cost).clamp(0.0, self.max);
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }
}

/// Terminal death marker. Inserted once when health reaches zero and never
/// removed by this logic.
#[derive(Debug, Clone, Copy)]
pub struct Dead;

/// An active controller steering this character. Absence means no controller
/// is possessing the pawn, which gates all movement input.
///
/// Yaw and pitch are the control rotation in degrees; movement directions are
/// derived from yaw only.
#[derive(Debug, Clone, Copy)]
pub struct Controlled {
    pub yaw: f32,
    pub pitch: f32,
    /// Degrees per second applied by analog turn input at full deflection
    pub base_turn_rate: f32,
    /// Degrees per second applied by analog look-up input at full deflection
    pub base_look_up_rate: f32,
}

impl Controlled {
    pub fn new(base_turn_rate: f32, base_look_up_rate: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            base_turn_rate,
            base_look_up_rate,
        }
    }
}

/// Actor orientation (degrees about the vertical axis). Kept in sync with
/// movement by `systems::movement::orient_to_movement`; spell effects spawn
/// facing this way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Facing {
    pub yaw: f32,
}

/// The character's configured attack and reaction montages. Every handle is
/// optional; a missing handle disables the action that needs it rather than
/// being an error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Montages {
    pub standing_cast: Option<MontageId>,
    pub moving_cast: Option<MontageId>,
    pub standing_melee: Option<MontageId>,
    pub moving_melee: Option<MontageId>,
    pub get_hit: Option<MontageId>,
    pub death: Option<MontageId>,
}

/// Spell-casting ability: which effect to spawn and what it costs.
#[derive(Debug, Clone, Copy)]
pub struct SpellAbility {
    /// Prototype of the effect to spawn; `None` disables casting
    pub prototype: Option<EffectPrototype>,
    pub cost: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_clamps_at_zero() {
        let mut health = Health::new(200.0);
        health.damage(500.0);
        assert_eq!(health.current, 0.0);
        assert!(health.is_depleted());
    }

    #[test]
    fn test_health_negative_damage_heals_clamped_at_max() {
        let mut health = Health::new(200.0);
        health.damage(50.0);
        health.damage(-500.0);
        assert_eq!(health.current, 200.0);
    }

    #[test]
    fn test_mana_spend_clamps_at_zero() {
        let mut mana = Mana::new(100.0);
        mana.current = 5.0;
        mana.spend(10.0);
        assert_eq!(mana.current, 0.0);
        assert!(mana.is_empty());
    }
}
