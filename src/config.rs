//! Character configuration.
//!
//! Everything tunable per character instance is gathered into one
//! deserializable struct supplied at spawn time: stat
//! pools, montage handles, the spell-effect prototype, turn rates, and the
//! camera boom. `Default` reproduces the stock character.

use crate::camera::CameraBoomConfig;
use crate::components::Montages;
use crate::constants::*;
use crate::engine::EffectPrototype;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub max_health: f32,
    pub max_mana: f32,
    pub spell_cost: f32,
    pub base_turn_rate: f32,
    pub base_look_up_rate: f32,
    pub montages: Montages,
    /// Effect spawned by `cast_spell`; `None` disables the ability
    pub spell_effect: Option<EffectPrototype>,
    pub camera: CameraBoomConfig,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            max_health: MAX_HEALTH,
            max_mana: MAX_MANA,
            spell_cost: SPELL_COST,
            base_turn_rate: BASE_TURN_RATE,
            base_look_up_rate: BASE_LOOK_UP_RATE,
            montages: Montages::default(),
            spell_effect: None,
            camera: CameraBoomConfig::default(),
        }
    }
}

impl CharacterConfig {
    /// Load a character definition from a JSON file
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load from a JSON file, falling back to the stock character when the
    /// file is missing or malformed
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("failed to load {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MontageId;

    #[test]
    fn test_defaults_match_stock_character() {
        let config = CharacterConfig::default();
        assert_eq!(config.max_health, 200.0);
        assert_eq!(config.max_mana, 100.0);
        assert_eq!(config.spell_cost, 10.0);
        assert_eq!(config.base_turn_rate, 45.0);
        assert_eq!(config.base_look_up_rate, 45.0);
        assert!(config.montages.standing_cast.is_none());
        assert!(config.spell_effect.is_none());
        assert_eq!(config.camera.arm_length, 300.0);
    }

    #[test]
    fn test_partial_json_fills_in_defaults() {
        let config: CharacterConfig = serde_json::from_str(
            r#"{
                "max_health": 150.0,
                "montages": { "standing_cast": 1, "moving_cast": 2 },
                "spell_effect": 7
            }"#,
        )
        .unwrap();
        assert_eq!(config.max_health, 150.0);
        assert_eq!(config.max_mana, 100.0);
        assert_eq!(config.montages.standing_cast, Some(MontageId(1)));
        assert_eq!(config.montages.moving_cast, Some(MontageId(2)));
        assert!(config.montages.get_hit.is_none());
        assert_eq!(config.spell_effect, Some(EffectPrototype(7)));
    }
}
