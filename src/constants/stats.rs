//! Default character stat pools.

/// Default maximum health
pub const MAX_HEALTH: f32 = 200.0;
/// Default maximum mana
pub const MAX_MANA: f32 = 100.0;
