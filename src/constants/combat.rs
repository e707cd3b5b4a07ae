//! Combat and montage constants.

/// Mana deducted per spell cast
pub const SPELL_COST: f32 = 10.0;
/// Playback rate for the standing attack variants
pub const STANDING_ATTACK_RATE: f32 = 1.5;
/// Playback rate for the moving attack variants
pub const MOVING_ATTACK_RATE: f32 = 1.2;
/// Playback rate for get-hit and death reactions
pub const REACTION_RATE: f32 = 1.0;
/// Speed (units/s) below which the character counts as standing still
pub const VELOCITY_EPSILON: f32 = 1e-4;
