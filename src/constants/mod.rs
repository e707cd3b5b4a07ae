//! Gameplay constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! These mirror the character's editor defaults; per-instance overrides come
//! from `CharacterConfig`.

mod camera;
mod combat;
mod movement;
mod stats;

pub use camera::*;
pub use combat::*;
pub use movement::*;
pub use stats::*;
