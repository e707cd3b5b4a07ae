//! Gameplay systems: free functions over the world plus injected engine
//! collaborators.

pub mod attacks;
pub mod casting;
pub mod combat;
pub mod movement;

pub use attacks::{trigger_melee_attack, trigger_spell_attack};
pub use casting::cast_spell;
pub use combat::apply_damage;
pub use movement::{
    add_pitch_input, add_yaw_input, look_up_at_rate, move_forward, move_right, orient_to_movement,
    turn_at_rate,
};
