//! Input binding layer: maps axis and action inputs onto the gameplay
//! systems.
//!
//! The harness (or a host engine) produces these per frame; dispatching keeps
//! the binding table in one place instead of scattering calls through the
//! frame loop.

use crate::engine::{Animator, MovementIntegrator};
use crate::events::{EventQueue, GameEvent};
use crate::systems;
use hecs::{Entity, World};

/// Continuous inputs sampled every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisInput {
    MoveForward(f32),
    MoveRight(f32),
    /// Direct yaw delta in degrees (mouse)
    Turn(f32),
    /// Normalized turn deflection (gamepad stick)
    TurnRate(f32),
    /// Direct pitch delta in degrees (mouse)
    LookUp(f32),
    /// Normalized look-up deflection (gamepad stick)
    LookUpRate(f32),
}

/// Edge-triggered inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionInput {
    JumpPressed,
    JumpReleased,
    /// Spell attack
    LightAttack,
    /// Melee attack
    HeavyAttack,
}

/// Route one axis input to its system
pub fn dispatch_axis(
    world: &mut World,
    player: Entity,
    input: AxisInput,
    dt: f32,
    animator: &mut impl Animator,
    mover: &mut impl MovementIntegrator,
) {
    match input {
        AxisInput::MoveForward(value) => {
            systems::move_forward(world, player, value, animator, mover)
        }
        AxisInput::MoveRight(value) => systems::move_right(world, player, value, animator, mover),
        AxisInput::Turn(delta) => systems::add_yaw_input(world, player, delta),
        AxisInput::TurnRate(rate) => systems::turn_at_rate(world, player, rate, dt),
        AxisInput::LookUp(delta) => systems::add_pitch_input(world, player, delta),
        AxisInput::LookUpRate(rate) => systems::look_up_at_rate(world, player, rate, dt),
    }
}

/// Route one action input to its system. Spell casting itself is not bound
/// here: the cast montages carry a notify that fires `cast_spell` at the
/// release frame, which the harness drives directly.
pub fn dispatch_action(
    world: &mut World,
    player: Entity,
    input: ActionInput,
    animator: &mut impl Animator,
    mover: &mut impl MovementIntegrator,
    events: &mut EventQueue,
) {
    match input {
        ActionInput::JumpPressed => {
            mover.jump();
            events.push(GameEvent::Jumped { entity: player });
        }
        ActionInput::JumpReleased => mover.stop_jumping(),
        ActionInput::LightAttack => systems::trigger_spell_attack(world, player, animator, mover),
        ActionInput::HeavyAttack => systems::trigger_melee_attack(world, player, animator, mover),
    }
}
