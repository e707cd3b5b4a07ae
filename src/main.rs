//! Headless demo harness.
//!
//! Loads the character definition, spawns the player through the game mode,
//! and drives a short scripted session against the headless engine stand-ins:
//! run and turn, attack while moving and while standing, interrupt a standing
//! cast by moving, cast a spell, jump, take hits, and finally die. Events are
//! drained and logged at the end of every frame.

mod camera;
mod components;
mod config;
mod constants;
mod engine;
mod events;
mod game_mode;
mod headless;
mod input;
mod systems;

use std::error::Error;
use std::path::Path;

use glam::Vec3;

use camera::CameraBoom;
use components::{Facing, Health, Mana};
use config::CharacterConfig;
use events::{EventQueue, GameEvent};
use game_mode::GameMode;
use headless::{HeadlessAnimator, HeadlessMover, RecordingSpawner};
use input::{ActionInput, AxisInput};

const DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 240;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    puffin::set_scopes_on(true);

    let config = CharacterConfig::load_or_default(Path::new("assets/character.json"));
    let camera = CameraBoom::new(config.camera);

    let mut world = hecs::World::new();
    let mode = GameMode::new(config.clone());
    let player = mode.spawn_player(&mut world);

    let mut animator = HeadlessAnimator::new();
    for montage in [
        config.montages.standing_cast,
        config.montages.moving_cast,
        config.montages.standing_melee,
        config.montages.moving_melee,
        config.montages.get_hit,
        config.montages.death,
    ]
    .into_iter()
    .flatten()
    {
        animator.set_duration(montage, 0.8);
    }
    let mut mover = HeadlessMover::new();
    let mut spawner = RecordingSpawner::new();
    let mut events = EventQueue::new();

    for frame in 0..FRAMES {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_scope!("frame");

        {
            puffin::profile_scope!("input");
            for axis in scripted_axes(frame) {
                input::dispatch_axis(&mut world, player, axis, DT, &mut animator, &mut mover);
            }
            for action in scripted_actions(frame) {
                input::dispatch_action(
                    &mut world,
                    player,
                    action,
                    &mut animator,
                    &mut mover,
                    &mut events,
                );
            }
        }

        {
            puffin::profile_scope!("simulate");
            mover.step(DT);
            animator.advance(DT);
            systems::orient_to_movement(&mut world, player, &mover, DT);
            update_hand_sockets(&mut animator, &mover, &world, player);
        }

        // The cast montage's release notify, stood in for by a fixed frame
        if frame == 130 {
            systems::cast_spell(&mut world, player, true, &animator, &mut spawner, &mut events);
        }

        if let Some(amount) = scripted_damage(frame) {
            systems::apply_damage(&mut world, player, amount, &mut animator, &mut events);
        }

        {
            puffin::profile_scope!("events");
            for event in events.drain() {
                log_event(&event);
            }
        }

        if frame % 60 == 0 {
            let controlled = world.get::<&components::Controlled>(player)?;
            let view = camera.view(mover.position(), controlled.yaw, controlled.pitch);
            log::debug!(
                "frame {frame}: position {:?}, camera eye {:?}",
                mover.position(),
                view.eye
            );
        }
    }

    let health = world.get::<&Health>(player)?.current;
    let mana = world.get::<&Mana>(player)?.current;
    log::info!(
        "session over: health {health}, mana {mana}, {} effect(s) spawned",
        spawner.spawned.len()
    );
    Ok(())
}

/// Continuous input per frame of the script
fn scripted_axes(frame: u32) -> Vec<AxisInput> {
    match frame {
        // Run forward while turning right for the first second
        0..=59 => vec![AxisInput::MoveForward(1.0), AxisInput::TurnRate(0.5)],
        // Keep running straight through the moving melee attack
        60..=89 => vec![AxisInput::MoveForward(1.0)],
        // Stand still for the standing cast, then break it by strafing
        110..=125 => vec![AxisInput::MoveRight(-1.0)],
        _ => vec![],
    }
}

/// Edge-triggered input per frame of the script
fn scripted_actions(frame: u32) -> Vec<ActionInput> {
    match frame {
        60 => vec![ActionInput::HeavyAttack],
        95 => vec![ActionInput::LightAttack],
        140 => vec![ActionInput::JumpPressed],
        160 => vec![ActionInput::JumpReleased],
        _ => vec![],
    }
}

/// Incoming hits per frame of the script. The second hit lands while the
/// get-hit reaction from the first is still playing and is dropped; the last
/// one is lethal.
fn scripted_damage(frame: u32) -> Option<f32> {
    match frame {
        190 => Some(35.0),
        200 => Some(35.0),
        235 => Some(500.0),
        _ => None,
    }
}

/// Feed hand socket positions from the mover, offset from the actor origin
/// along its facing
fn update_hand_sockets(
    animator: &mut HeadlessAnimator,
    mover: &HeadlessMover,
    world: &hecs::World,
    player: hecs::Entity,
) {
    let yaw = world.get::<&Facing>(player).map(|f| f.yaw).unwrap_or(0.0);
    let right = systems::movement::yaw_right(yaw);
    let chest = mover.position() + Vec3::new(0.0, 0.0, 40.0);
    animator.set_hand_sockets(chest - right * 30.0, chest + right * 30.0);
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::DamageTaken {
            entity,
            amount,
            remaining,
        } => log::info!("{entity:?} took {amount} damage, {remaining} health left"),
        GameEvent::Died { entity } => log::info!("{entity:?} died"),
        GameEvent::SpellCast {
            entity,
            hand,
            mana_remaining,
        } => log::info!("{entity:?} cast a spell from the {hand:?} hand, {mana_remaining} mana left"),
        GameEvent::Jumped { entity } => log::info!("{entity:?} jumped"),
    }
}
