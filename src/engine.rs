//! Host-engine boundary.
//!
//! The surrounding engine owns rendering, physics integration, skeletal
//! animation playback, and actor spawning. This gameplay layer talks to it
//! through the traits below, which are injected into each system call the
//! same way other collaborators (event queue) are. Handles crossing the
//! boundary are opaque: a `MontageId` or `EffectPrototype` means nothing to
//! this crate beyond identity.

use glam::Vec3;
use hecs::Entity;
use serde::{Deserialize, Serialize};

/// Opaque handle to a named animation montage owned by the animation
/// subsystem. Playback rate is a parameter of `play`, not of the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MontageId(pub u32);

/// Opaque handle to a spawnable effect prototype (the spell projectile
/// asset configured on the character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectPrototype(pub u32);

/// Named attachment points on the character's skeletal mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandSocket {
    Left,
    Right,
}

/// Animation/presentation subsystem: play a montage at a rate, poll whether
/// one is still playing, stop one early, and resolve socket positions.
///
/// Playback completion is observed by polling `is_playing` each frame; the
/// engine never calls back into gameplay code.
pub trait Animator {
    fn play(&mut self, montage: MontageId, rate: f32);
    fn is_playing(&self, montage: MontageId) -> bool;
    fn stop(&mut self, montage: MontageId);
    fn socket_location(&self, socket: HandSocket) -> Vec3;
}

/// Movement integrator: accepts a normalized direction plus an axis scale per
/// frame and owns the resulting velocity. Jump state also lives here.
pub trait MovementIntegrator {
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);
    fn velocity(&self) -> Vec3;
    fn jump(&mut self);
    fn stop_jumping(&mut self);
}

/// Actor-spawning facility: given a prototype, a world position, and a yaw,
/// produce a new effect entity owned by `owner`.
pub trait EffectSpawner {
    fn spawn(&mut self, prototype: EffectPrototype, location: Vec3, yaw: f32, owner: Entity);
}
