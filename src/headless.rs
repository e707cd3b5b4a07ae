//! Headless stand-ins for the host-engine collaborators.
//!
//! These drive the gameplay systems without an engine attached: montages are
//! countdown timers, movement is first-order integration over a flat ground
//! plane, and spawned effects are recorded instead of instantiated. Enough
//! fidelity for the demo harness and for tests; not a simulation of the real
//! engine.

use std::collections::HashMap;

use glam::Vec3;
use hecs::Entity;

use crate::constants::*;
use crate::engine::{Animator, EffectPrototype, EffectSpawner, HandSocket, MontageId, MovementIntegrator};

/// Montage playback length when no explicit duration is registered
const DEFAULT_MONTAGE_SECS: f32 = 1.0;

/// Timer-based montage playback. A montage plays for `duration / rate`
/// seconds of wall time; `advance` ticks the timers each frame.
pub struct HeadlessAnimator {
    durations: HashMap<MontageId, f32>,
    playing: HashMap<MontageId, f32>,
    left_hand: Vec3,
    right_hand: Vec3,
}

impl HeadlessAnimator {
    pub fn new() -> Self {
        Self {
            durations: HashMap::new(),
            playing: HashMap::new(),
            left_hand: Vec3::ZERO,
            right_hand: Vec3::ZERO,
        }
    }

    /// Register the unscaled playback length of a montage
    pub fn set_duration(&mut self, montage: MontageId, secs: f32) {
        self.durations.insert(montage, secs);
    }

    /// Update the world-space hand socket positions (normally the skeletal
    /// mesh does this; here the harness feeds them from the mover)
    pub fn set_hand_sockets(&mut self, left: Vec3, right: Vec3) {
        self.left_hand = left;
        self.right_hand = right;
    }

    /// Tick playback timers; montages whose time is up stop playing
    pub fn advance(&mut self, dt: f32) {
        for remaining in self.playing.values_mut() {
            *remaining -= dt;
        }
        self.playing.retain(|_, remaining| *remaining > 0.0);
    }
}

impl Animator for HeadlessAnimator {
    fn play(&mut self, montage: MontageId, rate: f32) {
        let duration = self.durations.get(&montage).copied().unwrap_or(DEFAULT_MONTAGE_SECS);
        // Restart if already playing; higher rate finishes sooner
        self.playing.insert(montage, duration / rate.max(f32::EPSILON));
    }

    fn is_playing(&self, montage: MontageId) -> bool {
        self.playing.contains_key(&montage)
    }

    fn stop(&mut self, montage: MontageId) {
        self.playing.remove(&montage);
    }

    fn socket_location(&self, socket: HandSocket) -> Vec3 {
        match socket {
            HandSocket::Left => self.left_hand,
            HandSocket::Right => self.right_hand,
        }
    }
}

/// First-order movement integration over a flat ground plane at z = 0.
/// Input accumulates within a frame and is consumed by `step`.
pub struct HeadlessMover {
    position: Vec3,
    velocity: Vec3,
    pending_input: Vec3,
    grounded: bool,
}

impl HeadlessMover {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAPSULE_HALF_HEIGHT),
            velocity: Vec3::ZERO,
            pending_input: Vec3::ZERO,
            grounded: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Integrate one frame: consume accumulated input, apply gravity, land
    /// on the ground plane
    pub fn step(&mut self, dt: f32) {
        let mut input = self.pending_input;
        self.pending_input = Vec3::ZERO;
        input.z = 0.0;
        if input.length_squared() > 1.0 {
            input = input.normalize();
        }

        let control = if self.grounded { 1.0 } else { AIR_CONTROL };
        let planar = input * MAX_WALK_SPEED * control;
        self.velocity.x = planar.x;
        self.velocity.y = planar.y;

        if !self.grounded {
            self.velocity.z -= GRAVITY * dt;
        }

        self.position += self.velocity * dt;

        if self.position.z <= CAPSULE_HALF_HEIGHT && self.velocity.z <= 0.0 {
            self.position.z = CAPSULE_HALF_HEIGHT;
            self.velocity.z = 0.0;
            self.grounded = true;
        }
    }
}

impl MovementIntegrator for HeadlessMover {
    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += direction * scale;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn jump(&mut self) {
        if self.grounded {
            self.velocity.z = JUMP_VELOCITY;
            self.grounded = false;
        }
    }

    // Held jump state only matters to integrators with variable jump height
    fn stop_jumping(&mut self) {}
}

/// A spawned effect as recorded by `RecordingSpawner`
#[derive(Debug, Clone, Copy)]
pub struct SpawnedEffect {
    pub prototype: EffectPrototype,
    pub location: Vec3,
    pub yaw: f32,
    pub owner: Entity,
}

/// Records spawn requests instead of instantiating engine actors
#[derive(Default)]
pub struct RecordingSpawner {
    pub spawned: Vec<SpawnedEffect>,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EffectSpawner for RecordingSpawner {
    fn spawn(&mut self, prototype: EffectPrototype, location: Vec3, yaw: f32, owner: Entity) {
        self.spawned.push(SpawnedEffect { prototype, location, yaw, owner });
    }
}
