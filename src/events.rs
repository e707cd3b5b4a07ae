//! Gameplay event system for decoupled communication between systems.
//!
//! Systems emit events; the harness (logging, UI, future VFX hooks) consumes
//! them at the end of the frame without the systems knowing who listens.

use crate::engine::HandSocket;
use hecs::Entity;

/// Events the character systems can emit
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A character took damage and survived
    DamageTaken {
        entity: Entity,
        amount: f32,
        remaining: f32,
    },
    /// A character's health reached zero
    Died { entity: Entity },
    /// A spell effect was spawned from a hand socket
    SpellCast {
        entity: Entity,
        hand: HandSocket,
        mana_remaining: f32,
    },
    /// A jump was initiated
    Jumped { entity: Entity },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
