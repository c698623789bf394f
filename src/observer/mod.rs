//! Observers: read-only listeners for game events.
//!
//! Observers are purely informational. Nothing they do feeds back into the
//! game.

pub mod event;
pub mod log;

pub use event::{ChallengeReport, GameEvent};
pub use log::TracingObserver;

/// Receives every event the engine emits, in order.
pub trait Observer {
    fn on_event(&mut self, event: &GameEvent);
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Keeps every event for later inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<GameEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Observer for RecordingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
