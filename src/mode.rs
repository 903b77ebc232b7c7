use tracing::debug;

use crate::engine::ChordEngine;
use crate::traits::EventSource;
use crate::types::Activation;

/// Host-side chord input state: an on/off switch in front of a [`ChordEngine`].
///
/// The engine decides when chord input should end; this type owns the flag
/// and applies that decision.
#[derive(Debug, Clone, Default)]
pub struct ChordMode {
    active: bool,
    engine: ChordEngine,
}

impl ChordMode {
    /// Starts inactive.
    pub fn new(engine: ChordEngine) -> Self {
        Self {
            active: false,
            engine,
        }
    }

    pub fn engine(&self) -> &ChordEngine {
        &self.engine
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enable(&mut self) {
        if !self.active {
            debug!("chord input on");
        }
        self.active = true;
    }

    /// Turning off an inactive mode is a no-op.
    pub fn disable(&mut self) {
        if self.active {
            debug!("chord input off");
        }
        self.active = false;
    }

    /// Flips the mode and returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.active {
            self.disable();
        } else {
            self.enable();
        }
        self.active
    }

    /// Routes one keystroke.
    ///
    /// While inactive the key passes through untouched and `events` is not
    /// read. While active the engine handles the chord and may switch the
    /// mode off.
    pub fn feed<S: EventSource + ?Sized>(&mut self, first: char, events: &mut S) -> Vec<char> {
        if !self.active {
            return vec![first];
        }
        let outcome = self.engine.handle_char(first, events);
        if outcome.activation == Activation::Deactivate {
            self.disable();
        }
        outcome.output
    }
}
