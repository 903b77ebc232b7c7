use std::time::Duration;

use tracing::{debug, trace};

use crate::config::{Config, DEFAULT_DOT_DELAY};
use crate::error::ConfigResult;
use crate::key::KeyClass;
use crate::keymap::DotMap;
use crate::traits::EventSource;
use crate::types::{BLANK_PATTERN, ChordOutcome, Dots};

/// Turns bursts of keystrokes into Braille cells.
///
/// The engine holds only configuration. Each call to
/// [`handle_char`](Self::handle_char) builds one chord from scratch, so no
/// state carries over between chords.
#[derive(Debug, Clone)]
pub struct ChordEngine {
    dot_map: DotMap,
    dot_delay: Duration,
    blank_for_space: bool,
}

#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    pub dot_delay: Duration,
    pub blank_for_space: bool,
    pub bound_keys: usize,
}

pub struct ChordEngineBuilder {
    dot_map: DotMap,
    dot_delay: Duration,
    blank_for_space: bool,
}

impl Default for ChordEngineBuilder {
    fn default() -> Self {
        Self {
            dot_map: DotMap::default(),
            dot_delay: DEFAULT_DOT_DELAY,
            blank_for_space: true,
        }
    }
}

impl ChordEngineBuilder {
    pub fn dot_map(mut self, dot_map: DotMap) -> Self {
        self.dot_map = dot_map;
        self
    }

    pub fn dot_delay(mut self, dot_delay: Duration) -> Self {
        self.dot_delay = dot_delay;
        self
    }

    pub fn blank_for_space(mut self, blank_for_space: bool) -> Self {
        self.blank_for_space = blank_for_space;
        self
    }

    pub fn build(self) -> ChordEngine {
        ChordEngine {
            dot_map: self.dot_map,
            dot_delay: self.dot_delay,
            blank_for_space: self.blank_for_space,
        }
    }
}

impl Default for ChordEngine {
    fn default() -> Self {
        ChordEngineBuilder::default().build()
    }
}

impl ChordEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ChordEngineBuilder {
        ChordEngineBuilder::default()
    }

    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        Ok(Self::builder()
            .dot_map(config.dot_map()?)
            .dot_delay(config.dot_delay()?)
            .blank_for_space(config.blank_for_space)
            .build())
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            dot_delay: self.dot_delay,
            blank_for_space: self.blank_for_space,
            bound_keys: self.dot_map.len(),
        }
    }

    pub fn dot_map(&self) -> &DotMap {
        &self.dot_map
    }

    pub fn dot_delay(&self) -> Duration {
        self.dot_delay
    }

    pub fn blank_for_space(&self) -> bool {
        self.blank_for_space
    }

    /// Processes `first` and any keys that follow it inside the chord window.
    ///
    /// Whitespace is emitted at once without starting a chord. A mapped key
    /// starts a chord that keeps absorbing mapped keys until `events` stays
    /// silent for a full window; the finished cell is emitted and chord input
    /// stays on. An unmapped key ends the chord early: any cell built so far
    /// is emitted, then the key itself, and the outcome asks the host to
    /// deactivate.
    pub fn handle_char<S: EventSource + ?Sized>(
        &self,
        first: char,
        events: &mut S,
    ) -> ChordOutcome {
        if let KeyClass::Whitespace = self.dot_map.classify(first) {
            let out = if first == ' ' && self.blank_for_space {
                BLANK_PATTERN
            } else {
                first
            };
            return ChordOutcome::emit(vec![out]);
        }

        let mut dots = Dots::empty();
        let mut pending = first;
        loop {
            match self.dot_map.classify(pending) {
                KeyClass::Dot(dot) => {
                    dots.insert(Dots::from(dot));
                    trace!(key = ?pending, dot = dot.get(), %dots, "dot folded");
                }
                // Whitespace inside a chord ends it like any other unbound key.
                KeyClass::Whitespace | KeyClass::Unmapped => {
                    debug!(key = ?pending, %dots, "unmapped key, leaving chord input");
                    let output = if dots.is_empty() {
                        vec![pending]
                    } else {
                        vec![dots.to_char(), pending]
                    };
                    return ChordOutcome::exit(output);
                }
            }

            match events.wait_for_event(self.dot_delay) {
                Some(next) => pending = next,
                None => {
                    debug!(%dots, cell = %dots.to_char(), "chord complete");
                    return ChordOutcome::emit(vec![dots.to_char()]);
                }
            }
        }
    }
}
