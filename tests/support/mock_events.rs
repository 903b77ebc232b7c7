use std::collections::VecDeque;
use std::time::Duration;

use braille_chord::{ChordMode, EventSource};

/// Keystrokes on a virtual clock.
///
/// Each key carries the gap since the previous key. A wait succeeds only when
/// that gap is strictly shorter than the timeout, so a gap equal to the chord
/// window splits the chord. Nothing actually sleeps.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<(Duration, char)>,
    waits: Vec<Duration>,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every character of `text`, each `gap` after the one before.
    pub fn burst(text: &str, gap: Duration) -> Self {
        Self::new().then_burst(text, gap)
    }

    pub fn then(mut self, gap: Duration, key: char) -> Self {
        self.keys.push_back((gap, key));
        self
    }

    pub fn then_burst(mut self, text: &str, gap: Duration) -> Self {
        self.keys.extend(text.chars().map(|c| (gap, c)));
        self
    }

    /// The host's blocking read: takes the next key whatever its gap.
    pub fn next_key(&mut self) -> Option<char> {
        self.keys.pop_front().map(|(_, c)| c)
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    /// Every timeout the engine has waited with, in order.
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }
}

impl EventSource for ScriptedKeys {
    fn wait_for_event(&mut self, timeout: Duration) -> Option<char> {
        self.waits.push(timeout);
        match self.keys.front() {
            Some(&(gap, _)) if gap < timeout => self.next_key(),
            _ => None,
        }
    }
}

/// Drives `mode` the way a host would until the script runs out.
pub fn type_through(mode: &mut ChordMode, keys: &mut ScriptedKeys) -> String {
    let mut out = String::new();
    while let Some(first) = keys.next_key() {
        out.extend(mode.feed(first, keys));
    }
    out
}
