use std::sync::mpsc::Receiver;
use std::time::Duration;

/// The keystroke feed a chord reads its follow-on keys from.
///
/// Hosts have no key-up events, so arrival time is the only signal that two
/// keys belong to one chord.
pub trait EventSource {
    /// Returns the next character if one arrives within `timeout`, else `None`.
    ///
    /// Must not block longer than `timeout`. A source that has shut down
    /// should answer `None`, which reads as silence.
    fn wait_for_event(&mut self, timeout: Duration) -> Option<char>;
}

// Keystrokes forwarded from an input thread. A disconnected sender is silence.
impl EventSource for Receiver<char> {
    fn wait_for_event(&mut self, timeout: Duration) -> Option<char> {
        self.recv_timeout(timeout).ok()
    }
}
