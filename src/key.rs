use crate::types::DotIndex;

/// How the accumulator treats a single incoming character.
///
/// Every character falls into exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Tab, newline, form-feed, carriage-return or space. Never starts a chord.
    Whitespace,
    /// A key bound to a dot; extends the current chord.
    Dot(DotIndex),
    /// Anything else. Ends the chord and turns chord input off.
    Unmapped,
}

/// The whitespace recognised ahead of the dot mapping.
///
/// Narrower than [`char::is_whitespace`]: only the five
/// characters an ordinary keyboard produces.
pub fn is_chord_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{000C}' | '\r' | ' ')
}
