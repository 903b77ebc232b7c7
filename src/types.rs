use std::fmt;

use crate::error::{ConfigError, ConfigResult};

/// The empty Braille cell, U+2800.
///
/// Every cell glyph is this code point with the raised dots OR-ed into the
/// low eight bits, so it doubles as the numeric base of a chord.
pub const BLANK_PATTERN: char = '\u{2800}';

/// A dot position within a Braille cell, 1 through 8.
///
/// Dots 1-3 run down the left column, 4-6 down the right, and 7/8 sit
/// below them in eight-dot Braille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DotIndex(pub(crate) u8);

impl DotIndex {
    /// Validates `n` as a dot number.
    pub fn new(n: u8) -> ConfigResult<Self> {
        if (1..=8).contains(&n) {
            Ok(Self(n))
        } else {
            Err(ConfigError::InvalidDot(n))
        }
    }

    /// The 1-based dot number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The bit this dot sets in a cell: dot 1 is bit 0, dot 8 is bit 7.
    pub fn bit(self) -> u8 {
        1 << (self.0 - 1)
    }
}

impl TryFrom<u8> for DotIndex {
    type Error = ConfigError;

    fn try_from(n: u8) -> ConfigResult<Self> {
        Self::new(n)
    }
}

bitflags::bitflags! {
    /// The set of raised dots in one Braille cell.
    ///
    /// Inserting a dot that is already present leaves the set unchanged, so a
    /// key repeated inside one chord is harmless.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Dots: u8 {
        const DOT1 = 0b0000_0001;
        const DOT2 = 0b0000_0010;
        const DOT3 = 0b0000_0100;
        const DOT4 = 0b0000_1000;
        const DOT5 = 0b0001_0000;
        const DOT6 = 0b0010_0000;
        const DOT7 = 0b0100_0000;
        const DOT8 = 0b1000_0000;
    }
}

impl Dots {
    /// The Braille glyph for this cell.
    pub fn to_char(self) -> char {
        // U+2800..=U+28FF is fully assigned, so every bit pattern is a valid char.
        char::from_u32(BLANK_PATTERN as u32 | u32::from(self.bits())).unwrap_or(BLANK_PATTERN)
    }

    /// Reads the raised dots back out of a Braille glyph.
    ///
    /// Returns `None` for anything outside the Braille Patterns block.
    pub fn from_char(c: char) -> Option<Self> {
        let offset = (c as u32).checked_sub(BLANK_PATTERN as u32)?;
        u8::try_from(offset).ok().map(Self::from_bits_retain)
    }

    /// Iterates the raised dots in ascending order.
    pub fn dot_indices(self) -> impl Iterator<Item = DotIndex> {
        (1..=8u8)
            .map(DotIndex)
            .filter(move |d| self.bits() & d.bit() != 0)
    }
}

impl From<DotIndex> for Dots {
    fn from(dot: DotIndex) -> Self {
        Self::from_bits_retain(dot.bit())
    }
}

impl fmt::Display for Dots {
    /// Dot numbers in ascending order (`⠏` is `1234`), or `-` for a blank cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for dot in self.dot_indices() {
            write!(f, "{}", dot.get())?;
        }
        Ok(())
    }
}

/// What the host should do with chord input after an outcome is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Stay in chord input; the next keystroke starts a new chord.
    Continue,
    /// Turn chord input off. Issued exactly when an unmapped key ends a chord.
    Deactivate,
}

/// The result of one accumulator invocation.
///
/// `output` holds zero, one or two characters in the order the host should
/// insert them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordOutcome {
    /// Characters to insert, in emission order.
    pub output: Vec<char>,
    /// Whether chord input stays on.
    pub activation: Activation,
}

impl ChordOutcome {
    pub(crate) fn emit(output: Vec<char>) -> Self {
        Self {
            output,
            activation: Activation::Continue,
        }
    }

    pub(crate) fn exit(output: Vec<char>) -> Self {
        Self {
            output,
            activation: Activation::Deactivate,
        }
    }

    pub fn is_deactivate(&self) -> bool {
        self.activation == Activation::Deactivate
    }

    /// The emitted characters as a string, ready for insertion.
    pub fn as_string(&self) -> String {
        self.output.iter().collect()
    }
}
