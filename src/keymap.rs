use std::collections::HashMap;

use crate::error::{ConfigError, ConfigResult};
use crate::key::{KeyClass, is_chord_whitespace};
use crate::types::DotIndex;

/// Home-row layout: left hand `f d s` for dots 1-3, right hand `j k l` for
/// dots 4-6, pinkies `a` and `;` for dots 7 and 8.
const DEFAULT_BINDINGS: [(char, u8); 8] = [
    ('f', 1),
    ('d', 2),
    ('s', 3),
    ('j', 4),
    ('k', 5),
    ('l', 6),
    ('a', 7),
    (';', 8),
];

/// Maps trigger characters to dot positions.
///
/// Lookup is by exact code point: no case folding and no modifier handling.
/// Several keys may share a dot; each key maps to at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotMap {
    keys: HashMap<char, DotIndex>,
}

impl Default for DotMap {
    fn default() -> Self {
        DEFAULT_BINDINGS
            .iter()
            .map(|&(key, dot)| (key, DotIndex(dot)))
            .collect()
    }
}

/// Collecting cannot fail, so whitespace pairs are dropped; [`DotMap::bind`]
/// is the checked path and rejects them.
impl FromIterator<(char, DotIndex)> for DotMap {
    fn from_iter<I: IntoIterator<Item = (char, DotIndex)>>(iter: I) -> Self {
        Self {
            keys: iter
                .into_iter()
                .filter(|(key, _)| !is_chord_whitespace(*key))
                .collect(),
        }
    }
}

impl DotMap {
    /// A map with no bindings. Every non-whitespace key is unmapped.
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// The default layout without the pinky keys, for six-dot Braille.
    pub fn six_dot() -> Self {
        let mut map = Self::default();
        map.keys.retain(|_, dot| dot.get() <= 6);
        map
    }

    /// Binds `key` to `dot`, returning the dot it was previously bound to.
    pub fn bind(&mut self, key: char, dot: DotIndex) -> ConfigResult<Option<DotIndex>> {
        if is_chord_whitespace(key) {
            return Err(ConfigError::WhitespaceKey(key));
        }
        Ok(self.keys.insert(key, dot))
    }

    pub fn unbind(&mut self, key: char) -> Option<DotIndex> {
        self.keys.remove(&key)
    }

    pub fn lookup(&self, key: char) -> Option<DotIndex> {
        self.keys.get(&key).copied()
    }

    /// Classifies `c`; whitespace is checked before the bindings.
    pub fn classify(&self, c: char) -> KeyClass {
        if is_chord_whitespace(c) {
            return KeyClass::Whitespace;
        }
        match self.lookup(c) {
            Some(dot) => KeyClass::Dot(dot),
            None => KeyClass::Unmapped,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, DotIndex)> {
        self.keys.iter().map(|(&key, &dot)| (key, dot))
    }
}
