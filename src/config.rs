use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::keymap::DotMap;
use crate::types::DotIndex;

/// Default chord window: keys arriving less than 50 ms apart share a chord.
pub const DEFAULT_DOT_DELAY: Duration = Duration::from_millis(50);

/// Host-editable chord settings.
///
/// Serialized as JSON. Missing fields take their defaults, so a document
/// containing only `{"blank_for_space": false}` is valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Emit the blank cell (U+2800) instead of a plain space.
    pub blank_for_space: bool,
    /// Chord window in seconds.
    pub dot_delay_secs: f64,
    /// Single-character key to dot number.
    pub keys: BTreeMap<String, u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blank_for_space: true,
            dot_delay_secs: DEFAULT_DOT_DELAY.as_secs_f64(),
            keys: DotMap::default()
                .iter()
                .map(|(key, dot)| (key.to_string(), dot.get()))
                .collect(),
        }
    }
}

impl Config {
    /// Parses and validates a JSON document: the delay and every key binding
    /// are checked before the config is returned.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.dot_delay()?;
        config.dot_map()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The chord window, rejecting negative or non-finite values.
    pub fn dot_delay(&self) -> ConfigResult<Duration> {
        Duration::try_from_secs_f64(self.dot_delay_secs)
            .map_err(|_| ConfigError::InvalidDelay(self.dot_delay_secs))
    }

    /// Builds the dot mapping, validating every entry.
    pub fn dot_map(&self) -> ConfigResult<DotMap> {
        let mut map = DotMap::empty();
        for (key, &dot) in &self.keys {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(ConfigError::InvalidKey(key.clone()));
            };
            map.bind(c, DotIndex::new(dot)?)?;
        }
        Ok(map)
    }

    pub fn with_dot_map(mut self, map: &DotMap) -> Self {
        self.keys = map
            .iter()
            .map(|(key, dot)| (key.to_string(), dot.get()))
            .collect();
        self
    }
}
