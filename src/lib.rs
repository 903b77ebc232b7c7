pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod keymap;
pub mod mode;
pub mod traits;
pub mod types;

pub use crate::config::{Config, DEFAULT_DOT_DELAY};
pub use crate::engine::{ChordEngine, ChordEngineBuilder, EngineSnapshot};
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::key::{KeyClass, is_chord_whitespace};
pub use crate::keymap::DotMap;
pub use crate::mode::ChordMode;
pub use crate::traits::EventSource;
pub use crate::types::{Activation, BLANK_PATTERN, ChordOutcome, DotIndex, Dots};
