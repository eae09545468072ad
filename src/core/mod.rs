//! Core engine types: seats, modes, state, RNG, configuration, errors.
//!
//! These are the building blocks shared by the rules, the CPU and the
//! engine. Nothing here schedules timers or talks to a presentation layer.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, GameMode};
pub use error::{ConfigError, StateError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase, Resolution};
