//! # memory-match
//!
//! Game engine for a 4×4 card-matching ("memory") game.
//!
//! ## Rules
//!
//! Sixteen cards, eight pairs, dealt face-down. Each attempt flips two
//! cards: a match stays face-up and the same player goes again, a mismatch
//! is shown for a moment and then turned back. Three modes:
//!
//! - **Solo**: moves are counted, nobody wins or loses.
//! - **Two players**: pairs score for whoever found them; a mismatch passes
//!   the turn. Higher score wins, equal scores draw.
//! - **Vs CPU**: seat 2 is a computer that remembers every card it has seen.
//!
//! ## Architecture
//!
//! - **Single writer**: `Engine` owns the `GameState` and is the only thing
//!   that mutates it. Renderers get a `Snapshot`.
//! - **Logical timers**: settle and CPU delays are scheduled on a logical
//!   clock that the host advances. Dealing cancels whatever is pending.
//! - **Deterministic**: all randomness flows from one seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: Seats, modes, state, RNG, configuration, errors
//! - `cards`: Catalog, themes, dealing
//! - `rules`: Flip validation and outcomes
//! - `cpu`: Memory and decision policy for the computer seat
//! - `engine`: Engine, timers, snapshots

pub mod core;
pub mod cards;
pub mod rules;
pub mod cpu;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EngineConfig, GameMode, GameRng, GameRngState, GameState, Phase, PlayerId,
    PlayerMap, StateError,
};

pub use crate::cards::{
    deal, CardBack, CardDisplay, CardType, CardTypeId, Deck, DeckCard, Position, Theme,
    BOARD_SIZE, PAIRS_PER_GAME,
};

pub use crate::rules::{check_flip, FlipOutcome, FlipSource, GameResult, Rejection};

pub use crate::cpu::{ComputerOpponent, CpuMemory, CpuPolicy, RememberingPolicy, TurnPlan};

pub use crate::engine::{CardView, Engine, Snapshot, TimerKind};
