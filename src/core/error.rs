//! Configuration and data errors.
//!
//! Rejected flips are not errors (see `FlipOutcome`). Malformed catalog keys
//! handed to the engine are reported as `ConfigError`; deserialized seats and
//! decks that break the board's invariants are reported as `StateError`.

use thiserror::Error;

use crate::cards::CardTypeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
    #[error("Unknown game mode: {0}")]
    UnknownMode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid seat number: {0}")]
    InvalidSeat(u8),
    #[error("A deck holds exactly 16 cards, got {0}")]
    WrongDeckSize(usize),
    #[error("{card_type} appears {copies} times, expected a pair")]
    UnpairedCard { card_type: CardTypeId, copies: usize },
}
