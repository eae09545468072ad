//! Flip sources, outcomes and game results.

use serde::{Deserialize, Serialize};

use crate::cards::{CardTypeId, Position};
use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Who asked for a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipSource {
    Human,
    Cpu,
}

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Position is not on the board.
    OutOfRange,
    /// A pair is waiting to settle or the computer's turn is scheduled.
    Busy,
    /// The game is over.
    GameOver,
    /// Card is already face-up in the current attempt.
    AlreadyRevealed,
    /// Card's pair has already been found.
    AlreadyMatched,
    /// The source does not own the current turn.
    OutOfTurn,
}

/// What an accepted (or rejected) flip led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Ignored; state unchanged.
    Rejected(Rejection),
    /// First card of an attempt is face-up.
    FirstRevealed { position: Position, card_type: CardTypeId },
    /// Second card matched the first. The same seat moves again.
    Matched { card_type: CardTypeId },
    /// Second card differed. The pair settles after the settle delay.
    Mismatched,
    /// Second card completed the last pair.
    Won { result: Option<GameResult> },
}

impl FlipOutcome {
    /// Whether the flip changed the game.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Rejected(_))
    }
}
