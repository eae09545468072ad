//! Game state: the single source of truth for one dealt game.
//!
//! ## Phases
//!
//! ```text
//! Dealing -> AwaitingFirstFlip -> AwaitingSecondFlip -> Resolving
//!                ^                                        |
//!                |---------------- match -----------------|
//!                |                                        |
//!                '-- settle -- TurnSwitchPending <- mismatch
//!
//! Resolving -> Won once every type is matched (terminal)
//! ```
//!
//! Only the engine mutates a `GameState`. Everything else sees a clone or
//! a borrowed `&GameState`. `matched` is an `im` set so clones are O(1).

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameMode;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{CardTypeId, Deck, Position, Theme, PAIRS_PER_GAME};
use crate::rules::GameResult;

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Building the deck. Never observable after `GameState::deal` returns.
    Dealing,
    /// No card face-up; waiting for the first flip of an attempt.
    AwaitingFirstFlip,
    /// One card face-up; waiting for the second.
    AwaitingSecondFlip,
    /// Two cards face-up, being compared.
    Resolving,
    /// Mismatched pair still showing; waiting for the settle timer.
    TurnSwitchPending,
    /// All pairs found. Terminal.
    Won,
}

impl Phase {
    /// Whether a new flip can be accepted in this phase.
    #[must_use]
    pub const fn accepts_flip(self) -> bool {
        matches!(self, Phase::AwaitingFirstFlip | Phase::AwaitingSecondFlip)
    }
}

/// Result of comparing the two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Same type. `game_over` is set when this was the last pair.
    Match { card_type: CardTypeId, game_over: bool },
    /// Different types. The pair stays up until `settle`.
    Mismatch,
}

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    theme: Theme,
    mode: GameMode,
    deck: Deck,

    /// Face-up, unresolved positions. Never more than two.
    revealed: SmallVec<[Position; 2]>,

    /// Fully found card types.
    matched: OrdSet<CardTypeId>,

    /// Completed two-flip attempts.
    move_count: u32,

    /// Active seat. Stays `ONE` in solo games.
    turn: PlayerId,

    /// Pairs found per seat. Untouched in solo games.
    scores: PlayerMap<u32>,

    phase: Phase,
    winner: Option<GameResult>,
}

impl GameState {
    /// Start a game on an already dealt deck.
    #[must_use]
    pub fn deal(theme: Theme, mode: GameMode, deck: Deck) -> Self {
        let mut state = Self {
            theme,
            mode,
            deck,
            revealed: SmallVec::new(),
            matched: OrdSet::new(),
            move_count: 0,
            turn: PlayerId::ONE,
            scores: PlayerMap::default(),
            phase: Phase::Dealing,
            winner: None,
        };
        state.phase = Phase::AwaitingFirstFlip;
        state
    }

    // === Accessors ===

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn revealed(&self) -> &[Position] {
        &self.revealed
    }

    #[must_use]
    pub fn matched(&self) -> &OrdSet<CardTypeId> {
        &self.matched
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<&GameResult> {
        self.winner.as_ref()
    }

    // === Queries ===

    /// Whether the card at `position` has been found.
    #[must_use]
    pub fn is_matched(&self, position: Position) -> bool {
        self.deck
            .card_type(position)
            .is_some_and(|t| self.matched.contains(&t))
    }

    /// Whether the card at `position` is face-up (revealed or matched).
    #[must_use]
    pub fn is_face_up(&self, position: Position) -> bool {
        self.revealed.contains(&position) || self.is_matched(position)
    }

    /// Positions that may still be flipped: not revealed, not matched.
    pub fn flippable(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| !self.is_face_up(p))
    }

    /// Whether every pair has been found.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.matched.len() == PAIRS_PER_GAME
    }

    // === Transitions ===

    /// Turn a card face-up. Caller has validated the flip.
    ///
    /// Returns `true` when this was the second card of the attempt, in which
    /// case the state is left in `Resolving` and `resolve` must follow.
    pub(crate) fn reveal(&mut self, position: Position) -> bool {
        debug_assert!(self.phase.accepts_flip());
        debug_assert!(self.revealed.len() < 2);

        self.revealed.push(position);
        if self.revealed.len() == 2 {
            self.move_count += 1;
            self.phase = Phase::Resolving;
            true
        } else {
            self.phase = Phase::AwaitingSecondFlip;
            false
        }
    }

    /// Compare the two revealed cards.
    ///
    /// A match scores for the active seat and keeps the turn. A mismatch
    /// leaves both cards up in `TurnSwitchPending` until `settle`.
    pub(crate) fn resolve(&mut self) -> Resolution {
        debug_assert_eq!(self.phase, Phase::Resolving);

        let types = (
            self.deck.card_type(self.revealed[0]),
            self.deck.card_type(self.revealed[1]),
        );
        let card_type = match types {
            (Some(a), Some(b)) if a == b => a,
            _ => {
                self.phase = Phase::TurnSwitchPending;
                return Resolution::Mismatch;
            }
        };

        self.matched.insert(card_type);
        self.revealed.clear();
        if self.mode.is_competitive() {
            self.scores[self.turn] += 1;
        }

        let game_over = self.all_matched();
        if game_over {
            self.phase = Phase::Won;
            self.winner = self.decide_winner();
        } else {
            self.phase = Phase::AwaitingFirstFlip;
        }

        Resolution::Match { card_type, game_over }
    }

    /// Flip a mismatched pair back down and pass the turn.
    pub(crate) fn settle(&mut self) {
        debug_assert_eq!(self.phase, Phase::TurnSwitchPending);

        self.revealed.clear();
        self.phase = Phase::AwaitingFirstFlip;
        if self.mode.is_competitive() {
            self.turn = self.turn.other();
        }
    }

    fn decide_winner(&self) -> Option<GameResult> {
        if !self.mode.is_competitive() {
            return None;
        }
        let (one, two) = (self.scores[PlayerId::ONE], self.scores[PlayerId::TWO]);
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}
