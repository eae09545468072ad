//! Read-only view of a game for rendering.
//!
//! Face-down cards do not expose their type, so a renderer holding only a
//! `Snapshot` cannot peek.

use serde::{Deserialize, Serialize};

use crate::cards::{CardBack, CardType, CardTypeId, Position, Theme, PAIRS_PER_GAME};
use crate::core::{GameMode, GameState, Phase, PlayerId, PlayerMap};
use crate::rules::GameResult;

/// One board slot as the renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub position: Position,
    /// Face-up because it is revealed or its pair was found.
    pub face_up: bool,
    /// Its pair was found.
    pub matched: bool,
    /// Symbol, present only while face-up.
    pub card_type: Option<CardTypeId>,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub theme: Theme,
    pub mode: GameMode,
    pub cards: Vec<CardView>,
    pub revealed: Vec<Position>,
    pub matched: Vec<CardTypeId>,
    pub move_count: u32,
    pub turn: PlayerId,
    pub scores: PlayerMap<u32>,
    pub phase: Phase,
    pub winner: Option<GameResult>,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let cards = state
            .deck()
            .iter()
            .map(|card| {
                let matched = state.matched().contains(&card.card_type);
                let face_up = matched || state.revealed().contains(&card.position);
                CardView {
                    position: card.position,
                    face_up,
                    matched,
                    card_type: face_up.then_some(card.card_type),
                }
            })
            .collect();

        Self {
            theme: state.theme(),
            mode: state.mode(),
            cards,
            revealed: state.revealed().to_vec(),
            matched: state.matched().iter().copied().collect(),
            move_count: state.move_count(),
            turn: state.turn(),
            scores: *state.scores(),
            phase: state.phase(),
            winner: state.winner().copied(),
        }
    }
}

impl Snapshot {
    #[must_use]
    pub fn card(&self, position: Position) -> Option<&CardView> {
        self.cards.get(position.index())
    }

    /// Catalog entry for a face-up card.
    #[must_use]
    pub fn face(&self, position: Position) -> Option<&'static CardType> {
        self.card(position)
            .and_then(|view| view.card_type)
            .and_then(|card_type| self.theme.card(card_type))
    }

    /// Pairs found so far.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        PAIRS_PER_GAME
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    #[must_use]
    pub fn card_back(&self) -> CardBack {
        self.theme.card_back()
    }

    /// Scoreboard name for a seat.
    #[must_use]
    pub fn player_label(&self, player: PlayerId) -> &'static str {
        match (player, self.mode) {
            (PlayerId::ONE, _) => "Player 1",
            (_, GameMode::VsCpu) => "CPU",
            _ => "Player 2",
        }
    }

    /// Whose turn it is, for competitive games still in progress.
    #[must_use]
    pub fn turn_banner(&self) -> Option<&'static str> {
        if !self.mode.is_competitive() || self.is_won() {
            return None;
        }
        Some(match (self.turn, self.mode) {
            (PlayerId::ONE, _) => "Player 1's Turn",
            (_, GameMode::VsCpu) => "Computer's Turn...",
            _ => "Player 2's Turn",
        })
    }

    /// Victory text once the game is over.
    #[must_use]
    pub fn outcome_message(&self) -> Option<String> {
        if !self.is_won() {
            return None;
        }
        let message = match self.winner {
            None => format!("You matched all the cards in {} moves.", self.move_count),
            Some(GameResult::Draw) => "It's a Draw!".to_string(),
            Some(GameResult::Winner(PlayerId::ONE)) => "Player 1 Wins!".to_string(),
            Some(GameResult::Winner(_)) if self.mode == GameMode::VsCpu => {
                "Computer Wins!".to_string()
            }
            Some(GameResult::Winner(_)) => "Player 2 Wins!".to_string(),
        };
        Some(message)
    }
}
