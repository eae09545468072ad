//! Decision policies for the computer seat.
//!
//! A policy is consulted twice per CPU turn: once to plan the turn (first
//! flip, and the second when it already knows a pair), and once after the
//! first card is face-up if the second flip was left open.
//!
//! Policies are pure: they read the memory map and the board and draw
//! tie-breaks from the supplied RNG. They never mutate the game; their
//! picks go through the same validation as human taps.

use serde::{Deserialize, Serialize};

use super::memory::CpuMemory;
use crate::cards::Position;
use crate::core::{GameRng, GameState};

/// What the computer intends to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPlan {
    pub first: Position,
    /// Decided up front when a whole pair is remembered.
    pub second: Option<Position>,
}

/// Policy for choosing the computer's flips.
pub trait CpuPolicy {
    /// Plan a turn. Returns `None` only if no card can be flipped.
    fn plan_turn(&self, memory: &CpuMemory, state: &GameState, rng: &mut GameRng)
        -> Option<TurnPlan>;

    /// Choose the second flip after `first` is face-up and remembered.
    fn second_flip(
        &self,
        memory: &CpuMemory,
        state: &GameState,
        first: Position,
        rng: &mut GameRng,
    ) -> Option<Position>;
}

// =============================================================================
// Remembering Policy
// =============================================================================

/// Exploit remembered pairs, otherwise explore unseen cards.
///
/// 1. A remembered, unfound pair is flipped outright.
/// 2. Otherwise the first flip is a random never-seen card, falling back to
///    any face-down card once everything has been seen.
/// 3. The second flip takes the first card's remembered partner if there is
///    one, else a random face-down card.
#[derive(Clone, Copy, Debug, Default)]
pub struct RememberingPolicy;

impl CpuPolicy for RememberingPolicy {
    fn plan_turn(
        &self,
        memory: &CpuMemory,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Option<TurnPlan> {
        if let Some((first, second)) = memory.known_pair(state) {
            return Some(TurnPlan { first, second: Some(second) });
        }

        let available: Vec<Position> = state.flippable().collect();
        let unseen: Vec<Position> = available
            .iter()
            .copied()
            .filter(|&p| !memory.remembers(p))
            .collect();

        let candidates = if unseen.is_empty() { &available } else { &unseen };
        rng.choose(candidates)
            .map(|&first| TurnPlan { first, second: None })
    }

    fn second_flip(
        &self,
        memory: &CpuMemory,
        state: &GameState,
        first: Position,
        rng: &mut GameRng,
    ) -> Option<Position> {
        let partner = memory
            .get(first)
            .and_then(|card_type| memory.partner_of(state, first, card_type));
        if partner.is_some() {
            return partner;
        }

        let remaining: Vec<Position> = state.flippable().filter(|&p| p != first).collect();
        rng.choose(&remaining).copied()
    }
}
