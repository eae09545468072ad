//! The computer seat: a policy plus the memory it reasons over.

use tracing::debug;

use super::memory::CpuMemory;
use super::policy::{CpuPolicy, RememberingPolicy, TurnPlan};
use crate::cards::{CardTypeId, Position};
use crate::core::{GameRng, GameState};

/// Computer opponent state for one engine.
///
/// Memory is the only state it keeps, and it is wiped on every deal.
#[derive(Clone, Debug, Default)]
pub struct ComputerOpponent<P = RememberingPolicy> {
    policy: P,
    memory: CpuMemory,
}

impl<P: CpuPolicy> ComputerOpponent<P> {
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            memory: CpuMemory::new(),
        }
    }

    #[must_use]
    pub fn memory(&self) -> &CpuMemory {
        &self.memory
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Record a card that was turned face-up by either seat.
    pub fn observe(&mut self, position: Position, card_type: CardTypeId) {
        self.memory.observe(position, card_type);
    }

    pub fn reset(&mut self) {
        self.memory.reset();
    }

    /// Plan the computer's turn.
    ///
    /// Panics if nothing can be flipped: the engine only asks while pairs
    /// remain, so an empty board here is a broken invariant.
    pub fn plan_turn(&self, state: &GameState, rng: &mut GameRng) -> TurnPlan {
        let Some(plan) = self.policy.plan_turn(&self.memory, state, rng) else {
            panic!(
                "CPU found no card to flip with {} pairs matched",
                state.matched().len()
            );
        };
        debug!(
            first = %plan.first,
            planned_second = ?plan.second,
            remembered = self.memory.len(),
            "cpu planned turn"
        );
        plan
    }

    /// Choose the second flip after the first card is face-up.
    ///
    /// Panics under the same conditions as `plan_turn`.
    pub fn second_flip(&self, state: &GameState, first: Position, rng: &mut GameRng) -> Position {
        let Some(second) = self.policy.second_flip(&self.memory, state, first, rng) else {
            panic!("CPU found no second card to flip after {first}");
        };
        debug!(%first, %second, "cpu chose second flip");
        second
    }
}
