//! What the computer has seen.
//!
//! Every accepted flip, by either seat, is recorded. Entries are never
//! removed during a game; found pairs are filtered out at query time by
//! looking at the board.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardTypeId, Position};
use crate::core::GameState;

/// Remembered positions grouped by card type.
pub type MemoryGroups = FxHashMap<CardTypeId, SmallVec<[Position; 2]>>;

/// Position → card type map of every card seen face-up this game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuMemory {
    seen: FxHashMap<Position, CardTypeId>,
}

impl CpuMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a card seen face-up.
    pub fn observe(&mut self, position: Position, card_type: CardTypeId) {
        self.seen.insert(position, card_type);
    }

    /// Forget everything. Called when a new game is dealt.
    pub fn reset(&mut self) {
        self.seen.clear();
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<CardTypeId> {
        self.seen.get(&position).copied()
    }

    #[must_use]
    pub fn remembers(&self, position: Position) -> bool {
        self.seen.contains_key(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Remembered positions that are still face-down and unmatched,
    /// grouped by card type.
    #[must_use]
    pub fn groups(&self, state: &GameState) -> MemoryGroups {
        let mut groups = MemoryGroups::default();
        for (&position, &card_type) in &self.seen {
            if !state.is_face_up(position) {
                groups.entry(card_type).or_default().push(position);
            }
        }
        groups
    }

    /// A fully remembered, unfound pair.
    ///
    /// With several to choose from, the lowest card type wins; positions
    /// come back in ascending order.
    #[must_use]
    pub fn known_pair(&self, state: &GameState) -> Option<(Position, Position)> {
        self.groups(state)
            .into_iter()
            .filter(|(_, positions)| positions.len() == 2)
            .min_by_key(|(card_type, _)| *card_type)
            .map(|(_, positions)| {
                let (a, b) = (positions[0], positions[1]);
                (a.min(b), a.max(b))
            })
    }

    /// Another remembered, face-down position showing `card_type`.
    #[must_use]
    pub fn partner_of(
        &self,
        state: &GameState,
        position: Position,
        card_type: CardTypeId,
    ) -> Option<Position> {
        self.seen
            .iter()
            .filter(|&(&p, &t)| t == card_type && p != position && !state.is_face_up(p))
            .map(|(&p, _)| p)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Theme, PAIRS_PER_GAME};
    use crate::core::GameMode;

    fn paired_state() -> GameState {
        let types: Vec<_> = (0..PAIRS_PER_GAME as u8)
            .flat_map(|t| [CardTypeId::new(t), CardTypeId::new(t)])
            .collect();
        GameState::deal(Theme::Jobs, GameMode::VsCpu, Deck::from_types(&types))
    }

    fn pos(slot: u8) -> Position {
        Position::new(slot)
    }

    #[test]
    fn test_observe_and_reset() {
        let mut memory = CpuMemory::new();
        memory.observe(pos(3), CardTypeId::new(1));
        memory.observe(pos(3), CardTypeId::new(1));

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.get(pos(3)), Some(CardTypeId::new(1)));
        assert!(memory.remembers(pos(3)));
        assert!(!memory.remembers(pos(4)));

        memory.reset();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_known_pair_prefers_lowest_type() {
        let state = paired_state();
        let mut memory = CpuMemory::new();
        memory.observe(pos(7), CardTypeId::new(3));
        memory.observe(pos(6), CardTypeId::new(3));
        memory.observe(pos(5), CardTypeId::new(2));
        memory.observe(pos(4), CardTypeId::new(2));
        memory.observe(pos(0), CardTypeId::new(0));

        assert_eq!(memory.known_pair(&state), Some((pos(4), pos(5))));
    }

    #[test]
    fn test_groups_skip_matched() {
        let mut state = paired_state();
        let mut memory = CpuMemory::new();
        memory.observe(pos(0), CardTypeId::new(0));
        memory.observe(pos(1), CardTypeId::new(0));

        state.reveal(pos(0));
        state.reveal(pos(1));
        state.resolve();

        assert!(memory.groups(&state).is_empty());
        assert_eq!(memory.known_pair(&state), None);
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn test_partner_of() {
        let state = paired_state();
        let mut memory = CpuMemory::new();
        memory.observe(pos(8), CardTypeId::new(4));
        memory.observe(pos(9), CardTypeId::new(4));

        assert_eq!(memory.partner_of(&state, pos(8), CardTypeId::new(4)), Some(pos(9)));
        assert_eq!(memory.partner_of(&state, pos(8), CardTypeId::new(5)), None);
    }
}
