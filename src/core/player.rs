//! Player seats and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. A game always has two seats: seat 1 is the
//! human who moves first, seat 2 is the second human (two-player mode) or
//! the computer (vs-CPU mode). Solo games only ever use seat 1.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by a fixed array for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::StateError;

/// Seat identifier. The raw value is the 1-based seat number.
///
/// Deserialization goes through `from_number`, so only seats 1 and 2 load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first seat. Always moves first.
    pub const ONE: PlayerId = PlayerId(1);

    /// The second seat (second human or the computer).
    pub const TWO: PlayerId = PlayerId(2);

    /// Both seats, in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::ONE, PlayerId::TWO];

    /// Look up a seat by its 1-based number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 | 2 => Some(Self(number)),
            _ => None,
        }
    }

    /// The 1-based seat number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// 0-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The opposing seat.
    ///
    /// ```
    /// use memory_match::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ONE.other(), PlayerId::TWO);
    /// assert_eq!(PlayerId::TWO.other(), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self.0 {
            1 => PlayerId::TWO,
            _ => PlayerId::ONE,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = StateError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(StateError::InvalidSeat(number))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use memory_match::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::default();
/// scores[PlayerId::TWO] += 1;
///
/// assert_eq!(scores[PlayerId::ONE], 0);
/// assert_eq!(scores[PlayerId::TWO], 1);
/// assert_eq!(scores.total(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }
}

impl PlayerMap<u32> {
    /// Sum over both seats.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data.iter().sum()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.number(), 1);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(format!("{}", PlayerId::TWO), "Player 2");
    }

    #[test]
    fn test_from_number() {
        assert_eq!(PlayerId::from_number(1), Some(PlayerId::ONE));
        assert_eq!(PlayerId::from_number(2), Some(PlayerId::TWO));
        assert_eq!(PlayerId::from_number(0), None);
        assert_eq!(PlayerId::from_number(3), None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_seat() {
        assert_eq!(serde_json::to_string(&PlayerId::TWO).unwrap(), "2");
        assert_eq!(serde_json::from_str::<PlayerId>("1").unwrap(), PlayerId::ONE);

        for raw in ["0", "3"] {
            let err = serde_json::from_str::<PlayerId>(raw).unwrap_err();
            assert!(err.to_string().contains("Invalid seat number"), "{err}");
        }
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| u32::from(p.number()) * 10);

        assert_eq!(map[PlayerId::ONE], 10);
        assert_eq!(map[PlayerId::TWO], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::new(|p| p.number());
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::ONE, &1), (PlayerId::TWO, &2)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let mut map: PlayerMap<u32> = PlayerMap::default();
        map[PlayerId::ONE] = 3;

        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
