//! Card types and board positions.
//!
//! `CardType` holds the immutable catalog data for one symbol in a theme.
//! A dealt game holds two `DeckCard`s per type, each at a fixed `Position`.

use serde::{Deserialize, Serialize};

/// Number of distinct card types per theme.
pub const PAIRS_PER_GAME: usize = 8;

/// Number of cards on the 4×4 board.
pub const BOARD_SIZE: usize = PAIRS_PER_GAME * 2;

/// Identifier of a card type within its theme (0..8).
///
/// Two cards match when they share a `CardTypeId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardTypeId(pub u8);

impl CardTypeId {
    /// Create a new card type ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardType({})", self.0)
    }
}

/// A slot on the board (0..16, row-major over the 4×4 grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u8);

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Slot index into the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this slot exists on the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.index() < BOARD_SIZE
    }

    /// Grid row (0..4).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 4
    }

    /// Grid column (0..4).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.0 % 4
    }

    /// Every board slot in order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).map(Position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display metadata. Opaque to the engine; forwarded to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardDisplay {
    /// Icon name.
    pub icon: &'static str,
    /// Foreground colour class.
    pub color: &'static str,
    /// Background colour class.
    pub background: &'static str,
}

/// Static catalog entry for one card symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardType {
    /// Position of this type in its theme's catalog.
    pub id: CardTypeId,
    /// Symbolic key, unique within the theme (e.g. `"chef"`).
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Rendering hints.
    pub display: CardDisplay,
}
