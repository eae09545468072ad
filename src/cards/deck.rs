//! Dealing: building a shuffled, paired deck from a theme.
//!
//! `deal` lays two copies of every card type in catalog order, shuffles them
//! with Fisher–Yates, and pins each card to the slot it landed in. Positions
//! never change after the deal.

use serde::{Deserialize, Serialize};

use super::definition::{CardTypeId, Position, BOARD_SIZE};
use super::theme::Theme;
use crate::core::{GameRng, StateError};

/// One physical card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckCard {
    /// Symbol shown when face-up.
    pub card_type: CardTypeId,
    /// Fixed slot on the board.
    pub position: Position,
}

/// The 16 dealt cards, indexed by position.
///
/// Serialized as the card types in position order. Loading goes through
/// `try_from_types`, so a stored deck is held to the same pairing rule as a
/// dealt one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardTypeId>", into = "Vec<CardTypeId>")]
pub struct Deck {
    cards: Vec<DeckCard>,
}

impl Deck {
    /// Lay out cards in the given order, assigning positions by index.
    ///
    /// Panics unless every type appears exactly twice across 16 cards.
    #[must_use]
    pub fn from_types(types: &[CardTypeId]) -> Self {
        match Self::try_from_types(types) {
            Ok(deck) => deck,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like `from_types`, reporting a malformed layout instead of panicking.
    pub fn try_from_types(types: &[CardTypeId]) -> Result<Self, StateError> {
        if types.len() != BOARD_SIZE {
            return Err(StateError::WrongDeckSize(types.len()));
        }
        for &card_type in types {
            let copies = types.iter().filter(|&&o| o == card_type).count();
            if copies != 2 {
                return Err(StateError::UnpairedCard { card_type, copies });
            }
        }

        let cards = types
            .iter()
            .enumerate()
            .map(|(slot, &card_type)| DeckCard {
                card_type,
                position: Position::new(slot as u8),
            })
            .collect();

        Ok(Self { cards })
    }

    /// Card at a position, or `None` off the board.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&DeckCard> {
        self.cards.get(position.index())
    }

    /// Card type at a position, or `None` off the board.
    #[must_use]
    pub fn card_type(&self, position: Position) -> Option<CardTypeId> {
        self.get(position).map(|c| c.card_type)
    }

    /// Both positions holding a card type.
    pub fn positions_of(&self, card_type: CardTypeId) -> impl Iterator<Item = Position> + '_ {
        self.cards
            .iter()
            .filter(move |c| c.card_type == card_type)
            .map(|c| c.position)
    }

    /// Number of cards (always 16).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckCard> {
        self.cards.iter()
    }
}

impl TryFrom<Vec<CardTypeId>> for Deck {
    type Error = StateError;

    fn try_from(types: Vec<CardTypeId>) -> Result<Self, Self::Error> {
        Self::try_from_types(&types)
    }
}

impl From<Deck> for Vec<CardTypeId> {
    fn from(deck: Deck) -> Self {
        deck.cards.into_iter().map(|c| c.card_type).collect()
    }
}

/// Deal a fresh board for a theme.
///
/// Deterministic for a given RNG state.
///
/// ```
/// use memory_match::cards::{deal, Theme};
/// use memory_match::core::GameRng;
///
/// let deck = deal(Theme::Jobs, &mut GameRng::new(1));
/// assert_eq!(deck.len(), 16);
/// assert_eq!(deal(Theme::Jobs, &mut GameRng::new(1)), deck);
/// ```
#[must_use]
pub fn deal(theme: Theme, rng: &mut GameRng) -> Deck {
    let mut types: Vec<CardTypeId> = theme
        .cards()
        .iter()
        .chain(theme.cards().iter())
        .map(|c| c.id)
        .collect();

    rng.shuffle(&mut types);

    Deck::from_types(&types)
}
