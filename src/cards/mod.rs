//! Card system: catalog, themes, and dealing.
//!
//! ## Key Types
//!
//! - `CardTypeId`: Which symbol a card shows; two cards match when equal
//! - `CardType`: Static catalog entry (key, label, display metadata)
//! - `Theme`: Closed set of catalogs (jobs, animals, space)
//! - `Position`: Fixed board slot (0..16)
//! - `Deck` / `DeckCard`: The dealt board

pub mod definition;
pub mod deck;
pub mod theme;

pub use definition::{CardDisplay, CardType, CardTypeId, Position, BOARD_SIZE, PAIRS_PER_GAME};
pub use deck::{deal, Deck, DeckCard};
pub use theme::{CardBack, Theme};
