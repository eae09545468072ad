//! Static theme catalog.
//!
//! Themes are a closed set. Each one carries exactly `PAIRS_PER_GAME` card
//! types, ordered so that `cards()[i].id == CardTypeId(i)`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::definition::{CardDisplay, CardType, CardTypeId, PAIRS_PER_GAME};
use crate::core::ConfigError;

/// A named set of card types sharing a visual motif.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Jobs,
    Animals,
    Space,
}

/// Card back used for face-down cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardBack {
    Default,
    Night,
}

const fn card(
    id: u8,
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    color: &'static str,
    background: &'static str,
) -> CardType {
    CardType {
        id: CardTypeId::new(id),
        key,
        label,
        display: CardDisplay { icon, color, background },
    }
}

static JOBS: [CardType; PAIRS_PER_GAME] = [
    card(0, "chef", "Chef", "chef-hat", "text-orange-500", "bg-orange-100"),
    card(1, "doctor", "Doctor", "stethoscope", "text-red-500", "bg-red-100"),
    card(2, "builder", "Builder", "hammer", "text-yellow-600", "bg-yellow-100"),
    card(3, "artist", "Artist", "palette", "text-purple-500", "bg-purple-100"),
    card(4, "mechanic", "Mechanic", "wrench", "text-gray-600", "bg-gray-100"),
    card(5, "pilot", "Pilot", "plane", "text-blue-500", "bg-blue-100"),
    card(6, "teacher", "Teacher", "graduation-cap", "text-indigo-600", "bg-indigo-100"),
    card(7, "driver", "Driver", "truck", "text-green-600", "bg-green-100"),
];

static ANIMALS: [CardType; PAIRS_PER_GAME] = [
    card(0, "cat", "Cat", "cat", "text-orange-500", "bg-orange-100"),
    card(1, "dog", "Dog", "dog", "text-amber-600", "bg-amber-100"),
    card(2, "fish", "Fish", "fish", "text-blue-500", "bg-blue-100"),
    card(3, "rabbit", "Rabbit", "rabbit", "text-pink-500", "bg-pink-100"),
    card(4, "bird", "Bird", "bird", "text-sky-500", "bg-sky-100"),
    card(5, "snail", "Snail", "snail", "text-lime-600", "bg-lime-100"),
    card(6, "turtle", "Turtle", "turtle", "text-emerald-600", "bg-emerald-100"),
    card(7, "bug", "Bug", "bug", "text-rose-500", "bg-rose-100"),
];

static SPACE: [CardType; PAIRS_PER_GAME] = [
    card(0, "sun", "Sun", "sun", "text-yellow-500", "bg-yellow-100"),
    card(1, "earth", "Earth", "globe", "text-blue-500", "bg-blue-100"),
    card(2, "moon", "Moon", "moon", "text-slate-400", "bg-slate-100"),
    card(3, "mars", "Mars", "mars", "text-red-500", "bg-red-100"),
    card(4, "jupiter", "Jupiter", "jupiter", "text-amber-700", "bg-orange-100"),
    card(5, "saturn", "Saturn", "saturn", "text-amber-500", "bg-amber-100"),
    card(6, "rocket", "Rocket", "rocket", "text-purple-500", "bg-purple-100"),
    card(7, "star", "Star", "star", "text-indigo-400", "bg-indigo-100"),
];

impl Theme {
    /// All themes in menu order.
    pub const ALL: [Theme; 3] = [Theme::Jobs, Theme::Animals, Theme::Space];

    /// Canonical catalog key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Theme::Jobs => "jobs",
            Theme::Animals => "animals",
            Theme::Space => "solar",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Theme::Jobs => "Jobs",
            Theme::Animals => "Animals",
            Theme::Space => "Space",
        }
    }

    /// The theme's card types, indexed by `CardTypeId`.
    #[must_use]
    pub fn cards(self) -> &'static [CardType; PAIRS_PER_GAME] {
        match self {
            Theme::Jobs => &JOBS,
            Theme::Animals => &ANIMALS,
            Theme::Space => &SPACE,
        }
    }

    /// Look up a card type. `None` if the id is outside the catalog.
    #[must_use]
    pub fn card(self, id: CardTypeId) -> Option<&'static CardType> {
        self.cards().get(usize::from(id.raw()))
    }

    /// Look up a card type by its symbolic key.
    #[must_use]
    pub fn card_by_key(self, key: &str) -> Option<&'static CardType> {
        self.cards().iter().find(|c| c.key == key)
    }

    /// Which card back this theme shows.
    #[must_use]
    pub const fn card_back(self) -> CardBack {
        match self {
            Theme::Space => CardBack::Night,
            Theme::Jobs | Theme::Animals => CardBack::Default,
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "jobs" => Ok(Theme::Jobs),
            "animals" => Ok(Theme::Animals),
            "solar" | "space" => Ok(Theme::Space),
            other => Err(ConfigError::UnknownTheme(other.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_catalog_ids_match_index() {
        for theme in Theme::ALL {
            for (i, card) in theme.cards().iter().enumerate() {
                assert_eq!(usize::from(card.id.raw()), i, "{theme} card {}", card.key);
            }
        }
    }

    #[test]
    fn test_catalog_keys_unique() {
        for theme in Theme::ALL {
            let keys: FxHashSet<_> = theme.cards().iter().map(|c| c.key).collect();
            assert_eq!(keys.len(), PAIRS_PER_GAME);
        }
    }

    #[test]
    fn test_theme_keys() {
        for theme in Theme::ALL {
            assert_eq!(theme.key().parse::<Theme>(), Ok(theme));
        }
        assert_eq!("space".parse::<Theme>(), Ok(Theme::Space));
        assert_eq!(
            "ocean".parse::<Theme>(),
            Err(ConfigError::UnknownTheme("ocean".to_string()))
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Theme::Jobs.card(CardTypeId::new(0)).map(|c| c.label), Some("Chef"));
        assert!(Theme::Jobs.card(CardTypeId::new(8)).is_none());
        assert_eq!(
            Theme::Animals.card_by_key("turtle").map(|c| c.id),
            Some(CardTypeId::new(6))
        );
        assert_eq!(Theme::Space.label(), "Space");
    }

    #[test]
    fn test_card_back() {
        assert_eq!(Theme::Space.card_back(), CardBack::Night);
        assert_eq!(Theme::Jobs.card_back(), CardBack::Default);
    }
}
