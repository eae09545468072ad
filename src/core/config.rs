//! Static game configuration: play modes and engine timing.
//!
//! - `GameMode`: the closed set of play modes (solo, two-player, vs-CPU)
//! - `EngineConfig`: settle and CPU delays plus the RNG seed
//!
//! Themes live with the card catalog in `cards::theme`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use super::error::ConfigError;

/// Play mode. Fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One player, no scores or winner. Only moves are counted.
    #[default]
    Solo,
    /// Two humans sharing the board.
    TwoPlayer,
    /// Seat 1 is human, seat 2 is the computer.
    VsCpu,
}

impl GameMode {
    /// All modes in menu order.
    pub const ALL: [GameMode; 3] = [GameMode::Solo, GameMode::TwoPlayer, GameMode::VsCpu];

    /// Canonical catalog key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            GameMode::Solo => "solo",
            GameMode::TwoPlayer => "pvp",
            GameMode::VsCpu => "cpu",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameMode::Solo => "Solo",
            GameMode::TwoPlayer => "2 Players",
            GameMode::VsCpu => "Vs CPU",
        }
    }

    /// Whether pairs are scored per player and turns alternate.
    #[must_use]
    pub const fn is_competitive(self) -> bool {
        !matches!(self, GameMode::Solo)
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "solo" => Ok(GameMode::Solo),
            "pvp" | "two-player" => Ok(GameMode::TwoPlayer),
            "cpu" | "vs-cpu" => Ok(GameMode::VsCpu),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Engine timing and seeding.
///
/// Delays are UX pacing only; the rules do not depend on them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How long a mismatched pair stays face-up before the turn passes.
    pub settle_delay: Duration,

    /// Pause before the computer makes its first flip of a turn.
    pub cpu_turn_delay: Duration,

    /// Pause between the computer's first and second flip.
    pub cpu_think_delay: Duration,

    /// Root RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(1500),
            cpu_turn_delay: Duration::from_millis(1000),
            cpu_think_delay: Duration::from_millis(1000),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// All delays zero. Timers still go through the scheduler but fire on
    /// the next `advance`.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            cpu_turn_delay: Duration::ZERO,
            cpu_think_delay: Duration::ZERO,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    #[must_use]
    pub fn with_cpu_delays(mut self, turn: Duration, think: Duration) -> Self {
        self.cpu_turn_delay = turn;
        self.cpu_think_delay = think;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keys_round_trip() {
        for mode in GameMode::ALL {
            assert_eq!(mode.key().parse::<GameMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_mode_aliases() {
        assert_eq!("two-player".parse::<GameMode>(), Ok(GameMode::TwoPlayer));
        assert_eq!("vs-cpu".parse::<GameMode>(), Ok(GameMode::VsCpu));
        assert_eq!(
            "coop".parse::<GameMode>(),
            Err(ConfigError::UnknownMode("coop".to_string()))
        );
    }

    #[test]
    fn test_competitive() {
        assert!(!GameMode::Solo.is_competitive());
        assert!(GameMode::TwoPlayer.is_competitive());
        assert!(GameMode::VsCpu.is_competitive());
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.settle_delay, Duration::from_millis(1500));
        assert_eq!(config.cpu_turn_delay, Duration::from_millis(1000));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::instant()
            .with_seed(9)
            .with_settle_delay(Duration::from_millis(10))
            .with_cpu_delays(Duration::from_millis(1), Duration::from_millis(2));

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.settle_delay, Duration::from_millis(10));
        assert_eq!(config.cpu_think_delay, Duration::from_millis(2));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
