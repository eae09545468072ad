//! The game engine: owns the state, applies flips, runs timers.
//!
//! ## Control flow
//!
//! - `flip` validates an intent, turns the card up, records it in the
//!   computer's memory and, on a second card, resolves the pair on the spot.
//! - A mismatch schedules the settle timer. When it fires the pair goes back
//!   down and, outside solo, the turn passes.
//! - Whenever the computer's seat becomes active in a vs-CPU game, a CPU turn
//!   timer is scheduled. Its two flips go through `flip` like any tap.
//!
//! One intent is processed to completion before the next, and at most one
//! timer is pending. `start` cancels that timer before dealing.

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use super::scheduler::{Scheduler, Timer, TimerKind};
use super::snapshot::Snapshot;
use crate::cards::{deal, Position, Theme};
use crate::core::{
    ConfigError, EngineConfig, GameMode, GameRng, GameState, Phase, PlayerId, Resolution,
};
use crate::cpu::{ComputerOpponent, CpuPolicy, RememberingPolicy};
use crate::rules::{check_flip, FlipOutcome, FlipSource, Rejection};

/// Memory-match game engine.
///
/// ## Example
///
/// ```
/// use memory_match::{Engine, EngineConfig, FlipSource, Phase, Position};
///
/// let mut engine = Engine::new(EngineConfig::instant().with_seed(7));
/// engine.new_game("animals", "pvp").unwrap();
///
/// engine.flip(Position::new(0), FlipSource::Human);
/// assert_eq!(engine.state().phase(), Phase::AwaitingSecondFlip);
/// ```
pub struct Engine<P: CpuPolicy = RememberingPolicy> {
    config: EngineConfig,

    /// Forked once per game.
    root_rng: GameRng,

    /// Per-game stream for the computer's tie-breaks.
    cpu_rng: GameRng,

    state: GameState,
    cpu: ComputerOpponent<P>,
    timers: Scheduler,
}

impl Engine<RememberingPolicy> {
    /// Create an engine with the default computer opponent and deal the
    /// default game (jobs, solo).
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_policy(config, RememberingPolicy)
    }
}

impl<P: CpuPolicy> Engine<P> {
    /// Create an engine with a custom computer policy.
    #[must_use]
    pub fn with_policy(config: EngineConfig, policy: P) -> Self {
        let mut root_rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let (state, cpu_rng) = deal_game(Theme::default(), GameMode::default(), &mut root_rng);

        info!(seed = root_rng.seed(), theme = %state.theme(), mode = %state.mode(), "engine started");

        Self {
            config,
            root_rng,
            cpu_rng,
            state,
            cpu: ComputerOpponent::new(policy),
            timers: Scheduler::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn cpu(&self) -> &ComputerOpponent<P> {
        &self.cpu
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    // === New Game ===

    /// Deal a new game from catalog keys.
    ///
    /// Unknown keys are a caller bug and leave the current game untouched.
    pub fn new_game(&mut self, theme_key: &str, mode_key: &str) -> Result<(), ConfigError> {
        let theme: Theme = theme_key.parse()?;
        let mode: GameMode = mode_key.parse()?;
        self.start(theme, mode);
        Ok(())
    }

    /// Deal a new game, replacing the current one entirely.
    pub fn start(&mut self, theme: Theme, mode: GameMode) {
        if let Some(stale) = self.timers.cancel() {
            debug!(timer = ?stale.kind, "cancelled timer from superseded game");
        }

        let (state, cpu_rng) = deal_game(theme, mode, &mut self.root_rng);
        self.state = state;
        self.cpu_rng = cpu_rng;
        self.cpu.reset();

        info!(%theme, %mode, "new game");
    }

    /// Deal again with the current theme and mode.
    pub fn restart(&mut self) {
        self.start(self.state.theme(), self.state.mode());
    }

    // === Flipping ===

    /// Apply a flip intent.
    ///
    /// Invalid intents are ignored and reported as `FlipOutcome::Rejected`.
    /// While a timer is pending the engine owns the next step, so every
    /// intent is `Busy`; the computer's own flips run after their timer has
    /// been taken.
    pub fn flip(&mut self, position: Position, source: FlipSource) -> FlipOutcome {
        let checked = check_flip(&self.state, position, source).and_then(|card_type| {
            match self.timers.pending() {
                Some(_) => Err(Rejection::Busy),
                None => Ok(card_type),
            }
        });
        let card_type = match checked {
            Ok(card_type) => card_type,
            Err(reason) => {
                trace!(%position, ?source, ?reason, "flip rejected");
                return FlipOutcome::Rejected(reason);
            }
        };

        self.cpu.observe(position, card_type);
        debug!(%position, card = %card_type, ?source, player = %self.state.turn(), "flip");

        if !self.state.reveal(position) {
            return FlipOutcome::FirstRevealed { position, card_type };
        }

        match self.state.resolve() {
            Resolution::Match { card_type, game_over: true } => {
                let result = self.state.winner().copied();
                info!(
                    card = %card_type,
                    moves = self.state.move_count(),
                    ?result,
                    "game won"
                );
                FlipOutcome::Won { result }
            }
            Resolution::Match { card_type, .. } => {
                debug!(card = %card_type, player = %self.state.turn(), "pair found");
                self.schedule_cpu_turn_if_due();
                FlipOutcome::Matched { card_type }
            }
            Resolution::Mismatch => {
                debug!(delay = ?self.config.settle_delay, "mismatch, settling");
                self.timers.schedule(self.config.settle_delay, TimerKind::Settle);
                FlipOutcome::Mismatched
            }
        }
    }

    // === Timers ===

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// The pending timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<&Timer> {
        self.timers.pending()
    }

    /// When the pending timer comes due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.pending().map(|t| t.due)
    }

    /// Move the clock forward by `elapsed`, firing every timer that comes
    /// due along the way.
    ///
    /// Returns the number of timers fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.timers.now() + elapsed;
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(target) {
            self.fire(timer);
            fired += 1;
        }
        self.timers.advance_to(target);
        fired
    }

    /// Fire timers until none is pending: a human must act or the game is
    /// over.
    ///
    /// Returns the number of timers fired.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_next() {
            self.fire(timer);
            fired += 1;
        }
        fired
    }

    fn fire(&mut self, timer: Timer) {
        debug!(id = timer.id.0, kind = ?timer.kind, at = ?timer.due, "timer fired");

        match timer.kind {
            TimerKind::Settle => {
                if self.state.phase() != Phase::TurnSwitchPending {
                    warn!(phase = ?self.state.phase(), "settle timer fired outside settle");
                    return;
                }
                self.state.settle();
                debug!(player = %self.state.turn(), "pair turned back, next attempt");
                self.schedule_cpu_turn_if_due();
            }
            TimerKind::CpuFirstFlip => {
                if !self.is_cpu_turn() {
                    warn!(phase = ?self.state.phase(), "cpu turn timer fired out of turn");
                    return;
                }
                let plan = self.cpu.plan_turn(&self.state, &mut self.cpu_rng);
                let outcome = self.flip(plan.first, FlipSource::Cpu);
                if !outcome.is_accepted() {
                    warn!(?outcome, first = %plan.first, "cpu first flip rejected");
                    return;
                }
                self.timers.schedule(
                    self.config.cpu_think_delay,
                    TimerKind::CpuSecondFlip {
                        first: plan.first,
                        planned: plan.second,
                    },
                );
            }
            TimerKind::CpuSecondFlip { first, planned } => {
                if self.state.phase() != Phase::AwaitingSecondFlip
                    || self.state.turn() != PlayerId::TWO
                {
                    warn!(phase = ?self.state.phase(), "cpu second flip fired out of turn");
                    return;
                }
                let second = match planned {
                    Some(second) => second,
                    None => self.cpu.second_flip(&self.state, first, &mut self.cpu_rng),
                };
                let outcome = self.flip(second, FlipSource::Cpu);
                if !outcome.is_accepted() {
                    warn!(?outcome, %second, "cpu second flip rejected");
                }
            }
        }
    }

    fn is_cpu_turn(&self) -> bool {
        self.state.mode() == GameMode::VsCpu
            && self.state.turn() == PlayerId::TWO
            && self.state.phase() == Phase::AwaitingFirstFlip
    }

    fn schedule_cpu_turn_if_due(&mut self) {
        if self.is_cpu_turn() {
            debug!(delay = ?self.config.cpu_turn_delay, "cpu turn scheduled");
            self.timers.schedule(self.config.cpu_turn_delay, TimerKind::CpuFirstFlip);
        }
    }
}

impl<P: CpuPolicy + Default> Default for Engine<P> {
    fn default() -> Self {
        Self::with_policy(EngineConfig::default(), P::default())
    }
}

/// Fork a per-game RNG, deal, and split off the CPU's stream.
fn deal_game(theme: Theme, mode: GameMode, root_rng: &mut GameRng) -> (GameState, GameRng) {
    let game_rng = root_rng.fork();
    let deck = deal(theme, &mut game_rng.for_context("deal"));
    (GameState::deal(theme, mode, deck), game_rng.for_context("cpu"))
}
