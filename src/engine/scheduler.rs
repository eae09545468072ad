//! Logical-clock timers for settle and CPU delays.
//!
//! The engine never sleeps. Delayed work is recorded as a `Timer` with a due
//! time on a logical clock, and fires when the host advances the clock past
//! it. At most one timer is pending at any instant; dealing a new game
//! cancels it so nothing from a superseded game can fire.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::cards::Position;

/// Identifier of a scheduled timer, unique per engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// Work to run when a timer comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Turn a mismatched pair back down and pass the turn.
    Settle,
    /// Computer makes its first flip.
    CpuFirstFlip,
    /// Computer makes its second flip.
    CpuSecondFlip {
        first: Position,
        planned: Option<Position>,
    },
}

/// A scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub id: TimerId,
    pub due: Duration,
    pub kind: TimerKind,
}

/// Single-slot timer queue over a logical clock.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    pending: Option<Timer>,
    next_id: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending(&self) -> Option<&Timer> {
        self.pending.as_ref()
    }

    /// Schedule `kind` to fire `delay` from now.
    ///
    /// Callers must not schedule while a timer is pending.
    pub fn schedule(&mut self, delay: Duration, kind: TimerKind) -> TimerId {
        debug_assert!(
            self.pending.is_none(),
            "timer {:?} still pending while scheduling {:?}",
            self.pending,
            kind
        );

        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Timer {
            id,
            due: self.now + delay,
            kind,
        });
        id
    }

    /// Drop the pending timer, if any.
    pub fn cancel(&mut self) -> Option<Timer> {
        self.pending.take()
    }

    /// Take the pending timer if it is due by `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        let due = self.pending.as_ref()?.due;
        if due > until {
            return None;
        }
        self.now = self.now.max(due);
        self.pending.take()
    }

    /// Take the pending timer whenever it is due, moving the clock to it.
    pub fn pop_next(&mut self) -> Option<Timer> {
        let timer = self.pending.take()?;
        self.now = self.now.max(timer.due);
        Some(timer)
    }

    /// Move the clock forward. Never moves it back.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_schedule_relative_to_now() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(ms(100));

        let id = scheduler.schedule(ms(50), TimerKind::Settle);
        let timer = scheduler.pending().copied().unwrap();

        assert_eq!(timer.id, id);
        assert_eq!(timer.due, ms(150));
    }

    #[test]
    fn test_pop_due_respects_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1500), TimerKind::Settle);

        assert!(scheduler.pop_due(ms(1499)).is_none());
        assert!(scheduler.pending().is_some());

        let timer = scheduler.pop_due(ms(2000)).unwrap();
        assert_eq!(timer.kind, TimerKind::Settle);
        assert_eq!(scheduler.now(), ms(1500));
        assert!(scheduler.pending().is_none());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(10), TimerKind::CpuFirstFlip);

        assert!(scheduler.cancel().is_some());
        assert!(scheduler.cancel().is_none());
        assert!(scheduler.pop_next().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.schedule(ms(0), TimerKind::Settle);
        scheduler.pop_next();
        let b = scheduler.schedule(ms(0), TimerKind::Settle);
        assert_ne!(a, b);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(ms(30));
        scheduler.advance_to(ms(10));
        assert_eq!(scheduler.now(), ms(30));
    }
}
