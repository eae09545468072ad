//! Game engine: state ownership, flip processing, timers, snapshots.
//!
//! - `Engine`: the single writer of `GameState`
//! - `Scheduler`: one-slot, cancellable timer queue on a logical clock
//! - `Snapshot`: read-only view handed to the presentation layer

pub mod game;
pub mod scheduler;
pub mod snapshot;

pub use game::Engine;
pub use scheduler::{Scheduler, Timer, TimerId, TimerKind};
pub use snapshot::{CardView, Snapshot};
