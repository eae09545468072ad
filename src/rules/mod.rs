//! Flip rules: who may flip what, and what a flip led to.
//!
//! `check_flip` is the single validation path for human and CPU input.
//! Violations are reported as a `Rejection` and never change state; they
//! are expected under normal UI latency (double taps, taps during the CPU's
//! turn, taps on cards that were just matched).

pub mod outcome;
pub mod validate;

pub use outcome::{FlipOutcome, FlipSource, GameResult, Rejection};
pub use validate::check_flip;
