//! Flip validation.

use super::outcome::{FlipSource, Rejection};
use crate::cards::{CardTypeId, Position};
use crate::core::{GameMode, GameState, Phase, PlayerId};

/// Check whether `source` may flip `position` right now.
///
/// Returns the card type under `position` when the flip is allowed.
/// Checks run cheapest-first; the first failing rule is reported.
pub fn check_flip(
    state: &GameState,
    position: Position,
    source: FlipSource,
) -> Result<CardTypeId, Rejection> {
    let card_type = state.deck().card_type(position).ok_or(Rejection::OutOfRange)?;

    match state.phase() {
        Phase::Won => return Err(Rejection::GameOver),
        phase if !phase.accepts_flip() => return Err(Rejection::Busy),
        _ => {}
    }

    if state.revealed().contains(&position) {
        return Err(Rejection::AlreadyRevealed);
    }
    if state.matched().contains(&card_type) {
        return Err(Rejection::AlreadyMatched);
    }

    if state.mode() == GameMode::VsCpu {
        let owner = match source {
            FlipSource::Human => PlayerId::ONE,
            FlipSource::Cpu => PlayerId::TWO,
        };
        if state.turn() != owner {
            return Err(Rejection::OutOfTurn);
        }
    }

    Ok(card_type)
}
