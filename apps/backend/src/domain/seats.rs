//! Lobby seating: players join in order until every seat is filled.

use tracing::debug;

use crate::domain::state::{require_phase, GameState, Phase, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Seat a new player; returns the assigned seat.
pub fn join_player(state: &mut GameState, name: &str) -> Result<PlayerId, DomainError> {
    require_phase(state, |p| *p == Phase::NotStarted, "not-started")?;

    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            "Player name cannot be empty",
        ));
    }
    if state.players.len() >= state.capacity as usize {
        return Err(DomainError::validation(
            ValidationKind::SessionFull,
            format!("Game is already full ({} players)", state.capacity),
        ));
    }
    if state.seat_of(name).is_some() {
        return Err(DomainError::validation(
            ValidationKind::DuplicatePlayerName,
            format!("Name {name:?} is already taken"),
        ));
    }

    let seat = state.players.len() as PlayerId;
    state.players.push(name.to_string());
    state.scores_total.push(0);
    state.hands.push(Vec::new());
    debug!(seat, player = name, "Player joined");
    Ok(seat)
}
