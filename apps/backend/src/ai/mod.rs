//! AI players: automated decisions for seats without a human.
//!
//! - [`AiPlayer`] trait over a seat's [`PlayerView`]
//! - [`RandomPlayer`]: random legal moves (seedable for tests)
//! - [`take_turn`]: apply one AI decision through the session store

mod random;
mod trait_def;

pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};
use tracing::debug;

use crate::domain::game_transition::GameTransition;
use crate::domain::player_view::{LegalActions, PlayerView};
use crate::error::AppError;
use crate::services::sessions::SessionStore;

/// The action an AI wants to take, resolved from its view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    ChooseTrump(usize),
    Predict(u8),
    PlayCard(usize),
}

/// Ask `ai` for a decision; `None` when the view offers nothing to do.
pub fn decide(ai: &dyn AiPlayer, view: &PlayerView) -> Result<Option<AiAction>, AiError> {
    Ok(match view.legal_actions {
        LegalActions::None => None,
        LegalActions::ChooseTrump { .. } => Some(AiAction::ChooseTrump(ai.choose_trump(view)?)),
        LegalActions::Predict { .. } => Some(AiAction::Predict(ai.choose_prediction(view)?)),
        LegalActions::PlayCard { .. } => Some(AiAction::PlayCard(ai.choose_card(view)?)),
    })
}

/// Let `ai` act for `player` if it is their turn.
///
/// Returns the transitions caused, or `None` when the player had nothing to
/// do. Decisions go through the store like any other request, so an illegal
/// choice is rejected rather than applied.
pub fn take_turn(
    store: &SessionStore,
    session_id: &str,
    player: &str,
    ai: &dyn AiPlayer,
) -> Result<Option<Vec<GameTransition>>, AppError> {
    let view = store.player_view(session_id, player)?;
    let Some(action) = decide(ai, &view)? else {
        return Ok(None);
    };
    debug!(session_id, player, ?action, "AI acting");
    let transitions = match action {
        AiAction::ChooseTrump(idx) => store.choose_trump(session_id, player, idx)?.transitions,
        AiAction::Predict(value) => store.predict(session_id, player, value)?.transitions,
        AiAction::PlayCard(idx) => store.play_card(session_id, player, idx)?.transitions,
    };
    Ok(Some(transitions))
}
