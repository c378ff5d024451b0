//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::PlayerView;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// The view offered no legal action of the requested kind
    NoLegalAction(&'static str),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoLegalAction(what) => write!(f, "AI has no legal {what}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::Internal {
            code: ErrorCode::InvariantViolated,
            detail: format!("AI error: {err}"),
        }
    }
}

/// Trait for AI players.
///
/// Implementations receive the view of the seat they play and must pick one
/// of `view.legal_actions`; the engine rejects anything else like it would
/// for a human.
pub trait AiPlayer: Send + Sync {
    /// Choose a trump suit index (0..4) after a Witch was turned up.
    fn choose_trump(&self, view: &PlayerView) -> Result<usize, AiError>;

    /// Choose a prediction for this round.
    fn choose_prediction(&self, view: &PlayerView) -> Result<u8, AiError>;

    /// Choose a hand index to play.
    fn choose_card(&self, view: &PlayerView) -> Result<usize, AiError>;
}
