//! Domain-level error type used by the game engine and the session store.
//!
//! Every expected rule violation is a `Validation` error carrying a
//! [`ValidationKind`]; callers supply new input and try again. `Invariant`
//! is reserved for states the engine should never reach.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// Action not valid in the current phase.
    PhaseMismatch,
    /// Acting player is not the current player.
    OutOfTurn,
    /// Player name is not part of this session.
    UnknownPlayer,
    /// Only the designated chooser may pick trump.
    NotTrumpChooser,
    /// Suit index outside 0..4.
    InvalidSuit,
    /// Prediction outside 0..=round_no.
    InvalidPrediction,
    /// Last bidder would make the predictions add up to the round number.
    ForbiddenPredictionSum,
    /// Card index outside the hand.
    InvalidCardIndex,
    /// Player holds the lead suit and tried to play another plain suit.
    MustFollowSuit,
    /// Session already has `capacity` players.
    SessionFull,
    /// Name already taken in this session.
    DuplicatePlayerName,
    /// Empty or whitespace-only name.
    InvalidPlayerName,
    /// Start requested before every seat was filled.
    NotEnoughPlayers,
    /// Capacity outside 3..=6.
    InvalidCapacity,
    /// The final round has been scored.
    GameOver,
    /// Malformed card token.
    ParseCard,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input/user validation or game-rule violation
    Validation(ValidationKind, String),
    /// Internal state the engine must never reach
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Rejection kind, if this is a rule violation.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }

    /// Human-readable reason without the kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::Invariant(d) => d,
        }
    }
}
