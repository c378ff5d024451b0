//! Error codes exposed to transports.
//!
//! Every rejection the engine or session store can produce maps to exactly
//! one code here. Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings a transport
//! is expected to put on the wire.

use core::fmt;

use super::domain::ValidationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game rules
    PhaseMismatch,
    OutOfTurn,
    UnknownPlayer,
    NotTrumpChooser,
    InvalidSuit,
    InvalidPrediction,
    ForbiddenPredictionSum,
    InvalidCardIndex,
    MustFollowSuit,
    GameOver,
    ParseCard,

    // Lobby
    SessionFull,
    DuplicatePlayerName,
    InvalidPlayerName,
    NotEnoughPlayers,
    InvalidCapacity,

    // Session store
    SessionNotFound,
    SessionLimitReached,
    SessionIdConflict,

    // System
    ConfigError,
    InvariantViolated,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::NotTrumpChooser => "NOT_TRUMP_CHOOSER",
            Self::InvalidSuit => "INVALID_SUIT",
            Self::InvalidPrediction => "INVALID_PREDICTION",
            Self::ForbiddenPredictionSum => "FORBIDDEN_PREDICTION_SUM",
            Self::InvalidCardIndex => "INVALID_CARD_INDEX",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::GameOver => "GAME_OVER",
            Self::ParseCard => "PARSE_CARD",

            Self::SessionFull => "SESSION_FULL",
            Self::DuplicatePlayerName => "DUPLICATE_PLAYER_NAME",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::InvalidCapacity => "INVALID_CAPACITY",

            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::SessionLimitReached => "SESSION_LIMIT_REACHED",
            Self::SessionIdConflict => "SESSION_ID_CONFLICT",

            Self::ConfigError => "CONFIG_ERROR",
            Self::InvariantViolated => "INVARIANT_VIOLATED",
        }
    }
}

impl From<ValidationKind> for ErrorCode {
    fn from(kind: ValidationKind) -> Self {
        match kind {
            ValidationKind::PhaseMismatch => Self::PhaseMismatch,
            ValidationKind::OutOfTurn => Self::OutOfTurn,
            ValidationKind::UnknownPlayer => Self::UnknownPlayer,
            ValidationKind::NotTrumpChooser => Self::NotTrumpChooser,
            ValidationKind::InvalidSuit => Self::InvalidSuit,
            ValidationKind::InvalidPrediction => Self::InvalidPrediction,
            ValidationKind::ForbiddenPredictionSum => Self::ForbiddenPredictionSum,
            ValidationKind::InvalidCardIndex => Self::InvalidCardIndex,
            ValidationKind::MustFollowSuit => Self::MustFollowSuit,
            ValidationKind::SessionFull => Self::SessionFull,
            ValidationKind::DuplicatePlayerName => Self::DuplicatePlayerName,
            ValidationKind::InvalidPlayerName => Self::InvalidPlayerName,
            ValidationKind::NotEnoughPlayers => Self::NotEnoughPlayers,
            ValidationKind::InvalidCapacity => Self::InvalidCapacity,
            ValidationKind::GameOver => Self::GameOver,
            ValidationKind::ParseCard => Self::ParseCard,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
