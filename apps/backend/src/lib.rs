#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;
pub mod utils;

// Re-exports for public API
pub use config::store::StoreConfig;
pub use domain::{Card, GameSession, LegalActions, Phase, PlayerView, Rank, Suit};
pub use error::{AppError, Rejection};
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use services::sessions::{Applied, LobbySummary, SessionId, SessionStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
