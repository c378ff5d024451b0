//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod player_view;
pub mod round_lifecycle;
pub mod seats;
pub mod session;

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, Deck};
pub use game_transition::{derive_game_transitions, GameTransition, LifecycleView};
pub use player_view::{LegalActions, PlayerView};
pub use seed_derivation::{derive_dealing_seed, derive_session_seed};
pub use session::GameSession;
pub use state::{GameState, Phase, PlayerId, RoundSummary};
pub use tricks::PlayCardResult;
