//! A single game session: seats players by name and routes each action to
//! the transition function for the current phase.

use rand::Rng;

use crate::domain::bidding::{choose_trump, place_prediction, Prediction};
use crate::domain::game_transition::LifecycleView;
use crate::domain::player_view::{player_view, PlayerView};
use crate::domain::round_lifecycle::start_game;
use crate::domain::rules::{valid_capacity, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::seats::join_player;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::tricks::{play_card, PlayCardResult};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// New lobby with a random game seed.
    pub fn new(capacity: u8) -> Result<Self, DomainError> {
        Self::with_seed(capacity, rand::rng().random())
    }

    /// New lobby whose every deal is determined by `seed`.
    pub fn with_seed(capacity: u8, seed: u64) -> Result<Self, DomainError> {
        if !valid_capacity(capacity) {
            return Err(DomainError::validation(
                ValidationKind::InvalidCapacity,
                format!("Capacity must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {capacity}"),
            ));
        }
        Ok(Self {
            state: GameState::new(capacity, seed),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn capacity(&self) -> u8 {
        self.state.capacity
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn players(&self) -> &[String] {
        &self.state.players
    }

    pub fn is_lobby(&self) -> bool {
        self.state.phase == Phase::NotStarted
    }

    pub fn lifecycle(&self) -> LifecycleView {
        LifecycleView::of(&self.state)
    }

    /// Seat of a joined player; names are matched after trimming.
    pub fn seat(&self, name: &str) -> Result<PlayerId, DomainError> {
        self.state.seat_of(name.trim()).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownPlayer,
                format!("Unknown player {:?}", name.trim()),
            )
        })
    }

    pub fn join(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        join_player(&mut self.state, name)
    }

    pub fn start(&mut self) -> Result<(), DomainError> {
        start_game(&mut self.state)
    }

    pub fn choose_trump(&mut self, name: &str, suit_index: usize) -> Result<Suit, DomainError> {
        let seat = self.seat(name)?;
        choose_trump(&mut self.state, seat, suit_index)
    }

    pub fn predict(&mut self, name: &str, value: u8) -> Result<(), DomainError> {
        let seat = self.seat(name)?;
        place_prediction(&mut self.state, seat, Prediction(value))
    }

    pub fn play_card(
        &mut self,
        name: &str,
        card_index: usize,
    ) -> Result<PlayCardResult, DomainError> {
        let seat = self.seat(name)?;
        play_card(&mut self.state, seat, card_index)
    }

    pub fn player_view(&self, name: &str) -> Result<PlayerView, DomainError> {
        let seat = self.seat(name)?;
        Ok(player_view(&self.state, seat))
    }

    /// Name of the player expected to act, if any.
    pub fn current_player(&self) -> Option<&str> {
        self.state.turn.and_then(|seat| self.state.player_name(seat))
    }

    pub fn check_invariants(&self) -> Result<(), DomainError> {
        self.state.check_invariants()
    }
}
