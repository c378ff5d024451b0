//! In-memory session registry.
//!
//! Each session sits behind its own mutex, so every action on one session is
//! validated and applied under a single lock while distinct sessions proceed
//! in parallel. The map itself is sharded (`DashMap`); a session `Arc` is
//! cloned out of the map before its mutex is taken, so no shard lock is ever
//! held while waiting on a session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::store::StoreConfig;
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::player_view::PlayerView;
use crate::domain::seed_derivation::derive_session_seed;
use crate::domain::session::GameSession;
use crate::domain::state::PlayerId;
use crate::domain::tricks::PlayCardResult;
use crate::domain::Suit;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::utils::join_code::generate_join_code_with;

pub type SessionId = String;

const MAX_ID_ATTEMPTS: usize = 8;

/// A lobby still waiting for players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LobbySummary {
    pub session_id: SessionId,
    pub capacity: u8,
    pub joined_count: usize,
    pub joined_names: Vec<String>,
}

/// Result of a successful action plus the lifecycle edges it caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied<T> {
    pub outcome: T,
    pub transitions: Vec<GameTransition>,
}

pub struct SessionStore {
    sessions: DashMap<SessionId, Arc<Mutex<GameSession>>>,
    config: StoreConfig,
    created: AtomicU64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl SessionStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
            created: AtomicU64::new(0),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Open a new lobby and return its id.
    pub fn create(&self, capacity: u8) -> Result<SessionId, AppError> {
        if let Some(max) = self.config.max_sessions {
            if self.sessions.len() >= max {
                warn!(max, "Session limit reached");
                return Err(AppError::conflict(
                    ErrorCode::SessionLimitReached,
                    format!("Session limit of {max} reached"),
                ));
            }
        }

        let index = self.created.fetch_add(1, Ordering::Relaxed);
        let seed = match self.config.fixed_seed {
            Some(base) => derive_session_seed(base, index),
            None => rand::rng().random(),
        };
        let session = GameSession::with_seed(capacity, seed)?;

        // Ids come from the session seed, so a fixed base seed also fixes ids.
        let mut id_rng = ChaCha20Rng::seed_from_u64(seed);
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_join_code_with(&mut id_rng);
            if let Entry::Vacant(slot) = self.sessions.entry(id.clone()) {
                slot.insert(Arc::new(Mutex::new(session)));
                info!(session_id = %id, capacity, "Session created");
                return Ok(id);
            }
        }
        Err(AppError::Internal {
            code: ErrorCode::SessionIdConflict,
            detail: format!("No free session id after {MAX_ID_ATTEMPTS} attempts"),
        })
    }

    /// Shared handle to a session.
    pub fn get(&self, id: &str) -> Result<Arc<Mutex<GameSession>>, AppError> {
        self.sessions
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                AppError::not_found(ErrorCode::SessionNotFound, format!("Session {id} not found"))
            })
    }

    pub fn remove(&self, id: &str) -> Result<(), AppError> {
        match self.sessions.remove(id) {
            Some(_) => {
                info!(session_id = %id, "Session removed");
                Ok(())
            }
            None => Err(AppError::not_found(
                ErrorCode::SessionNotFound,
                format!("Session {id} not found"),
            )),
        }
    }

    pub fn join(&self, id: &str, name: &str) -> Result<Applied<PlayerId>, AppError> {
        self.apply(id, "join", |s| s.join(name))
    }

    pub fn start(&self, id: &str) -> Result<Applied<()>, AppError> {
        self.apply(id, "start", GameSession::start)
    }

    pub fn choose_trump(
        &self,
        id: &str,
        player: &str,
        suit_index: usize,
    ) -> Result<Applied<Suit>, AppError> {
        self.apply(id, "choose_trump", |s| s.choose_trump(player, suit_index))
    }

    pub fn predict(&self, id: &str, player: &str, value: u8) -> Result<Applied<()>, AppError> {
        self.apply(id, "predict", |s| s.predict(player, value))
    }

    pub fn play_card(
        &self,
        id: &str,
        player: &str,
        card_index: usize,
    ) -> Result<Applied<PlayCardResult>, AppError> {
        self.apply(id, "play_card", |s| s.play_card(player, card_index))
    }

    pub fn player_view(&self, id: &str, player: &str) -> Result<PlayerView, AppError> {
        let session = self.get(id)?;
        let guard = session.lock();
        Ok(guard.player_view(player)?)
    }

    /// Sessions still in the lobby, ordered by id.
    pub fn list_lobbies(&self) -> Vec<LobbySummary> {
        let handles: Vec<(SessionId, Arc<Mutex<GameSession>>)> = self
            .sessions
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect();

        let mut lobbies: Vec<LobbySummary> = handles
            .into_iter()
            .filter_map(|(session_id, session)| {
                let guard = session.lock();
                guard.is_lobby().then(|| LobbySummary {
                    session_id,
                    capacity: guard.capacity(),
                    joined_count: guard.players().len(),
                    joined_names: guard.players().to_vec(),
                })
            })
            .collect();
        lobbies.sort_by(|a, b| a.session_id.cmp(&b.session_id));
        lobbies
    }

    /// Run one action under the session lock and derive its transitions.
    fn apply<T, F>(&self, id: &str, action: &'static str, f: F) -> Result<Applied<T>, AppError>
    where
        F: FnOnce(&mut GameSession) -> Result<T, DomainError>,
    {
        let session = self.get(id)?;
        let mut guard = session.lock();
        let before = guard.lifecycle();

        match f(&mut *guard) {
            Ok(outcome) => {
                let transitions = derive_game_transitions(&before, &guard.lifecycle());
                debug!(session_id = %id, action, ?transitions, "Action applied");
                Ok(Applied {
                    outcome,
                    transitions,
                })
            }
            Err(err @ DomainError::Validation(..)) => {
                debug!(session_id = %id, action, error = %err, "Action rejected");
                Err(err.into())
            }
            Err(err) => {
                warn!(session_id = %id, action, error = %err, "Invariant violated");
                Err(err.into())
            }
        }
    }
}
