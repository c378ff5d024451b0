//! Game state containers and the guards shared by every action.

use serde::Serialize;

use crate::domain::dealing::Deck;
use crate::domain::rules::{max_rounds, DECK_SIZE};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Seat index in join order (0..capacity).
pub type PlayerId = u8;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Phase {
    /// Lobby: players are joining.
    NotStarted,
    /// A Witch was turned up; the designated chooser picks trump.
    ChooseTrump,
    /// Players predict their tricks in round order.
    Prediction,
    /// Playing tricks within the round; `trick_no` is 1-based.
    Playing { trick_no: u8 },
    /// Final round scored; no further actions.
    GameOver,
}

/// A trick that has been resolved, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTrick {
    pub round_no: u8,
    pub trick_no: u8,
    pub plays: Vec<(PlayerId, Card)>,
    pub winner: PlayerId,
}

/// Result of one scored round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round_no: u8,
    pub trump: Option<Card>,
    pub predictions: Vec<u8>,
    pub tricks_won: Vec<u8>,
    pub score_deltas: Vec<i32>,
    pub scores_after: Vec<i32>,
}

/// Per-round state, reset whenever a new round is dealt.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Card drawn after dealing to determine trump (kept out of the deck).
    pub turned_card: Option<Card>,
    /// Effective trump card; a synthesized Witch after a trump choice.
    pub trump: Option<Card>,
    /// Seat that must choose trump, only while in `ChooseTrump`.
    pub trump_chooser: Option<PlayerId>,
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(PlayerId, Card)>,
    /// Every card played this round, in order.
    pub played: Vec<(PlayerId, Card)>,
    /// Predictions per seat.
    pub predictions: Vec<Option<u8>>,
    /// Tricks won per seat.
    pub tricks_won: Vec<u8>,
    /// Most recently resolved trick; survives into the next round so the
    /// final trick of a round stays visible.
    pub last_trick: Option<CompletedTrick>,
}

impl RoundState {
    pub fn empty(capacity: u8) -> Self {
        let n = capacity as usize;
        Self {
            turned_card: None,
            trump: None,
            trump_chooser: None,
            trick_plays: Vec::with_capacity(n),
            played: Vec::new(),
            predictions: vec![None; n],
            tricks_won: vec![0; n],
            last_trick: None,
        }
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump.map(|c| c.suit)
    }

    pub fn prediction_count(&self) -> usize {
        self.predictions.iter().filter(|p| p.is_some()).count()
    }

    pub fn prediction_sum(&self) -> u32 {
        self.predictions.iter().flatten().map(|&p| p as u32).sum()
    }

    pub fn tricks_completed(&self) -> u32 {
        self.tricks_won.iter().map(|&t| t as u32).sum()
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seats in the game (3..=6).
    pub capacity: u8,
    /// Player names in join order; index is the `PlayerId`.
    pub players: Vec<String>,
    pub phase: Phase,
    /// 0 before the game starts, then 1..=max_rounds.
    pub round_no: u8,
    /// Base seed for every shuffle in this game.
    pub game_seed: u64,
    pub deck: Deck,
    pub hands: Vec<Vec<Card>>,
    /// Seats in playing order for the current round.
    pub turn_order: Vec<PlayerId>,
    /// Player whose action is expected.
    /// - Some(seat) when someone is expected to act
    /// - None in NotStarted and GameOver
    pub turn: Option<PlayerId>,
    /// Player who leads the current trick (Playing phase only).
    pub leader: Option<PlayerId>,
    /// Cumulative scores across rounds.
    pub scores_total: Vec<i32>,
    pub round: RoundState,
    /// Summaries of all scored rounds.
    pub history: Vec<RoundSummary>,
}

impl GameState {
    pub fn new(capacity: u8, game_seed: u64) -> Self {
        Self {
            capacity,
            players: Vec::with_capacity(capacity as usize),
            phase: Phase::NotStarted,
            round_no: 0,
            game_seed,
            deck: Deck::new(),
            hands: Vec::with_capacity(capacity as usize),
            turn_order: Vec::new(),
            turn: None,
            leader: None,
            scores_total: Vec::with_capacity(capacity as usize),
            round: RoundState::empty(capacity),
            history: Vec::new(),
        }
    }

    pub fn final_round(&self) -> u8 {
        max_rounds(self.capacity)
    }

    pub fn seat_of(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p == name)
            .map(|i| i as PlayerId)
    }

    pub fn player_name(&self, seat: PlayerId) -> Option<&str> {
        self.players.get(seat as usize).map(String::as_str)
    }

    /// Verify the structural invariants that must hold between actions.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if self.phase == Phase::NotStarted {
            return Ok(());
        }
        let in_hands: usize = self.hands.iter().map(Vec::len).sum();
        let total = self.deck.len()
            + in_hands
            + self.round.played.len()
            + usize::from(self.round.turned_card.is_some());
        if total != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "card count {total} != {DECK_SIZE}"
            )));
        }
        if self.round_no > self.final_round() {
            return Err(DomainError::invariant(format!(
                "round {} exceeds final round {}",
                self.round_no,
                self.final_round()
            )));
        }
        if let Some(turn) = self.turn {
            if !self.turn_order.contains(&turn) {
                return Err(DomainError::invariant(format!(
                    "turn {turn} not in round order"
                )));
            }
        }
        if let Phase::Playing { trick_no } = self.phase {
            let completed = self.round.tricks_completed();
            if completed != u32::from(trick_no) - 1 {
                return Err(DomainError::invariant(format!(
                    "tricks won sum {completed} != completed tricks {}",
                    trick_no - 1
                )));
            }
            for (seat, hand) in self.hands.iter().enumerate() {
                let played = self
                    .round
                    .played
                    .iter()
                    .filter(|(p, _)| *p as usize == seat)
                    .count();
                if hand.len() + played != self.round_no as usize {
                    return Err(DomainError::invariant(format!(
                        "seat {seat} holds {} cards after playing {played} in round {}",
                        hand.len(),
                        self.round_no
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Seat following `current` in the given round order.
#[inline]
pub fn next_in_order(order: &[PlayerId], current: PlayerId) -> PlayerId {
    let pos = order.iter().position(|&p| p == current).unwrap_or(0);
    order[(pos + 1) % order.len()]
}

/// Reject any action on a finished game, or in a phase other than `expected`.
pub fn require_phase(
    state: &GameState,
    expected: fn(&Phase) -> bool,
    what: &str,
) -> Result<(), DomainError> {
    if state.phase == Phase::GameOver {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            "Game is over",
        ));
    }
    if !expected(&state.phase) {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Not in {what} phase"),
        ));
    }
    Ok(())
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::invariant(format!("turn must be set ({ctx})")))
}

pub fn require_leader(state: &GameState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state
        .leader
        .ok_or_else(|| DomainError::invariant(format!("leader must be set ({ctx})")))
}

/// Reject `who` unless it is the player expected to act.
pub fn require_actor(state: &GameState, who: PlayerId, ctx: &'static str) -> Result<(), DomainError> {
    let turn = require_turn(state, ctx)?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Not your turn",
        ));
    }
    Ok(())
}
