//! Round setup and teardown: dealing, trump reveal, advancing to the next
//! round or ending the game.

use tracing::{debug, info};

use crate::domain::dealing::{deal_hands, Deck};
use crate::domain::rules::{round_turn_order, trump_chooser_seat};
use crate::domain::scoring::apply_round_scoring;
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{require_phase, GameState, Phase, RoundState};
use crate::domain::Rank;
use crate::errors::domain::{DomainError, ValidationKind};

/// How the turned card settled trump for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrumpReveal {
    /// Deck was empty after dealing.
    NoCard,
    /// Jester turned: no trump this round.
    Jester,
    /// Witch turned: the chooser must pick.
    Witch,
    /// A numbered card is trump.
    Number,
}

/// Start round 1. Requires every seat to be filled.
pub fn start_game(state: &mut GameState) -> Result<(), DomainError> {
    require_phase(state, |p| *p == Phase::NotStarted, "not-started")?;
    if state.players.len() != state.capacity as usize {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughPlayers,
            format!(
                "Need {} players to start, have {}",
                state.capacity,
                state.players.len()
            ),
        ));
    }
    info!(capacity = state.capacity, "Starting game");
    start_round(state, 1);
    Ok(())
}

/// Reshuffle a full deck, deal `round_no` cards per seat, and settle trump.
pub fn start_round(state: &mut GameState, round_no: u8) -> TrumpReveal {
    let n = state.capacity as usize;
    state.round_no = round_no;
    let last_trick = state.round.last_trick.take();
    state.round = RoundState::empty(state.capacity);
    state.round.last_trick = last_trick;
    state.deck = Deck::shuffled(derive_dealing_seed(state.game_seed, round_no));
    state.hands = deal_hands(&mut state.deck, n, round_no);
    state.turn_order = round_turn_order(state.capacity, round_no);
    state.leader = None;

    let reveal = reveal_trump(state);
    match reveal {
        TrumpReveal::Witch => {
            let chooser = trump_chooser_seat(state.capacity, round_no);
            state.round.trump_chooser = Some(chooser);
            state.phase = Phase::ChooseTrump;
            state.turn = Some(chooser);
        }
        TrumpReveal::NoCard | TrumpReveal::Jester | TrumpReveal::Number => {
            state.phase = Phase::Prediction;
            state.turn = state.turn_order.first().copied();
        }
    }
    info!(
        round_no,
        trump = ?state.round.trump,
        turned = ?state.round.turned_card,
        phase = ?state.phase,
        "Round dealt"
    );
    reveal
}

/// Draw the turned card and decide trump from it.
fn reveal_trump(state: &mut GameState) -> TrumpReveal {
    let Some(turned) = state.deck.draw() else {
        debug!(round_no = state.round_no, "No card left to turn; no trump");
        return TrumpReveal::NoCard;
    };
    state.round.turned_card = Some(turned);
    match turned.rank {
        Rank::Jester => TrumpReveal::Jester,
        Rank::Witch => TrumpReveal::Witch,
        Rank::Number(_) => {
            state.round.trump = Some(turned);
            TrumpReveal::Number
        }
    }
}

/// Score the finished round, then deal the next one or end the game.
pub fn finish_round(state: &mut GameState) -> Result<bool, DomainError> {
    let summary = apply_round_scoring(state)?;
    info!(
        round_no = summary.round_no,
        deltas = ?summary.score_deltas,
        scores = ?summary.scores_after,
        "Round scored"
    );
    state.history.push(summary);

    if state.round_no >= state.final_round() {
        state.phase = Phase::GameOver;
        state.turn = None;
        state.leader = None;
        info!(round_no = state.round_no, scores = ?state.scores_total, "Game over");
        return Ok(true);
    }
    let next = state.round_no + 1;
    start_round(state, next);
    Ok(false)
}
