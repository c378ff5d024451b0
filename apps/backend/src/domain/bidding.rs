//! Trump choice and the prediction (bidding) phase.

use tracing::debug;

use crate::domain::rules::valid_prediction_range;
use crate::domain::state::{
    next_in_order, require_actor, require_phase, GameState, Phase, PlayerId,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Prediction(pub u8);

/// Suits the player may choose as trump; empty unless they are the chooser.
pub fn legal_trump_suits(state: &GameState, who: PlayerId) -> Vec<Suit> {
    if state.phase == Phase::ChooseTrump && state.round.trump_chooser == Some(who) {
        Suit::ALL.to_vec()
    } else {
        Vec::new()
    }
}

/// Designated chooser picks trump after a Witch was turned up.
///
/// Trump becomes a Witch of the chosen suit, so it matches that suit for
/// trump comparisons. Prediction starts with the first seat in round order.
pub fn choose_trump(
    state: &mut GameState,
    who: PlayerId,
    suit_index: usize,
) -> Result<Suit, DomainError> {
    require_phase(state, |p| *p == Phase::ChooseTrump, "choose-trump")?;

    if state.round.trump_chooser != Some(who) {
        return Err(DomainError::validation(
            ValidationKind::NotTrumpChooser,
            "You are not allowed to choose trump",
        ));
    }
    let suit = Suit::from_index(suit_index).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidSuit,
            format!("Invalid suit choice {suit_index}, expected 0..{}", Suit::ALL.len()),
        )
    })?;

    state.round.trump = Some(Card::witch(suit));
    state.round.trump_chooser = None;
    state.phase = Phase::Prediction;
    state.turn = state.turn_order.first().copied();
    debug!(seat = who, ?suit, "Trump chosen");
    Ok(suit)
}

/// Whether `who` is the last seat to predict this round.
pub fn is_last_bidder(state: &GameState, who: PlayerId) -> bool {
    state.turn_order.last() == Some(&who)
        && state.round.prediction_count() + 1 == state.capacity as usize
}

/// The one value the last bidder may not pick, if it is in range.
pub fn forbidden_prediction(state: &GameState) -> Option<u8> {
    let sum = state.round.prediction_sum();
    let round_no = u32::from(state.round_no);
    (sum <= round_no).then(|| (round_no - sum) as u8)
}

/// Legal predictions for `who`; empty unless it is their turn to predict.
pub fn legal_predictions(state: &GameState, who: PlayerId) -> Vec<Prediction> {
    if state.phase != Phase::Prediction || state.turn != Some(who) {
        return Vec::new();
    }
    let forbidden = is_last_bidder(state, who)
        .then(|| forbidden_prediction(state))
        .flatten();
    valid_prediction_range(state.round_no)
        .filter(|v| Some(*v) != forbidden)
        .map(Prediction)
        .collect()
}

/// Record a prediction and advance the turn; the last prediction starts play.
pub fn place_prediction(
    state: &mut GameState,
    who: PlayerId,
    prediction: Prediction,
) -> Result<(), DomainError> {
    require_phase(state, |p| *p == Phase::Prediction, "prediction")?;
    require_actor(state, who, "place_prediction")?;

    let range = valid_prediction_range(state.round_no);
    if !range.contains(&prediction.0) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPrediction,
            format!("Prediction must be between 0 and {}", state.round_no),
        ));
    }

    if is_last_bidder(state, who) && forbidden_prediction(state) == Some(prediction.0) {
        return Err(DomainError::validation(
            ValidationKind::ForbiddenPredictionSum,
            format!("Sum of predictions cannot equal {}", state.round_no),
        ));
    }

    state.round.predictions[who as usize] = Some(prediction.0);
    debug!(seat = who, prediction = prediction.0, "Prediction placed");

    if state.round.prediction_count() == state.capacity as usize {
        let first = state.turn_order.first().copied();
        state.phase = Phase::Playing { trick_no: 1 };
        state.turn = first;
        state.leader = first;
    } else {
        state.turn = Some(next_in_order(&state.turn_order, who));
    }
    Ok(())
}
