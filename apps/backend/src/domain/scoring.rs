use crate::domain::state::{GameState, RoundSummary};
use crate::errors::domain::DomainError;

/// Round score delta for one player: `20 + 10 * tricks` for an exact
/// prediction, otherwise `-10` per trick of difference.
pub fn score_delta(prediction: u8, tricks_won: u8) -> i32 {
    if prediction == tricks_won {
        20 + 10 * tricks_won as i32
    } else {
        -10 * (prediction as i32 - tricks_won as i32).abs()
    }
}

/// Apply per-round scoring to the running totals and summarize the round.
/// Totals are untouched when any seat lacks a prediction.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundSummary, DomainError> {
    let predictions = state
        .round
        .predictions
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            p.ok_or_else(|| {
                DomainError::invariant(format!("seat {seat} has no prediction at scoring"))
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let score_deltas: Vec<i32> = predictions
        .iter()
        .zip(&state.round.tricks_won)
        .map(|(&p, &t)| score_delta(p, t))
        .collect();
    for (total, delta) in state.scores_total.iter_mut().zip(&score_deltas) {
        *total += delta;
    }

    Ok(RoundSummary {
        round_no: state.round_no,
        trump: state.round.trump,
        predictions,
        tricks_won: state.round.tricks_won.clone(),
        score_deltas,
        scores_after: state.scores_total.clone(),
    })
}
