use crate::domain::scoring::{apply_round_scoring, score_delta};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::Card;
use crate::errors::domain::DomainError;

#[test]
fn exact_prediction_earns_twenty_plus_ten_per_trick() {
    assert_eq!(score_delta(2, 2), 40);
    assert_eq!(score_delta(0, 0), 20);
    assert_eq!(score_delta(5, 5), 70);
}

#[test]
fn missed_prediction_loses_ten_per_trick_off() {
    assert_eq!(score_delta(2, 0), -20);
    assert_eq!(score_delta(0, 3), -30);
    assert_eq!(score_delta(4, 5), -10);
}

#[test]
fn apply_round_scoring_accumulates_and_summarizes() {
    let mut state = make_game_state(
        vec![Vec::<Card>::new(); 3],
        MakeGameStateArgs {
            phase: Phase::Playing { trick_no: 3 },
            round_no: 3,
            predictions: Some(vec![Some(1), Some(0), Some(1)]),
            scores_total: Some(vec![10, -20, 0]),
            ..Default::default()
        },
    );
    state.round.tricks_won = vec![1, 2, 0];

    let summary = apply_round_scoring(&mut state).unwrap();
    assert_eq!(summary.round_no, 3);
    assert_eq!(summary.predictions, vec![1, 0, 1]);
    assert_eq!(summary.score_deltas, vec![30, -20, -10]);
    assert_eq!(summary.scores_after, vec![40, -40, -10]);
    assert_eq!(state.scores_total, vec![40, -40, -10]);
}

#[test]
fn missing_prediction_is_an_invariant_violation() {
    let mut state = make_game_state(
        vec![Vec::<Card>::new(); 3],
        MakeGameStateArgs {
            predictions: Some(vec![Some(1), None, Some(0)]),
            ..Default::default()
        },
    );
    let err = apply_round_scoring(&mut state).unwrap_err();
    assert!(matches!(err, DomainError::Invariant(_)));
    assert_eq!(err.kind(), None);
}

#[test]
fn failed_scoring_leaves_totals_untouched() {
    let mut state = make_game_state(
        vec![Vec::<Card>::new(); 3],
        MakeGameStateArgs {
            predictions: Some(vec![Some(0), Some(0), None]),
            scores_total: Some(vec![5, 6, 7]),
            ..Default::default()
        },
    );
    assert!(apply_round_scoring(&mut state).is_err());
    assert_eq!(state.scores_total, vec![5, 6, 7]);
}
