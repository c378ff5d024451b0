use crate::domain::cards_serde::parse_cards;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::tricks::{legal_card_indices, play_card, resolve_trick};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn trick(tokens: &[&str]) -> Vec<(PlayerId, Card)> {
    parse_cards(tokens)
        .into_iter()
        .enumerate()
        .map(|(i, c)| (i as PlayerId, c))
        .collect()
}

fn playing_state(hands: Vec<Vec<Card>>, round_no: u8, predictions: Vec<u8>) -> GameState {
    make_game_state(
        hands,
        MakeGameStateArgs {
            phase: Phase::Playing { trick_no: 1 },
            round_no,
            turn: Some(0),
            leader: Some(0),
            predictions: Some(predictions.into_iter().map(Some).collect()),
            ..Default::default()
        },
    )
}

#[test]
fn only_trump_present_wins() {
    // trump = Red 9; [Yellow 3 (p1), Red 5 (p2), Green 8 (p3)]
    let plays = trick(&["3Y", "5R", "8G"]);
    assert_eq!(resolve_trick(&plays, Some(Suit::Red)), Some(1));
}

#[test]
fn jesters_cannot_win_and_lead_comes_from_first_number() {
    // no trump; [Blue Jester, Blue 7, Red Jester]
    let plays = trick(&["JB", "7B", "JR"]);
    assert_eq!(resolve_trick(&plays, None), Some(1));
}

#[test]
fn first_witch_wins_regardless_of_trump() {
    let plays = trick(&["WG", "WB", "13R"]);
    for trump in [None, Some(Suit::Red), Some(Suit::Blue)] {
        assert_eq!(resolve_trick(&plays, trump), Some(0));
    }
    // Order matters: swap which Witch came first
    let swapped = trick(&["WB", "WG", "13R"]);
    assert_eq!(resolve_trick(&swapped, None), Some(0));
    assert_eq!(swapped[0].1.suit, Suit::Blue);
}

#[test]
fn witch_after_numbers_and_jesters_wins() {
    let plays = trick(&["JR", "12Y", "WR", "13Y"]);
    assert_eq!(resolve_trick(&plays, Some(Suit::Yellow)), Some(2));
}

#[test]
fn all_jesters_first_one_wins() {
    let plays = trick(&["JG", "JR", "JB"]);
    assert_eq!(resolve_trick(&plays, Some(Suit::Red)), Some(0));
}

#[test]
fn off_suit_never_wins_and_higher_trump_beats_lower() {
    let plays = trick(&["4G", "13Y", "6G"]);
    assert_eq!(resolve_trick(&plays, None), Some(2));

    let plays = trick(&["4G", "2B", "9B", "12G"]);
    assert_eq!(resolve_trick(&plays, Some(Suit::Blue)), Some(2));
}

#[test]
fn empty_trick_has_no_winner() {
    assert_eq!(resolve_trick(&[], None), None);
}

#[test]
fn full_round_of_play_scores_and_deals_next_round() {
    let hands = vec![
        parse_cards(&["5R", "3Y"]),
        parse_cards(&["9R", "2B"]),
        parse_cards(&["8G", "JR"]),
    ];
    let mut state = playing_state(hands, 2, vec![0, 2, 0]);

    // Leader may play anything
    assert_eq!(legal_card_indices(&state, 0), vec![0, 1]);
    let r = play_card(&mut state, 0, 0).unwrap();
    assert!(!r.trick_completed);
    assert_eq!(state.turn, Some(1));

    // Red was led: the off-suit card is illegal while a Red card is held
    assert_eq!(legal_card_indices(&state, 1), vec![0]);
    let err = play_card(&mut state, 1, 1).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::MustFollowSuit));
    play_card(&mut state, 1, 0).unwrap();

    // A Red Jester counts as holding Red
    assert_eq!(legal_card_indices(&state, 2), vec![1]);
    let r = play_card(&mut state, 2, 1).unwrap();
    assert!(r.trick_completed);
    assert_eq!(r.trick_winner, Some(1));
    assert!(!r.round_completed);
    assert_eq!(state.phase, Phase::Playing { trick_no: 2 });
    assert_eq!(state.leader, Some(1));
    assert_eq!(state.turn, Some(1));
    assert!(state.round.trick_plays.is_empty());
    let last = state.round.last_trick.clone().unwrap();
    assert_eq!((last.trick_no, last.winner), (1, 1));
    state.check_invariants().unwrap();

    // Trick 2: winner leads
    play_card(&mut state, 1, 0).unwrap();
    play_card(&mut state, 2, 0).unwrap();
    let r = play_card(&mut state, 0, 0).unwrap();
    assert!(r.round_completed);
    assert!(!r.game_over);
    assert_eq!(r.card, Card::number(Suit::Yellow, 3));

    assert_eq!(state.scores_total, vec![20, 40, 20]);
    let summary = &state.history[0];
    assert_eq!(summary.round_no, 2);
    assert_eq!(summary.tricks_won, vec![0, 2, 0]);
    assert_eq!(summary.score_deltas, vec![20, 40, 20]);

    assert_eq!(state.round_no, 3);
    assert!(matches!(state.phase, Phase::Prediction | Phase::ChooseTrump));
    assert!(state.hands.iter().all(|h| h.len() == 3));
    // Final trick of the previous round stays visible
    let last = state.round.last_trick.clone().unwrap();
    assert_eq!((last.round_no, last.trick_no, last.winner), (2, 2, 1));
    state.check_invariants().unwrap();
}

#[test]
fn play_card_rejections_leave_state_untouched() {
    let hands = vec![
        parse_cards(&["5R"]),
        parse_cards(&["9R"]),
        parse_cards(&["8G"]),
    ];
    let mut state = playing_state(hands, 1, vec![0, 1, 1]);

    let err = play_card(&mut state, 2, 0).unwrap_err();
    assert_eq!(
        err,
        DomainError::validation(ValidationKind::OutOfTurn, "Not your turn")
    );
    let err = play_card(&mut state, 0, 5).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::InvalidCardIndex));
    assert_eq!(state.hands[0].len(), 1);
    assert!(state.round.trick_plays.is_empty());

    state.phase = Phase::Prediction;
    let err = play_card(&mut state, 0, 0).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
    assert!(legal_card_indices(&state, 0).is_empty());
}

#[test]
fn witch_lead_frees_everyone() {
    let hands = vec![
        parse_cards(&["WR", "2R"]),
        parse_cards(&["9R", "2B"]),
        parse_cards(&["8G", "1R"]),
    ];
    let mut state = playing_state(hands, 2, vec![0, 0, 1]);
    play_card(&mut state, 0, 0).unwrap();
    assert_eq!(legal_card_indices(&state, 1), vec![0, 1]);
}
