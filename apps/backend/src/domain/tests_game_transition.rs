use crate::domain::game_transition::{derive_game_transitions, GameTransition, LifecycleView};
use crate::domain::state::Phase;
use crate::domain::Suit;

fn view(phase: Phase, round_no: u8, turn: Option<u8>) -> LifecycleView {
    LifecycleView {
        phase,
        round_no,
        player_count: 3,
        turn,
        trump_suit: None,
        last_trick: None,
        last_scored_round: None,
    }
}

#[test]
fn derive_transitions_empty_when_nothing_changed() {
    let v = view(Phase::Prediction, 1, Some(2));
    assert!(derive_game_transitions(&v, &v.clone()).is_empty());
}

#[test]
fn derive_transitions_emits_turn_became_on_none_to_some() {
    let before = view(Phase::Prediction, 1, None);
    let after = view(Phase::Prediction, 1, Some(1));
    assert_eq!(
        derive_game_transitions(&before, &after),
        vec![GameTransition::TurnBecame { player_id: 1 }]
    );
}

#[test]
fn derive_transitions_empty_on_some_to_none() {
    // Edge-triggered only: "turn became player X" (not "turn cleared").
    let before = view(Phase::Prediction, 1, Some(0));
    let after = view(Phase::Prediction, 1, None);
    assert!(derive_game_transitions(&before, &after).is_empty());
}

#[test]
fn derive_joins_for_each_new_seat() {
    let mut before = view(Phase::NotStarted, 0, None);
    before.player_count = 1;
    let after = view(Phase::NotStarted, 0, None);
    assert_eq!(
        derive_game_transitions(&before, &after),
        vec![
            GameTransition::PlayerJoined { player_id: 1 },
            GameTransition::PlayerJoined { player_id: 2 },
        ]
    );
}

#[test]
fn derive_game_start_sequence() {
    let before = view(Phase::NotStarted, 0, None);
    let after = view(Phase::Prediction, 1, Some(0));
    assert_eq!(
        derive_game_transitions(&before, &after),
        vec![
            GameTransition::GameStarted,
            GameTransition::RoundStarted { round_no: 1 },
            GameTransition::TurnBecame { player_id: 0 },
        ]
    );
}

#[test]
fn derive_trump_chosen() {
    let before = view(Phase::ChooseTrump, 4, Some(2));
    let mut after = view(Phase::Prediction, 4, Some(0));
    after.trump_suit = Some(Suit::Green);
    let t = derive_game_transitions(&before, &after);
    assert_eq!(t[0], GameTransition::TrumpChosen { suit: Suit::Green });
}

#[test]
fn derive_last_trick_of_round_then_next_round() {
    let mut before = view(Phase::Playing { trick_no: 2 }, 2, Some(1));
    before.last_trick = Some((2, 1, 0));
    before.last_scored_round = Some(1);
    let mut after = view(Phase::Prediction, 3, Some(2));
    after.last_trick = Some((2, 2, 1));
    after.last_scored_round = Some(2);
    assert_eq!(
        derive_game_transitions(&before, &after),
        vec![
            GameTransition::TrickWon {
                round_no: 2,
                trick_no: 2,
                winner: 1
            },
            GameTransition::RoundScored { round_no: 2 },
            GameTransition::RoundStarted { round_no: 3 },
            GameTransition::TurnBecame { player_id: 2 },
        ]
    );
}

#[test]
fn derive_game_ended() {
    let before = view(Phase::Playing { trick_no: 20 }, 20, Some(2));
    let mut after = view(Phase::GameOver, 20, None);
    after.last_trick = Some((20, 20, 2));
    after.last_scored_round = Some(20);
    let t = derive_game_transitions(&before, &after);
    assert_eq!(t.last(), Some(&GameTransition::GameEnded));
    assert!(t.contains(&GameTransition::RoundScored { round_no: 20 }));
    assert!(!t.iter().any(|x| matches!(x, GameTransition::RoundStarted { .. })));
}

#[test]
fn derive_turn_became_when_last_player_wins_trick() {
    let mut before = view(Phase::Playing { trick_no: 1 }, 2, Some(2));
    before.last_trick = None;
    let mut after = view(Phase::Playing { trick_no: 2 }, 2, Some(2));
    after.last_trick = Some((2, 1, 2));
    assert_eq!(
        derive_game_transitions(&before, &after),
        vec![
            GameTransition::TrickWon {
                round_no: 2,
                trick_no: 1,
                winner: 2
            },
            GameTransition::TurnBecame { player_id: 2 },
        ]
    );
}

#[test]
fn derive_turn_became_when_same_seat_opens_next_round() {
    let mut before = view(Phase::Playing { trick_no: 1 }, 1, Some(0));
    before.last_scored_round = None;
    let mut after = view(Phase::Prediction, 2, Some(0));
    after.last_trick = Some((1, 1, 0));
    after.last_scored_round = Some(1);
    let t = derive_game_transitions(&before, &after);
    assert_eq!(t.last(), Some(&GameTransition::TurnBecame { player_id: 0 }));
}

#[test]
fn played_trick_won_by_last_seat_hands_turn_back() {
    use crate::domain::cards_serde::parse_cards;
    use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
    use crate::domain::tricks::play_card;

    // round 2, leader p0; seat 2 closes the trick with Red 9 and leads next
    let mut state = make_game_state(
        vec![
            parse_cards(&["5R", "1B"]),
            parse_cards(&["6R", "2B"]),
            parse_cards(&["9R", "3B"]),
        ],
        MakeGameStateArgs {
            phase: Phase::Playing { trick_no: 1 },
            round_no: 2,
            turn: Some(0),
            leader: Some(0),
            predictions: Some(vec![Some(0), Some(0), Some(1)]),
            ..Default::default()
        },
    );
    play_card(&mut state, 0, 0).unwrap();
    play_card(&mut state, 1, 0).unwrap();
    let before = LifecycleView::of(&state);
    play_card(&mut state, 2, 0).unwrap();
    let after = LifecycleView::of(&state);

    assert_eq!(state.turn, Some(2));
    let t = derive_game_transitions(&before, &after);
    assert!(t.contains(&GameTransition::TrickWon {
        round_no: 2,
        trick_no: 1,
        winner: 2
    }));
    assert_eq!(t.last(), Some(&GameTransition::TurnBecame { player_id: 2 }));
}
