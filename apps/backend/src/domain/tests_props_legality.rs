use proptest::prelude::*;

/// Property-based tests for legal plays and predictions
use crate::domain::bidding::{legal_predictions, place_prediction, Prediction};
use crate::domain::cards_logic::follows_suit;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::tricks::legal_card_indices;
use crate::domain::{test_gens, test_prelude};
use crate::domain::{Card, Suit};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the player on lead may play any card.
    #[test]
    fn prop_leader_may_play_anything(hand in (1usize..=15).prop_flat_map(test_gens::unique_cards)) {
        let n = hand.len();
        let state = make_game_state(
            vec![hand, Vec::new(), Vec::new()],
            MakeGameStateArgs {
                phase: Phase::Playing { trick_no: 1 },
                round_no: n as u8,
                leader: Some(0),
                ..Default::default()
            },
        );
        prop_assert_eq!(legal_card_indices(&state, 0), (0..n).collect::<Vec<_>>());
    }

    /// Property: without the lead suit in hand, every card is legal.
    #[test]
    fn prop_void_in_lead_suit_plays_anything(
        (void_suit, hand) in test_gens::suit()
            .prop_flat_map(|s| (Just(s), test_gens::hand_without_suit(s, 12))),
    ) {
        for card in &hand {
            prop_assert!(follows_suit(&hand, *card, Some(void_suit)));
        }
    }

    /// Property: during play at least one card is always legal, and every
    /// legal card is either wild, of the lead suit, or played while void.
    #[test]
    fn prop_some_card_always_legal(
        cards in test_gens::unique_cards(9),
    ) {
        let led = cards[0];
        let hand: Vec<Card> = cards[1..].to_vec();
        let mut state = make_game_state(
            vec![vec![led], hand.clone(), Vec::new()],
            MakeGameStateArgs {
                phase: Phase::Playing { trick_no: 1 },
                round_no: 8,
                turn: Some(1),
                leader: Some(0),
                ..Default::default()
            },
        );
        state.hands[0].clear();
        state.round.trick_plays.push((0, led));
        state.round.played.push((0, led));

        let legal = legal_card_indices(&state, 1);
        prop_assert!(!legal.is_empty());
        let lead_suit: Option<Suit> = if led.is_witch() || led.is_jester() {
            None
        } else {
            Some(led.suit)
        };
        let holds_lead = lead_suit.is_some_and(|s| hand.iter().any(|c| c.suit == s));
        for i in legal {
            let c = hand[i];
            prop_assert!(
                lead_suit.is_none() || c.is_wild() || Some(c.suit) == lead_suit || !holds_lead,
                "illegal card {} allowed on lead {}", c, led
            );
        }
    }

    /// Property: whatever earlier seats predicted, the last bidder's legal
    /// values never bring the sum to the round number.
    #[test]
    fn prop_last_bidder_never_completes_sum(
        round_no in 1u8..=10,
        capacity in test_gens::capacity(),
        seed in any::<u64>(),
    ) {
        let mut state = make_game_state(
            vec![Vec::new(); capacity as usize],
            MakeGameStateArgs { round_no, ..Default::default() },
        );
        let mut pick = seed;
        for seat in 0..capacity - 1 {
            let options = legal_predictions(&state, seat as PlayerId);
            prop_assert_eq!(options.len(), round_no as usize + 1);
            let choice = options[(pick % options.len() as u64) as usize];
            pick /= 7;
            place_prediction(&mut state, seat, choice).unwrap();
        }
        let last = capacity - 1;
        let sum: u32 = state.round.prediction_sum();
        let options = legal_predictions(&state, last);
        prop_assert!(!options.is_empty());
        for Prediction(v) in &options {
            prop_assert_ne!(sum + u32::from(*v), u32::from(round_no));
        }
        let expected_len = if sum <= u32::from(round_no) { round_no as usize } else { round_no as usize + 1 };
        prop_assert_eq!(options.len(), expected_len);
    }
}
