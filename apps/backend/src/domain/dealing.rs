//! The 60-card deck and deterministic dealing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::warn;

use crate::domain::rules::DECK_SIZE;
use crate::domain::{Card, Rank, Suit};

/// Ordered stack of cards; drawing takes from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Full deck in standard order: suit by suit, Jester, 1..=13, Witch.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::all() {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    /// Fresh full deck shuffled with a ChaCha stream seeded from `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new();
        deck.shuffle_with_seed(seed);
        deck
    }

    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Uniform Fisher-Yates permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Deal `hand_size` cards to each of `player_count` players, one card at a
/// time in seat order. Hands are sorted for display.
///
/// Stops early (without error) if the deck runs out; within the legal round
/// range this never happens.
pub fn deal_hands(deck: &mut Deck, player_count: usize, hand_size: u8) -> Vec<Vec<Card>> {
    let mut hands: Vec<Vec<Card>> = (0..player_count)
        .map(|_| Vec::with_capacity(hand_size as usize))
        .collect();

    'dealing: for _ in 0..hand_size {
        for hand in hands.iter_mut() {
            match deck.draw() {
                Some(card) => hand.push(card),
                None => {
                    warn!(player_count, hand_size, "Deck exhausted while dealing");
                    break 'dealing;
                }
            }
        }
    }

    for hand in hands.iter_mut() {
        hand.sort();
    }
    hands
}
