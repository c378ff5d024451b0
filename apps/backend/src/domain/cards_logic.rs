//! Card game logic: suit obligations and pairwise card strength.

use super::cards_types::{Card, Rank, Suit};
use super::state::PlayerId;

/// True if any card in the hand carries `suit`, Jesters and Witches included.
pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Suit the next player must follow, if any.
///
/// No obligation on an empty trick or when a Witch was led. Otherwise the
/// suit of the first non-Jester card; while only Jesters have been played
/// there is no lead suit yet.
pub fn lead_suit(plays: &[(PlayerId, Card)]) -> Option<Suit> {
    let (_, first) = plays.first()?;
    if first.is_witch() {
        return None;
    }
    plays
        .iter()
        .map(|(_, c)| c)
        .find(|c| !c.is_jester())
        .map(|c| c.suit)
}

/// Whether `card` may be played from `hand` onto a trick with the given lead.
pub fn follows_suit(hand: &[Card], card: Card, lead: Option<Suit>) -> bool {
    match lead {
        None => true,
        Some(_) if card.is_wild() => true,
        Some(lead) => card.suit == lead || !hand_has_suit(hand, lead),
    }
}

/// Whether `challenger` displaces the running trick winner `best`.
///
/// Witches are handled by the caller (first Witch wins outright); this
/// compares the remaining cards: a trump beats a non-trump, and a higher
/// number of the same suit beats a lower one. Jesters never win here.
pub fn card_beats(challenger: Card, best: Card, trump: Option<Suit>) -> bool {
    if best.is_witch() {
        return false;
    }
    if challenger.is_witch() {
        return true;
    }
    let Rank::Number(challenger_n) = challenger.rank else {
        return false;
    };
    if let Some(trump) = trump {
        if challenger.suit == trump && best.suit != trump {
            return true;
        }
    }
    match best.rank {
        Rank::Number(best_n) => challenger.suit == best.suit && challenger_n > best_n,
        Rank::Jester => true,
        Rank::Witch => false,
    }
}
