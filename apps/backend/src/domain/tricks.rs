//! Trick play: legal cards, playing a card, resolving the trick winner.

use tracing::debug;

use crate::domain::cards_logic::{card_beats, follows_suit, lead_suit};
use crate::domain::round_lifecycle::finish_round;
use crate::domain::state::{
    next_in_order, require_actor, require_leader, require_phase, CompletedTrick, GameState,
    Phase, PlayerId,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// The card that left the hand.
    pub card: Card,
    /// Whether a trick was completed (one card per player).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// Whether the play finished (and scored) the round.
    pub round_completed: bool,
    /// Whether the play finished the game.
    pub game_over: bool,
}

/// Hand indices the player may play, independent of turn enforcement.
pub fn legal_card_indices(state: &GameState, who: PlayerId) -> Vec<usize> {
    let Phase::Playing { .. } = state.phase else {
        return Vec::new();
    };
    let Some(hand) = state.hands.get(who as usize) else {
        return Vec::new();
    };
    let lead = lead_suit(&state.round.trick_plays);
    hand.iter()
        .enumerate()
        .filter(|(_, card)| follows_suit(hand, **card, lead))
        .map(|(i, _)| i)
        .collect()
}

/// Play the card at `card_index` into the current trick, enforcing phase,
/// turn and suit-following. Completing the last trick scores the round.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    card_index: usize,
) -> Result<PlayCardResult, DomainError> {
    require_phase(state, |p| matches!(p, Phase::Playing { .. }), "playing")?;
    let Phase::Playing { trick_no } = state.phase else {
        return Err(DomainError::invariant("phase changed during play_card"));
    };
    require_actor(state, who, "play_card")?;

    let hand = &state.hands[who as usize];
    let Some(&card) = hand.get(card_index) else {
        return Err(DomainError::validation(
            ValidationKind::InvalidCardIndex,
            format!("Invalid card index {card_index}, hand has {} cards", hand.len()),
        ));
    };

    let lead = lead_suit(&state.round.trick_plays);
    if !follows_suit(hand, card, lead) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            "You must follow suit",
        ));
    }

    let removed = state.hands[who as usize].remove(card_index);
    state.round.trick_plays.push((who, removed));
    state.round.played.push((who, removed));
    state.turn = Some(next_in_order(&state.turn_order, who));
    debug!(seat = who, card = %removed, trick_no, "Card played");

    let mut result = PlayCardResult {
        card: removed,
        trick_completed: false,
        trick_winner: None,
        round_completed: false,
        game_over: false,
    };
    if state.round.trick_plays.len() < state.capacity as usize {
        return Ok(result);
    }

    let winner = resolve_current_trick(state)?;
    let leader = require_leader(state, "play_card trick_complete")?;
    state.round.tricks_won[winner as usize] += 1;
    state.round.last_trick = Some(CompletedTrick {
        round_no: state.round_no,
        trick_no,
        plays: std::mem::take(&mut state.round.trick_plays),
        winner,
    });
    debug!(trick_no, leader, winner, "Trick won");
    result.trick_completed = true;
    result.trick_winner = Some(winner);

    if state.round.tricks_completed() >= u32::from(state.round_no) {
        result.round_completed = true;
        result.game_over = finish_round(state)?;
        return Ok(result);
    }

    state.phase = Phase::Playing {
        trick_no: trick_no + 1,
    };
    state.leader = Some(winner);
    state.turn = Some(winner);
    Ok(result)
}

/// Winner of the current (complete) trick.
fn resolve_current_trick(state: &GameState) -> Result<PlayerId, DomainError> {
    let plays = &state.round.trick_plays;
    let idx = resolve_trick(plays, state.round.trump_suit())
        .ok_or_else(|| DomainError::invariant("cannot resolve a trick with no plays"))?;
    Ok(plays[idx].0)
}

/// Index of the winning play in `plays`, or `None` for an empty trick.
///
/// - Only Jesters: the first one wins.
/// - The first Witch wins outright; later Witches never displace it.
/// - Otherwise the running winner starts at the first non-Jester card and is
///   displaced by a trump (over a non-trump) or a higher card of its suit.
///
/// The winner is reported by position so duplicate Jester/Witch values in
/// different suits can never be confused.
pub fn resolve_trick(plays: &[(PlayerId, Card)], trump: Option<Suit>) -> Option<usize> {
    if plays.is_empty() {
        return None;
    }
    let Some(first_real) = plays.iter().position(|(_, c)| !c.is_jester()) else {
        return Some(0);
    };
    if let Some(witch) = plays.iter().position(|(_, c)| c.is_witch()) {
        return Some(witch);
    }

    let mut best = first_real;
    for (i, (_, card)) in plays.iter().enumerate().skip(first_real + 1) {
        if card_beats(*card, plays[best].1, trump) {
            best = i;
        }
    }
    Some(best)
}
