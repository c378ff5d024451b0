use std::ops::RangeInclusive;

use crate::domain::state::PlayerId;

pub const MIN_PLAYERS: u8 = 3;
pub const MAX_PLAYERS: u8 = 6;
pub const SUIT_COUNT: usize = 4;
pub const RANKS_PER_SUIT: usize = 15;
pub const DECK_SIZE: usize = SUIT_COUNT * RANKS_PER_SUIT;

pub fn valid_capacity(capacity: u8) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&capacity)
}

/// Number of rounds in a game; round `n` deals `n` cards to every player.
pub fn max_rounds(capacity: u8) -> u8 {
    (DECK_SIZE / capacity.max(1) as usize) as u8
}

pub fn valid_prediction_range(round_no: u8) -> RangeInclusive<u8> {
    0..=round_no
}

/// Seats in playing order for a 1-based round: the join order rotated left
/// by `round_no - 1`.
pub fn round_turn_order(capacity: u8, round_no: u8) -> Vec<PlayerId> {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    let start = round_no.saturating_sub(1) % capacity;
    (0..capacity).map(|i| (start + i) % capacity).collect()
}

/// Seat (join order) that picks trump when a Witch is turned up.
pub fn trump_chooser_seat(capacity: u8, round_no: u8) -> PlayerId {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    ((round_no as u16 - 1 + capacity as u16 - 1) % capacity as u16) as PlayerId
}
