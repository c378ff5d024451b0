//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Every session owns one 64-bit game seed. Per-round shuffles and per-session
//! seeds handed out by a seeded store are derived from it, so a game can be
//! replayed exactly from its seed.

/// Derive the shuffle seed for one round.
///
/// Same game + round = same deck order; different rounds get unrelated decks.
pub fn derive_dealing_seed(game_seed: u64, round_no: u8) -> u64 {
    splitmix(
        game_seed
            .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
            .wrapping_add(2),
    )
}

/// Derive the game seed for the `index`-th session created by a store
/// running with a fixed base seed.
pub fn derive_session_seed(base_seed: u64, index: u64) -> u64 {
    splitmix(base_seed.wrapping_add(index.wrapping_mul(10_000)).wrapping_add(1))
}

// SplitMix64 finalizer: spreads nearby inputs across the whole u64 range.
fn splitmix(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
