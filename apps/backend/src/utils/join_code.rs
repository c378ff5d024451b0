//! Session id generation.
//!
//! Session ids double as join codes: 10-character strings using Crockford's
//! Base32 alphabet, short enough to read out loud.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U
pub const CODE_LEN: usize = 10;

/// Generate a session id from the given RNG, for reproducible ids.
pub fn generate_join_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}
