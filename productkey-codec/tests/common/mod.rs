//! Shared test helpers for license key tests.

#![allow(dead_code)]

use productkey_codec::{KeyGenerator, ALPHABET};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Reference key whose checksum sums to exactly 350.
pub const VALID_KEY: &str = "ABCDE-FGHIJ-KLMNO-PQRST-UVWX2";

/// Same payload as [`VALID_KEY`] with the last symbol off by one (sum 349).
pub const INVALID_KEY: &str = "ABCDE-FGHIJ-KLMNO-PQRST-UVWX1";

/// Returns a generator with a fixed seed.
pub fn seeded_generator(seed: u64) -> KeyGenerator<StdRng> {
    KeyGenerator::with_rng(StdRng::seed_from_u64(seed))
}

/// Returns the alphabet symbol following `c`, wrapping `Z` to `0`.
pub fn next_symbol(c: char) -> char {
    let idx = ALPHABET
        .iter()
        .position(|&b| char::from(b) == c)
        .expect("not an alphabet symbol");
    char::from(ALPHABET[(idx + 1) % ALPHABET.len()])
}

/// Replaces the payload symbol at `position` (separators excluded).
pub fn replace_symbol(payload: &str, position: usize, c: char) -> String {
    payload
        .chars()
        .enumerate()
        .map(|(i, orig)| if i == position { c } else { orig })
        .collect()
}

/// Returns true if `s` has the shape `[A-Z0-9]{5}(-[A-Z0-9]{5}){4}`.
pub fn is_key_shaped(s: &str) -> bool {
    let blocks: Vec<&str> = s.split('-').collect();
    blocks.len() == 5
        && blocks.iter().all(|b| {
            b.len() == 5
                && b.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        })
}
