//! Random license key generation.
//!
//! All 25 symbols are drawn uniformly from the alphabet and the draw is
//! kept if it passes the checksum, so keys are uniform over the valid key
//! space. About one draw in ten passes. Drawing stops after
//! [`MAX_ATTEMPTS`]; the last draw then has its final symbol replaced by
//! one that closes the checksum, which keeps generation total.

use crate::alphabet::ALPHABET;
use crate::checksum::checksum;
use crate::key::{LicenseKey, PAYLOAD_LEN};
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, warn};

const ALPHABET_LEN: u8 = ALPHABET.len() as u8;

/// Upper bound on uniform draws per generated key.
pub const MAX_ATTEMPTS: usize = 1000;

/// Generates license keys from a random source.
///
/// Also an endless [`Iterator`] of keys.
#[derive(Debug)]
pub struct KeyGenerator<R> {
    rng: R,
}

impl KeyGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for KeyGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> KeyGenerator<R> {
    /// Creates a generator drawing from `rng`. Seeded RNGs give
    /// reproducible key sequences.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates one valid key.
    pub fn generate(&mut self) -> LicenseKey {
        let mut values = [0u8; PAYLOAD_LEN];
        for attempt in 1..=MAX_ATTEMPTS {
            self.fill(&mut values);
            if checksum(&values) == 0 {
                let key = LicenseKey::from_valid_payload(to_payload(&values));
                debug!(key = %key, attempt, "generated license key");
                return key;
            }
        }

        warn!(attempts = MAX_ATTEMPTS, "no valid draw, closing checksum on last draw");
        self.close_checksum(&mut values);
        LicenseKey::from_valid_payload(to_payload(&values))
    }

    /// Generates `count` keys.
    pub fn generate_batch(&mut self, count: usize) -> Vec<LicenseKey> {
        self.by_ref().take(count).collect()
    }

    fn fill(&mut self, values: &mut [u8; PAYLOAD_LEN]) {
        for value in values.iter_mut() {
            *value = self.rng.gen_range(0..ALPHABET_LEN);
        }
    }

    /// Replaces the last value with one of the symbols that brings the
    /// checksum to zero. The last position is summed untransformed.
    fn close_checksum(&mut self, values: &mut [u8; PAYLOAD_LEN]) {
        values[PAYLOAD_LEN - 1] = 0;
        let residue = (10 - checksum(&values[..])) % 10;
        let candidates = (ALPHABET_LEN - 1 - residue) / 10 + 1;
        values[PAYLOAD_LEN - 1] = residue + 10 * self.rng.gen_range(0..candidates);
    }
}

impl<R: Rng> Iterator for KeyGenerator<R> {
    type Item = LicenseKey;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

/// Maps values, all below 36, to their symbols.
fn to_payload(values: &[u8; PAYLOAD_LEN]) -> String {
    values
        .iter()
        .map(|&v| char::from(ALPHABET[usize::from(v)]))
        .collect()
}

/// Generates one valid key using the thread-local RNG.
#[must_use]
pub fn generate() -> LicenseKey {
    KeyGenerator::new().generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // StepRng yields a constant; for gen_range(0..36) this constant maps to 1.
    const DRAWS_ONE: u64 = 119_304_648;

    #[test]
    fn first_passing_draw_is_kept() {
        // StepRng(0, 0) always draws the lowest value; all zeros passes.
        let mut generator = KeyGenerator::with_rng(StepRng::new(0, 0));
        let key = generator.generate();
        assert_eq!(key.payload(), "0000000000000000000000000");
    }

    #[test]
    fn exhausted_draws_still_yield_valid_key() {
        // Twenty-five ones never pass (remainder 7), so every attempt fails.
        let mut generator = KeyGenerator::with_rng(StepRng::new(DRAWS_ONE, 0));
        let key = generator.generate();
        assert!(key.payload().starts_with(&"1".repeat(PAYLOAD_LEN - 1)));
        assert!(crate::validate(key.payload()));
    }

    #[test]
    fn close_checksum_always_valid() {
        let mut generator = KeyGenerator::with_rng(StdRng::seed_from_u64(5));
        for _ in 0..200 {
            let mut values = [0u8; PAYLOAD_LEN];
            generator.fill(&mut values);
            generator.close_checksum(&mut values);
            assert_eq!(checksum(&values), 0);
            assert!(values.iter().all(|&v| v < ALPHABET_LEN));
        }
    }

    #[test]
    fn candidate_counts_per_residue() {
        for residue in 0..10 {
            let candidates = (ALPHABET_LEN - 1 - residue) / 10 + 1;
            let expected = if residue <= 5 { 4 } else { 3 };
            assert_eq!(candidates, expected, "residue {residue}");
            assert!(residue + 10 * (candidates - 1) < ALPHABET_LEN);
        }
    }

    #[test]
    fn payload_maps_every_value() {
        let mut values = [0u8; PAYLOAD_LEN];
        values[0] = 35;
        values[PAYLOAD_LEN - 1] = 10;
        let payload = to_payload(&values);
        assert_eq!(payload.len(), PAYLOAD_LEN);
        assert!(payload.starts_with('Z'));
        assert!(payload.ends_with('A'));
    }
}
