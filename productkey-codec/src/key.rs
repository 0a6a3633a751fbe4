//! The [`LicenseKey`] type and string validation.
//!
//! A key string is validated by stripping every separator, checking that
//! exactly 25 symbols remain, mapping them to values and running the
//! checksum. Separators are not positional: `ABCDEFGHIJKLMNOPQRSTUVWX2`
//! and `ABCDE-FGHIJ-KLMNO-PQRST-UVWX2` are the same key.

use crate::alphabet::symbol_value;
use crate::checksum::checksum;
use crate::error::{KeyError, KeyResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Number of blocks in a formatted key.
pub const BLOCK_COUNT: usize = 5;

/// Number of symbols in each block.
pub const BLOCK_LEN: usize = 5;

/// Number of symbols in a key, separators excluded.
pub const PAYLOAD_LEN: usize = BLOCK_COUNT * BLOCK_LEN;

/// Character joining the blocks of a formatted key.
pub const SEPARATOR: char = '-';

/// A license key whose payload satisfies the checksum.
///
/// Values can only be produced by [`KeyGenerator`](crate::KeyGenerator) or
/// by parsing a string that passes [`validate`], so holding a `LicenseKey`
/// means holding a valid key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicenseKey {
    /// The 25 payload symbols, separators removed.
    payload: String,
}

impl LicenseKey {
    /// Parses and validates a key string.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload has the wrong length, contains a
    /// character outside the alphabet, or fails the checksum.
    pub fn parse(key: &str) -> KeyResult<Self> {
        let payload: String = key.chars().filter(|&c| c != SEPARATOR).collect();

        let found = payload.chars().count();
        if found != PAYLOAD_LEN {
            return Err(KeyError::InvalidLength {
                expected: PAYLOAD_LEN,
                found,
            });
        }

        let values = payload
            .chars()
            .enumerate()
            .map(|(position, character)| {
                symbol_value(character).ok_or(KeyError::InvalidCharacter {
                    character,
                    position,
                })
            })
            .collect::<KeyResult<Vec<u8>>>()?;

        let remainder = checksum(&values);
        if remainder != 0 {
            return Err(KeyError::ChecksumMismatch { remainder });
        }

        Ok(Self { payload })
    }

    /// Wraps a payload the generator has already made valid.
    pub(crate) fn from_valid_payload(payload: String) -> Self {
        debug_assert!(Self::parse(&payload).is_ok(), "generated invalid payload {payload}");
        Self { payload }
    }

    /// Returns the 25 payload symbols without separators.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Returns the five blocks of the key, in order.
    pub fn blocks(&self) -> impl Iterator<Item = &str> + '_ {
        (0..BLOCK_COUNT).map(move |i| &self.payload[i * BLOCK_LEN..(i + 1) * BLOCK_LEN])
    }
}

impl fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(block)?;
        }
        Ok(())
    }
}

impl FromStr for LicenseKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LicenseKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LicenseKey> for String {
    fn from(key: LicenseKey) -> Self {
        key.to_string()
    }
}

/// Returns true if `key` is a valid license key.
///
/// Never fails: malformed input of any kind simply yields `false`. Use
/// [`LicenseKey::parse`] to learn why a key was rejected.
#[must_use]
pub fn validate(key: &str) -> bool {
    match LicenseKey::parse(key) {
        Ok(_) => true,
        Err(e) => {
            trace!(error = %e, "license key rejected");
            false
        }
    }
}
