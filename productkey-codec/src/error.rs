//! Error types for license key parsing.

use thiserror::Error;

/// Reasons a string is not a valid license key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Payload (separators removed) is not exactly 25 characters long.
    #[error("invalid license key length: expected {expected} symbols, found {found}")]
    InvalidLength {
        /// Required payload length.
        expected: usize,
        /// Payload length of the input.
        found: usize,
    },

    /// Payload contains a character outside `A`-`Z` / `0`-`9`.
    #[error("invalid character {character:?} at payload position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based index into the payload (separators removed).
        position: usize,
    },

    /// Payload is well formed but the checksum does not come out to zero.
    #[error("checksum mismatch: sum mod 10 is {remainder}, expected 0")]
    ChecksumMismatch {
        /// The non-zero checksum remainder.
        remainder: u8,
    },
}

/// Result type for license key operations.
pub type KeyResult<T> = Result<T, KeyError>;
