//! Product license keys: generation and checksum validation.
//!
//! This crate handles:
//! - Random generation of well-formed license keys
//! - Validation of arbitrary strings against the key checksum
//! - A strongly typed [`LicenseKey`] that can only hold valid keys
//!
//! # License Key Format
//!
//! Keys are formatted as five blocks of five symbols joined by dashes:
//! `XXXXX-XXXXX-XXXXX-XXXXX-XXXXX`, where each symbol is `A`-`Z` or `0`-`9`.
//!
//! Each symbol maps to a value (`0`-`9` → 0-9, `A`-`Z` → 10-35). The 25
//! values of the payload must satisfy a Luhn-style checksum: walking back
//! from the last symbol, every second value is doubled and folded into
//! `2d / 10 + 2d % 10`, the rest are taken as-is, and the total must be
//! divisible by 10.
//!
//! ```
//! use productkey_codec::{generate, validate, LicenseKey};
//!
//! let key = generate();
//! assert!(validate(&key.to_string()));
//!
//! let parsed: LicenseKey = "ABCDE-FGHIJ-KLMNO-PQRST-UVWX2".parse().unwrap();
//! assert_eq!(parsed.payload(), "ABCDEFGHIJKLMNOPQRSTUVWX2");
//! ```

mod alphabet;
mod checksum;
mod error;
mod generator;
mod key;

pub use alphabet::{symbol_for_value, symbol_value, ALPHABET};
pub use checksum::{checksum, fold_doubled};
pub use error::{KeyError, KeyResult};
pub use generator::{generate, KeyGenerator, MAX_ATTEMPTS};
pub use key::{validate, LicenseKey, BLOCK_COUNT, BLOCK_LEN, PAYLOAD_LEN, SEPARATOR};
