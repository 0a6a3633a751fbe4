//! Luhn-style checksum over base-36 symbol values.
//!
//! The payload is walked from its last value backwards. Values at even
//! distance from the end (the last, third-to-last, ...) are summed as-is;
//! values at odd distance are doubled and folded with [`fold_doubled`].
//! A payload is valid when the total is divisible by 10.

/// Doubles `value` and adds the decimal quotient and remainder of the
/// result by 10.
///
/// For single digits this is the classic Luhn step (`2d` or `2d - 9`).
/// Letter values (10-35) fold the same way, e.g. 33 → 66 → 6 + 6 = 12.
#[must_use]
pub const fn fold_doubled(value: u8) -> u32 {
    let doubled = value as u32 * 2;
    doubled / 10 + doubled % 10
}

/// Computes the checksum remainder (sum mod 10) of a sequence of symbol
/// values. A valid payload has remainder 0.
///
/// The running sum is reduced as it goes, so any length and any byte
/// values are accepted.
#[must_use]
pub fn checksum(values: &[u8]) -> u8 {
    let remainder = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &v)| if i % 2 == 0 { u32::from(v) } else { fold_doubled(v) })
        .fold(0u32, |acc, term| (acc + term) % 10);
    remainder as u8
}
