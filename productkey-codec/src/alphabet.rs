//! The 36-symbol key alphabet and its value mapping.

/// Symbols a key payload may contain, ordered by value.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the checksum value of a payload symbol.
///
/// Digits map to 0-9 and uppercase ASCII letters to 10-35. Anything else,
/// including lowercase letters, is not a symbol.
#[must_use]
pub fn symbol_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Returns the symbol carrying `value`, if `value` is below 36.
#[must_use]
pub fn symbol_for_value(value: u8) -> Option<char> {
    ALPHABET.get(value as usize).map(|&b| char::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alphabet_symbol_maps_to_its_index() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_value(char::from(b)), Some(i as u8));
            assert_eq!(symbol_for_value(i as u8), Some(char::from(b)));
        }
    }

    #[test]
    fn non_symbols_rejected() {
        for c in ['a', 'z', '-', ' ', '_', 'Ä', '٣', '\0'] {
            assert_eq!(symbol_value(c), None, "{c:?}");
        }
        assert_eq!(symbol_for_value(36), None);
    }
}
