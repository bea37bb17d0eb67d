//! Vigenère cipher - polyalphabetic shift under a running key.
//!
//! The key cursor advances only when a letter is consumed, so punctuation
//! and spacing never desynchronize the running key.

use crate::alphabet;

/// Encrypt `plaintext` under a running key of letter values 0-25.
///
/// `key` must be non-empty (the validated [`Key::Vigenere`] variant
/// guarantees this).
///
/// [`Key::Vigenere`]: crate::Key::Vigenere
pub(crate) fn encrypt(plaintext: &str, key: &[u8]) -> String {
    let mut cursor = 0usize;
    plaintext
        .chars()
        .map(|c| {
            if alphabet::contains(c) {
                let k = key[cursor % key.len()];
                cursor += 1;
                alphabet::letter((alphabet::value(c) + k) % alphabet::LEN)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(word: &str) -> Vec<u8> {
        word.chars().map(alphabet::value).collect()
    }

    #[test]
    fn canonical_textbook_vector() {
        assert_eq!(encrypt("ATTACKATDAWN", &key("LEMON")), "LXFOPVEFRNHR");
    }

    #[test]
    fn non_letters_do_not_advance_the_key() {
        // Without the cursor rule the 'T's would pick up different key letters.
        assert_eq!(encrypt("AT TACK", &key("LEMON")), "LX FOPV");
    }

    #[test]
    fn key_of_a_is_identity_on_letters() {
        assert_eq!(encrypt("Hello, World!", &key("A")), "HELLO, WORLD!");
    }

    #[test]
    fn key_cycles_past_its_length() {
        // Key "AB" alternates shift 0 / shift 1.
        assert_eq!(encrypt("AAAA", &key("AB")), "ABAB");
    }
}
