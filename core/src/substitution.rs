//! Monoalphabetic substitution - a fixed permutation of the alphabet.

use crate::alphabet;

/// Encrypt `plaintext` through a substitution table.
///
/// `table[v]` is the image value of the letter with value `v`; the
/// validator guarantees the table is a permutation of 0-25.
pub(crate) fn encrypt(plaintext: &str, table: &[u8; 26]) -> String {
    plaintext
        .chars()
        .map(|c| {
            if alphabet::contains(c) {
                alphabet::letter(table[alphabet::value(c) as usize])
            } else {
                c
            }
        })
        .collect()
}
