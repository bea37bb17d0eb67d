//! One-time pad over the alphabet - Vigenère's formula without cycling.
//!
//! The pad is consumed letter for letter and must cover the plaintext's
//! letters exactly; the length is re-checked at the transform boundary.

use crate::alphabet;
use crate::error::{Error, Result};

/// Encrypt `plaintext` with a pad of letter values 0-25.
///
/// The pad index advances once per letter; non-letters pass through
/// without consuming pad material.
///
/// # Errors
///
/// Returns `Error::KeyLengthMismatch` if the pad length differs from the
/// plaintext's letter count.
pub(crate) fn encrypt(plaintext: &str, pad: &[u8]) -> Result<String> {
    let required = plaintext.chars().filter(|&c| alphabet::contains(c)).count();
    if pad.len() != required {
        return Err(Error::KeyLengthMismatch {
            expected: required,
            actual: pad.len(),
        });
    }

    let mut cursor = 0usize;
    Ok(plaintext
        .chars()
        .map(|c| {
            if alphabet::contains(c) {
                let k = pad[cursor];
                cursor += 1;
                alphabet::letter((alphabet::value(c) + k) % alphabet::LEN)
            } else {
                c
            }
        })
        .collect())
}
