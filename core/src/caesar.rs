//! Caesar cipher - fixed alphabet shift.

use crate::{alphabet, modular};

/// Shift every letter of `plaintext` by `shift` positions, wrapping mod 26.
///
/// Letters come out uppercase; everything else passes through unchanged.
/// Any `i32` shift is accepted - it is reduced before use, so -1 and 25
/// are the same key.
pub(crate) fn encrypt(plaintext: &str, shift: i32) -> String {
    let shift = modular::reduce(shift);
    plaintext
        .chars()
        .map(|c| {
            if alphabet::contains(c) {
                alphabet::letter(modular::reduce(i32::from(alphabet::value(c)) + shift) as u8)
            } else {
                c
            }
        })
        .collect()
}
