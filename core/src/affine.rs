//! Affine cipher - the map x -> a*x + b over the mod-26 ring.

use crate::{alphabet, modular};

/// Encrypt `plaintext` with coefficients `a` and `b`.
///
/// gcd(a, 26) = 1 is the validator's invariant; this transform applies the
/// map as given. Coefficients are reduced first so arbitrarily large keys
/// cannot overflow.
pub(crate) fn encrypt(plaintext: &str, a: i32, b: i32) -> String {
    let (a, b) = (modular::reduce(a), modular::reduce(b));
    plaintext
        .chars()
        .map(|c| {
            if alphabet::contains(c) {
                alphabet::letter(modular::reduce(a * i32::from(alphabet::value(c)) + b) as u8)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regression_vector_a5_b8() {
        // H(7) -> 5*7+8 = 43 = 17 (mod 26) -> R, and so on.
        assert_eq!(encrypt("HELLO", 5, 8), "RCLLA");
    }

    #[test]
    fn identity_coefficients() {
        assert_eq!(encrypt("affine!", 1, 0), "AFFINE!");
    }

    #[test]
    fn b_alone_is_a_caesar_shift() {
        assert_eq!(encrypt("ABC", 1, 3), "DEF");
    }

    #[test]
    fn negative_a_reduces_first() {
        // -5 = 21 (mod 26), so the two keys agree.
        assert_eq!(encrypt("HELLO", -5, 8), encrypt("HELLO", 21, 8));
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(encrypt("H E-L", 5, 8), "R C-L");
    }
}
