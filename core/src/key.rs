//! Validated cipher keys.
//!
//! A [`Key`] can only be built through a per-cipher constructor that checks
//! the structural rules for that cipher. Once built it is immutable, and
//! encryption with it cannot produce partial output: the one residual
//! failure mode is an OTP pad reused against a different plaintext than it
//! was validated for.

use crate::error::{Error, Result};
use crate::matrix::Matrix2;
use crate::{affine, alphabet, caesar, hill, modular, otp, substitution, vigenere};

/// A structurally valid key, tagged by cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Caesar shift; any integer, reduced mod 26 during the transform.
    Caesar {
        /// The shift amount.
        shift: i32,
    },
    /// Vigenère running key as letter values 0-25, never empty.
    Vigenere {
        /// Key letters, in order.
        letters: Vec<u8>,
    },
    /// Affine coefficients with gcd(a, 26) = 1.
    Affine {
        /// Multiplicative coefficient.
        a: i32,
        /// Additive coefficient.
        b: i32,
    },
    /// Hill matrix, invertible mod 26.
    Hill {
        /// The validated 2x2 matrix.
        matrix: Matrix2,
    },
    /// Substitution table: `table[v]` is the image of letter value `v`,
    /// a permutation of 0-25.
    Substitution {
        /// The permutation table.
        table: [u8; 26],
    },
    /// One-time pad as letter values, sized to one plaintext.
    Otp {
        /// Pad letters, consumed front to back.
        letters: Vec<u8>,
    },
}

impl Key {
    /// Validate a Caesar key: the text must parse as an integer.
    ///
    /// Surrounding whitespace is tolerated, as is a leading sign.
    pub fn caesar(raw: &str) -> Result<Self> {
        Ok(Key::Caesar {
            shift: parse_int(raw)?,
        })
    }

    /// Validate a Vigenère key: letters only, at least one.
    pub fn vigenere(raw: &str) -> Result<Self> {
        Ok(Key::Vigenere {
            letters: letter_values(raw)?,
        })
    }

    /// Validate an Affine key pair: both integers, `a` coprime with 26.
    pub fn affine(raw_a: &str, raw_b: &str) -> Result<Self> {
        let a = parse_int(raw_a)?;
        let b = parse_int(raw_b)?;
        if !modular::is_invertible(a) {
            return Err(Error::NonCoprimeKey { a });
        }
        Ok(Key::Affine { a, b })
    }

    /// Validate a Hill key from two raw matrix rows.
    ///
    /// Each row must split on whitespace into exactly 2 integer entries;
    /// entries are reduced mod 26 and the determinant must be invertible.
    pub fn hill(rows: [&str; 2]) -> Result<Self> {
        let mut entries = [[0i32; 2]; 2];
        for (row, raw) in rows.iter().enumerate() {
            let fields: Vec<&str> = raw.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(Error::KeyLengthMismatch {
                    expected: 2,
                    actual: fields.len(),
                });
            }
            for (col, field) in fields.iter().enumerate() {
                entries[row][col] = parse_int(field)?;
            }
        }

        let matrix = Matrix2::new(entries);
        let determinant = matrix.determinant();
        if !modular::is_invertible(determinant) {
            return Err(Error::NonInvertibleMatrix { determinant });
        }
        Ok(Key::Hill { matrix })
    }

    /// Validate a Substitution key: exactly 26 letters, all distinct.
    pub fn substitution(raw: &str) -> Result<Self> {
        let symbols: Vec<char> = raw.chars().collect();
        if symbols.len() != 26 {
            return Err(Error::KeyLengthMismatch {
                expected: 26,
                actual: symbols.len(),
            });
        }
        if !symbols.iter().all(|&c| alphabet::contains(c)) {
            return Err(Error::NonAlphabeticKey);
        }

        let mut table = [0u8; 26];
        let mut seen = [false; 26];
        for (i, &c) in symbols.iter().enumerate() {
            let v = alphabet::value(c);
            if seen[v as usize] {
                return Err(Error::DuplicateKeySymbol {
                    letter: alphabet::letter(v),
                });
            }
            seen[v as usize] = true;
            table[i] = v;
        }
        Ok(Key::Substitution { table })
    }

    /// Validate an OTP key against the plaintext it will encrypt.
    ///
    /// The key must have exactly as many symbols as the plaintext has
    /// letters (checked first), and all of them must be letters. A
    /// plaintext without letters therefore requires an empty key, which
    /// then fails the letters-only rule - inherited behavior, kept as-is.
    pub fn otp(raw: &str, plaintext: &str) -> Result<Self> {
        let required = plaintext
            .chars()
            .filter(|&c| alphabet::contains(c))
            .count();
        let actual = raw.chars().count();
        if actual != required {
            return Err(Error::KeyLengthMismatch {
                expected: required,
                actual,
            });
        }
        Ok(Key::Otp {
            letters: letter_values(raw)?,
        })
    }

    /// Encrypt `plaintext` with this key.
    ///
    /// # Errors
    ///
    /// Only [`Key::Otp`] can fail here, and only when the pad was validated
    /// against a different plaintext (`Error::KeyLengthMismatch`).
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(match self {
            Key::Caesar { shift } => caesar::encrypt(plaintext, *shift),
            Key::Vigenere { letters } => vigenere::encrypt(plaintext, letters),
            Key::Affine { a, b } => affine::encrypt(plaintext, *a, *b),
            Key::Hill { matrix } => hill::encrypt(plaintext, matrix),
            Key::Substitution { table } => substitution::encrypt(plaintext, table),
            Key::Otp { letters } => otp::encrypt(plaintext, letters)?,
        })
    }
}

/// Parse an integer key field, trimming surrounding whitespace.
fn parse_int(raw: &str) -> Result<i32> {
    let text = raw.trim();
    text.parse::<i32>().map_err(|_| Error::NonIntegerKey {
        text: text.to_string(),
    })
}

/// Map a key string to letter values, rejecting non-letters and emptiness.
fn letter_values(raw: &str) -> Result<Vec<u8>> {
    if raw.is_empty() || !raw.chars().all(alphabet::contains) {
        return Err(Error::NonAlphabeticKey);
    }
    Ok(raw.chars().map(alphabet::value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caesar_accepts_signed_and_padded_integers() {
        assert_eq!(Key::caesar("3").unwrap(), Key::Caesar { shift: 3 });
        assert_eq!(Key::caesar(" -4 ").unwrap(), Key::Caesar { shift: -4 });
        assert_eq!(Key::caesar("+7").unwrap(), Key::Caesar { shift: 7 });
    }

    #[test]
    fn caesar_rejects_non_integers() {
        assert!(matches!(
            Key::caesar("three"),
            Err(Error::NonIntegerKey { .. })
        ));
        assert!(matches!(Key::caesar(""), Err(Error::NonIntegerKey { .. })));
    }

    #[test]
    fn vigenere_rejects_empty_and_non_letters() {
        assert_eq!(Key::vigenere("").unwrap_err(), Error::NonAlphabeticKey);
        assert_eq!(Key::vigenere("LE MON").unwrap_err(), Error::NonAlphabeticKey);
        assert!(Key::vigenere("Lemon").is_ok());
    }

    #[test]
    fn affine_requires_coprime_a() {
        assert!(Key::affine("5", "8").is_ok());
        assert_eq!(
            Key::affine("13", "8").unwrap_err(),
            Error::NonCoprimeKey { a: 13 }
        );
        // gcd is taken on |a|, so a negative coprime coefficient is legal.
        assert!(Key::affine("-5", "8").is_ok());
        assert!(matches!(
            Key::affine("5", "x"),
            Err(Error::NonIntegerKey { .. })
        ));
    }

    #[test]
    fn hill_rejects_malformed_rows() {
        assert_eq!(
            Key::hill(["1 2 3", "4 5"]).unwrap_err(),
            Error::KeyLengthMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert_eq!(
            Key::hill(["1", "4 5"]).unwrap_err(),
            Error::KeyLengthMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(matches!(
            Key::hill(["1 b", "4 5"]),
            Err(Error::NonIntegerKey { .. })
        ));
    }

    #[test]
    fn hill_gates_on_the_determinant() {
        assert_eq!(
            Key::hill(["2 4", "6 8"]).unwrap_err(),
            Error::NonInvertibleMatrix { determinant: 18 }
        );
        assert!(Key::hill(["3 3", "2 5"]).is_ok());
    }

    #[test]
    fn hill_reduces_entries_mod_26() {
        // 29 3 / 2 31 is 3 3 / 2 5 after reduction.
        assert_eq!(
            Key::hill(["29 3", "2 31"]).unwrap(),
            Key::hill(["3 3", "2 5"]).unwrap()
        );
    }

    #[test]
    fn substitution_gates_in_order() {
        assert_eq!(
            Key::substitution("ABC").unwrap_err(),
            Error::KeyLengthMismatch {
                expected: 26,
                actual: 3
            }
        );
        assert_eq!(
            Key::substitution("QWERTYUIOPASDFGHJKLZXCVBN1").unwrap_err(),
            Error::NonAlphabeticKey
        );
        assert_eq!(
            Key::substitution("QQERTYUIOPASDFGHJKLZXCVBNM").unwrap_err(),
            Error::DuplicateKeySymbol { letter: 'Q' }
        );
        assert!(Key::substitution("QWERTYUIOPASDFGHJKLZXCVBNM").is_ok());
    }

    #[test]
    fn substitution_is_case_insensitive() {
        assert_eq!(
            Key::substitution("qwertyuiopasdfghjklzxcvbnm").unwrap(),
            Key::substitution("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap()
        );
    }

    #[test]
    fn otp_checks_length_before_letters() {
        // Wrong length wins even though the key also contains a digit.
        assert_eq!(
            Key::otp("AB1", "HELLO").unwrap_err(),
            Error::KeyLengthMismatch {
                expected: 5,
                actual: 3
            }
        );
        assert_eq!(
            Key::otp("AB1CD", "HELLO").unwrap_err(),
            Error::NonAlphabeticKey
        );
        assert!(Key::otp("XMCKL", "HELLO").is_ok());
    }

    #[test]
    fn otp_counts_only_plaintext_letters() {
        assert!(Key::otp("XMCKL", "H-E L.L O!").is_ok());
    }

    #[test]
    fn otp_rejects_empty_key_for_letterless_plaintext() {
        assert_eq!(Key::otp("", "12 34!").unwrap_err(), Error::NonAlphabeticKey);
    }
}
