//! The encryption engine - validate raw key material, then transform.
//!
//! This is the one entry point a shell needs: hand over the plaintext and
//! the raw key text exactly as the user typed it, get back ciphertext or a
//! [`Error`] describing why the key was refused. The engine keeps no state
//! between calls.
//!
//! [`Error`]: crate::Error

use std::fmt;

use crate::error::Result;
use crate::key::Key;

/// The six cipher identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    /// Fixed alphabet shift.
    Caesar,
    /// Polyalphabetic shift under a cycling key word.
    Vigenere,
    /// The map x -> a*x + b mod 26.
    Affine,
    /// Digraph transform by an invertible 2x2 matrix.
    Hill,
    /// Fixed permutation of the alphabet.
    Substitution,
    /// One-time pad restricted to letters.
    Otp,
}

impl Cipher {
    /// All ciphers, in menu order.
    pub const ALL: [Cipher; 6] = [
        Cipher::Caesar,
        Cipher::Vigenere,
        Cipher::Affine,
        Cipher::Hill,
        Cipher::Substitution,
        Cipher::Otp,
    ];

    /// Human-readable cipher name.
    pub fn name(self) -> &'static str {
        match self {
            Cipher::Caesar => "Caesar Cipher",
            Cipher::Vigenere => "Vigenere Cipher",
            Cipher::Affine => "Affine Cipher",
            Cipher::Hill => "Hill Cipher (2x2)",
            Cipher::Substitution => "Substitution Cipher",
            Cipher::Otp => "One-Time Pad (OTP)",
        }
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw key material for one encryption request, one shape per cipher.
///
/// The shapes match what a shell naturally collects: single text fields
/// for most ciphers, a pair for Affine, and two row strings ("two integers
/// separated by space") for Hill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput<'a> {
    /// Caesar shift as integer text.
    Caesar {
        /// The shift field.
        shift: &'a str,
    },
    /// Vigenère key word or phrase.
    Vigenere {
        /// The key word field.
        word: &'a str,
    },
    /// Affine coefficients as two integer text fields.
    Affine {
        /// The `a` field.
        a: &'a str,
        /// The `b` field.
        b: &'a str,
    },
    /// Hill matrix as two raw rows.
    Hill {
        /// The two row fields, top row first.
        rows: [&'a str; 2],
    },
    /// Substitution alphabet, 26 letters.
    Substitution {
        /// The permutation field.
        alphabet: &'a str,
    },
    /// One-time pad text.
    Otp {
        /// The pad field.
        pad: &'a str,
    },
}

impl KeyInput<'_> {
    /// Which cipher this key material selects.
    pub fn cipher(&self) -> Cipher {
        match self {
            KeyInput::Caesar { .. } => Cipher::Caesar,
            KeyInput::Vigenere { .. } => Cipher::Vigenere,
            KeyInput::Affine { .. } => Cipher::Affine,
            KeyInput::Hill { .. } => Cipher::Hill,
            KeyInput::Substitution { .. } => Cipher::Substitution,
            KeyInput::Otp { .. } => Cipher::Otp,
        }
    }

    /// Validate this raw material into a typed [`Key`].
    ///
    /// `plaintext` participates only for OTP, whose key length must match
    /// the plaintext's letter count.
    pub fn validate(&self, plaintext: &str) -> Result<Key> {
        match *self {
            KeyInput::Caesar { shift } => Key::caesar(shift),
            KeyInput::Vigenere { word } => Key::vigenere(word),
            KeyInput::Affine { a, b } => Key::affine(a, b),
            KeyInput::Hill { rows } => Key::hill(rows),
            KeyInput::Substitution { alphabet } => Key::substitution(alphabet),
            KeyInput::Otp { pad } => Key::otp(pad, plaintext),
        }
    }
}

/// Encrypt `plaintext` with raw key material.
///
/// Validation runs first; the transform is only reached with a structurally
/// legal key, so the caller receives either full ciphertext or a
/// [`Error`](crate::Error) and nothing in between.
pub fn encrypt(plaintext: &str, input: &KeyInput<'_>) -> Result<String> {
    let key = input.validate(plaintext)?;
    key.encrypt(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn dispatches_each_cipher() {
        let cases: [(KeyInput<'_>, &str); 6] = [
            (KeyInput::Caesar { shift: "3" }, "KHOOR"),
            (KeyInput::Vigenere { word: "AAAAA" }, "HELLO"),
            (KeyInput::Affine { a: "5", b: "8" }, "RCLLA"),
            // Hill pads the odd-length text with X.
            (KeyInput::Hill { rows: ["1 0", "0 1"] }, "HELLOX"),
            (
                KeyInput::Substitution {
                    alphabet: "QWERTYUIOPASDFGHJKLZXCVBNM",
                },
                "ITSSG",
            ),
            (KeyInput::Otp { pad: "XMCKL" }, "EQNVZ"),
        ];

        for (input, expected) in cases {
            let got = encrypt("hello", &input).unwrap();
            assert_eq!(got, expected, "cipher {:?}", input.cipher());
        }
    }

    #[test]
    fn validation_failure_reaches_the_caller() {
        let err = encrypt("hello", &KeyInput::Caesar { shift: "three" }).unwrap_err();
        assert!(matches!(err, Error::NonIntegerKey { .. }));

        let err = encrypt("hello", &KeyInput::Hill { rows: ["2 4", "6 8"] }).unwrap_err();
        assert_eq!(err, Error::NonInvertibleMatrix { determinant: 18 });
    }

    #[test]
    fn input_reports_its_cipher() {
        assert_eq!(KeyInput::Otp { pad: "A" }.cipher(), Cipher::Otp);
        assert_eq!(
            KeyInput::Hill { rows: ["1 2", "3 4"] }.cipher(),
            Cipher::Hill
        );
    }

    #[test]
    fn cipher_names_are_stable() {
        assert_eq!(Cipher::Caesar.to_string(), "Caesar Cipher");
        assert_eq!(Cipher::Otp.name(), "One-Time Pad (OTP)");
        assert_eq!(Cipher::ALL.len(), 6);
    }
}
