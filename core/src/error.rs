//! Error types for scytale-core.
//!
//! Every failure is a key-validation failure: the transforms themselves are
//! total once their key is validated. Each variant carries the context a
//! shell needs to explain the rejection to the user.

use thiserror::Error;

/// Result type alias for scytale-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating key material.
///
/// Encryption either fully succeeds or is refused with one of these kinds
/// before any character is transformed. There is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Key text does not parse as an integer.
    ///
    /// Raised for the Caesar shift, the Affine pair, and Hill matrix
    /// entries.
    #[error("key {text:?} is not an integer")]
    NonIntegerKey {
        /// The text that failed to parse.
        text: String,
    },

    /// Key contains a character outside A-Z/a-z.
    ///
    /// Raised for Vigenère, Substitution, and OTP keys. An empty Vigenère
    /// or OTP key is rejected with this kind as well.
    #[error("key must contain letters only")]
    NonAlphabeticKey,

    /// Key has the wrong number of symbols.
    ///
    /// Raised when an OTP key does not match the plaintext's letter count,
    /// a Substitution key is not 26 letters, or a Hill matrix row does not
    /// hold exactly 2 entries.
    #[error("key length mismatch: expected {expected}, got {actual}")]
    KeyLengthMismatch {
        /// Number of symbols required.
        expected: usize,
        /// Number of symbols supplied.
        actual: usize,
    },

    /// Affine coefficient `a` shares a factor with 26.
    ///
    /// Without gcd(a, 26) = 1 the affine map is not a bijection on the
    /// alphabet.
    #[error("key 'a' = {a} is not coprime with 26")]
    NonCoprimeKey {
        /// The rejected coefficient.
        a: i32,
    },

    /// Hill matrix determinant shares a factor with 26.
    ///
    /// The matrix has no inverse in the mod-26 ring, so the transform
    /// could never be undone.
    #[error("matrix determinant {determinant} is not invertible modulo 26")]
    NonInvertibleMatrix {
        /// The determinant, reduced mod 26.
        determinant: i32,
    },

    /// Substitution key repeats a letter.
    ///
    /// A 26-symbol key with a repeat cannot be a permutation of the
    /// alphabet.
    #[error("substitution key repeats the letter '{letter}'")]
    DuplicateKeySymbol {
        /// The first letter found twice.
        letter: char,
    },
}
