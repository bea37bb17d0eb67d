//! Scytale core - classical cipher transforms for a teaching tool.
//!
//! This library implements six pre-modern ciphers - Caesar, Vigenère,
//! Affine, Hill (2x2), monoalphabetic Substitution, and an alphabetic
//! One-Time Pad - together with the key-validation rules and modular
//! arithmetic they share. Keys arrive as raw text exactly as a user typed
//! them; the result is either ciphertext or a typed validation failure.
//!
//! # Architecture
//!
//! ```text
//! modular     (mod-26 ring: reduce, gcd, invertibility, inverse)
//!     ↑
//! matrix      (2x2 matrices over the ring - Hill only)
//!     ↑
//! key         (per-cipher validation into a tagged Key)
//!     ↑
//! engine      (Cipher selector + KeyInput -> encrypt dispatch)
//! ```
//!
//! # Constraints
//!
//! This library intentionally does NOT:
//! - Perform any I/O (prompting, menus, and retries belong to a shell)
//! - Retain state between calls (every transform is a pure function)
//! - Decrypt (the teaching tool covers encryption only)
//! - Claim any cryptographic security (these ciphers are trivially
//!   breakable and are here to be studied, not used)
//!
//! # Example
//!
//! ```
//! use scytale_core::{encrypt, Error, KeyInput};
//!
//! let ciphertext = encrypt(
//!     "ATTACKATDAWN",
//!     &KeyInput::Vigenere { word: "LEMON" },
//! ).unwrap();
//! assert_eq!(ciphertext, "LXFOPVEFRNHR");
//!
//! // A structurally illegal key is refused before anything is transformed.
//! let err = encrypt("HELLO", &KeyInput::Affine { a: "13", b: "2" }).unwrap_err();
//! assert_eq!(err, Error::NonCoprimeKey { a: 13 });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod engine;
pub mod error;
pub mod key;
pub mod matrix;
pub mod modular;

// Cipher primitives - low-level transforms behind the validated Key facade.
// Shells should go through `engine::encrypt` or `Key`.
pub(crate) mod affine;
pub(crate) mod caesar;
pub(crate) mod hill;
pub(crate) mod otp;
pub(crate) mod substitution;
pub(crate) mod vigenere;

// Re-export the main types at crate root
pub use engine::{encrypt, Cipher, KeyInput};
pub use error::{Error, Result};
pub use key::Key;
pub use matrix::Matrix2;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
