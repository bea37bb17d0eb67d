//! The cipher selection menu.

use std::io::{self, Write};

use scytale_core::Cipher;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// One of the six ciphers.
    Cipher(Cipher),
    /// Leave the program.
    Exit,
}

/// Write the numbered cipher menu.
pub fn render<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Available ciphers:")?;
    for (index, cipher) in Cipher::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, cipher)?;
    }
    writeln!(output, "7. Exit")
}

/// Parse a menu selection. Exact digits only - "1" through "7".
pub fn parse_choice(text: &str) -> Option<Choice> {
    match text {
        "1" => Some(Choice::Cipher(Cipher::Caesar)),
        "2" => Some(Choice::Cipher(Cipher::Vigenere)),
        "3" => Some(Choice::Cipher(Cipher::Affine)),
        "4" => Some(Choice::Cipher(Cipher::Hill)),
        "5" => Some(Choice::Cipher(Cipher::Substitution)),
        "6" => Some(Choice::Cipher(Cipher::Otp)),
        "7" => Some(Choice::Exit),
        _ => None,
    }
}
