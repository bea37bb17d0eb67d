//! The interactive encryption loop.
//!
//! One round: pick a cipher, enter plaintext, enter key material, read the
//! ciphertext or the validation failure. Failures offer a retry; successes
//! offer another round. Logging stays at metadata level - cipher names and
//! lengths, never message content.

use std::io::{self, BufRead, Write};

use scytale_core::{alphabet, encrypt, Cipher, KeyInput};
use tracing::debug;

use crate::menu::{self, Choice};

/// Outcome of one encryption round.
enum Round {
    /// Ciphertext was printed.
    Encrypted,
    /// The key was refused by the validator.
    Refused,
    /// Input ended mid-round.
    Eof,
}

/// Drive the menu loop until the user exits or input runs out.
///
/// # Errors
///
/// Propagates I/O errors from `input` and `output`. End-of-input is not an
/// error - the loop just ends.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    loop {
        menu::render(output)?;
        let Some(choice) = prompt(
            input,
            output,
            "Enter the number corresponding to the cipher you want to use: ",
        )?
        else {
            break;
        };

        let cipher = match menu::parse_choice(choice.trim()) {
            Some(Choice::Exit) => {
                writeln!(output, "Exiting the program.")?;
                break;
            }
            Some(Choice::Cipher(cipher)) => cipher,
            None => {
                writeln!(output, "Invalid choice. Please enter a number between 1 and 7.")?;
                continue;
            }
        };
        debug!(%cipher, "cipher selected");

        let question = match encrypt_round(cipher, input, output)? {
            Round::Encrypted => "Do you want to encrypt another message? (Y/N): ",
            Round::Refused => "Invalid input detected. Do you want to retry? (Y/N): ",
            Round::Eof => break,
        };
        if !confirm(input, output, question)? {
            writeln!(output, "Exiting the program.")?;
            break;
        }
    }
    Ok(())
}

/// Collect plaintext and key material for `cipher`, then encrypt.
fn encrypt_round<R: BufRead, W: Write>(
    cipher: Cipher,
    input: &mut R,
    output: &mut W,
) -> io::Result<Round> {
    let Some(plaintext) = prompt(input, output, "Enter the plaintext to encrypt: ")? else {
        return Ok(Round::Eof);
    };

    let result = match cipher {
        Cipher::Caesar => {
            let Some(key) = prompt(input, output, "Enter the key (integer shift amount): ")?
            else {
                return Ok(Round::Eof);
            };
            encrypt(&plaintext, &KeyInput::Caesar { shift: &key })
        }
        Cipher::Vigenere => {
            let Some(key) = prompt(input, output, "Enter the key (a word or phrase): ")? else {
                return Ok(Round::Eof);
            };
            encrypt(&plaintext, &KeyInput::Vigenere { word: &key })
        }
        Cipher::Affine => {
            let Some(a) = prompt(input, output, "Enter key 'a' (must be coprime with 26): ")?
            else {
                return Ok(Round::Eof);
            };
            let Some(b) = prompt(input, output, "Enter key 'b': ")? else {
                return Ok(Round::Eof);
            };
            encrypt(&plaintext, &KeyInput::Affine { a: &a, b: &b })
        }
        Cipher::Hill => {
            writeln!(output, "Enter the key matrix for Hill cipher (2x2 matrix).")?;
            let Some(top) = prompt(input, output, "Enter row 1 (2 integers separated by space): ")?
            else {
                return Ok(Round::Eof);
            };
            let Some(bottom) =
                prompt(input, output, "Enter row 2 (2 integers separated by space): ")?
            else {
                return Ok(Round::Eof);
            };
            encrypt(&plaintext, &KeyInput::Hill { rows: [&top, &bottom] })
        }
        Cipher::Substitution => {
            let Some(key) = prompt(
                input,
                output,
                "Enter the key (a permutation of 26 unique letters): ",
            )?
            else {
                return Ok(Round::Eof);
            };
            encrypt(&plaintext, &KeyInput::Substitution { alphabet: &key })
        }
        Cipher::Otp => {
            let required = plaintext
                .chars()
                .filter(|&c| alphabet::contains(c))
                .count();
            let Some(key) = prompt(
                input,
                output,
                &format!("Enter the key (must be {required} letters): "),
            )?
            else {
                return Ok(Round::Eof);
            };
            encrypt(&plaintext, &KeyInput::Otp { pad: &key })
        }
    };

    match result {
        Ok(ciphertext) => {
            debug!(%cipher, chars = ciphertext.chars().count(), "encryption succeeded");
            writeln!(output, "Encrypted text: {ciphertext}")?;
            Ok(Round::Encrypted)
        }
        Err(err) => {
            debug!(%cipher, %err, "key refused");
            writeln!(output, "{err}")?;
            Ok(Round::Refused)
        }
    }
}

/// Ask a Y/N question; anything but y/Y (including end-of-input) is no.
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    let Some(answer) = prompt(input, output, question)? else {
        return Ok(false);
    };
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Print a prompt and read one line, without its trailing newline.
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
