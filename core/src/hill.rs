//! Hill cipher - digraphs transformed by an invertible 2x2 matrix.
//!
//! Unlike the other ciphers here, Hill strips the plaintext to bare
//! uppercase letters before transforming: non-letters and casing are NOT
//! preserved in the output, and an odd-length text is padded with 'X'.
//! This asymmetry is inherited behavior, kept as-is.

use crate::alphabet;
use crate::matrix::Matrix2;

/// Padding letter appended when the filtered plaintext has odd length.
const PADDING: char = 'X';

/// Encrypt `plaintext` by multiplying consecutive letter pairs with `key`.
///
/// The validator guarantees `key` is invertible mod 26; this transform
/// works with any matrix.
pub(crate) fn encrypt(plaintext: &str, key: &Matrix2) -> String {
    let mut values: Vec<i32> = plaintext
        .chars()
        .filter(|&c| alphabet::contains(c))
        .map(|c| i32::from(alphabet::value(c)))
        .collect();
    if values.len() % 2 != 0 {
        values.push(i32::from(alphabet::value(PADDING)));
    }

    let mut out = String::with_capacity(values.len());
    for pair in values.chunks_exact(2) {
        let [x, y] = key.mul_vector([pair[0], pair[1]]);
        out.push(alphabet::letter(x as u8));
        out.push(alphabet::letter(y as u8));
    }
    out
}
