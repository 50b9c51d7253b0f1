//! Caesar shift cipher.
//!
//! Letters of the ASCII alphabet are rotated by a signed shift, wrapping
//! around at either end. Case is preserved and every other character is
//! passed through untouched.

use crate::domain::ports::Cipher;

pub const ALPHABET_LOWER: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
pub const ALPHABET_UPPER: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET_SIZE: i64 = 26;

/// Rotates `ch` inside `alphabet`, or returns `None` if it is not a member.
fn rotate(alphabet: &[u8; 26], ch: char, shift: i64) -> Option<char> {
    let idx = alphabet.iter().position(|&b| char::from(b) == ch)? as i64;
    // rem_euclid 保證結果落在 [0, 25]，負數 shift 也一樣
    let target = (idx + shift.rem_euclid(ALPHABET_SIZE)) % ALPHABET_SIZE;
    Some(char::from(alphabet[target as usize]))
}

fn shift_char(ch: char, shift: i64) -> char {
    rotate(ALPHABET_LOWER, ch, shift)
        .or_else(|| rotate(ALPHABET_UPPER, ch, shift))
        .unwrap_or(ch)
}

/// Shifts every letter of `message` by `shift` positions.
///
/// Total for any input: `shift` and `shift + 26k` give the same result.
pub fn transform(message: &str, shift: i64) -> String {
    message.chars().map(|ch| shift_char(ch, shift)).collect()
}

pub fn encode(message: &str, shift: i64) -> String {
    transform(message, shift)
}

/// Inverse of [`encode`] for the same shift.
pub fn decode(message: &str, shift: i64) -> String {
    // 先取模再反向，避免 i64::MIN 取負數溢位
    transform(message, ALPHABET_SIZE - shift.rem_euclid(ALPHABET_SIZE))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftCipher;

impl Cipher for ShiftCipher {
    fn encode(&self, message: &str, shift: i64) -> String {
        encode(message, shift)
    }

    fn decode(&self, message: &str, shift: i64) -> String {
        decode(message, shift)
    }
}
