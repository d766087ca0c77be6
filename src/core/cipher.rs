use crate::domain::model::{Mode, Shift};

const ALPHABET_LEN: i32 = 26;

/// Shift a single character. Only `a..=z` moves; everything else,
/// space included, is returned as is. The result is not uppercased.
pub fn shift_char(c: char, shift: Shift, mode: Mode) -> char {
    if !c.is_ascii_lowercase() {
        return c;
    }

    let index = (c as u8 - b'a') as i32;
    let moved = (index + mode.direction() * i32::from(shift.get())).rem_euclid(ALPHABET_LEN);
    (b'a' + moved as u8) as char
}

/// Apply the cipher to a whole message.
///
/// Input is case-insensitive and the output is always uppercase. Non-ASCII
/// characters pass through untouched.
pub fn apply(message: &str, shift: Shift, mode: Mode) -> String {
    message
        .chars()
        .map(|c| shift_char(c.to_ascii_lowercase(), shift, mode).to_ascii_uppercase())
        .collect()
}

pub fn encrypt(message: &str, shift: Shift) -> String {
    apply(message, shift, Mode::Encrypt)
}

pub fn decrypt(message: &str, shift: Shift) -> String {
    apply(message, shift, Mode::Decrypt)
}
