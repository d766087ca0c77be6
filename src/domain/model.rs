use crate::utils::error::{CipherError, Result};
use std::fmt;
use std::path::PathBuf;

/// Which way the shift is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Sign applied to the shift: +1 to encrypt, -1 to decrypt.
    pub fn direction(self) -> i32 {
        match self {
            Mode::Encrypt => 1,
            Mode::Decrypt => -1,
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Console,
    File,
}

/// A validated shift in `Shift::MIN..=Shift::MAX`.
///
/// 26 would map every letter onto itself, so the upper bound is 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Shift(u8);

impl Shift {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 25;

    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(CipherError::ShiftOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the text for one cycle comes from, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Message(String),
    File(PathBuf),
}

/// Everything gathered from the user before a cycle is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub mode: Mode,
    pub shift: Shift,
    pub payload: Payload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_bounds() {
        assert!(Shift::new(0).is_err());
        assert!(Shift::new(26).is_err());
        assert!(Shift::new(-3).is_err());
        assert_eq!(Shift::new(1).unwrap().get(), 1);
        assert_eq!(Shift::new(25).unwrap().get(), 25);
    }

    #[test]
    fn test_shift_out_of_range_reports_bounds() {
        match Shift::new(26) {
            Err(CipherError::ShiftOutOfRange { value, min, max }) => {
                assert_eq!((value, min, max), (26, 1, 25));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_mode_direction() {
        assert_eq!(Mode::Encrypt.direction(), 1);
        assert_eq!(Mode::Decrypt.direction(), -1);
        assert_eq!(Mode::Decrypt.to_string(), "decrypt");
    }
}
