use crate::domain::model::{Mode, Shift, Source};
use crate::utils::error::{CipherError, Result};
use std::num::IntErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CipherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CipherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CipherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

fn token(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

pub fn parse_mode(input: &str) -> Result<Mode> {
    match token(input).as_str() {
        "e" | "encrypt" => Ok(Mode::Encrypt),
        "d" | "decrypt" => Ok(Mode::Decrypt),
        _ => Err(CipherError::InvalidMode {
            input: input.to_string(),
        }),
    }
}

pub fn parse_source(input: &str) -> Result<Source> {
    match token(input).as_str() {
        "c" | "console" => Ok(Source::Console),
        "f" | "file" => Ok(Source::File),
        _ => Err(CipherError::InvalidSource {
            input: input.to_string(),
        }),
    }
}

/// `true` to go again, `false` to stop.
pub fn parse_confirmation(input: &str) -> Result<bool> {
    match token(input).as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(CipherError::InvalidConfirmation {
            input: input.to_string(),
        }),
    }
}

/// Parse a shift, telling apart text that is not a number from a number
/// outside the accepted range.
pub fn parse_shift(input: &str) -> Result<Shift> {
    let trimmed = input.trim();
    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            // Too many digits is still a number, just far out of range.
            let value = match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => {
                    return Err(CipherError::ShiftNotANumber {
                        input: input.to_string(),
                    })
                }
            };
            return Err(CipherError::ShiftOutOfRange {
                value,
                min: Shift::MIN,
                max: Shift::MAX,
            });
        }
    };
    Shift::new(value)
}
