use crate::core::cipher::ALPHABET_SIZE;
use crate::utils::error::{CipherError, Result};
use std::num::IntErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a shift the way the prompt accepts it: surrounding whitespace is
/// ignored, an optional sign is allowed.
///
/// Integers outside the `i64` range are reduced modulo the alphabet size,
/// which encodes the same way.
pub fn parse_shift(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(shift) => Ok(shift),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(reduce_decimal(trimmed))
        }
        Err(_) => Err(CipherError::InvalidShift {
            input: trimmed.to_string(),
        }),
    }
}

/// 只在 overflow 時呼叫，此時每個字元都已確認是數字
fn reduce_decimal(text: &str) -> i64 {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let rem = digits
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')) % ALPHABET_SIZE);

    if negative {
        -rem
    } else {
        rem
    }
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

pub fn validate_extension(field_name: &str, file: &str, extension: &str) -> Result<()> {
    let actual = std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str());

    if actual != Some(extension) {
        return Err(CipherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!("File name must end in .{}", extension),
        });
    }
    Ok(())
}
