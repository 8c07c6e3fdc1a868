//! Raw guess text to validated integer.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a guess was rejected.
///
/// Display strings are the user-facing messages a front end shows.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[error("Please enter a number!")]
    Empty,

    /// The text is not an integer (decimals, letters, symbols).
    #[error("Please enter a valid number!")]
    NotANumber,

    /// The integer lies outside the guessing range.
    ///
    /// Values that overflow `i64` are reported saturated.
    #[error("Number must be between {min} and {max}!")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl InputError {
    /// The parsed value, when the text was an integer.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        match self {
            InputError::OutOfRange { value, .. } => Some(*value),
            InputError::Empty | InputError::NotANumber => None,
        }
    }
}

/// Validate a raw guess against the inclusive range `[min, max]`.
///
/// Surrounding whitespace is ignored. Pure: the same input always yields
/// the same result.
///
/// Only Rust integer syntax is accepted: an optional `+` or `-` sign
/// followed by ASCII digits. Digit separators (`"1_0"`) and non-ASCII
/// digits (`"５５"`) are `NotANumber`.
///
/// ```
/// use guess_engine::input::{validate, InputError};
///
/// assert_eq!(validate("  55  ", 1, 100), Ok(55));
/// assert_eq!(
///     validate("101", 1, 100),
///     Err(InputError::OutOfRange { value: 101, min: 1, max: 100 })
/// );
/// assert_eq!(validate("abc", 1, 100), Err(InputError::NotANumber));
/// assert_eq!(validate("", 1, 100), Err(InputError::Empty));
/// ```
pub fn validate(text: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        // Overflowed integers can never be inside an i64 range.
        Err(err) => {
            let value = match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(InputError::NotANumber),
            };
            return Err(InputError::OutOfRange { value, min, max });
        }
    };

    if value < min || value > max {
        return Err(InputError::OutOfRange { value, min, max });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        for (text, expected) in [("1", 1), ("50", 50), ("100", 100), ("  25  ", 25), ("75", 75)] {
            assert_eq!(validate(text, 1, 100), Ok(expected), "input: {text:?}");
        }
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(validate("\t42\n", 1, 100), Ok(42));
        assert_eq!(validate("  55  ", 1, 100), Ok(55));
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate("", 1, 100), Err(InputError::Empty));
        assert_eq!(validate("   ", 1, 100), Err(InputError::Empty));
        assert_eq!(validate("\n\t", 1, 100), Err(InputError::Empty));
    }

    #[test]
    fn test_not_a_number() {
        for text in ["abc", "12.5", "4 2", "1e3", "0x10", "--5", "#", "5a"] {
            assert_eq!(validate(text, 1, 100), Err(InputError::NotANumber), "input: {text:?}");
        }
    }

    #[test]
    fn test_separators_and_unicode_digits_rejected() {
        for text in ["1_0", "1_000", "５５", "٤٢"] {
            assert_eq!(validate(text, 1, 100), Err(InputError::NotANumber), "input: {text:?}");
        }
    }

    #[test]
    fn test_out_of_range() {
        for (text, value) in [("101", 101), ("0", 0), ("-5", -5)] {
            assert_eq!(
                validate(text, 1, 100),
                Err(InputError::OutOfRange { value, min: 1, max: 100 }),
                "input: {text:?}"
            );
        }
    }

    #[test]
    fn test_signed_inputs() {
        assert_eq!(validate("+7", 1, 100), Ok(7));
        assert_eq!(validate("-3", -10, 10), Ok(-3));
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        let huge = "99999999999999999999999";
        assert_eq!(
            validate(huge, i64::MIN, i64::MAX),
            Err(InputError::OutOfRange { value: i64::MAX, min: i64::MIN, max: i64::MAX })
        );
        assert_eq!(
            validate("-99999999999999999999999", 1, 100).map_err(|e| e.value()),
            Err(Some(i64::MIN))
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(InputError::Empty.to_string(), "Please enter a number!");
        assert_eq!(InputError::NotANumber.to_string(), "Please enter a valid number!");
        assert_eq!(
            InputError::OutOfRange { value: 0, min: 1, max: 100 }.to_string(),
            "Number must be between 1 and 100!"
        );
    }

    #[test]
    fn test_value_accessor() {
        assert_eq!(InputError::Empty.value(), None);
        assert_eq!(InputError::NotANumber.value(), None);
        assert_eq!(InputError::OutOfRange { value: 101, min: 1, max: 100 }.value(), Some(101));
    }
}
