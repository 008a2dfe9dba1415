//! Input validation gating every processing call.
//!
//! An input is accepted when it is non-empty, at most [`MAX_INPUT_CHARS`]
//! characters long, and made only of ASCII letters, ASCII digits and
//! whitespace.

use thiserror::Error;

/// Longest accepted input, counted in characters.
pub const MAX_INPUT_CHARS: usize = 10_000;

/// Why an input was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("input is empty")]
    Empty,

    #[error("input is {len} characters long, limit is {}", MAX_INPUT_CHARS)]
    TooLong { len: usize },

    #[error("disallowed character {ch:?} at position {index}")]
    DisallowedChar { ch: char, index: usize },
}

/// Unicode whitespace plus the ASCII separators U+001C..U+001F, which
/// Python-style `\s` and `str.split` also treat as whitespace.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Returns true when `ch` belongs to the accepted character class.
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || is_whitespace(ch)
}

/// Check an input and report the first reason it fails, if any.
pub fn check_input(input: &str) -> Result<(), ValidationFailure> {
    if input.is_empty() {
        return Err(ValidationFailure::Empty);
    }

    let len = input.chars().count();
    if len > MAX_INPUT_CHARS {
        return Err(ValidationFailure::TooLong { len });
    }

    match input.chars().enumerate().find(|(_, ch)| !is_allowed_char(*ch)) {
        Some((index, ch)) => Err(ValidationFailure::DisallowedChar { ch, index }),
        None => Ok(()),
    }
}

/// Pure predicate over an input string.
pub fn validate_input(input: &str) -> bool {
    check_input(input).is_ok()
}
