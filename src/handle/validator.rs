//! Handle validation utilities

use super::{MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH};
use crate::error::{LensFinderError, Result};
use regex::Regex;
use std::sync::LazyLock;

static HANDLE_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9_-]").expect("handle character pattern compiles"));

static STRICT_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("strict handle pattern compiles"));

/// Shown while typing when nothing in the input is a handle character
pub const INVALID_CHARACTERS_MESSAGE: &str =
    "Handle only supports lower case characters, numbers, - and _.";

/// Shown on submission when the handle length is out of range
pub const LENGTH_MESSAGE: &str =
    "Whoa buddy.. Handle must be minimum of 5 length and maximum of 31 length";

/// Result of validating one keystroke's worth of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCheck {
    /// Lowercase-normalized handle
    pub handle: String,
    /// Warning to show under the input, if any
    pub message: Option<String>,
}

/// Handle validator
pub struct HandleValidator {
    suffix: String,
}

impl HandleValidator {
    /// Create a validator for handles under the given suffix (without the dot)
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Get the handle suffix
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Normalize raw input into a handle
    pub fn normalize(&self, raw: &str) -> String {
        raw.to_lowercase()
    }

    /// Validate input as it is typed.
    ///
    /// This is a presence test: the input is only flagged when it is non-empty
    /// and contains no allowed character at all. Mixed input such as `ab!cd`
    /// passes here; [`validate_strict`](Self::validate_strict) rejects it.
    pub fn check_input(&self, raw: &str) -> InputCheck {
        let handle = self.normalize(raw);
        let message = if !handle.is_empty() && !HANDLE_CHAR.is_match(&handle) {
            Some(INVALID_CHARACTERS_MESSAGE.to_string())
        } else {
            None
        };

        InputCheck { handle, message }
    }

    /// Validate handle length at submission time
    pub fn validate_length(&self, handle: &str) -> Result<()> {
        let len = handle.chars().count();
        if !(MIN_HANDLE_LENGTH..=MAX_HANDLE_LENGTH).contains(&len) {
            return Err(LensFinderError::validation(LENGTH_MESSAGE));
        }

        Ok(())
    }

    /// Validate characters over the whole handle
    pub fn validate_characters(&self, handle: &str) -> Result<()> {
        if !STRICT_HANDLE.is_match(handle) {
            return Err(LensFinderError::validation(INVALID_CHARACTERS_MESSAGE));
        }

        Ok(())
    }

    /// Full validation: length and every character
    pub fn validate_strict(&self, handle: &str) -> Result<()> {
        self.validate_length(handle)?;
        self.validate_characters(handle)
    }

    /// Check if a handle passes full validation
    pub fn is_valid(&self, handle: &str) -> bool {
        self.validate_strict(handle).is_ok()
    }

    /// Append the naming suffix
    pub fn full_handle(&self, handle: &str) -> String {
        format!("{}.{}", handle, self.suffix)
    }
}

impl Default for HandleValidator {
    fn default() -> Self {
        Self::new("lens")
    }
}
