//! Input validation for submission attempts.
//!
//! This module decides whether the current input text may be sent to the
//! summarization service. Validation is recomputed on every submission attempt
//! and is pure: no side effects, no I/O.
//!
//! Whitespace is trimmed before both checks, so an input of spaces and
//! newlines counts as empty, and leading/trailing whitespace does not count
//! toward the minimum length.

/// Minimum number of characters (after trimming) required for a submission.
///
/// The boundary is inclusive: a trimmed input of exactly this length is valid.
pub const MIN_INPUT_CHARS: usize = 50;

/// Reason an input was rejected before any network call.
///
/// Validation failures are always recoverable by editing the input and never
/// reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The trimmed input has zero length.
    Empty,

    /// The trimmed input is shorter than [`MIN_INPUT_CHARS`].
    TooShort,
}

impl ValidationFailure {
    /// Returns the user-facing message for this failure.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "Please enter some text to summarize.",
            Self::TooShort => "Text is too short. Please enter at least 50 characters.",
        }
    }
}

/// Checks whether `text` is acceptable for submission.
///
/// # Returns
///
/// - `Ok(())` when the trimmed text has at least [`MIN_INPUT_CHARS`] characters
/// - `Err(ValidationFailure::Empty)` when the trimmed text is empty
/// - `Err(ValidationFailure::TooShort)` when the trimmed text is nonempty but
///   below the minimum length
///
/// # Example
///
/// ```rust
/// use precis::domain::validation::{validate, ValidationFailure};
///
/// assert_eq!(validate("   "), Err(ValidationFailure::Empty));
/// assert_eq!(validate("hi"), Err(ValidationFailure::TooShort));
/// assert!(validate(&"a".repeat(50)).is_ok());
/// ```
pub fn validate(text: &str) -> Result<(), ValidationFailure> {
    let trimmed_len = text.trim().chars().count();

    if trimmed_len == 0 {
        Err(ValidationFailure::Empty)
    } else if trimmed_len < MIN_INPUT_CHARS {
        Err(ValidationFailure::TooShort)
    } else {
        Ok(())
    }
}
