//! Test title validation
//!
//! Titles are free text, but a retitle must leave the test with something
//! the tree can show. A title must:
//! - Not be empty or whitespace-only
//! - Be at most 1024 bytes
//! - Contain no control characters

use thiserror::Error;

/// Maximum length of a test title in bytes
pub const MAX_TITLE_LENGTH: usize = 1024;

/// Error when validating a test title
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    /// Title is empty
    #[error("title cannot be empty")]
    Empty,
    /// Title contains only whitespace
    #[error("title cannot be whitespace-only")]
    Blank,
    /// Title exceeds maximum length
    #[error("title too long: {length} bytes (max {max})")]
    TooLong {
        /// Actual length of the title
        length: usize,
        /// Maximum allowed length
        max: usize,
    },
    /// Title contains a control character
    #[error("control character at position {position}")]
    ControlChar {
        /// Character position of the control character
        position: usize,
    },
    /// Title was given as something other than text
    #[error("title must be text, got {kind}")]
    NotText {
        /// Shape of what was given instead
        kind: &'static str,
    },
}

/// Validate a test title
pub fn validate_title(title: &str) -> Result<(), TitleError> {
    if title.is_empty() {
        return Err(TitleError::Empty);
    }

    if title.trim().is_empty() {
        return Err(TitleError::Blank);
    }

    if title.len() > MAX_TITLE_LENGTH {
        return Err(TitleError::TooLong {
            length: title.len(),
            max: MAX_TITLE_LENGTH,
        });
    }

    if let Some(position) = title.chars().position(|c| c.is_control()) {
        return Err(TitleError::ControlChar { position });
    }

    Ok(())
}
