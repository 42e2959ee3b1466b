//! Review field rules shared by the DB and API layers.

use crate::error::CoreError;

/// Maximum length for a review's text content.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Lowest accepted review score.
pub const MIN_SCORE: i32 = 1;

/// Highest accepted review score.
pub const MAX_SCORE: i32 = 5;

/// Validate review content: non-blank and within [`MAX_CONTENT_LENGTH`].
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Review content must not be empty".to_string(),
        ));
    }

    let len = content.chars().count();
    if len > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Review content is {len} characters; the maximum is {MAX_CONTENT_LENGTH}"
        )));
    }

    Ok(())
}

/// Validate that a score lies within `MIN_SCORE..=MAX_SCORE`.
pub fn validate_score(score: i32) -> Result<(), CoreError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid score {score}. Must be between {MIN_SCORE} and {MAX_SCORE}"
        )))
    }
}
