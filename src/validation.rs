//! Draft Validation
//!
//! Client-side checks shared by the form and the store.

use thiserror::Error;

use crate::models::{FeedbackDraft, MAX_RATING, MIN_RATING};

/// Minimum comment length, counted in characters after trimming
pub const MIN_COMMENT_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a rating (1-5) and provide a comment of at least 10 characters.")]
    CommentTooShort { len: usize },
    #[error("Please select a rating (1-5) and provide a comment of at least 10 characters.")]
    RatingOutOfRange { rating: u8 },
}

fn trimmed_len(comments: &str) -> usize {
    comments.trim().chars().count()
}

/// Inline hint while typing; silent for an untouched or long-enough comment
pub fn comment_hint(comments: &str) -> Option<&'static str> {
    match trimmed_len(comments) {
        0 => None,
        len if len < MIN_COMMENT_LEN => Some("Comment must be at least 10 characters long."),
        _ => None,
    }
}

/// Both rules must hold before a draft may be sent
pub fn check(rating: u8, comments: &str) -> Result<(), ValidationError> {
    let len = trimmed_len(comments);
    if len < MIN_COMMENT_LEN {
        return Err(ValidationError::CommentTooShort { len });
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange { rating });
    }
    Ok(())
}

impl FeedbackDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check(self.rating, &self.comments)
    }

    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: u8, comments: &str) -> FeedbackDraft {
        FeedbackDraft {
            rating,
            comments: comments.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft() {
        assert_eq!(draft(4, "Pretty good overall").validate(), Ok(()));
        assert!(draft(1, "0123456789").is_valid());
    }

    #[test]
    fn test_comment_is_trimmed() {
        let err = draft(5, "   short     ").validate().unwrap_err();
        assert_eq!(err, ValidationError::CommentTooShort { len: 5 });
    }

    #[test]
    fn test_rating_required() {
        assert_eq!(
            draft(0, "Pretty good overall").validate(),
            Err(ValidationError::RatingOutOfRange { rating: 0 })
        );
        assert!(!draft(6, "Pretty good overall").is_valid());
    }

    #[test]
    fn test_comment_hint() {
        assert_eq!(comment_hint(""), None);
        assert_eq!(comment_hint("    "), None);
        assert_eq!(comment_hint("short"), Some("Comment must be at least 10 characters long."));
        assert_eq!(comment_hint("long enough now"), None);
    }

    #[test]
    fn test_error_message() {
        let err = draft(0, "short").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please select a rating (1-5) and provide a comment of at least 10 characters."
        );
    }
}
