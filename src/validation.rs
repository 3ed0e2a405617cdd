//! Client-side checks for the comment form.
//!
//! These only drive inline messages and decide whether a draft is handed to
//! the store. Nothing here is authoritative.

use crate::error::ValidationError;
use crate::models::comment::{NewComment, Rating};

pub const AUTHOR_MIN_LEN: usize = 2;
pub const AUTHOR_MAX_LEN: usize = 15;

/// Checks the author name length in characters. An empty name is too short.
pub fn validate_author(author: &str) -> Result<(), ValidationError> {
    let len = author.chars().count();
    if len < AUTHOR_MIN_LEN {
        Err(ValidationError::TooShort)
    } else if len > AUTHOR_MAX_LEN {
        Err(ValidationError::TooLong)
    } else {
        Ok(())
    }
}

/// What the user has typed into an open comment modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub rating: Option<Rating>,
    pub author: String,
    pub text: String,
}

impl CommentDraft {
    pub fn author_error(&self) -> Option<ValidationError> {
        validate_author(&self.author).err()
    }

    pub fn is_valid(&self) -> bool {
        self.author_error().is_none()
    }

    /// Turns the draft into the values forwarded to the store, as typed.
    pub fn into_new_comment(self, campsite_id: u32) -> Result<NewComment, ValidationError> {
        validate_author(&self.author)?;
        Ok(NewComment {
            campsite_id,
            rating: self.rating,
            author: self.author,
            text: self.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_length_bounds() {
        assert_eq!(validate_author(""), Err(ValidationError::TooShort));
        assert_eq!(validate_author("J"), Err(ValidationError::TooShort));
        assert_eq!(validate_author("Jo"), Ok(()));
        assert_eq!(validate_author("Fifteen Letters"), Ok(()));
        assert_eq!(validate_author("Sixteen Letters!"), Err(ValidationError::TooLong));
    }

    #[test]
    fn author_length_counts_characters_not_bytes() {
        // 15 characters, 30 bytes
        assert_eq!(validate_author("ééééééééééééééé"), Ok(()));
        assert_eq!(validate_author("Zoë"), Ok(()));
    }

    #[test]
    fn error_messages_match_the_form_text() {
        assert_eq!(ValidationError::TooShort.to_string(), "Must be at least 2 characters");
        assert_eq!(ValidationError::TooLong.to_string(), "Must be 15 characters or less");
    }

    #[test]
    fn default_draft_is_invalid() {
        let draft = CommentDraft::default();
        assert!(!draft.is_valid());
        assert_eq!(draft.author_error(), Some(ValidationError::TooShort));
    }

    #[test]
    fn valid_draft_forwards_all_values_unchanged() {
        let draft = CommentDraft {
            rating: Rating::try_from(4).ok(),
            author: "Jenny".into(),
            text: "  Lovely lake  ".into(),
        };
        let new_comment = draft.into_new_comment(3).unwrap();
        assert_eq!(
            new_comment,
            NewComment {
                campsite_id: 3,
                rating: Rating::try_from(4).ok(),
                author: "Jenny".into(),
                text: "  Lovely lake  ".into(),
            }
        );
    }

    #[test]
    fn unselected_rating_is_forwarded_as_none() {
        let draft = CommentDraft {
            rating: None,
            author: "Jenny".into(),
            text: String::new(),
        };
        assert_eq!(draft.into_new_comment(0).unwrap().rating, None);
    }

    #[test]
    fn invalid_draft_is_rejected() {
        let draft = CommentDraft {
            rating: None,
            author: "A name that is far too long".into(),
            text: "hi".into(),
        };
        assert_eq!(draft.into_new_comment(0), Err(ValidationError::TooLong));
    }
}
