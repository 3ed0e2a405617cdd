use thiserror::Error;

/// Inline validation failures for the author field of the comment form.
/// The `Display` text is what the form shows under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Must be at least 2 characters")]
    TooShort,
    #[error("Must be 15 characters or less")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("rating {0} is outside 1..=5")]
    OutOfRange(u8),
    #[error("'{0}' is not a rating")]
    NotANumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("unrecognised comment date: {0}")]
    Unparseable(String),
}

/// Failures loading the bundled campsite/comment data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed seed data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("comment {comment_id} references unknown campsite {campsite_id}")]
    DanglingComment { comment_id: u32, campsite_id: u32 },
}
