use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DateError, RatingError};

/// A star rating. Only 1 through 5 can be constructed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every selectable rating, lowest first.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| RatingError::NotANumber(s.to_string()))?;
        Rating::try_from(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub campsite_id: u32,
    #[serde(default)]
    pub rating: Option<Rating>,
    pub text: String,
    pub author: String,
    pub date: String, // ISO-8601 timestamp as stored
}

impl Comment {
    /// The date as shown under the comment, e.g. "Oct 25, 2018".
    /// Falls back to the stored string when it cannot be parsed.
    pub fn display_date(&self) -> String {
        format_comment_date(&self.date).unwrap_or_else(|_| self.date.clone())
    }
}

/// Values collected by the comment form, addressed to one campsite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub campsite_id: u32,
    pub rating: Option<Rating>,
    pub author: String,
    pub text: String,
}

/// Formats an ISO-8601 date as an en-US short date in UTC.
pub fn format_comment_date(raw: &str) -> Result<String, DateError> {
    parse_comment_date(raw)
        .map(|date| date.format("%b %d, %Y").to_string())
        .ok_or_else(|| DateError::Unparseable(raw.to_string()))
}

fn parse_comment_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    // Minute precision ("2018-10-25T16:30Z") and naive timestamps are read as UTC.
    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];
    if let Some(date) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
    {
        return Some(date.and_utc());
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}
