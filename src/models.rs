//! Frontend Models
//!
//! Data structures matching the feedback REST resource.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend-assigned identifier.
///
/// Kept opaque; json-server style backends emit either strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackId(String);

impl FeedbackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for FeedbackId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FeedbackId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => FeedbackId(text),
            RawId::Number(number) => FeedbackId(number.to_string()),
        })
    }
}

/// Feedback item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: FeedbackId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    pub rating: u8,
    pub comments: String,
}

impl FeedbackItem {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }

    pub fn contact(&self) -> Option<&str> {
        if self.email.trim().is_empty() {
            None
        } else {
            Some(&self.email)
        }
    }

    pub fn meta(&self) -> &'static RatingMeta {
        RatingMeta::for_rating(self.rating)
    }
}

/// Feedback before the backend assigns an id.
///
/// `rating == 0` means no rating was chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comments: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Display data for one point on the rating scale
#[derive(Debug, PartialEq)]
pub struct RatingMeta {
    pub value: u8,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

/// Rating scale, lowest first
pub static RATINGS: [RatingMeta; 5] = [
    RatingMeta { value: 1, label: "Terrible", emoji: "😠", color: "#ef4444" },
    RatingMeta { value: 2, label: "Bad", emoji: "🙁", color: "#f59e0b" },
    RatingMeta { value: 3, label: "Neutral", emoji: "😐", color: "#3b82f6" },
    RatingMeta { value: 4, label: "Good", emoji: "😊", color: "#10b981" },
    RatingMeta { value: 5, label: "Excellent", emoji: "😍", color: "#8b5cf6" },
];

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

impl RatingMeta {
    /// Out-of-range ratings render as "Neutral"
    pub fn for_rating(rating: u8) -> &'static RatingMeta {
        match rating {
            MIN_RATING..=MAX_RATING => &RATINGS[usize::from(rating - 1)],
            _ => &RATINGS[2],
        }
    }
}
