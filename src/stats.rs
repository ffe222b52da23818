//! Feedback Statistics
//!
//! Derived purely from the current item collection; never stored.

use crate::models::FeedbackItem;

/// Ratings at or above this count as positive
pub const POSITIVE_RATING: u8 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeedbackStats {
    pub count: usize,
    /// Mean rating rounded to one decimal, 0 when empty
    pub average_rating: f64,
    /// Share of ratings >= 4, rounded to a whole percent
    pub positive_percent: u32,
}

impl FeedbackStats {
    pub fn from_items(items: &[FeedbackItem]) -> Self {
        let count = items.len();
        if count == 0 {
            return Self::default();
        }

        let total: u64 = items.iter().map(|item| u64::from(item.rating)).sum();
        let positive = items.iter().filter(|item| item.rating >= POSITIVE_RATING).count();
        let mean = total as f64 / count as f64;

        Self {
            count,
            average_rating: (mean * 10.0).round() / 10.0,
            positive_percent: (positive as f64 * 100.0 / count as f64).round() as u32,
        }
    }

    /// Average as shown in the summary, e.g. "4.5"
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}
