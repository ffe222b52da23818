//! UI Components
//!
//! Pure rendering over props; state changes go back through `FeedbackActions`.

mod card;
mod feedback_form;
mod feedback_item;
mod feedback_list;
mod feedback_stats;
mod header;
mod rating_selector;

pub use feedback_form::FeedbackForm;
pub use feedback_list::FeedbackList;
pub use feedback_stats::StatsSummary;
pub use header::Header;
