//! Feedback API Client
//!
//! Two operations against the collection endpoint, with every transport or
//! HTTP failure normalized into `ApiError`.

mod http;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{FeedbackDraft, FeedbackItem};

pub use http::HttpFeedbackApi;

/// Which call failed, for the user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => f.write_str("fetch"),
            Operation::Create => f.write_str("submit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Could not connect to the feedback server: {0}")]
    Transport(String),
    #[error("Failed to {operation} feedback. Server responded with status: {status}")]
    Status { operation: Operation, status: u16 },
    /// 2xx response whose body was not the expected JSON
    #[error("Unexpected response from the feedback server: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend contract for feedback persistence.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait FeedbackApi {
    /// `GET` the whole collection
    async fn list_feedback(&self) -> ApiResult<Vec<FeedbackItem>>;

    /// `POST` a draft; the backend answers with the stored item including its id
    async fn create_feedback(&self, draft: &FeedbackDraft) -> ApiResult<FeedbackItem>;
}
