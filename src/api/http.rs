//! HTTP Implementation
//!
//! `reqwest` client; on wasm32 it is backed by the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, FeedbackApi, Operation};
use crate::models::{FeedbackDraft, FeedbackItem};

#[derive(Debug, Clone)]
pub struct HttpFeedbackApi {
    client: Client,
    endpoint: String,
}

impl HttpFeedbackApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl FeedbackApi for HttpFeedbackApi {
    async fn list_feedback(&self) -> ApiResult<Vec<FeedbackItem>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| transport(Operation::List, e))?;
        read_json(Operation::List, response).await
    }

    async fn create_feedback(&self, draft: &FeedbackDraft) -> ApiResult<FeedbackItem> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|e| transport(Operation::Create, e))?;
        read_json(Operation::Create, response).await
    }
}

fn transport(operation: Operation, err: reqwest::Error) -> ApiError {
    log::error!("[API] {} request failed: {}", operation, err);
    ApiError::Transport(err.to_string())
}

/// Any non-2xx status is a failure
fn check_status(operation: Operation, status: StatusCode) -> ApiResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            operation,
            status: status.as_u16(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(operation: Operation, response: Response) -> ApiResult<T> {
    if let Err(err) = check_status(operation, response.status()) {
        log::error!("[API] {}", err);
        return Err(err);
    }
    response.json::<T>().await.map_err(|e| {
        log::error!("[API] could not decode {} response: {}", operation, e);
        ApiError::Decode(e.to_string())
    })
}
