mod http_request;
mod reqwest_transport;
#[cfg(test)]
pub(crate) mod scripted;

pub use http_request::{HttpMethod, HttpRequest};
pub use reqwest_transport::ReqwestTransport;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;

/// Executes a single HTTP round-trip and returns the parsed JSON body.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<Value, TransportError>;
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl TransportError {
    /// The raw response body of a non-2xx response.
    pub fn body(&self) -> Option<&str> {
        match self {
            TransportError::Status { body, .. } => Some(body),
            TransportError::Request(_) => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(e) => e.status(),
        }
    }
}
