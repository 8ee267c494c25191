use crate::transport::{HttpRequest, Transport, TransportError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Instant;

/// Replays canned responses in order and records every request it receives.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<(Instant, HttpRequest)>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<Value, TransportError>>) -> Self {
        ScriptedTransport {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().iter().map(|(_, request)| request.clone()).collect()
    }

    pub fn request_times(&self) -> Vec<Instant> {
        self.requests.lock().unwrap().iter().map(|(at, _)| *at).collect()
    }
}

pub(crate) fn ok(body: &str) -> Result<Value, TransportError> {
    Ok(serde_json::from_str(body).unwrap())
}

pub(crate) fn failure(status: StatusCode, body: &str) -> Result<Value, TransportError> {
    Err(TransportError::Status {
        status,
        body: body.to_string(),
    })
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push((Instant::now(), request));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| failure(StatusCode::INTERNAL_SERVER_ERROR, "no scripted response left"))
    }
}
