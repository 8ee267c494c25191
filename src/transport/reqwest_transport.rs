use crate::transport::{HttpMethod, HttpRequest, Transport, TransportError};
use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use tracing::{instrument, trace};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;
        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip_all, fields(method = %request.method, path = request.url.path()))]
    async fn send(&self, request: HttpRequest) -> Result<Value, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(request.url),
            HttpMethod::Post => self.client.post(request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    trace!(status_code = %status, error = %e, "Failed to read the error body");
                    String::new()
                }
            };
            trace!(status_code = %status, body, "Request failed");
            return Err(TransportError::Status { status, body });
        }

        Ok(response.json::<Value>().await?)
    }
}
