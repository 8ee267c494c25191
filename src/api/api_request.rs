use crate::transport::HttpMethod;
use serde_json::{Map, Value};

/// A call to one of the versioned ecobee endpoints, e.g. `thermostat`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: String,
    pub data: Map<String, Value>,
    pub query: Vec<(String, String)>,
    pub http_method: Option<HttpMethod>,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>) -> Self {
        ApiRequest {
            method: method.into(),
            data: Map::new(),
            query: Vec::new(),
            http_method: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn http_method(mut self, http_method: HttpMethod) -> Self {
        self.http_method = Some(http_method);
        self
    }

    /// The explicit method if set, otherwise GET without a payload and POST with one.
    pub fn resolved_http_method(&self) -> HttpMethod {
        self.http_method.unwrap_or(if self.data.is_empty() { HttpMethod::Get } else { HttpMethod::Post })
    }

    pub fn path(&self, version: u32) -> String {
        format!("{}/{}", version, self.method)
    }
}
