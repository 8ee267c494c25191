use crate::api::{ApiRequest, ClientConfig};
use crate::error::{EcobeeError, VendorMessage, ensure_non_empty};
use crate::transport::{HttpMethod, HttpRequest, ReqwestTransport, Transport};
use reqwest::Url;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Client for the ecobee cloud API.
///
/// The access token is read at the moment a request is made, so a token stored through
/// [`set_token`](EcobeeClient::set_token) or [`wait_for_pin`](EcobeeClient::wait_for_pin)
/// is used by every later call.
pub struct EcobeeClient {
    api_key: String,
    base_url: Url,
    version: u32,
    token: RwLock<Option<String>>,
    transport: Arc<dyn Transport>,
}

impl EcobeeClient {
    pub fn new(config: ClientConfig) -> Result<Self, EcobeeError> {
        let transport = ReqwestTransport::new()?;
        EcobeeClient::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self, EcobeeError> {
        let base_url = config.validate()?;

        Ok(EcobeeClient {
            api_key: config.api_key().to_string(),
            base_url,
            version: config.api_version(),
            token: RwLock::new(config.access_token().map(str::to_string)),
            transport,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Replaces the access token used for subsequent requests.
    pub async fn set_token(&self, token: impl Into<String>) -> Result<(), EcobeeError> {
        let token = token.into();
        ensure_non_empty(&token, "invalid access token")?;

        *self.token.write().await = Some(token);
        Ok(())
    }

    /// Sends a request to a versioned endpoint and returns the response body.
    #[instrument(skip_all, fields(method = %request.method))]
    pub async fn send_request(&self, request: ApiRequest) -> Result<Value, EcobeeError> {
        let http_method = request.resolved_http_method();
        let mut http_request = HttpRequest::new(http_method, self.url_for(&request.path(self.version))?);
        debug!(query = ?request.query, data = ?request.data, "{}ing '{}'", http_method, request.method);

        http_request.query = request.query;
        http_request.bearer_token = self.token().await;
        if !request.data.is_empty() {
            http_request.body = Some(Value::Object(request.data));
        }

        let response = self
            .transport
            .send(http_request)
            .await
            .map_err(|e| EcobeeError::from_transport(e, VendorMessage::DescriptionOrStatus))?;

        debug!(?response, "Got response");
        Ok(response)
    }

    /// Sends a request to one of the unversioned OAuth endpoints, which take no bearer token.
    pub(crate) async fn send_oauth_request(
        &self,
        http_method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Value, EcobeeError> {
        let mut http_request = HttpRequest::new(http_method, self.url_for(path)?);
        http_request.query = query;

        self.transport
            .send(http_request)
            .await
            .map_err(|e| EcobeeError::from_transport(e, VendorMessage::Description))
    }

    fn url_for(&self, path: &str) -> Result<Url, EcobeeError> {
        self.base_url.join(path).map_err(|_| EcobeeError::InvalidArgument("invalid url"))
    }
}

impl fmt::Debug for EcobeeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcobeeClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url.as_str())
            .field("version", &self.version)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::scripted::{ScriptedTransport, failure, ok};
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use serde_json::json;

    fn client(transport: Arc<ScriptedTransport>) -> EcobeeClient {
        EcobeeClient::with_transport(ClientConfig::new("example-key").token("token"), transport).unwrap()
    }

    #[test]
    fn new_rejects_an_invalid_config() {
        let result = EcobeeClient::new(ClientConfig::new(""));

        assert!(matches!(result, Err(EcobeeError::InvalidArgument("invalid API key"))));
    }

    #[tokio::test]
    async fn set_token_replaces_the_token() -> Result<(), EcobeeError> {
        let client = client(Arc::new(ScriptedTransport::default()));

        client.set_token("new-token").await?;

        assert_eq!(client.token().await, Some("new-token".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn set_token_rejects_an_empty_token() {
        let client = client(Arc::new(ScriptedTransport::default()));

        let result = client.set_token("").await;

        assert_eq!(result.unwrap_err().to_string(), "invalid access token");
        assert_eq!(client.token().await, Some("token".to_string()));
    }

    #[tokio::test]
    async fn send_request_uses_the_latest_token() -> Result<(), EcobeeError> {
        let transport = Arc::new(ScriptedTransport::new(vec![ok("{}"), ok("{}")]));
        let client = client(transport.clone());

        client.send_request(ApiRequest::new("thermostat")).await?;
        client.set_token("replaced").await?;
        client.send_request(ApiRequest::new("thermostat")).await?;

        let requests = transport.requests();
        assert_eq!(requests[0].bearer_token.as_deref(), Some("token"));
        assert_eq!(requests[1].bearer_token.as_deref(), Some("replaced"));
        Ok(())
    }

    #[tokio::test]
    async fn send_request_posts_a_non_empty_payload() -> Result<(), EcobeeError> {
        let transport = Arc::new(ScriptedTransport::new(vec![ok("{}")]));
        let client = client(transport.clone());
        let data = json!({"selection": {"selectionType": "registered"}}).as_object().cloned().unwrap();

        client.send_request(ApiRequest::new("thermostat").data(data)).await?;

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.as_str(), "https://api.ecobee.com/1/thermostat");
        assert_eq!(request.body, Some(json!({"selection": {"selectionType": "registered"}})));
        Ok(())
    }

    #[tokio::test]
    async fn send_request_prefers_the_error_description() {
        let transport = Arc::new(ScriptedTransport::new(vec![failure(
            StatusCode::UNAUTHORIZED,
            r#"{"error_description": "description", "status": {"code": 14, "message": "message"}}"#,
        )]));

        let result = client(transport).send_request(ApiRequest::new("thermostat")).await;

        assert_eq!(result.unwrap_err().to_string(), "description");
    }

    #[tokio::test]
    async fn send_request_falls_back_to_the_status_message() {
        let transport = Arc::new(ScriptedTransport::new(vec![failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            include_str!("../../tests/resources/expired_token_response.json"),
        )]));

        let result = client(transport).send_request(ApiRequest::new("thermostat")).await;

        let error = result.unwrap_err();
        assert!(matches!(error, EcobeeError::Api { .. }));
        assert!(error.to_string().starts_with("Authentication token has expired."));
    }

    #[tokio::test]
    async fn send_request_propagates_other_transport_errors() {
        let transport = Arc::new(ScriptedTransport::new(vec![failure(StatusCode::BAD_GATEWAY, "Bad Gateway")]));

        let result = client(transport).send_request(ApiRequest::new("thermostat")).await;

        match result {
            Err(EcobeeError::Transport(error)) => assert_eq!(error.status(), Some(StatusCode::BAD_GATEWAY)),
            other => panic!("expected a transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_request_calls_the_versioned_endpoint() -> Result<(), EcobeeError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/2/thermostatSummary")
            .match_query(Matcher::UrlEncoded("json".into(), "{}".into()))
            .match_header("authorization", "Bearer token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/update_thermostat_response.json"))
            .create_async()
            .await;

        let config = ClientConfig::new("example-key").token("token").url(server.url()).version(2);
        let client = EcobeeClient::new(config)?;

        let response = client.send_request(ApiRequest::new("thermostatSummary").query("json", "{}")).await?;

        mock.assert_async().await;
        assert_eq!(response, json!({"status": {"code": 0, "message": ""}}));
        Ok(())
    }
}
