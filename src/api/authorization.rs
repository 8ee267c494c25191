use crate::api::EcobeeClient;
use crate::domain::{AuthorizationGrant, Scope, Token};
use crate::error::{EcobeeError, ensure_non_empty};
use crate::transport::HttpMethod;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, instrument, warn};

/// How [`EcobeeClient::wait_for_pin`] polls the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitForPinOptions {
    /// Delay between two checks, defaults to one second. Must not be zero.
    pub interval: Duration,
    /// Number of checks made after the first one fails, defaults to 100.
    pub max_attempts: u32,
}

impl WaitForPinOptions {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        WaitForPinOptions { interval, max_attempts }
    }
}

impl Default for WaitForPinOptions {
    fn default() -> Self {
        WaitForPinOptions {
            interval: Duration::from_secs(1),
            max_attempts: 100,
        }
    }
}

impl EcobeeClient {
    /// Generates a PIN the user enters in the ecobee portal to authorize this application.
    #[instrument(skip(self))]
    pub async fn generate_pin(&self, scope: Scope) -> Result<AuthorizationGrant, EcobeeError> {
        debug!("Generating PIN with scope {}...", scope);

        let query = vec![
            ("response_type".to_string(), "ecobeePin".to_string()),
            ("client_id".to_string(), self.api_key().to_string()),
            ("scope".to_string(), scope.to_string()),
        ];
        let response = self.send_oauth_request(HttpMethod::Get, "authorize", query).await?;

        Ok(serde_json::from_value(response)?)
    }

    /// Exchanges the authorization code of a generated PIN for a token.
    ///
    /// Fails until the user has entered the PIN. The returned token is not stored.
    #[instrument(skip_all)]
    pub async fn check_pin_status(&self, auth_code: &str) -> Result<Token, EcobeeError> {
        ensure_non_empty(auth_code, "invalid authentication code")?;
        debug!("Checking PIN status...");

        self.request_token(auth_code, "ecobeePin").await
    }

    /// Polls [`check_pin_status`](EcobeeClient::check_pin_status) until the PIN is authorized.
    ///
    /// The first check happens immediately, followed by at most `max_attempts` checks spaced
    /// `interval` apart. Only rejections by ecobee and transport failures are retried, any other
    /// error is returned right away. When every check fails, the error of the last one is returned.
    ///
    /// On success the access token is stored in the client. A token without an access token is
    /// still returned but leaves the stored token untouched.
    #[instrument(skip(self, auth_code))]
    pub async fn wait_for_pin(&self, auth_code: &str, options: WaitForPinOptions) -> Result<Token, EcobeeError> {
        ensure_non_empty(auth_code, "invalid authentication code")?;
        if options.interval.is_zero() {
            return Err(EcobeeError::InvalidArgument("invalid interval"));
        }

        let strategy = FixedInterval::new(options.interval).take(options.max_attempts as usize);
        let token = RetryIf::start(
            strategy,
            move || async move {
                self.check_pin_status(auth_code)
                    .await
                    .inspect_err(|e| debug!(error = %e, "PIN not yet authorized, retrying in {:?}", options.interval))
            },
            |e: &EcobeeError| matches!(e, EcobeeError::Api { .. } | EcobeeError::Transport(_)),
        )
        .await?;

        if token.access_token.is_empty() {
            warn!("PIN authorized without an access token, keeping the current one");
        } else {
            self.set_token(token.access_token.clone()).await?;
        }
        info!("PIN authorized");

        Ok(token)
    }

    /// Requests a new token. The returned token is not stored, use [`set_token`](EcobeeClient::set_token).
    #[instrument(skip_all)]
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<Token, EcobeeError> {
        ensure_non_empty(refresh_token, "invalid refresh token")?;
        debug!("Refreshing access token...");

        self.request_token(refresh_token, "refresh_token").await
    }

    async fn request_token(&self, code: &str, grant_type: &str) -> Result<Token, EcobeeError> {
        let query = vec![
            ("code".to_string(), code.to_string()),
            ("client_id".to_string(), self.api_key().to_string()),
            ("grant_type".to_string(), grant_type.to_string()),
        ];
        let response = self.send_oauth_request(HttpMethod::Post, "token", query).await?;

        Ok(serde_json::from_value(response)?)
    }
}
