use crate::error::{EcobeeError, ensure_non_empty};
use reqwest::Url;
use std::fmt;

pub const DEFAULT_URL: &str = "https://api.ecobee.com/";
pub const DEFAULT_VERSION: u32 = 1;

/// Settings used to construct an [`EcobeeClient`](crate::EcobeeClient).
///
/// ```
/// use ecobee_cloud::ClientConfig;
///
/// let config = ClientConfig::new("example-key").token("example-token");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    access_token: Option<String>,
    url: String,
    version: u32,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            access_token: None,
            url: DEFAULT_URL.to_string(),
            version: DEFAULT_VERSION,
        }
    }

    /// Initial OAuth access token.
    pub fn token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Base URL of the API, defaults to [`DEFAULT_URL`].
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Version prefix of the thermostat endpoints, defaults to [`DEFAULT_VERSION`].
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn api_version(&self) -> u32 {
        self.version
    }

    /// Checks every setting and returns the base URL, normalized to end with a slash.
    pub(crate) fn validate(&self) -> Result<Url, EcobeeError> {
        ensure_non_empty(&self.api_key, "invalid API key")?;
        if let Some(token) = &self.access_token {
            ensure_non_empty(token, "invalid access token")?;
        }
        if self.version == 0 {
            return Err(EcobeeError::InvalidArgument("invalid API version"));
        }

        let mut url = self.url.clone();
        if !url.ends_with('/') {
            url.push('/');
        }
        match Url::parse(&url) {
            Ok(base_url) if !base_url.cannot_be_a_base() => Ok(base_url),
            _ => Err(EcobeeError::InvalidArgument("invalid url")),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("url", &self.url)
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn uses_the_vendor_defaults() -> Result<(), EcobeeError> {
        let config = ClientConfig::new("example-key");

        assert_eq!(config.validate()?.as_str(), "https://api.ecobee.com/");
        assert_eq!(config.api_version(), 1);
        assert_eq!(config.access_token(), None);
        Ok(())
    }

    #[test]
    fn appends_a_trailing_slash_to_the_url() -> Result<(), EcobeeError> {
        let config = ClientConfig::new("example-key").url("http://127.0.0.1:1234/api");

        assert_eq!(config.validate()?.as_str(), "http://127.0.0.1:1234/api/");
        Ok(())
    }

    #[rstest]
    #[case(ClientConfig::new(""), "invalid API key")]
    #[case(ClientConfig::new("example-key").token(""), "invalid access token")]
    #[case(ClientConfig::new("example-key").url("not a url"), "invalid url")]
    #[case(ClientConfig::new("example-key").url("mailto:someone@example.com"), "invalid url")]
    #[case(ClientConfig::new("example-key").version(0), "invalid API version")]
    fn rejects_invalid_settings(#[case] config: ClientConfig, #[case] message: &str) {
        let error = config.validate().unwrap_err();

        assert!(error.is_invalid_argument());
        assert_eq!(error.to_string(), message);
    }

    #[test]
    fn debug_output_hides_the_access_token() {
        let config = ClientConfig::new("example-key").token("secret-token");

        assert!(!format!("{:?}", config).contains("secret-token"));
    }
}
