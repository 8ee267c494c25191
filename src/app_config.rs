use config::{Config, ConfigError};
use ecobee_cloud::{ClientConfig, Scope, WaitForPinOptions};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api_key: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
    #[serde(default = "default_url")]
    url: String,
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    pin: Pin,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("ECOBEE").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_key).url(&self.url).version(self.version);
        match &self.access_token {
            Some(token) => config.token(token),
            None => config,
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }
}

#[derive(Debug, Deserialize)]
pub struct Pin {
    #[serde(default)]
    scope: Scope,
    #[serde(with = "humantime_serde", default = "default_interval")]
    interval: Duration,
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
}

impl Pin {
    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn wait_options(&self) -> WaitForPinOptions {
        WaitForPinOptions::new(self.interval, self.max_attempts)
    }
}

impl Default for Pin {
    fn default() -> Self {
        Pin {
            scope: Scope::default(),
            interval: default_interval(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_url() -> String {
    ecobee_cloud::api::DEFAULT_URL.to_string()
}

fn default_version() -> u32 {
    ecobee_cloud::api::DEFAULT_VERSION
}

fn default_interval() -> Duration {
    WaitForPinOptions::default().interval
}

fn default_max_attempts() -> u32 {
    WaitForPinOptions::default().max_attempts
}
