mod api_request;
mod authorization;
mod client;
mod client_config;
pub mod domain;
mod map_revisions;
mod map_thermostats;
mod thermostats;

pub use api_request::ApiRequest;
pub use authorization::WaitForPinOptions;
pub use client::EcobeeClient;
pub use client_config::{ClientConfig, DEFAULT_URL, DEFAULT_VERSION};
pub use map_revisions::map_revisions;
pub use map_thermostats::map_thermostats;
