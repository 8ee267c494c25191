//! Client for the ecobee thermostat cloud API.
//!
//! Authorization uses ecobee's PIN flow: [`EcobeeClient::generate_pin`] returns a PIN the user
//! enters in the ecobee portal, after which [`EcobeeClient::wait_for_pin`] polls until the
//! application is authorized and stores the access token.
//!
//! ```no_run
//! use ecobee_cloud::{ClientConfig, EcobeeClient, Scope, Selection, WaitForPinOptions};
//!
//! # async fn run() -> Result<(), ecobee_cloud::EcobeeError> {
//! let client = EcobeeClient::new(ClientConfig::new("example-key"))?;
//!
//! let grant = client.generate_pin(Scope::SmartWrite).await?;
//! println!("Enter PIN {} in the ecobee portal", grant.ecobee_pin);
//! client.wait_for_pin(&grant.code, WaitForPinOptions::default()).await?;
//!
//! let _revisions = client.poll_thermostats(&Selection::registered()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod domain;
mod error;
pub mod transport;

pub use api::{ApiRequest, ClientConfig, EcobeeClient, WaitForPinOptions};
pub use domain::{
    ApiStatus, AuthorizationGrant, Page, Revisions, Scope, Selection, Thermostat, ThermostatFunction, ThermostatRevision,
    ThermostatUpdate, Thermostats, Token,
};
pub use error::EcobeeError;
