mod api_status;
mod authorization_grant;
mod scope;
mod selection;
mod thermostat;
mod thermostat_function;
mod thermostat_revision;
mod thermostat_update;
mod token;

pub use api_status::ApiStatus;
pub use authorization_grant::AuthorizationGrant;
pub use scope::Scope;
pub use selection::Selection;
pub use thermostat::{Page, Thermostat, Thermostats};
pub use thermostat_function::ThermostatFunction;
pub use thermostat_revision::{Revisions, ThermostatRevision};
pub use thermostat_update::ThermostatUpdate;
pub use token::Token;
