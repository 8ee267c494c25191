mod status_response;
mod thermostat_query;
mod thermostat_response;
mod thermostat_summary_response;

pub use status_response::StatusResponse;
pub(crate) use thermostat_query::ThermostatQuery;
pub use thermostat_response::ThermostatResponse;
pub use thermostat_summary_response::ThermostatSummaryResponse;
