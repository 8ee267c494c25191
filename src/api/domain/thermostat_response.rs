use crate::domain::{ApiStatus, Page, Thermostat};
use serde::Deserialize;

// API: https://www.ecobee.com/home/developer/api/documentation/v1/operations/get-thermostats.shtml
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermostatResponse {
    pub page: Option<Page>,
    #[serde(default)]
    pub thermostat_list: Vec<Thermostat>,
    pub status: ApiStatus,
}
