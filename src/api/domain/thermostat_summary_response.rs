use crate::domain::ApiStatus;
use serde::Deserialize;

// API: https://www.ecobee.com/home/developer/api/documentation/v1/operations/get-thermostat-summary.shtml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermostatSummaryResponse {
    pub thermostat_count: u32,
    /// Colon separated `identifier:name:connected:thermostatRev:alertsRev:runtimeRev:intervalRev` entries.
    #[serde(default)]
    pub revision_list: Vec<String>,
    /// Equipment status entries, only present when requested through the selection.
    #[serde(default)]
    pub status_list: Vec<String>,
    pub status: ApiStatus,
}
