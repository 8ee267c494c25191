use serde::{Deserialize, Serialize};

/// Connection state and last-changed revisions of a single thermostat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThermostatRevision {
    pub name: String,
    /// `"true"` or `"false"` as reported by ecobee.
    pub connected: String,
    pub revisions: Revisions,
}

impl ThermostatRevision {
    pub fn is_connected(&self) -> bool {
        self.connected == "true"
    }
}

/// Revision stamps (`yyMMddHHmmss`, UTC). A changed value means that part of the thermostat changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revisions {
    pub thermostat: String,
    pub alerts: String,
    pub runtime: String,
    pub internal: String,
}
