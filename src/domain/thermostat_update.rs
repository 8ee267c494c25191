use crate::domain::ThermostatFunction;
use serde_json::{Map, Value};

/// Changes to apply to the selected thermostats. Both parts default to empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermostatUpdate {
    /// Sent as `thermostat.settings`.
    pub settings: Map<String, Value>,
    pub functions: Vec<ThermostatFunction>,
}

impl ThermostatUpdate {
    pub fn new() -> Self {
        ThermostatUpdate::default()
    }

    pub fn setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    pub fn function(mut self, function: ThermostatFunction) -> Self {
        self.functions.push(function);
        self
    }
}
